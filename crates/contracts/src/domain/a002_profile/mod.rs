pub mod aggregate;

pub use aggregate::{Profile, ProfileDto};
