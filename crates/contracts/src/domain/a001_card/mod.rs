pub mod aggregate;
pub mod gallery;

pub use aggregate::{Card, CardId, CardRecord};
pub use gallery::Gallery;
