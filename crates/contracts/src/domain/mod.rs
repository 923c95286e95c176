pub mod a001_card;
pub mod a002_profile;
