mod edit_popup;
mod profile;

pub use edit_popup::EditProfilePopup;
pub use profile::ProfileSection;
