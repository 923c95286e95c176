mod card;
mod image_popup;
mod list;
mod new_card_popup;

pub use card::PlaceCard;
pub use image_popup::ImagePopup;
pub use list::PlacesList;
pub use new_card_popup::NewCardPopup;
