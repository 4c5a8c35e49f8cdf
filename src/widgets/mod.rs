// Reusable UI widgets

pub mod button;
pub mod card;
pub mod text_input;

pub use button::Button;
pub use card::{Card, CARD_HEIGHT, CARD_WIDTH};
pub use text_input::{TextInputWidget, TextInputWidgetExt, MASK_CHAR};
