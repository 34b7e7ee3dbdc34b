pub mod auth_buttons;
pub mod button;
pub mod feature;
pub mod layout;

pub use button::{Button, ButtonType, ButtonVariant};
