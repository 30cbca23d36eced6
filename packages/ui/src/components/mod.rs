//! Thin presentational components used by the sign-up page.

mod button;
mod input;

pub use button::Button;
pub use input::Input;
