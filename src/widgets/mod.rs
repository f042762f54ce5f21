//! Stateless controls used by the settings panel.
//!
//! None of these keep state between frames. Selection controls return the
//! option the user picked this frame, or `None`.

mod arrow_button;
mod button;
mod radio_group;
mod select;
mod separator;
mod text;

pub use arrow_button::ArrowButton;
pub use button::{Button, ButtonKind};
pub use radio_group::RadioGroup;
pub use select::Select;
pub use separator::Separator;
pub use text::Text;

/// Diameter of the round panel toggle.
pub const ARROW_BUTTON_SIZE: f32 = 52.0;
