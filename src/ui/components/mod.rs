//! Reusable UI Components
//!
//! Components shared across pages and overlays.
//!
//! ## Components
//!
//! - `ButtonRow` - Horizontal buttons with a focus marker
//! - `InputField` - Labelled text box with focus handling and masking
//! - `StatusIndicator` - Recording, spinner, progress and result lines
//! - `Popup` - Centered card for dialogs and score overlays

mod button_row;
mod input_field;
mod popup;
mod status_indicator;

pub use button_row::{render_button_row, ButtonItem};
pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
pub use popup::Popup;
pub use status_indicator::{get_spinner_char, progress_bar, render_status_indicator, StatusIndicatorType};
