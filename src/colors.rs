//! Color constants for the settings panel and its controls.

use eframe::egui::Color32;

// Panel
pub const PANEL_FILL: Color32 = Color32::from_rgb(255, 255, 255);
pub const TITLE_TEXT: Color32 = Color32::from_rgb(0, 0, 0);
pub const FIELD_TITLE_TEXT: Color32 = Color32::from_rgb(0, 0, 0);

// Arrow toggle
pub const ARROW_FILL: Color32 = Color32::from_rgb(0, 0, 0);
pub const ARROW_HOVER_FILL: Color32 = Color32::from_rgb(64, 64, 64);
pub const ARROW_STROKE: Color32 = Color32::from_rgb(255, 255, 255);

// Form buttons
pub const APPLY_FILL: Color32 = Color32::from_rgb(255, 200, 2);
pub const APPLY_TEXT: Color32 = Color32::from_rgb(0, 0, 0);
pub const CLEAR_FILL: Color32 = Color32::from_rgb(255, 255, 255);
pub const CLEAR_TEXT: Color32 = Color32::from_rgb(0, 0, 0);
pub const BUTTON_STROKE: Color32 = Color32::from_rgb(0, 0, 0);
