//! Constants for letter layout and SVG text rendering

/// Default font size in pixels
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Character width ratio for text estimation
/// (average character width as a fraction of font size)
pub const CHAR_WIDTH_RATIO: f32 = 0.35;

/// Left page margin in pixels
pub const MARGIN_LEFT: f32 = 60.0;

/// Right page margin in pixels
pub const MARGIN_RIGHT: f32 = 60.0;

/// Vertical start offset for the header sections in pixels
pub const HEADER_START_Y: f32 = 80.0;

/// Line pitch for the header sections in pixels
pub const HEADER_LINE_PITCH: f32 = 24.0;

/// Line pitch for the body section in pixels
pub const BODY_LINE_PITCH: f32 = 26.0;

/// Font family attribute emitted on every `<text>` element
pub const FONT_FAMILY: &str = "Brush Script MT, cursive";

/// Fill color attribute emitted on every `<text>` element
pub const TEXT_FILL: &str = "#333";
