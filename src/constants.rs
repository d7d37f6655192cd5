//! Sizing, color, and styling constants for the dialog.

/// Dialog panel width
pub const PANEL_WIDTH: f32 = 400.0;

/// Height of the saturation-value plane
pub const PLANE_HEIGHT: f32 = 128.0;

/// 1D slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Cursor circle radius on the 2D plane
pub const CURSOR_RADIUS: f64 = 8.0;

/// Thumb radius on the hue strip
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for slider tracks and swatches
pub const RADIUS: f32 = 4.0;

/// Gap between dialog elements
pub const GAP: f32 = 8.0;

/// Padding inside the dialog panel
pub const PADDING: f32 = 16.0;

/// Channel input field width
pub const INPUT_WIDTH: f32 = 34.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 64.0;

/// Input font size
pub const INPUT_FONT: f32 = 12.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// Preset swatch side length
pub const SWATCH_SIZE: f32 = 24.0;

/// Preview swatch side length
pub const PREVIEW_SIZE: f32 = 32.0;

/// Raster resolution (square) for the saturation-value plane image
pub const PLANE_RASTER_SIZE: u32 = 256;

/// Raster width for the hue strip image (one column per degree)
pub const HUE_RASTER_WIDTH: u32 = 360;

/// Raster height for the hue strip image
pub const HUE_RASTER_HEIGHT: u32 = 8;
