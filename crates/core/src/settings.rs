//! Renderer constants that templates cannot override per element.

use reportcard_types::Color;

/// Sizes are in authoring units and pass through the scaler when used;
/// `border_width` is a physical stroke width in points.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSettings {
    pub table_header_height: f32,
    pub font_size: f32,
    pub table_font_size: f32,
    /// Baseline-to-baseline distance as a multiple of the font size.
    pub line_height: f32,
    pub caption_font_size: f32,
    pub border_width: f32,
    pub header_background: Color,
    pub header_text: Color,
    pub border_color: Color,
    pub text_color: Color,
    /// Outline and caption colour of placeholder and error boxes.
    pub muted_color: Color,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            table_header_height: 30.0,
            font_size: 12.0,
            table_font_size: 10.0,
            line_height: 1.2,
            caption_font_size: 9.0,
            border_width: 0.75,
            header_background: Color::rgb(0x33, 0x33, 0x33),
            header_text: Color::WHITE,
            border_color: Color::BLACK,
            text_color: Color::BLACK,
            muted_color: Color::gray(150),
        }
    }
}
