//! The optional visual properties an element may carry.

use crate::border::Border;
use crate::font::{FontStyle, FontWeight};
use crate::text::TextAlign;
use reportcard_types::Color;

/// Visual properties of a template element. Every field is optional; an
/// unset field falls through to the renderer's layout defaults.
#[derive(Default, Clone, PartialEq, Debug)]
pub struct ElementStyle {
    pub color: Option<Color>,
    pub font_size: Option<f32>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub text_align: Option<TextAlign>,
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: Option<f32>,
    pub border_bottom: Option<Border>,
    // Table-only
    pub header_bg_color: Option<Color>,
    pub header_text_color: Option<Color>,
    pub alt_row_color: Option<Color>,
}

impl ElementStyle {
    /// Returns a copy with `font_size` multiplied by `factor`. Stroke widths
    /// are physical and stay untouched.
    pub fn scaled(&self, factor: f32) -> ElementStyle {
        ElementStyle {
            font_size: self.font_size.map(|size| size * factor),
            ..self.clone()
        }
    }

    pub fn is_bold(&self) -> bool {
        self.font_weight == Some(FontWeight::Bold)
    }

    pub fn is_italic(&self) -> bool {
        self.font_style == Some(FontStyle::Italic)
    }
}
