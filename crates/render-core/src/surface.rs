//! The drawing surface every renderer paints into.
//!
//! Coordinates are page units with the origin at the top-left corner and Y
//! growing downwards. Backends flip to their own convention.

use reportcard_style::BorderStyle;
use reportcard_types::{Color, Point, Rect, Size};

/// An ordered, append-only page sink.
///
/// Calls are painted in the order they are made; later calls cover earlier
/// ones. Drawing never fails: a backend that cannot honour a call (an empty
/// image, a zero-size rectangle) skips it.
pub trait Surface {
    fn page_size(&self) -> Size;

    fn fill_rect(&mut self, rect: Rect, color: &Color);

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Draws a single line of text. `run.y` is the baseline.
    fn text(&mut self, run: &TextRun);

    /// Draws `image` stretched to `rect`; callers fit the rect beforehand.
    fn image(&mut self, image: &RasterImage, rect: Rect);

    /// Draws a check mark glyph of height `size` centred on `center`.
    fn check_mark(&mut self, center: Point, size: f32, color: &Color);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn page_size(&self) -> Size {
        (**self).page_size()
    }
    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        (**self).fill_rect(rect, color)
    }
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        (**self).stroke_rect(rect, stroke)
    }
    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        (**self).line(from, to, stroke)
    }
    fn text(&mut self, run: &TextRun) {
        (**self).text(run)
    }
    fn image(&mut self, image: &RasterImage, rect: Rect) {
        (**self).image(image, rect)
    }
    fn check_mark(&mut self, center: Point, size: f32, color: &Color) {
        (**self).check_mark(center, size, color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineDash {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl From<BorderStyle> for LineDash {
    fn from(style: BorderStyle) -> Self {
        match style {
            BorderStyle::Dashed => LineDash::Dashed,
            BorderStyle::Dotted => LineDash::Dotted,
            BorderStyle::Solid | BorderStyle::None => LineDash::Solid,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    pub dash: LineDash,
}

impl Stroke {
    pub fn solid(width: f32, color: Color) -> Self {
        Self { width, color, dash: LineDash::Solid }
    }

    pub fn dashed(width: f32, color: Color) -> Self {
        Self { width, color, dash: LineDash::Dashed }
    }
}

/// The four Helvetica cuts available without embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFace {
    #[default]
    Regular,
    Bold,
    Oblique,
    BoldOblique,
}

impl FontFace {
    pub fn is_bold(self) -> bool {
        matches!(self, FontFace::Bold | FontFace::BoldOblique)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    /// Baseline position.
    pub y: f32,
    pub font: FontFace,
    pub size: f32,
    pub color: Color,
}

/// A decoded 8-bit RGB raster, row-major without padding.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl RasterImage {
    pub fn new(width: u32, height: u32, rgb: Vec<u8>) -> Self {
        Self { width, height, rgb }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// True when the pixel buffer matches the dimensions and is non-empty.
    pub fn is_valid(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.rgb.len() == self.width as usize * self.height as usize * 3
    }
}
