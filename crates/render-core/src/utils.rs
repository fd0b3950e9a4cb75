use crate::surface::FontFace;
use reportcard_style::FontWeight;

/// Picks the face for a weight and slant: bold wins the weight axis, italic
/// maps to the oblique cut.
pub fn face_for(weight: FontWeight, italic: bool) -> FontFace {
    match (weight == FontWeight::Bold, italic) {
        (true, true) => FontFace::BoldOblique,
        (true, false) => FontFace::Bold,
        (false, true) => FontFace::Oblique,
        (false, false) => FontFace::Regular,
    }
}

/// Get the base-14 PostScript name of a face.
pub fn base_font_name(face: FontFace) -> &'static str {
    match face {
        FontFace::Regular => "Helvetica",
        FontFace::Bold => "Helvetica-Bold",
        FontFace::Oblique => "Helvetica-Oblique",
        FontFace::BoldOblique => "Helvetica-BoldOblique",
    }
}

/// Convert page Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}
