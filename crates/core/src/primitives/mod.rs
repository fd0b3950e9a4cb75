//! Renderers for the non-table element types.
//!
//! Each renderer takes a page-space element and paints it onto the surface.
//! None of them can fail: missing or broken inputs produce a visible
//! fallback or nothing at all.

mod image;
mod shape;
mod text;

pub use image::{ImageOutcome, draw_image};
pub use shape::draw_shape;
pub use text::{draw_centered_line, draw_text};
