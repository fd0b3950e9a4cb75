//! PDF output for report cards using lopdf.
//!
//! [`PdfSurface`] paints one page with the base-14 Helvetica family and
//! serialises it on [`PdfSurface::finish`].

mod surface;

pub use surface::{PageFormat, PdfSurface};
