//! Authoring space to page space.
//!
//! Templates are drawn on a virtual canvas of fixed width. One linear factor,
//! page width over canvas width, maps every position, size, font size and
//! column weight onto the page.

use reportcard_template::{Element, ElementKind};

/// Width of the virtual canvas templates are authored on.
pub const REFERENCE_WIDTH: f32 = 794.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaler {
    factor: f32,
}

impl Scaler {
    /// A non-positive or non-finite reference width yields the identity scaler.
    pub fn new(page_width: f32, reference_width: f32) -> Self {
        let factor = page_width / reference_width;
        if !(reference_width > 0.0) || !factor.is_finite() || !(factor > 0.0) {
            log::warn!(
                "Invalid scale {} / {}; drawing at authoring size",
                page_width,
                reference_width
            );
            return Self::identity();
        }
        Self { factor }
    }

    pub fn identity() -> Self {
        Self { factor: 1.0 }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub fn length(&self, value: f32) -> f32 {
        value * self.factor
    }

    /// Returns a page-space copy of `element`. Apply once per element.
    pub fn element(&self, element: &Element) -> Element {
        let mut scaled = element.clone();
        scaled.frame = element.frame.scaled(self.factor);
        scaled.style = element.style.scaled(self.factor);
        if let ElementKind::Table(spec) = &mut scaled.kind
            && let Some(widths) = &mut spec.column_widths
        {
            widths.iter_mut().for_each(|w| *w *= self.factor);
        }
        scaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reportcard_style::ElementStyle;
    use reportcard_template::TableSpec;
    use reportcard_types::Rect;

    fn table(widths: Vec<f32>) -> Element {
        Element {
            id: None,
            frame: Rect::new(10.0, 20.0, 300.0, 100.0),
            style: ElementStyle {
                font_size: Some(10.0),
                border_width: Some(2.0),
                ..Default::default()
            },
            kind: ElementKind::Table(TableSpec {
                column_widths: Some(widths),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn a4_factor() {
        let scaler = Scaler::new(595.28, REFERENCE_WIDTH);
        assert!((scaler.factor() - 0.749_723).abs() < 1e-5);
    }

    #[test]
    fn scales_geometry_font_and_column_weights() {
        let scaler = Scaler::new(397.0, 794.0);
        let scaled = scaler.element(&table(vec![2.0, 1.0, 1.0]));

        assert_eq!(scaled.frame, Rect::new(5.0, 10.0, 150.0, 50.0));
        assert_eq!(scaled.style.font_size, Some(5.0));
        assert_eq!(scaled.style.border_width, Some(2.0));
        let ElementKind::Table(spec) = scaled.kind else {
            panic!("expected a table");
        };
        assert_eq!(spec.column_widths, Some(vec![1.0, 0.5, 0.5]));
    }

    #[test]
    fn invalid_reference_falls_back_to_identity() {
        assert_eq!(Scaler::new(595.0, 0.0), Scaler::identity());
        assert_eq!(Scaler::new(595.0, f32::NAN), Scaler::identity());
        assert_eq!(Scaler::new(0.0, 794.0), Scaler::identity());
    }

    #[test]
    fn proportions_survive_scaling() {
        let a = Rect::new(100.0, 50.0, 200.0, 80.0);
        let b = Rect::new(400.0, 300.0, 100.0, 40.0);
        for page_width in [595.28, 612.0, 1000.0] {
            let s = Scaler::new(page_width, REFERENCE_WIDTH);
            let (sa, sb) = (a.scaled(s.factor()), b.scaled(s.factor()));
            assert!((sa.width / sb.width - a.width / b.width).abs() < 1e-5);
            assert!((sa.x / sb.x - a.x / b.x).abs() < 1e-5);
        }
    }
}
