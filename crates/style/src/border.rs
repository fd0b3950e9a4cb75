use reportcard_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    None,
}

/// A single border edge, as written in the `"<width> <style> <color>"`
/// shorthand.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub style: BorderStyle,
    pub color: Color,
}

impl Border {
    /// A border that paints nothing: zero width or the `none` style.
    pub fn is_invisible(&self) -> bool {
        self.style == BorderStyle::None || !(self.width > 0.0)
    }
}
