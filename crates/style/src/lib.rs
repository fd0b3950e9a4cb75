pub mod border;
pub mod font;
pub mod parsers;
pub mod style;
pub mod text;

pub use border::{Border, BorderStyle};
pub use font::{FontStyle, FontWeight};
pub use parsers::StyleParseError;
pub use style::ElementStyle;
pub use text::TextAlign;
