//! Report-card template model.
//!
//! A template is a flat, ordered list of absolutely positioned elements
//! authored on a virtual canvas. This crate turns the loosely-typed JSON
//! form into closed enums so renderers can match exhaustively.

pub mod element;
pub mod error;
pub mod field;
mod lenient;
mod style_deser;
mod template;

pub use element::{DisplayType, DynamicSpec, Element, ElementKind, ImageSpec, ShapeKind, TableSpec, TableType};
pub use error::TemplateError;
pub use field::{DynamicField, ImageField};
pub use template::Template;
