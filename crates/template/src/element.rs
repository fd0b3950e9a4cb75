//! Typed template elements.

use crate::field::{DynamicField, ImageField};
use reportcard_style::ElementStyle;
use reportcard_types::Rect;

/// Rows and columns assumed when a table leaves them unset.
pub const DEFAULT_TABLE_DIMENSION: usize = 3;

/// One positioned element of a template, in authoring units.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: Option<String>,
    pub frame: Rect,
    pub style: ElementStyle,
    pub kind: ElementKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Shape(ShapeKind),
    Text { content: Option<String> },
    Dynamic(DynamicSpec),
    Image(ImageSpec),
    Table(TableSpec),
}

impl ElementKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ElementKind::Shape(ShapeKind::Rect) => "shape",
            ElementKind::Shape(ShapeKind::Line) => "line",
            ElementKind::Text { .. } => "text",
            ElementKind::Dynamic(_) => "dynamic",
            ElementKind::Image(_) => "image",
            ElementKind::Table(_) => "table",
        }
    }
}

/// `shape` and `line` elements share one renderer; the tag is kept for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rect,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayType {
    #[default]
    Inline,
    List,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DynamicSpec {
    pub field: DynamicField,
    pub display_type: DisplayType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageSpec {
    pub field: ImageField,
    pub is_placeholder: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableType {
    Subjects,
    Affective,
    Psychomotor,
    #[default]
    Other,
}

impl TableType {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "subjects" => TableType::Subjects,
            "affective" => TableType::Affective,
            "psychomotor" => TableType::Psychomotor,
            _ => TableType::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub rows: usize,
    pub cols: usize,
    pub headers: Vec<String>,
    pub table_type: TableType,
    /// Proportional weights; only honoured when there is exactly one per column.
    pub column_widths: Option<Vec<f32>>,
    pub traits: Vec<String>,
    pub skills: Vec<String>,
}

impl Default for TableSpec {
    fn default() -> Self {
        Self {
            rows: DEFAULT_TABLE_DIMENSION,
            cols: DEFAULT_TABLE_DIMENSION,
            headers: Vec::new(),
            table_type: TableType::Other,
            column_widths: None,
            traits: Vec::new(),
            skills: Vec::new(),
        }
    }
}

impl TableSpec {
    /// Header label for column `col`, empty when the list is short.
    pub fn header(&self, col: usize) -> &str {
        self.headers.get(col).map(String::as_str).unwrap_or("")
    }

    /// True when at least one header label is non-blank.
    pub fn has_header(&self) -> bool {
        self.headers.iter().any(|h| !h.trim().is_empty())
    }

    /// The fixed list of names an affective or psychomotor table enumerates.
    pub fn rating_names(&self) -> &[String] {
        match self.table_type {
            TableType::Affective => &self.traits,
            TableType::Psychomotor => &self.skills,
            TableType::Subjects | TableType::Other => &[],
        }
    }
}
