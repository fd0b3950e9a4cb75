//! A surface that records draw calls instead of painting them.

use crate::surface::{FontFace, RasterImage, Stroke, Surface, TextRun};
use reportcard_types::{Color, Point, Rect, Size};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, stroke: Stroke },
    Line { from: Point, to: Point, stroke: Stroke },
    Text(TextRun),
    Image { pixel_size: Size, rect: Rect },
    CheckMark { center: Point, size: f32, color: Color },
}

/// Captures every call in order. Used by tests and for debugging layouts.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self { size, commands: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text of every text run, in paint order.
    pub fn texts(&self) -> Vec<&str> {
        self.text_runs().map(|run| run.text.as_str()).collect()
    }

    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(run) => Some(run),
            _ => None,
        })
    }

    /// The first text run whose text equals `text`.
    pub fn find_text(&self, text: &str) -> Option<&TextRun> {
        self.text_runs().find(|run| run.text == text)
    }

    pub fn texts_in(&self, face: FontFace) -> Vec<&str> {
        self.text_runs()
            .filter(|run| run.font == face)
            .map(|run| run.text.as_str())
            .collect()
    }

    pub fn check_marks(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::CheckMark { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn page_size(&self) -> Size {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        self.commands.push(DrawCommand::FillRect { rect, color: color.clone() });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokeRect { rect, stroke: stroke.clone() });
    }

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke: stroke.clone() });
    }

    fn text(&mut self, run: &TextRun) {
        self.commands.push(DrawCommand::Text(run.clone()));
    }

    fn image(&mut self, image: &RasterImage, rect: Rect) {
        self.commands.push(DrawCommand::Image { pixel_size: image.size(), rect });
    }

    fn check_mark(&mut self, center: Point, size: f32, color: &Color) {
        self.commands.push(DrawCommand::CheckMark { center, size, color: color.clone() });
    }
}
