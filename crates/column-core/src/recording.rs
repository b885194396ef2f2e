// File: crates/column-core/src/recording.rs
// Summary: Canvas that records draw commands instead of rasterizing (tests, benches, headless hosts).

use log::warn;

use crate::canvas::{Canvas, FillStyle, LineStyle, TextMeasure, TextStyle};
use crate::geometry::{PointF, RectF};
use crate::text::HeuristicTextMeasurer;
use crate::types::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Background(Color),
    Line { from: PointF, to: PointF, style: LineStyle },
    Rect { rect: RectF, style: FillStyle },
    /// `depth` is the number of transforms active when the text was drawn.
    Text { text: String, at: PointF, style: TextStyle, depth: usize },
    PushRotation { degrees: f32, pivot: PointF },
    PopTransform,
}

#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    depth: usize,
    measurer: HeuristicTextMeasurer,
}

impl RecordingCanvas {
    pub fn new() -> Self { Self::default() }

    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    /// Drain the recorded commands, keeping the transform depth.
    pub fn take(&mut self) -> Vec<DrawCommand> { std::mem::take(&mut self.commands) }

    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// Transforms pushed and not yet popped.
    pub fn transform_depth(&self) -> usize { self.depth }

    pub fn rects(&self) -> impl Iterator<Item = &RectF> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { rect, .. } => Some(rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, PointF, usize)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, at, depth, .. } => Some((text.as_str(), *at, *depth)),
            _ => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. })).count()
    }
}

impl TextMeasure for RecordingCanvas {
    fn measure_text_width(&self, text: &str, style: &TextStyle) -> f32 {
        self.measurer.measure_text_width(text, style)
    }

    fn text_line_height(&self, style: &TextStyle) -> f32 {
        self.measurer.text_line_height(style)
    }
}

impl Canvas for RecordingCanvas {
    fn fill_background(&mut self, color: Color) {
        self.commands.push(DrawCommand::Background(color));
    }

    fn draw_line(&mut self, from: PointF, to: PointF, style: &LineStyle) {
        self.commands.push(DrawCommand::Line { from, to, style: *style });
    }

    fn draw_rect(&mut self, rect: RectF, style: &FillStyle) {
        self.commands.push(DrawCommand::Rect { rect, style: *style });
    }

    fn draw_text(&mut self, text: &str, at: PointF, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            style: *style,
            depth: self.depth,
        });
    }

    fn push_rotation(&mut self, degrees: f32, pivot: PointF) {
        self.depth += 1;
        self.commands.push(DrawCommand::PushRotation { degrees, pivot });
    }

    fn pop_transform(&mut self) {
        if self.depth == 0 {
            warn!("pop_transform without a matching push");
        } else {
            self.depth -= 1;
        }
        self.commands.push(DrawCommand::PopTransform);
    }
}
