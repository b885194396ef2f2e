// File: crates/column-core/src/canvas.rs
// Summary: Renderer-agnostic drawing surface trait, draw styles and the scoped rotation guard.

use std::ops::{Deref, DerefMut};

use crate::geometry::{PointF, RectF};
use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillStyle {
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    /// Text size in pixels.
    pub size: f32,
}

/// Text metrics a layout pass needs before anything is drawn.
pub trait TextMeasure {
    /// Advance width of `text` in pixels.
    fn measure_text_width(&self, text: &str, style: &TextStyle) -> f32;

    /// Distance from the font's top to its bottom extent.
    fn text_line_height(&self, style: &TextStyle) -> f32 {
        style.size
    }
}

/// The 2D surface a chart renders onto. Text is anchored at its left baseline.
pub trait Canvas: TextMeasure {
    fn fill_background(&mut self, color: Color);
    fn draw_line(&mut self, from: PointF, to: PointF, style: &LineStyle);
    fn draw_rect(&mut self, rect: RectF, style: &FillStyle);
    fn draw_text(&mut self, text: &str, at: PointF, style: &TextStyle);
    /// Rotate subsequent drawing by `degrees` (positive = clockwise) around `pivot`.
    fn push_rotation(&mut self, degrees: f32, pivot: PointF);
    /// Undo the most recent `push_rotation`.
    fn pop_transform(&mut self);
}

/// Holds a pushed transform and pops it when dropped.
pub struct TransformScope<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas + ?Sized> TransformScope<'a, C> {
    pub fn rotated(canvas: &'a mut C, degrees: f32, pivot: PointF) -> Self {
        canvas.push_rotation(degrees, pivot);
        Self { canvas }
    }
}

impl<C: Canvas + ?Sized> Deref for TransformScope<'_, C> {
    type Target = C;
    fn deref(&self) -> &C { self.canvas }
}

impl<C: Canvas + ?Sized> DerefMut for TransformScope<'_, C> {
    fn deref_mut(&mut self) -> &mut C { self.canvas }
}

impl<C: Canvas + ?Sized> Drop for TransformScope<'_, C> {
    fn drop(&mut self) {
        self.canvas.pop_transform();
    }
}
