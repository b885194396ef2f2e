// File: crates/column-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// A point in surface pixels (origin top-left, y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    /// True when the rect covers no area.
    pub fn is_empty(&self) -> bool { self.width() <= 0.0 || self.height() <= 0.0 }
}

/// A straight segment, used for rulers and gridlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub from: PointF,
    pub to: PointF,
}

impl LineSegment {
    pub const fn new(from: PointF, to: PointF) -> Self {
        Self { from, to }
    }
    pub fn horizontal(x0: f32, x1: f32, y: f32) -> Self {
        Self::new(PointF::new(x0, y), PointF::new(x1, y))
    }
    pub fn vertical(x: f32, y0: f32, y1: f32) -> Self {
        Self::new(PointF::new(x, y0), PointF::new(x, y1))
    }
}
