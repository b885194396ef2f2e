// File: crates/column-core/src/layout.rs
// Summary: Pure per-frame layout: bounds → metrics → bar rects, rulers, gridlines and text anchors.
// Notes:
// - Nothing here draws or mutates; every function returns fresh value objects
//   so a frame never sees state left over from the previous one.
// - Text anchors are left-baseline points, matching `Canvas::draw_text`.

use crate::canvas::{TextMeasure, TextStyle};
use crate::config::PixelMetrics;
use crate::geometry::{LineSegment, PointF, RectF};
use crate::grid::stacked_upward;
use crate::scale::{ValueRange, ValueScale};

/// The widget's outer size plus the host's insets, as last reported.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
    pub insets: crate::Insets,
}

impl Bounds {
    pub fn new(width: i32, height: i32, insets: crate::Insets) -> Self {
        Self { width, height, insets }
    }

    /// Outer bounds minus insets; may be empty or inverted.
    pub fn inner(&self) -> RectF {
        let i = &self.insets;
        RectF::from_ltrb(
            i.left as f32,
            i.top as f32,
            self.width as f32 - i.right as f32,
            self.height as f32 - i.bottom as f32,
        )
    }
}

/// Derived sizes for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    /// Drawable area (outer bounds minus insets).
    pub inner: RectF,
    /// Space reserved left of and below the rulers for axis text.
    pub axis_padding: f32,
    /// Where the value ruler meets the category ruler.
    pub origin: PointF,
    /// Gap between the value ruler and the first cell.
    pub column_margin: f32,
    /// Horizontal slot per category, clamped to the maximum bar width.
    pub cell_width: f32,
    /// Vertical distance between gridlines / value ticks.
    pub tick_spacing: f32,
    pub tick_count: usize,
    pub scale: ValueScale,
}

impl LayoutMetrics {
    /// Compute metrics, or `None` when the bounds leave no room to draw.
    pub fn compute(
        bounds: &Bounds,
        px: &PixelMetrics,
        range: ValueRange,
        category_count: usize,
        tick_count: usize,
    ) -> Option<Self> {
        let inner = bounds.inner();
        let axis_padding = px.axis_padding();
        let origin = PointF::new(inner.left + axis_padding, inner.bottom - axis_padding);

        let bar_area_height = origin.y - inner.top;
        let cells_width = inner.right - origin.x - px.column_margin;
        // NaN fails every comparison, so each check is phrased as "is positive".
        if !positive(inner.width())
            || !positive(inner.height())
            || !(axis_padding.is_finite() && axis_padding >= 0.0)
            || !positive(bar_area_height)
            || !positive(cells_width)
        {
            return None;
        }

        let cell_width = (cells_width / category_count.max(1) as f32).min(px.max_bar_width);
        let tick_spacing = (inner.height() - px.title_text_size) / tick_count.max(1) as f32;
        let scale = ValueScale::new(origin.y, bar_area_height, range);
        if !positive(cell_width) || !tick_spacing.is_finite() || !scale.px_per_unit.is_finite() {
            return None;
        }

        Some(Self {
            inner,
            axis_padding,
            origin,
            column_margin: px.column_margin,
            cell_width,
            tick_spacing,
            tick_count,
            scale,
        })
    }

    #[inline]
    pub fn baseline(&self) -> f32 { self.origin.y }

    #[inline]
    pub fn plot_top(&self) -> f32 { self.inner.top }

    #[inline]
    pub fn plot_right(&self) -> f32 { self.inner.right }

    pub fn bar_area_height(&self) -> f32 { self.baseline() - self.plot_top() }

    /// Left edge of category `j`'s cell.
    #[inline]
    pub fn cell_left(&self, j: usize) -> f32 {
        self.origin.x + self.column_margin + self.cell_width * j as f32
    }

    /// Y positions of the gridlines / value ticks, bottom to top. Ticks that
    /// would land above the plot top on short widgets are dropped.
    pub fn tick_positions(&self) -> Vec<f32> {
        let top = self.plot_top();
        stacked_upward(self.baseline(), self.tick_spacing, self.tick_count)
            .into_iter()
            .take_while(|&y| y >= top)
            .collect()
    }
}

#[inline]
fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextPlacement {
    pub text: String,
    pub anchor: PointF,
}

/// Text drawn inside a rotation about `pivot`; `anchor` is in the unrotated frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RotatedText {
    pub text: String,
    pub anchor: PointF,
    pub pivot: PointF,
    pub degrees: f32,
}

/// Everything one frame draws, in pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderGeometry {
    pub metrics: LayoutMetrics,
    /// Value ruler first, then category ruler.
    pub rulers: [LineSegment; 2],
    pub gridlines: Vec<LineSegment>,
    pub category_title: TextPlacement,
    pub value_title: RotatedText,
    pub category_labels: Vec<TextPlacement>,
    pub value_labels: Vec<TextPlacement>,
    pub bars: Vec<RectF>,
}

pub fn rulers(m: &LayoutMetrics) -> [LineSegment; 2] {
    [
        LineSegment::vertical(m.origin.x, m.baseline(), m.plot_top()),
        LineSegment::horizontal(m.origin.x, m.plot_right(), m.baseline()),
    ]
}

pub fn gridlines(m: &LayoutMetrics) -> Vec<LineSegment> {
    m.tick_positions()
        .into_iter()
        .map(|y| LineSegment::horizontal(m.origin.x, m.plot_right(), y))
        .collect()
}

/// One bar per value: the middle 60% of its cell, from the baseline up to the scaled value.
pub fn bar_rects(m: &LayoutMetrics, values: &[f64]) -> Vec<RectF> {
    let cell = m.cell_width;
    values
        .iter()
        .enumerate()
        .map(|(j, &v)| {
            let start = m.cell_left(j);
            RectF::from_ltrb(
                start + cell / 5.0,
                m.scale.to_px(v),
                start + cell * 4.0 / 5.0,
                m.baseline(),
            )
        })
        .collect()
}

/// Category labels centered under their cells, one line below the ruler.
pub fn category_label_positions<M: TextMeasure + ?Sized>(
    m: &LayoutMetrics,
    labels: &[String],
    style: &TextStyle,
    measure: &M,
) -> Vec<TextPlacement> {
    let y = m.baseline() + measure.text_line_height(style);
    labels
        .iter()
        .enumerate()
        .map(|(j, text)| {
            let w = measure.measure_text_width(text, style);
            let x = m.cell_left(j) + (m.cell_width - w) / 2.0;
            TextPlacement { text: text.clone(), anchor: PointF::new(x, y) }
        })
        .collect()
}

/// Value labels right-aligned against the ruler at each tick position, never
/// starting left of the drawable area.
pub fn value_label_positions<M: TextMeasure + ?Sized>(
    m: &LayoutMetrics,
    px: &PixelMetrics,
    labels: &[String],
    style: &TextStyle,
    measure: &M,
) -> Vec<TextPlacement> {
    let right = m.origin.x - px.axis_text_distance / 3.0;
    labels
        .iter()
        .zip(m.tick_positions())
        .map(|(text, y)| {
            let w = measure.measure_text_width(text, style);
            let x = (right - w).max(m.inner.left);
            TextPlacement { text: text.clone(), anchor: PointF::new(x, y) }
        })
        .collect()
}

/// Category title centered across the drawable width, in the bottom padding.
pub fn category_title_position<M: TextMeasure + ?Sized>(
    m: &LayoutMetrics,
    px: &PixelMetrics,
    title: &str,
    style: &TextStyle,
    measure: &M,
) -> TextPlacement {
    let w = measure.measure_text_width(title, style);
    let x = m.inner.center_x() - w / 2.0;
    let y = m.inner.bottom - measure.text_line_height(style) + px.axis_text_distance;
    TextPlacement { text: title.to_string(), anchor: PointF::new(x, y) }
}

/// Value title reading bottom-to-top along the left edge, a third of the way down.
pub fn value_title_placement<M: TextMeasure + ?Sized>(
    m: &LayoutMetrics,
    title: &str,
    style: &TextStyle,
    measure: &M,
) -> RotatedText {
    let anchor = PointF::new(m.inner.left, m.inner.top + m.inner.height() / 3.0);
    // The pivot sits one line above the anchor so the rotated baseline lands
    // one line-height right of the left edge.
    let pivot = PointF::new(anchor.x, anchor.y - measure.text_line_height(style));
    RotatedText { text: title.to_string(), anchor, pivot, degrees: -90.0 }
}
