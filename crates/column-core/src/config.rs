// File: crates/column-core/src/config.rs
// Summary: Chart configuration in logical units, density conversion and per-frame styles.

use crate::canvas::{FillStyle, LineStyle, TextStyle};
use crate::error::{ChartError, Result};
use crate::types::Color;

/// Upper bound for `tick_count`; more ticks than this cannot fit on any real surface.
pub const MAX_TICK_COUNT: usize = 1000;

/// Converts logical size units (dp/pt) into device pixels.
pub trait ToPixels {
    fn to_px(&self, logical: f32) -> f32;
}

impl<F: Fn(f32) -> f32> ToPixels for F {
    fn to_px(&self, logical: f32) -> f32 {
        self(logical)
    }
}

/// Display density factor; rounds to whole pixels like a dp→px helper.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density(pub f32);

impl Density {
    pub const IDENTITY: Density = Density(1.0);
}

impl Default for Density {
    fn default() -> Self { Self::IDENTITY }
}

impl ToPixels for Density {
    fn to_px(&self, logical: f32) -> f32 {
        (logical * self.0 + 0.5).floor()
    }
}

/// Recognized chart options. Sizes are logical units, converted once through
/// [`ChartConfig::pixel_metrics`].
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub background: Color,
    pub ruler_color: Color,
    pub text_color: Color,
    pub bar_color: Color,
    pub ruler_width: f32,
    /// Number of value-axis ticks/gridlines.
    pub tick_count: usize,
    pub title_text_size: f32,
    pub tick_text_size: f32,
    /// Gap between an axis title and its tick labels.
    pub axis_text_distance: f32,
    /// Gap between the value ruler and the first bar cell.
    pub column_margin: f32,
    pub max_bar_width: f32,
    /// Decimals shown on value-axis tick labels.
    pub tick_label_precision: usize,
    /// Fixed range minimum; `None` uses the smallest value in the dataset.
    pub min_value: Option<f64>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            ruler_color: Color::from_rgb(0xdd, 0xdd, 0xdd),
            text_color: Color::from_rgb(0x88, 0x88, 0x88),
            bar_color: Color::from_rgb(0x44, 0x76, 0xab),
            ruler_width: 1.0,
            tick_count: 10,
            title_text_size: 12.0,
            tick_text_size: 10.0,
            axis_text_distance: 6.0,
            column_margin: 3.0,
            max_bar_width: 40.0,
            tick_label_precision: 1,
            min_value: None,
        }
    }
}

impl ChartConfig {
    pub fn with_tick_count(mut self, n: usize) -> Self {
        self.tick_count = n;
        self
    }

    pub fn with_max_bar_width(mut self, w: f32) -> Self {
        self.max_bar_width = w;
        self
    }

    pub fn with_min_value(mut self, min: Option<f64>) -> Self {
        self.min_value = min;
        self
    }

    pub fn with_bar_color(mut self, c: Color) -> Self {
        self.bar_color = c;
        self
    }

    pub fn with_tick_label_precision(mut self, p: usize) -> Self {
        self.tick_label_precision = p;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |field: &'static str, reason: &str| {
            Err(ChartError::InvalidConfig { field, reason: reason.to_string() })
        };
        if self.tick_count == 0 || self.tick_count > MAX_TICK_COUNT {
            return invalid("tick_count", "must be between 1 and 1000");
        }
        if !self.max_bar_width.is_finite() || self.max_bar_width <= 0.0 {
            return invalid("max_bar_width", "must be positive");
        }
        let sizes = [
            ("ruler_width", self.ruler_width),
            ("title_text_size", self.title_text_size),
            ("tick_text_size", self.tick_text_size),
            ("axis_text_distance", self.axis_text_distance),
            ("column_margin", self.column_margin),
        ];
        for (field, v) in sizes {
            if !v.is_finite() || v < 0.0 {
                return invalid(field, "must be finite and non-negative");
            }
        }
        if let Some(min) = self.min_value {
            if !min.is_finite() || min < 0.0 {
                return invalid("min_value", "must be finite and non-negative");
            }
        }
        Ok(())
    }

    pub fn pixel_metrics(&self, density: &dyn ToPixels) -> PixelMetrics {
        PixelMetrics {
            ruler_width: density.to_px(self.ruler_width),
            title_text_size: density.to_px(self.title_text_size),
            tick_text_size: density.to_px(self.tick_text_size),
            axis_text_distance: density.to_px(self.axis_text_distance),
            column_margin: density.to_px(self.column_margin),
            max_bar_width: density.to_px(self.max_bar_width),
        }
    }

    /// Independent style values for every draw phase.
    pub fn frame_styles(&self, px: &PixelMetrics) -> FrameStyles {
        FrameStyles {
            background: self.background,
            ruler: LineStyle { color: self.ruler_color, width: px.ruler_width },
            title: TextStyle { color: self.text_color, size: px.title_text_size },
            tick: TextStyle { color: self.text_color, size: px.tick_text_size },
            bar: FillStyle { color: self.bar_color },
        }
    }
}

/// Configuration sizes converted to device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelMetrics {
    pub ruler_width: f32,
    pub title_text_size: f32,
    pub tick_text_size: f32,
    pub axis_text_distance: f32,
    pub column_margin: f32,
    pub max_bar_width: f32,
}

impl PixelMetrics {
    /// Space kept between the rulers and the drawable edge for axis text.
    pub fn axis_padding(&self) -> f32 {
        self.title_text_size + self.tick_text_size + 2.0 * self.axis_text_distance
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStyles {
    pub background: Color,
    pub ruler: LineStyle,
    pub title: TextStyle,
    pub tick: TextStyle,
    pub bar: FillStyle,
}
