// File: crates/column-core/src/scale.rs
// Summary: Displayable value range (with headroom) and the vertical value-to-pixel scale.

/// The range maximum sits this factor above the largest value so the
/// tallest bar never reaches the top of the plot.
pub const HEADROOM: f64 = 1.2;

/// Displayable numeric domain. Invariant: `max > min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Build a range; a collapsed or inverted range is widened to `min + 1`.
    pub fn new(min: f64, max: f64) -> Self {
        if max > min { Self { min, max } } else { Self { min, max: min + 1.0 } }
    }

    /// Range from `min` up to `data_max` inflated by [`HEADROOM`].
    pub fn with_headroom(min: f64, data_max: f64) -> Self {
        Self::new(min, data_max * HEADROOM)
    }

    #[inline]
    pub fn span(&self) -> f64 { self.max - self.min }

    /// `count` evenly spaced values starting at `min`, each `span / count` apart.
    pub fn tick_values(&self, count: usize) -> Vec<f64> {
        let step = self.span() / count.max(1) as f64;
        (0..count).map(|i| self.min + step * i as f64).collect()
    }
}

/// Vertical value scale: `min` maps onto the baseline, each unit above it
/// moves `px_per_unit` pixels up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub baseline_px: f32,
    pub px_per_unit: f64,
    pub vmin: f64,
}

impl ValueScale {
    /// Scale that stretches `range` over `height_px` pixels above `baseline_px`.
    pub fn new(baseline_px: f32, height_px: f32, range: ValueRange) -> Self {
        let span = range.span().max(1e-12);
        Self { baseline_px, px_per_unit: height_px as f64 / span, vmin: range.min }
    }

    /// Pixel height of a bar for `v`, measured up from the baseline.
    #[inline]
    pub fn bar_height(&self, v: f64) -> f32 {
        (self.px_per_unit * (v - self.vmin)) as f32
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.baseline_px - self.bar_height(v)
    }
}
