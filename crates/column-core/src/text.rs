// File: crates/column-core/src/text.rs
// Summary: Font-free text metrics for layout tests and headless hosts.

use crate::canvas::{TextMeasure, TextStyle};

/// Approximates glyph advances: ~0.6em for ASCII, a full em for everything
/// else (CJK labels are common for category names).
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl HeuristicTextMeasurer {
    const ASCII_ADVANCE: f32 = 0.6;
    const LINE_HEIGHT: f32 = 1.17;
}

impl TextMeasure for HeuristicTextMeasurer {
    fn measure_text_width(&self, text: &str, style: &TextStyle) -> f32 {
        let ems: f32 = text
            .chars()
            .map(|c| if c.is_ascii() { Self::ASCII_ADVANCE } else { 1.0 })
            .sum();
        ems * style.size
    }

    fn text_line_height(&self, style: &TextStyle) -> f32 {
        style.size * Self::LINE_HEIGHT
    }
}
