// File: crates/column-core/src/grid.rs
// Summary: Gridline/tick position helpers.

/// `count` positions stacked upward from `baseline`, `spacing` pixels apart.
/// The first position is the baseline itself.
pub fn stacked_upward(baseline: f32, spacing: f32, count: usize) -> Vec<f32> {
    (0..count).map(|i| baseline - spacing * i as f32).collect()
}
