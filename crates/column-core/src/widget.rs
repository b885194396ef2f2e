// File: crates/column-core/src/widget.rs
// Summary: Capability trait a host UI drives a chart through.

use crate::canvas::Canvas;
use crate::error::Result;
use crate::types::Insets;

/// The calls a host view makes into a chart: resize, draw, new data.
pub trait ChartWidget {
    /// Cache the allotted rectangle. Calling twice with the same arguments is a no-op.
    fn on_bounds_changed(&mut self, width: i32, height: i32, insets: Insets);

    /// Draw the current frame. Issues nothing when the bounds are too small.
    fn render(&self, canvas: &mut dyn Canvas);

    /// Replace the data. On error the previous dataset stays in effect.
    fn set_dataset(&mut self, values: Vec<f64>, labels: Vec<String>) -> Result<()>;
}
