// File: crates/column-core/src/lib.rs
// Summary: Core library entry point; exports the column chart component, layout and canvas API.

pub mod axis;
pub mod canvas;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod recording;
pub mod scale;
pub mod text;
pub mod types;
pub mod widget;

pub use axis::AxisSpec;
pub use canvas::{Canvas, FillStyle, LineStyle, TextMeasure, TextStyle, TransformScope};
pub use chart::ColumnChart;
pub use config::{ChartConfig, Density, FrameStyles, PixelMetrics, ToPixels, MAX_TICK_COUNT};
pub use dataset::ChartDataset;
pub use error::{ChartError, Result};
pub use geometry::{LineSegment, PointF, RectF};
pub use layout::{Bounds, LayoutMetrics, RenderGeometry};
pub use recording::{DrawCommand, RecordingCanvas};
pub use scale::{ValueRange, ValueScale, HEADROOM};
pub use text::HeuristicTextMeasurer;
pub use types::{Color, Insets, HEIGHT, WIDTH};
pub use widget::ChartWidget;
