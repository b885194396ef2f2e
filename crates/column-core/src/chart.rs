// File: crates/column-core/src/chart.rs
// Summary: ColumnChart component: owns dataset/axes/config, lays out and paints each frame.

use log::{debug, warn};

use crate::axis::{value_tick_labels, AxisSpec};
use crate::canvas::{Canvas, TextMeasure, TransformScope};
use crate::config::{ChartConfig, Density, FrameStyles, PixelMetrics, ToPixels};
use crate::dataset::ChartDataset;
use crate::error::Result;
use crate::layout::{self, Bounds, LayoutMetrics, RenderGeometry};
use crate::scale::ValueRange;
use crate::types::Insets;
use crate::widget::ChartWidget;

#[derive(Clone, Debug)]
pub struct ColumnChart {
    config: ChartConfig,
    pixels: PixelMetrics,
    styles: FrameStyles,
    dataset: ChartDataset,
    range: ValueRange,
    category_axis: AxisSpec,
    value_axis: AxisSpec,
    bounds: Bounds,
}

impl ColumnChart {
    /// Chart with the default config at 1:1 density.
    pub fn new(dataset: ChartDataset) -> Result<Self> {
        Self::with_config(dataset, ChartConfig::default(), &Density::IDENTITY)
    }

    pub fn with_config(
        dataset: ChartDataset,
        config: ChartConfig,
        density: &dyn ToPixels,
    ) -> Result<Self> {
        config.validate()?;
        let range = dataset.value_range(config.min_value)?;
        let pixels = config.pixel_metrics(density);
        let styles = config.frame_styles(&pixels);
        let category_axis =
            AxisSpec::default_category().with_tick_labels(dataset.labels().to_vec());
        let value_axis = AxisSpec::default_value().with_tick_labels(value_tick_labels(
            &range,
            config.tick_count,
            config.tick_label_precision,
        ));
        Ok(Self {
            config,
            pixels,
            styles,
            dataset,
            range,
            category_axis,
            value_axis,
            bounds: Bounds::default(),
        })
    }

    /// Swap the config. Fails (leaving everything as it was) if the config is
    /// invalid or its fixed minimum rejects the current dataset.
    pub fn set_config(&mut self, config: ChartConfig, density: &dyn ToPixels) -> Result<()> {
        config.validate()?;
        let range = self.dataset.value_range(config.min_value)?;
        self.pixels = config.pixel_metrics(density);
        self.styles = config.frame_styles(&self.pixels);
        self.config = config;
        self.apply_range(range);
        Ok(())
    }

    pub fn set_axis_titles(&mut self, category: impl Into<String>, value: impl Into<String>) {
        self.category_axis.title = category.into();
        self.value_axis.title = value.into();
    }

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn pixel_metrics(&self) -> &PixelMetrics { &self.pixels }
    pub fn dataset(&self) -> &ChartDataset { &self.dataset }
    pub fn range(&self) -> ValueRange { self.range }
    pub fn category_axis(&self) -> &AxisSpec { &self.category_axis }
    pub fn value_axis(&self) -> &AxisSpec { &self.value_axis }
    pub fn bounds(&self) -> Bounds { self.bounds }

    pub fn metrics(&self) -> Option<LayoutMetrics> {
        LayoutMetrics::compute(
            &self.bounds,
            &self.pixels,
            self.range,
            self.dataset.len(),
            self.config.tick_count,
        )
    }

    /// Full geometry for the current bounds, or `None` for a degenerate frame.
    pub fn layout<M: TextMeasure + ?Sized>(&self, measure: &M) -> Option<RenderGeometry> {
        let m = self.metrics()?;
        let styles = &self.styles;
        Some(RenderGeometry {
            rulers: layout::rulers(&m),
            gridlines: layout::gridlines(&m),
            category_title: layout::category_title_position(
                &m,
                &self.pixels,
                &self.category_axis.title,
                &styles.title,
                measure,
            ),
            value_title: layout::value_title_placement(
                &m,
                &self.value_axis.title,
                &styles.title,
                measure,
            ),
            category_labels: layout::category_label_positions(
                &m,
                &self.category_axis.tick_labels,
                &styles.tick,
                measure,
            ),
            value_labels: layout::value_label_positions(
                &m,
                &self.pixels,
                &self.value_axis.tick_labels,
                &styles.tick,
                measure,
            ),
            bars: layout::bar_rects(&m, self.dataset.values()),
            metrics: m,
        })
    }

    fn apply_range(&mut self, range: ValueRange) {
        self.range = range;
        self.value_axis.tick_labels =
            value_tick_labels(&range, self.config.tick_count, self.config.tick_label_precision);
    }
}

impl ChartWidget for ColumnChart {
    fn on_bounds_changed(&mut self, width: i32, height: i32, insets: Insets) {
        let bounds = Bounds::new(width, height, insets);
        if bounds != self.bounds {
            debug!("bounds changed: {width}x{height}, insets {insets:?}");
            self.bounds = bounds;
        }
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        let Some(geometry) = self.layout(&*canvas) else {
            debug!("skipping frame: bounds {:?} leave no drawable area", self.bounds);
            return;
        };
        paint(&geometry, &self.styles, canvas);
    }

    fn set_dataset(&mut self, values: Vec<f64>, labels: Vec<String>) -> Result<()> {
        let validated = ChartDataset::try_new(values, labels)
            .and_then(|ds| ds.value_range(self.config.min_value).map(|r| (ds, r)));
        let (dataset, range) = match validated {
            Ok(ok) => ok,
            Err(e) => {
                warn!("rejected dataset: {e}");
                return Err(e);
            }
        };
        debug!("dataset replaced: {} categories, range {:?}", dataset.len(), range);
        self.category_axis.tick_labels = dataset.labels().to_vec();
        self.dataset = dataset;
        self.apply_range(range);
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn paint(g: &RenderGeometry, styles: &FrameStyles, canvas: &mut dyn Canvas) {
    canvas.fill_background(styles.background);

    for seg in g.rulers.iter().chain(&g.gridlines) {
        canvas.draw_line(seg.from, seg.to, &styles.ruler);
    }

    canvas.draw_text(&g.category_title.text, g.category_title.anchor, &styles.title);
    {
        let t = &g.value_title;
        let mut rotated = TransformScope::rotated(canvas, t.degrees, t.pivot);
        rotated.draw_text(&t.text, t.anchor, &styles.title);
    }

    for label in g.category_labels.iter().chain(&g.value_labels) {
        canvas.draw_text(&label.text, label.anchor, &styles.tick);
    }

    for bar in &g.bars {
        canvas.draw_rect(*bar, &styles.bar);
    }
}
