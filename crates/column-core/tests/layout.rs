// File: crates/column-core/tests/layout.rs
// Purpose: Layout geometry scenarios: scale, headroom, cell clamping, label/title anchors.

use column_core::{
    ChartConfig, ChartDataset, ChartWidget, ColumnChart, Density, HeuristicTextMeasurer, Insets,
    TextMeasure, TextStyle,
};

const EPS: f32 = 1e-3;

/// Four bars over a fixed floor of 20; 434px tall leaves a 400px bar area
/// once the default 34px axis padding is taken off.
fn abcd_chart() -> ColumnChart {
    let ds = ChartDataset::from_pairs([("A", 20.0), ("B", 40.0), ("C", 60.0), ("D", 80.0)]).unwrap();
    let cfg = ChartConfig::default().with_min_value(Some(20.0));
    let mut chart = ColumnChart::with_config(ds, cfg, &Density::IDENTITY).unwrap();
    chart.on_bounds_changed(400, 434, Insets::default());
    chart
}

#[test]
fn scenario_scale_and_bar_heights() {
    let chart = abcd_chart();
    let range = chart.range();
    assert_eq!(range.min, 20.0);
    assert!((range.max - 96.0).abs() < 1e-9);

    let m = chart.metrics().expect("drawable");
    assert!((m.bar_area_height() - 400.0).abs() < EPS);
    assert!((m.scale.px_per_unit - 400.0 / 76.0).abs() < 1e-9);

    let g = chart.layout(&HeuristicTextMeasurer).unwrap();
    assert_eq!(g.bars.len(), 4);
    assert!(g.bars[0].height().abs() < EPS, "A sits on the minimum");
    assert!((g.bars[3].height() - 315.789).abs() < 1e-2, "D height {}", g.bars[3].height());
    for bar in &g.bars {
        assert!((bar.bottom - m.baseline()).abs() < EPS);
    }
}

#[test]
fn tallest_bar_stays_below_plot_top() {
    let chart = abcd_chart();
    let g = chart.layout(&HeuristicTextMeasurer).unwrap();
    let top = g.bars.iter().map(|b| b.top).fold(f32::INFINITY, f32::min);
    assert!(top > g.metrics.plot_top());
}

#[test]
fn cell_width_clamped_to_max_bar_width() {
    let chart = abcd_chart();
    let m = chart.metrics().unwrap();
    // (400 - 34 - 3) / 4 = 90.75 → clamped
    assert_eq!(m.cell_width, 40.0);

    let g = chart.layout(&HeuristicTextMeasurer).unwrap();
    let first = g.bars[0];
    assert!((first.left - (34.0 + 3.0 + 8.0)).abs() < EPS);
    assert!((first.width() - 24.0).abs() < EPS, "bar is 60% of its cell");
    // Excess width is left as margin, not redistributed.
    assert!(g.bars[3].right < m.plot_right() - 100.0);
}

#[test]
fn narrow_widget_shrinks_cells() {
    let mut chart = abcd_chart();
    chart.on_bounds_changed(137, 434, Insets::default());
    let m = chart.metrics().unwrap();
    assert!((m.cell_width - 25.0).abs() < EPS);
}

#[test]
fn rulers_and_gridlines() {
    let chart = abcd_chart();
    let g = chart.layout(&HeuristicTextMeasurer).unwrap();
    let [value_ruler, category_ruler] = g.rulers;
    assert_eq!(value_ruler.from.x, 34.0);
    assert_eq!(value_ruler.to.y, 0.0);
    assert_eq!(category_ruler.from.y, 400.0);
    assert_eq!(category_ruler.to.x, 400.0);

    assert_eq!(g.gridlines.len(), 10);
    assert_eq!(g.gridlines[0].from.y, 400.0);
    // (434 - 12) / 10
    let spacing = g.gridlines[0].from.y - g.gridlines[1].from.y;
    assert!((spacing - 42.2).abs() < EPS);
}

#[test]
fn value_labels_are_right_aligned_and_fixed_precision() {
    let chart = abcd_chart();
    let labels = &chart.value_axis().tick_labels;
    assert_eq!(labels.len(), 10);
    assert_eq!(labels[0], "20.0");
    assert_eq!(labels[1], "27.6");
    assert_eq!(labels[9], "88.4");

    let g = chart.layout(&HeuristicTextMeasurer).unwrap();
    let style = TextStyle { color: chart.config().text_color, size: 10.0 };
    for (label, grid) in g.value_labels.iter().zip(&g.gridlines) {
        let right = label.anchor.x + HeuristicTextMeasurer.measure_text_width(&label.text, &style);
        assert!((right - 32.0).abs() < EPS, "{} ends at {}", label.text, right);
        assert_eq!(label.anchor.y, grid.from.y);
    }
}

#[test]
fn category_labels_centered_under_bars() {
    let chart = abcd_chart();
    let g = chart.layout(&HeuristicTextMeasurer).unwrap();
    let style = TextStyle { color: chart.config().text_color, size: 10.0 };
    for (label, bar) in g.category_labels.iter().zip(&g.bars) {
        let w = HeuristicTextMeasurer.measure_text_width(&label.text, &style);
        assert!((label.anchor.x + w / 2.0 - bar.center_x()).abs() < EPS);
        assert!(label.anchor.y > g.metrics.baseline());
    }
}

#[test]
fn titles_placement() {
    let mut chart = abcd_chart();
    chart.set_axis_titles("Quarter", "Revenue");
    let g = chart.layout(&HeuristicTextMeasurer).unwrap();

    let style = TextStyle { color: chart.config().text_color, size: 12.0 };
    let w = HeuristicTextMeasurer.measure_text_width("Quarter", &style);
    assert_eq!(g.category_title.text, "Quarter");
    assert!((g.category_title.anchor.x + w / 2.0 - 200.0).abs() < EPS);
    assert!(g.category_title.anchor.y > g.category_labels[0].anchor.y);

    let t = &g.value_title;
    assert_eq!(t.text, "Revenue");
    assert_eq!(t.degrees, -90.0);
    assert_eq!(t.anchor.x, 0.0);
    assert!((t.anchor.y - 434.0 / 3.0).abs() < EPS);
    assert!(t.pivot.y < t.anchor.y);
}

#[test]
fn insets_shift_the_plot() {
    let mut chart = abcd_chart();
    chart.on_bounds_changed(420, 454, Insets::new(10, 10, 10, 10));
    let m = chart.metrics().unwrap();
    assert_eq!(m.origin.x, 44.0);
    assert_eq!(m.baseline(), 410.0);
    assert_eq!(m.plot_top(), 10.0);
    assert!((m.bar_area_height() - 400.0).abs() < EPS);
}

#[test]
fn density_scales_paddings() {
    let ds = ChartDataset::from_pairs([("x", 1.0)]).unwrap();
    let chart = ColumnChart::with_config(ds, ChartConfig::default(), &Density(3.0)).unwrap();
    let px = chart.pixel_metrics();
    assert_eq!(px.title_text_size, 36.0);
    assert_eq!(px.max_bar_width, 120.0);
    assert_eq!(px.axis_padding(), 36.0 + 30.0 + 36.0);
}

#[test]
fn single_category_lays_out() {
    let ds = ChartDataset::from_pairs([("only", 7.0)]).unwrap();
    let mut chart = ColumnChart::new(ds).unwrap();
    chart.on_bounds_changed(300, 300, Insets::default());
    let g = chart.layout(&HeuristicTextMeasurer).unwrap();
    assert_eq!(g.bars.len(), 1);
    // Derived minimum equals the only value, so the bar is flat.
    assert!(g.bars[0].height().abs() < EPS);
}

#[test]
fn degenerate_bounds_yield_no_layout() {
    let mut chart = abcd_chart();
    chart.on_bounds_changed(0, 0, Insets::default());
    assert!(chart.layout(&HeuristicTextMeasurer).is_none());

    chart.on_bounds_changed(30, 30, Insets::default());
    assert!(chart.metrics().is_none(), "smaller than the axis padding");

    chart.on_bounds_changed(100, 100, Insets::uniform(60));
    assert!(chart.metrics().is_none(), "insets larger than the widget");
}

#[test]
fn unusable_density_yields_no_layout() {
    for factor in [f32::NAN, 0.0, f32::INFINITY] {
        let ds = ChartDataset::from_pairs([("a", 1.0), ("b", 2.0)]).unwrap();
        let mut chart = ColumnChart::with_config(ds, ChartConfig::default(), &Density(factor)).unwrap();
        chart.on_bounds_changed(400, 300, Insets::default());
        assert!(chart.metrics().is_none(), "density {factor}");

        let mut canvas = column_core::RecordingCanvas::new();
        chart.render(&mut canvas);
        assert!(canvas.is_empty(), "density {factor} drew {:?}", canvas.commands());
    }
}

#[test]
fn short_widget_drops_ticks_above_plot_top() {
    let mut chart = abcd_chart();
    chart.on_bounds_changed(400, 100, Insets::default());
    let g = chart.layout(&HeuristicTextMeasurer).unwrap();
    let top = g.metrics.plot_top();
    assert!(!g.gridlines.is_empty());
    assert!(g.gridlines.len() < 10, "{} gridlines", g.gridlines.len());
    assert!(g.gridlines.iter().all(|l| l.from.y >= top && l.to.y >= top));
    assert_eq!(g.value_labels.len(), g.gridlines.len());
    assert!(g.value_labels.iter().all(|t| t.anchor.y >= top));
}

#[test]
fn wide_value_labels_stay_inside_drawable_area() {
    let ds = ChartDataset::from_pairs([("a", 0.0), ("b", 12000.0)]).unwrap();
    let mut chart = ColumnChart::new(ds).unwrap();
    chart.on_bounds_changed(400, 300, Insets::new(5, 5, 5, 5));
    let g = chart.layout(&HeuristicTextMeasurer).unwrap();
    let left = g.metrics.inner.left;
    assert!(g.value_labels.iter().all(|t| t.anchor.x >= left), "{:?}", g.value_labels);
}
