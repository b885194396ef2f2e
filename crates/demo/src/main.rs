// File: crates/demo/src/main.rs
// Summary: Demo builds a dataset (random or from CSV) and renders it as a column chart PNG.

use anyhow::{Context, Result};
use clap::Parser;
use column_core::{ChartConfig, ChartDataset, Color, ColumnChart, Density, Insets};
use column_render_skia::{render_to_png, RenderOptions};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

/// Random demo values fall in [LOW, HIGH); LOW doubles as the fixed axis floor.
const RANDOM_LOW: u32 = 20;
const RANDOM_HIGH: u32 = 100;

#[derive(Parser, Debug)]
#[command(name = "column-demo", about = "Render a column chart to PNG")]
struct Cli {
    /// CSV file with `label,value` columns; random data when omitted
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Output PNG path
    #[arg(long, default_value = "target/out/columns.png")]
    out: PathBuf,
    #[arg(long, default_value_t = 720)]
    width: i32,
    #[arg(long, default_value_t = 480)]
    height: i32,
    /// Uniform inset in pixels
    #[arg(long, default_value_t = 0)]
    inset: u32,
    /// Logical-to-pixel density factor
    #[arg(long, default_value_t = 2.0)]
    density: f32,
    /// Number of random categories
    #[arg(long, default_value_t = 8)]
    count: usize,
    /// Seed for reproducible random data
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    tick_count: Option<usize>,
    /// Maximum bar width in logical units
    #[arg(long)]
    max_bar_width: Option<f32>,
    /// Bar color as #RRGGBB
    #[arg(long)]
    bar_color: Option<String>,
    /// Fixed value-axis minimum (defaults to 20 for random data, data minimum for CSV)
    #[arg(long)]
    min_value: Option<f64>,
    #[arg(long, default_value = "Item")]
    x_title: String,
    #[arg(long, default_value = "Sales")]
    y_title: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    anyhow::ensure!(
        cli.density.is_finite() && cli.density > 0.0,
        "invalid density {}: must be a positive number",
        cli.density
    );

    let (dataset, floor) = match &cli.csv {
        Some(path) => {
            let ds = load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            info!("Loaded {} categories from {}", ds.len(), path.display());
            (ds, cli.min_value)
        }
        None => {
            let ds = random_dataset(cli.count, cli.seed)?;
            info!("Generated {} random categories", ds.len());
            (ds, cli.min_value.or(Some(RANDOM_LOW as f64)))
        }
    };

    let mut config = ChartConfig::default().with_min_value(floor);
    if let Some(n) = cli.tick_count {
        config = config.with_tick_count(n);
    }
    if let Some(w) = cli.max_bar_width {
        config = config.with_max_bar_width(w);
    }
    if let Some(hex) = &cli.bar_color {
        let c = Color::parse_hex(hex).with_context(|| format!("invalid color '{hex}'"))?;
        config = config.with_bar_color(c);
    }

    let mut chart = ColumnChart::with_config(dataset, config, &Density(cli.density))?;
    chart.set_axis_titles(cli.x_title.as_str(), cli.y_title.as_str());

    let opts = RenderOptions { width: cli.width, height: cli.height, insets: Insets::uniform(cli.inset) };
    render_to_png(&mut chart, &opts, &cli.out)?;
    println!("Wrote {}", cli.out.display());
    Ok(())
}

/// `count` whole-number values in [RANDOM_LOW, RANDOM_HIGH) labelled `Item 1..=count`.
fn random_dataset(count: usize, seed: Option<u64>) -> Result<ChartDataset> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let pairs = (1..=count).map(|i| (format!("Item {i}"), rng.random_range(RANDOM_LOW..RANDOM_HIGH) as f64));
    Ok(ChartDataset::from_pairs(pairs)?)
}

/// Load `label,value` rows. Header names are matched case-insensitively.
/// Without recognizable headers the first two columns are used, and a first
/// row whose second column is numeric is data, not a header.
fn load_csv(path: &Path) -> Result<ChartDataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let named = (idx(&["label", "name", "category"]), idx(&["value", "amount", "sales"]));
    let i_label = named.0.unwrap_or(0);
    let i_value = named.1.unwrap_or(1);

    let mut labels = Vec::new();
    let mut values = Vec::new();
    if named == (None, None) {
        let first = rdr.headers()?;
        if let (Some(label), Some(Ok(value))) = (first.get(0), first.get(1).map(str::parse::<f64>)) {
            labels.push(label.to_string());
            values.push(value);
        }
    }
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let label = rec.get(i_label).with_context(|| format!("row {}: missing label", row + 1))?;
        let raw = rec.get(i_value).with_context(|| format!("row {}: missing value", row + 1))?;
        let value = raw
            .parse::<f64>()
            .with_context(|| format!("row {}: '{raw}' is not a number", row + 1))?;
        labels.push(label.to_string());
        values.push(value);
    }
    Ok(ChartDataset::try_new(values, labels)?)
}
