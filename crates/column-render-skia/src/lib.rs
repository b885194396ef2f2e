// File: crates/column-render-skia/src/lib.rs
// Summary: Skia renderer: `SkiaCanvas` adapter plus headless PNG rendering on CPU raster surfaces.

use anyhow::Result;
use log::debug;
use skia_safe as skia;

use column_core::{
    Canvas, ChartWidget, Color, FillStyle, Insets, LineStyle, PointF, RectF, TextMeasure,
    TextStyle, HEIGHT, WIDTH,
};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, insets: Insets::default() }
    }
}

/// Draws onto a borrowed Skia canvas. Every primitive builds its own paint,
/// so no style leaks from one call into the next.
pub struct SkiaCanvas<'a> {
    canvas: &'a skia::Canvas,
    typeface: Option<skia::Typeface>,
}

impl<'a> SkiaCanvas<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        // Use system manager fallback
        let typeface = skia::FontMgr::default().legacy_make_typeface(None::<&str>, skia::FontStyle::default());
        if typeface.is_none() {
            debug!("no default typeface; text will measure as zero width");
        }
        Self { canvas, typeface }
    }

    fn font(&self, size: f32) -> skia::Font {
        match &self.typeface {
            Some(tf) => skia::Font::new(tf.clone(), size),
            None => {
                let mut font = skia::Font::default();
                font.set_size(size);
                font
            }
        }
    }
}

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn paint(color: Color, style: skia::paint::Style) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_color(to_skia(color));
    p.set_style(style);
    p
}

impl TextMeasure for SkiaCanvas<'_> {
    fn measure_text_width(&self, text: &str, style: &TextStyle) -> f32 {
        let (advance, _bounds) = self.font(style.size).measure_str(text, None);
        advance
    }

    fn text_line_height(&self, style: &TextStyle) -> f32 {
        let (_spacing, m) = self.font(style.size).metrics();
        let h = m.bottom - m.top;
        if h > 0.0 { h } else { style.size }
    }
}

impl Canvas for SkiaCanvas<'_> {
    fn fill_background(&mut self, color: Color) {
        self.canvas.clear(to_skia(color));
    }

    fn draw_line(&mut self, from: PointF, to: PointF, style: &LineStyle) {
        let mut p = paint(style.color, skia::paint::Style::Stroke);
        p.set_stroke_width(style.width);
        self.canvas.draw_line((from.x, from.y), (to.x, to.y), &p);
    }

    fn draw_rect(&mut self, rect: RectF, style: &FillStyle) {
        let p = paint(style.color, skia::paint::Style::Fill);
        let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        self.canvas.draw_rect(r, &p);
    }

    fn draw_text(&mut self, text: &str, at: PointF, style: &TextStyle) {
        let p = paint(style.color, skia::paint::Style::Fill);
        let font = self.font(style.size);
        self.canvas.draw_str(text, (at.x, at.y), &font, &p);
    }

    fn push_rotation(&mut self, degrees: f32, pivot: PointF) {
        self.canvas.save();
        self.canvas.rotate(degrees, Some(skia::Point::new(pivot.x, pivot.y)));
    }

    fn pop_transform(&mut self) {
        self.canvas.restore();
    }
}

/// Size `widget` to `opts`, render it on a CPU raster surface and return PNG bytes.
pub fn render_to_png_bytes<W: ChartWidget + ?Sized>(widget: &mut W, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;

    widget.on_bounds_changed(opts.width, opts.height, opts.insets);
    {
        let mut canvas = SkiaCanvas::new(surface.canvas());
        widget.render(&mut canvas);
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render `widget` to a PNG file at `output_png_path`, creating parent directories.
pub fn render_to_png<W: ChartWidget + ?Sized>(
    widget: &mut W,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(widget, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    debug!("wrote {}", path.display());
    Ok(())
}
