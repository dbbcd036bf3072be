// File: crates/histogram-core/src/raster.rs
// Summary: Headless PNG rasterization of a graphic using Skia CPU raster surfaces (feature "raster").

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::scene::{Graphic, Node};
use crate::theme::{parse_hex, Theme};
use crate::types::FONT_SIZE;

/// Rasterize `graphic` (in its current attribute state) to PNG bytes over the theme background.
pub fn render_png(graphic: &Graphic, theme: &Theme) -> Result<Vec<u8>> {
    let width = (graphic.width.round() as i32).max(1);
    let height = (graphic.height.round() as i32).max(1);
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(color(theme.background));

    draw_node(canvas, &graphic.root, (0.0, 0.0));

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Rasterize and write to `path`, creating parent directories.
pub fn write_png(graphic: &Graphic, theme: &Theme, path: impl AsRef<std::path::Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = render_png(graphic, theme)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn color(hex: &str) -> skia::Color {
    let (r, g, b, a) = parse_hex(hex).unwrap_or((0, 0, 0, 255));
    skia::Color::from_argb(a, r, g, b)
}

fn draw_node(canvas: &skia::Canvas, node: &Node, origin: (f64, f64)) {
    let (ox, oy) = match node.translate {
        Some((x, y)) => (origin.0 + x, origin.1 + y),
        None => origin,
    };
    let num = |name: &str| node.get_num(name).unwrap_or(0.0);

    match node.tag {
        "rect" => {
            let (w, h) = (num("width"), num("height"));
            if w > 0.0 && h > 0.0 {
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_style(skia::paint::Style::Fill);
                paint.set_color(color(node.get_attr("fill").unwrap_or("#000000")));
                let rect = skia::Rect::from_xywh((ox + num("x")) as f32, (oy + num("y")) as f32, w as f32, h as f32);
                canvas.draw_rect(rect, &paint);
            }
        }
        "line" => {
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_stroke_width(1.0);
            paint.set_color(color(node.get_attr("stroke").unwrap_or("#000000")));
            canvas.draw_line(
                ((ox + num("x1")) as f32, (oy + num("y1")) as f32),
                ((ox + num("x2")) as f32, (oy + num("y2")) as f32),
                &paint,
            );
        }
        "text" => {
            if let Some(text) = &node.text {
                let size = node.get_num("font-size").unwrap_or(FONT_SIZE) as f32;
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_color(color(node.get_attr("fill").unwrap_or("#000000")));
                let mut font = skia::Font::default();
                font.set_size(size);
                let (advance, _) = font.measure_str(text, Some(&paint));
                let shift = match node.get_attr("text-anchor") {
                    Some("middle") => advance * 0.5,
                    Some("end") => advance,
                    _ => 0.0,
                };
                let dy = match node.get_attr("dy") {
                    Some(v) if v.ends_with("em") => v.trim_end_matches("em").parse::<f32>().unwrap_or(0.0) * size,
                    Some(v) => v.parse::<f32>().unwrap_or(0.0),
                    None => 0.0,
                };
                let x = (ox + num("x")) as f32 - shift;
                let y = (oy + num("y")) as f32 + dy;
                canvas.draw_str(text, (x, y), &font, &paint);
            }
        }
        _ => {}
    }

    for child in &node.children {
        draw_node(canvas, child, (ox, oy));
    }
}
