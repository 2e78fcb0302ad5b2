//! PNG raster export.
//!
//! Consecutive pattern points are joined with straight segments drawn by a
//! Bresenham walk. Segments are clipped to the canvas first so stray points
//! far outside it cost nothing to draw.

use crate::error::ExportResult;
use crate::render::{parse_color, RenderSettings};
use cyclograph_core::{Pattern, Point};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Draw `pattern` onto a fresh canvas.
pub fn render_image(pattern: &Pattern, settings: &RenderSettings) -> ExportResult<RgbImage> {
    settings.validate()?;
    let background = parse_color(&settings.background)?;
    let stroke = parse_color(&settings.stroke)?;

    let mut img = RgbImage::from_pixel(settings.width, settings.height, background);

    for pair in pattern.points.windows(2) {
        let a = settings.to_canvas(pair[0]);
        let b = settings.to_canvas(pair[1]);
        if let Some((a, b)) = clip_segment(a, b, settings.width as f64, settings.height as f64) {
            draw_line_segment(
                &mut img,
                a.x.round() as i32,
                a.y.round() as i32,
                b.x.round() as i32,
                b.y.round() as i32,
                stroke,
                settings.stroke_width,
            );
        }
    }

    Ok(img)
}

/// Draw `pattern` and encode it as PNG bytes.
pub fn render_png(pattern: &Pattern, settings: &RenderSettings) -> ExportResult<Vec<u8>> {
    let img = render_image(pattern, settings)?;
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(img).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Liang-Barsky clip of segment `a`-`b` against `[0, width] x [0, height]`.
fn clip_segment(a: Point, b: Point, width: f64, height: f64) -> Option<(Point, Point)> {
    if !(a.is_finite() && b.is_finite()) {
        return None;
    }
    let d = b - a;
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;

    for (p, q) in [
        (-d.x, a.x),
        (d.x, width - a.x),
        (-d.y, a.y),
        (d.y, height - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }

    Some((a + d * t0, a + d * t1))
}

fn draw_line_segment(
    img: &mut RgbImage,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Rgb<u8>,
    stroke_width: u32,
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        stamp(img, x, y, color, stroke_width);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

// Square brush centred on (x, y)
fn stamp(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, stroke_width: u32) {
    let half = (stroke_width as i32 - 1) / 2;
    let extra = (stroke_width as i32 - 1) - half;
    for py in (y - half)..=(y + extra) {
        for px in (x - half)..=(x + extra) {
            if px >= 0 && px < img.width() as i32 && py >= 0 && py < img.height() as i32 {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}
