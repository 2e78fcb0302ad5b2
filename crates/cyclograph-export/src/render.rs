//! Canvas settings shared by the SVG and PNG renderers.

use crate::error::{ExportError, ExportResult};
use cyclograph_core::Point;
use image::Rgb;
use serde::{Deserialize, Serialize};

/// Fixed-size canvas that patterns are drawn onto.
///
/// Pattern coordinates are translated by `(offset_x, offset_y)` and not
/// scaled, so a pattern centred on the origin lands in the middle of the
/// default 500 x 500 canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub offset_x: f64,
    pub offset_y: f64,
    /// Stroke colour, a name such as `blue` or `#rrggbb`
    pub stroke: String,
    pub background: String,
    pub stroke_width: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            offset_x: 250.0,
            offset_y: 250.0,
            stroke: "blue".to_string(),
            background: "white".to_string(),
            stroke_width: 1,
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> ExportResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ExportError::InvalidCanvas(format!(
                "canvas must be at least 1 x 1, got {} x {}",
                self.width, self.height
            )));
        }
        if self.stroke_width == 0 {
            return Err(ExportError::InvalidCanvas(
                "stroke width must be > 0".to_string(),
            ));
        }
        if !(self.offset_x.is_finite() && self.offset_y.is_finite()) {
            return Err(ExportError::InvalidCanvas(
                "render offset must be finite".to_string(),
            ));
        }
        parse_color(&self.stroke)?;
        parse_color(&self.background)?;
        Ok(())
    }

    /// Translate a pattern point onto the canvas.
    pub fn to_canvas(&self, p: Point) -> Point {
        Point::new(p.x + self.offset_x, p.y + self.offset_y)
    }
}

/// Parse a CSS-style colour name or `#rrggbb` hex value.
pub fn parse_color(value: &str) -> ExportResult<Rgb<u8>> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() == 6 {
            if let Ok(rgb) = u32::from_str_radix(hex, 16) {
                return Ok(Rgb([(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8]));
            }
        }
        return Err(ExportError::InvalidColor(value.to_string()));
    }

    let rgb = match value.to_ascii_lowercase().as_str() {
        "black" => [0, 0, 0],
        "white" => [255, 255, 255],
        "red" => [255, 0, 0],
        "green" => [0, 128, 0],
        "lime" => [0, 255, 0],
        "blue" => [0, 0, 255],
        "navy" => [0, 0, 128],
        "yellow" => [255, 255, 0],
        "orange" => [255, 165, 0],
        "purple" => [128, 0, 128],
        "gray" | "grey" => [128, 128, 128],
        _ => return Err(ExportError::InvalidColor(value.to_string())),
    };
    Ok(Rgb(rgb))
}
