//! SVG polyline export.

use crate::error::ExportResult;
use crate::render::RenderSettings;
use cyclograph_core::Pattern;
use std::fmt::Write;

/// Render `pattern` as a standalone SVG document with a single polyline.
pub fn render_svg(pattern: &Pattern, settings: &RenderSettings) -> ExportResult<String> {
    settings.validate()?;

    let mut points = String::with_capacity(pattern.points.len() * 16);
    for (i, p) in pattern.points.iter().enumerate() {
        let c = settings.to_canvas(*p);
        if i > 0 {
            points.push(' ');
        }
        // Writing to a String cannot fail
        let _ = write!(points, "{:.3},{:.3}", c.x, c.y);
    }

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"100%\" height=\"100%\" viewBox=\"0 0 {} {}\">\n",
        settings.width, settings.height
    ));
    svg.push_str(&format!(
        "  <polyline points=\"{}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"none\" />\n",
        points, settings.stroke, settings.stroke_width
    ));
    svg.push_str("</svg>\n");

    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclograph_core::{Design, Point, Shape};

    #[test]
    fn test_points_are_offset() {
        let pattern = Pattern {
            points: vec![Point::new(0.0, 0.0), Point::new(-10.0, 5.5)],
            design: Design::new(Shape::segment(1.0), Shape::segment(1.0)),
        };
        let svg = render_svg(&pattern, &RenderSettings::default()).unwrap();
        assert!(svg.contains("points=\"250.000,250.000 240.000,255.500\""));
        assert!(svg.contains("viewBox=\"0 0 500 500\""));
        assert!(svg.contains("stroke=\"blue\""));
        assert!(svg.contains("fill=\"none\""));
    }
}
