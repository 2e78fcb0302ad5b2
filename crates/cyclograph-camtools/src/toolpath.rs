//! Pattern to G-code toolpath encoder.
//!
//! Rescales a pattern into a physical target box, applies the machine's
//! handedness and emits one travel move to the first point followed by a
//! draw move per remaining point, wrapped in configurable start/end blocks
//! and pen commands.

use cyclograph_core::{Bounds, CyclographError, Pattern, Point, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which corner of the target box the pattern is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OriginCorner {
    /// Pattern minimum sits at machine `(0, 0)`
    #[default]
    #[serde(rename = "0,0", alias = "bottomLeft")]
    BottomLeft,
    /// Pattern maximum sits at `(target_width, target_height)`
    #[serde(rename = "1,1", alias = "topRight")]
    TopRight,
}

/// Machine X axis orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handedness {
    #[default]
    Right,
    /// X axis is mirrored
    Left,
}

/// Toolpath encoding parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolpathOptions {
    /// Lines emitted before any motion
    pub start_block: String,
    /// Lines emitted after the pen is lifted
    pub end_block: String,
    pub pen_down_command: String,
    pub pen_up_command: String,
    /// Target box width (mm)
    pub target_width: f64,
    /// Target box height (mm)
    pub target_height: f64,
    /// Feed rate for travel moves (mm/min)
    pub move_feed_rate: f64,
    /// Feed rate for drawing moves (mm/min)
    pub draw_feed_rate: f64,
    pub origin_corner: OriginCorner,
    pub handedness: Handedness,
}

impl Default for ToolpathOptions {
    fn default() -> Self {
        Self {
            start_block: "G21 ; Set units to millimeters\nG90 ; Use absolute coordinates\nG0 Z5 ; Lift pen"
                .to_string(),
            end_block: "G0 X0 Y0 ; Return to origin".to_string(),
            pen_down_command: "G0 Z0 ; Lower pen".to_string(),
            pen_up_command: "G0 Z5 ; Lift pen".to_string(),
            target_width: 200.0,
            target_height: 200.0,
            move_feed_rate: 3000.0,
            draw_feed_rate: 1000.0,
            origin_corner: OriginCorner::BottomLeft,
            handedness: Handedness::Right,
        }
    }
}

impl ToolpathOptions {
    /// Validate box dimensions and feed rates
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("targetWidth", self.target_width),
            ("targetHeight", self.target_height),
            ("moveFeedRate", self.move_feed_rate),
            ("drawFeedRate", self.draw_feed_rate),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(CyclographError::invalid_input(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Uniform scale and offset mapping pattern coordinates into the target box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub mirror_x: bool,
}

impl Placement {
    /// Fit `points` into the target box described by `options`.
    ///
    /// With left handedness X is mirrored before the bounds are measured,
    /// so the fitted pattern still lands inside the box. This departs from
    /// the unmirrored `offset_x = -min_x * scale` on purpose.
    pub fn fit(points: &[Point], options: &ToolpathOptions) -> Result<Self> {
        let mirror_x = options.handedness == Handedness::Left;
        let bounds = Bounds::from_points(points).ok_or(CyclographError::DegenerateBoundingBox {
            width: 0.0,
            height: 0.0,
        })?;
        let (min_x, max_x) = if mirror_x {
            (-bounds.max_x, -bounds.min_x)
        } else {
            (bounds.min_x, bounds.max_x)
        };

        let width = max_x - min_x;
        let height = bounds.height();
        if width == 0.0 || height == 0.0 {
            return Err(CyclographError::DegenerateBoundingBox { width, height });
        }

        let scale = (options.target_width / width).min(options.target_height / height);
        let (offset_x, offset_y) = match options.origin_corner {
            OriginCorner::BottomLeft => (-min_x * scale, -bounds.min_y * scale),
            OriginCorner::TopRight => (
                options.target_width - max_x * scale,
                options.target_height - bounds.max_y * scale,
            ),
        };

        Ok(Self {
            scale,
            offset_x,
            offset_y,
            mirror_x,
        })
    }

    pub fn apply(&self, p: Point) -> Point {
        let x = if self.mirror_x { -p.x } else { p.x };
        Point::new(x * self.scale + self.offset_x, p.y * self.scale + self.offset_y)
    }
}

/// Generator for pen-plotter G-code from a pattern
#[derive(Debug, Clone, Default)]
pub struct ToolpathEncoder {
    options: ToolpathOptions,
}

impl ToolpathEncoder {
    pub fn new(options: ToolpathOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ToolpathOptions {
        &self.options
    }

    /// Pattern points mapped into machine coordinates, in sequence order.
    pub fn transform_points(&self, points: &[Point]) -> Result<Vec<Point>> {
        self.options.validate()?;
        let placement = Placement::fit(points, &self.options)?;
        Ok(points.iter().map(|p| placement.apply(*p)).collect())
    }

    /// Encode `pattern` as newline separated G-code.
    pub fn encode(&self, pattern: &Pattern) -> Result<String> {
        let machine = self.transform_points(&pattern.points)?;
        let o = &self.options;
        let (first, rest) = machine
            .split_first()
            .ok_or(CyclographError::DegenerateBoundingBox {
                width: 0.0,
                height: 0.0,
            })?;

        let mut lines: Vec<String> = Vec::with_capacity(machine.len() + 8);
        push_block(&mut lines, &o.start_block);
        lines.push(format!("F{:.1} ; Travel feed rate", o.move_feed_rate));
        lines.push(format!(
            "G0 X{:.3} Y{:.3} ; Move to start position",
            first.x, first.y
        ));
        push_block(&mut lines, &o.pen_down_command);
        lines.push(format!("F{:.1} ; Draw feed rate", o.draw_feed_rate));
        for p in rest {
            lines.push(format!("G1 X{:.3} Y{:.3}", p.x, p.y));
        }
        push_block(&mut lines, &o.pen_up_command);
        lines.push(format!("F{:.1} ; Restore travel feed rate", o.move_feed_rate));
        push_block(&mut lines, &o.end_block);

        debug!(
            points = machine.len(),
            lines = lines.len(),
            "Encoded toolpath"
        );

        Ok(lines.join("\n"))
    }
}

/// Encode with the given options.
pub fn encode(pattern: &Pattern, options: &ToolpathOptions) -> Result<String> {
    ToolpathEncoder::new(options.clone()).encode(pattern)
}

// Blank blocks are skipped rather than emitted as empty lines.
fn push_block(lines: &mut Vec<String>, block: &str) {
    lines.extend(
        block
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .map(str::to_string),
    );
}
