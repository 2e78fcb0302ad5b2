//! Gear shapes and boundary sampling.
//!
//! A gear is either a regular polygon inscribed in a circle or a straight
//! segment starting at the origin. Both are sampled with a normalized
//! parameter `t` in `[0, 1)` that walks once around the boundary.

use crate::error::{CyclographError, Result};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Wire tag for polygon gears.
pub const POLYGON_TAG: &str = "polygon";
/// Wire tag for line gears.
pub const LINE_TAG: &str = "line";

/// Geometry of a gear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    /// Regular polygon, vertices evenly spaced on a circle of `radius`.
    Polygon { sides: u32, radius: f64 },
    /// Line from `(0, 0)` to `(length, 0)`.
    Segment { length: f64 },
}

/// A gear: geometry plus its start angle.
///
/// `start_angle` is carried with the shape and serialized, but sampling
/// does not rotate by it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GearSpec", into = "GearSpec")]
pub struct Shape {
    pub kind: ShapeKind,
    pub start_angle: f64,
}

/// Loosely typed gear description as it arrives from callers.
///
/// For `"line"` gears `radius` holds the segment length and `sides` is
/// ignored. Polygon gears must carry `sides`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearSpec {
    pub shape: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sides: Option<u32>,
    pub radius: f64,
    #[serde(default)]
    pub start_angle: f64,
}

impl Shape {
    /// Regular polygon with `sides >= 3`.
    pub fn polygon(sides: u32, radius: f64) -> Result<Self> {
        if sides < 3 {
            return Err(CyclographError::InvalidShapeKind(format!(
                "polygon needs at least 3 sides, got {}",
                sides
            )));
        }
        Ok(Self {
            kind: ShapeKind::Polygon { sides, radius },
            start_angle: 0.0,
        })
    }

    /// Segment from the origin along +X.
    pub fn segment(length: f64) -> Self {
        Self {
            kind: ShapeKind::Segment { length },
            start_angle: 0.0,
        }
    }

    pub fn with_start_angle(mut self, start_angle: f64) -> Self {
        self.start_angle = start_angle;
        self
    }

    /// Boundary point at parameter `t`.
    ///
    /// Polygons map `t` to a fractional vertex index `t * sides` and
    /// interpolate linearly toward the next vertex, wrapping after the last
    /// one. Segments interpolate between their two endpoints. A polygon with
    /// no sides, only constructible by hand, samples as the origin.
    pub fn sample_point(&self, t: f64) -> Point {
        match self.kind {
            ShapeKind::Polygon { sides: 0, .. } => Point::ORIGIN,
            ShapeKind::Polygon { sides, radius } => {
                let n = sides as f64;
                let position = (t * n).rem_euclid(n);
                let index = position.floor();
                let frac = position - index;
                let index = index as u32 % sides;
                let from = polygon_vertex(sides, radius, index);
                if frac == 0.0 {
                    return from;
                }
                let to = polygon_vertex(sides, radius, (index + 1) % sides);
                from.lerp(to, frac)
            }
            ShapeKind::Segment { length } => Point::ORIGIN.lerp(Point::new(length, 0.0), t),
        }
    }

    /// Perimeter proxy used for the no-slip ratio.
    ///
    /// Polygons use `sides * radius`; a segment counts as a two-vertex
    /// polygon with radius `length`.
    pub fn perimeter(&self) -> f64 {
        match self.kind {
            ShapeKind::Polygon { sides, radius } => sides as f64 * radius,
            ShapeKind::Segment { length } => 2.0 * length,
        }
    }

    /// Defining points of the gear: polygon vertices or segment endpoints.
    pub fn outline(&self) -> Vec<Point> {
        match self.kind {
            ShapeKind::Polygon { sides, radius } => (0..sides)
                .map(|k| polygon_vertex(sides, radius, k))
                .collect(),
            ShapeKind::Segment { length } => vec![Point::ORIGIN, Point::new(length, 0.0)],
        }
    }

    pub fn tag(&self) -> &'static str {
        match self.kind {
            ShapeKind::Polygon { .. } => POLYGON_TAG,
            ShapeKind::Segment { .. } => LINE_TAG,
        }
    }

    /// Polygon radius or segment length.
    pub fn size(&self) -> f64 {
        match self.kind {
            ShapeKind::Polygon { radius, .. } => radius,
            ShapeKind::Segment { length } => length,
        }
    }
}

/// Vertex `k` of a regular polygon, at angle `2*pi*k / sides`.
pub fn polygon_vertex(sides: u32, radius: f64, k: u32) -> Point {
    Point::from_polar(radius, TAU * k as f64 / sides as f64)
}

impl TryFrom<GearSpec> for Shape {
    type Error = CyclographError;

    fn try_from(spec: GearSpec) -> Result<Self> {
        let shape = match spec.shape.as_str() {
            POLYGON_TAG => {
                let sides = spec.sides.ok_or_else(|| {
                    CyclographError::invalid_input("polygon gear requires 'sides'")
                })?;
                Shape::polygon(sides, spec.radius)?
            }
            LINE_TAG => Shape::segment(spec.radius),
            other => {
                return Err(CyclographError::InvalidShapeKind(format!(
                    "unknown gear shape '{}'",
                    other
                )))
            }
        };
        Ok(shape.with_start_angle(spec.start_angle))
    }
}

impl From<Shape> for GearSpec {
    fn from(shape: Shape) -> Self {
        let sides = match shape.kind {
            ShapeKind::Polygon { sides, .. } => sides,
            ShapeKind::Segment { .. } => 2,
        };
        GearSpec {
            shape: shape.tag().to_string(),
            sides: Some(sides),
            radius: shape.size(),
            start_angle: shape.start_angle,
        }
    }
}
