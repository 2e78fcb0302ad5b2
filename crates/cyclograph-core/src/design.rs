//! Design description: the two gears, the pen, and sweep resolution.

use crate::error::{CyclographError, Result};
use crate::shapes::{GearSpec, Shape, ShapeKind};
use serde::{Deserialize, Serialize};

/// Which side of the fixed gear the moving gear rolls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TracingMode {
    /// Rolls around the outside (epicycloid-like).
    #[default]
    Outside,
    /// Rolls around the inside (hypocycloid-like).
    Inside,
}

impl TracingMode {
    /// Rotation sign: `+1` outside, `-1` inside.
    pub fn sign(self) -> f64 {
        match self {
            Self::Outside => 1.0,
            Self::Inside => -1.0,
        }
    }
}

impl std::fmt::Display for TracingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outside => write!(f, "outside"),
            Self::Inside => write!(f, "inside"),
        }
    }
}

/// Movement along a line-shaped fixed gear. Carried, not used by generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineMovementMode {
    #[default]
    Along,
    Around,
}

/// A complete, validated design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DesignSpec", into = "DesignSpec")]
pub struct Design {
    pub fixed_shape: Shape,
    pub moving_shape: Shape,
    /// Distance from the moving gear's center to the pen
    pub pen_distance: f64,
    /// Pen angle offset (radians)
    pub pen_angle: f64,
    pub tracing_mode: TracingMode,
    pub line_movement_mode: LineMovementMode,
    /// Requested samples; generation never uses fewer than `MIN_STEPS`
    pub sample_count: u32,
}

/// Design as described on the wire, before shape conversion and validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSpec {
    pub fixed_gear: GearSpec,
    pub moving_gear: GearSpec,
    pub pen_distance: f64,
    pub pen_angle: f64,
    pub path_type: TracingMode,
    #[serde(default)]
    pub line_movement: LineMovementMode,
    pub steps: u32,
}

impl Design {
    pub fn new(fixed_shape: Shape, moving_shape: Shape) -> Self {
        Self {
            fixed_shape,
            moving_shape,
            pen_distance: 0.0,
            pen_angle: 0.0,
            tracing_mode: TracingMode::Outside,
            line_movement_mode: LineMovementMode::Along,
            sample_count: 500,
        }
    }

    pub fn with_pen(mut self, distance: f64, angle: f64) -> Self {
        self.pen_distance = distance;
        self.pen_angle = angle;
        self
    }

    pub fn with_tracing_mode(mut self, mode: TracingMode) -> Self {
        self.tracing_mode = mode;
        self
    }

    pub fn with_sample_count(mut self, sample_count: u32) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Parse and validate a design from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: DesignSpec = serde_json::from_str(json)
            .map_err(|e| CyclographError::invalid_input(format!("Invalid design JSON: {}", e)))?;
        Self::try_from(spec)
    }

    /// Check field ranges.
    ///
    /// A zero moving-gear perimeter is not an input error here; the rolling
    /// model reports it as a division by zero.
    pub fn validate(&self) -> Result<()> {
        validate_shape("fixedGear", &self.fixed_shape)?;
        validate_shape("movingGear", &self.moving_shape)?;

        if !self.pen_distance.is_finite() || self.pen_distance < 0.0 {
            return Err(CyclographError::invalid_input(format!(
                "penDistance must be a finite value >= 0, got {}",
                self.pen_distance
            )));
        }
        if !self.pen_angle.is_finite() {
            return Err(CyclographError::invalid_input("penAngle must be finite"));
        }
        if self.sample_count == 0 {
            return Err(CyclographError::invalid_input("steps must be >= 1"));
        }
        Ok(())
    }
}

fn validate_shape(field: &str, shape: &Shape) -> Result<()> {
    if !shape.start_angle.is_finite() {
        return Err(CyclographError::invalid_input(format!(
            "{}.startAngle must be finite",
            field
        )));
    }
    match shape.kind {
        ShapeKind::Polygon { sides, .. } if sides < 3 => Err(CyclographError::InvalidShapeKind(
            format!("{}: polygon needs at least 3 sides, got {}", field, sides),
        )),
        ShapeKind::Polygon { radius, .. } if !(radius.is_finite() && radius > 0.0) => {
            Err(CyclographError::invalid_input(format!(
                "{}.radius must be a positive number, got {}",
                field, radius
            )))
        }
        ShapeKind::Segment { length } if !length.is_finite() => Err(
            CyclographError::invalid_input(format!("{}.radius must be finite", field)),
        ),
        _ => Ok(()),
    }
}

impl TryFrom<DesignSpec> for Design {
    type Error = CyclographError;

    fn try_from(spec: DesignSpec) -> Result<Self> {
        let design = Design {
            fixed_shape: Shape::try_from(spec.fixed_gear)?,
            moving_shape: Shape::try_from(spec.moving_gear)?,
            pen_distance: spec.pen_distance,
            pen_angle: spec.pen_angle,
            tracing_mode: spec.path_type,
            line_movement_mode: spec.line_movement,
            sample_count: spec.steps,
        };
        design.validate()?;
        Ok(design)
    }
}

impl From<Design> for DesignSpec {
    fn from(design: Design) -> Self {
        DesignSpec {
            fixed_gear: design.fixed_shape.into(),
            moving_gear: design.moving_shape.into(),
            pen_distance: design.pen_distance,
            pen_angle: design.pen_angle,
            path_type: design.tracing_mode,
            line_movement: design.line_movement_mode,
            steps: design.sample_count,
        }
    }
}
