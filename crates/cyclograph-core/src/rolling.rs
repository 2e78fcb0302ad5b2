//! Rolling-motion model.
//!
//! Places the moving gear against the fixed gear at a sweep parameter and
//! reports its reference center and accumulated rotation. Rotation grows
//! linearly with the arc length travelled on the fixed gear, scaled by the
//! perimeter ratio of the two gears.

use crate::design::{Design, TracingMode};
use crate::error::{CyclographError, Result};
use crate::geometry::Point;

/// Position and rotation of the moving gear at one sweep parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingState {
    pub center: Point,
    /// Accumulated rotation (radians)
    pub rotation: f64,
}

/// Perimeter quantities shared by every sample of one sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingModel {
    perimeter_fixed: f64,
    perimeter_ratio: f64,
    reference_offset: Point,
}

impl RollingModel {
    /// Precompute the perimeter ratio for `design`.
    ///
    /// Validates `design` first. Fails with `DivisionByZero` when the moving
    /// gear's perimeter is 0.
    pub fn new(design: &Design) -> Result<Self> {
        design.validate()?;
        let perimeter_fixed = design.fixed_shape.perimeter();
        let perimeter_moving = design.moving_shape.perimeter();
        if perimeter_moving == 0.0 {
            return Err(CyclographError::DivisionByZero(
                "moving gear perimeter is 0".to_string(),
            ));
        }

        Ok(Self {
            perimeter_fixed,
            perimeter_ratio: perimeter_fixed / perimeter_moving,
            reference_offset: design.moving_shape.sample_point(0.0),
        })
    }

    pub fn perimeter_ratio(&self) -> f64 {
        self.perimeter_ratio
    }

    /// Moving gear's own point at parameter 0, in its local frame.
    pub fn reference_offset(&self) -> Point {
        self.reference_offset
    }

    /// State at parameter `t` (expected in `[0, 1)`).
    pub fn state_at(&self, design: &Design, t: f64, mode: TracingMode) -> RollingState {
        let arc_length = t * self.perimeter_fixed;
        let rotation = mode.sign() * arc_length * self.perimeter_ratio;

        let fixed_point = design.fixed_shape.sample_point(t);
        let center = match mode {
            TracingMode::Inside => fixed_point + self.reference_offset,
            TracingMode::Outside => fixed_point - self.reference_offset,
        };

        RollingState { center, rotation }
    }
}

/// One-shot form of [`RollingModel::state_at`].
pub fn rolling_state(design: &Design, t: f64, mode: TracingMode) -> Result<RollingState> {
    Ok(RollingModel::new(design)?.state_at(design, t, mode))
}
