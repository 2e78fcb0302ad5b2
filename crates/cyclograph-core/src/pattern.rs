//! Pattern generation.
//!
//! Sweeps the rolling model over `t = i / steps` for `i in 0..steps` and
//! records the pen position at each step. The sweep is half-open, so `t = 1`
//! is never sampled.

use crate::design::{Design, TracingMode};
use crate::error::Result;
use crate::geometry::Point;
use crate::rolling::RollingModel;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minimum number of samples in a sweep, regardless of the requested count.
pub const MIN_STEPS: u32 = 500;

/// Ordered pen positions together with the design that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub points: Vec<Point>,
    pub design: Design,
}

impl Pattern {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Document form `{"points": [[x, y], ...], "design": {...}}`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Number of samples generated for `sample_count` requested.
pub fn effective_steps(sample_count: u32) -> u32 {
    sample_count.max(MIN_STEPS)
}

/// Drives the rolling model across a parameter sweep.
pub struct PatternGenerator<'a> {
    design: &'a Design,
}

impl<'a> PatternGenerator<'a> {
    pub fn new(design: &'a Design) -> Self {
        Self { design }
    }

    /// Generate with the design's own tracing mode.
    pub fn generate(&self) -> Result<Pattern> {
        self.generate_with_mode(self.design.tracing_mode)
    }

    /// Generate with an explicit tracing mode.
    pub fn generate_with_mode(&self, mode: TracingMode) -> Result<Pattern> {
        let design = self.design;
        let model = RollingModel::new(design)?;
        let steps = effective_steps(design.sample_count);

        debug!(
            steps,
            perimeter_ratio = model.perimeter_ratio(),
            mode = %mode,
            "Generating pattern"
        );

        let points = (0..steps)
            .map(|i| {
                let t = i as f64 / steps as f64;
                let state = model.state_at(design, t, mode);
                state.center + Point::from_polar(design.pen_distance, state.rotation + design.pen_angle)
            })
            .collect();

        Ok(Pattern {
            points,
            design: design.clone(),
        })
    }
}

/// Generate the pattern for `design` using its tracing mode.
pub fn generate_pattern(design: &Design) -> Result<Pattern> {
    PatternGenerator::new(design).generate()
}
