//! JSON documents returned to callers.

use crate::error::ExportResult;
use cyclograph_core::{Pattern, Point, Shape};
use serde::{Deserialize, Serialize};

/// Defining points of a single gear, `{"points": [[x, y], ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearOutline {
    pub points: Vec<Point>,
}

impl From<&Shape> for GearOutline {
    fn from(shape: &Shape) -> Self {
        Self {
            points: shape.outline(),
        }
    }
}

/// Pattern document `{"points": [...], "design": {...}}`.
pub fn pattern_json(pattern: &Pattern) -> ExportResult<String> {
    Ok(serde_json::to_string(pattern)?)
}

/// Indented pattern document, used for files written to disk.
pub fn pattern_json_pretty(pattern: &Pattern) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(pattern)?)
}
