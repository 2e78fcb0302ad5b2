//! Error handling for the cyclograph engine
//!
//! Every engine failure is synchronous and fully determined by its input,
//! so there is a single flat error type and no retry classification:
//! - Shape errors (unknown shape tag, too few polygon sides)
//! - Input errors (missing or out-of-range design fields)
//! - Arithmetic errors (zero moving-shape perimeter)
//! - Toolpath errors (pattern with zero width or height)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for the cyclograph engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CyclographError {
    /// Shape tag is not recognized, or a polygon has fewer than three sides
    #[error("Invalid shape kind: {0}")]
    InvalidShapeKind(String),

    /// Design fields are missing or malformed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A divisor evaluated to zero (moving shape perimeter)
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Pattern spans zero width or height and cannot be fitted to a box
    #[error("Degenerate bounding box: {width} x {height}")]
    DegenerateBoundingBox {
        /// Horizontal extent of the pattern.
        width: f64,
        /// Vertical extent of the pattern.
        height: f64,
    },
}

impl CyclographError {
    /// Create an input error from a string message
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        CyclographError::InvalidInput(msg.into())
    }

    /// Check if this error was caused by the caller's design description
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CyclographError::InvalidInput(_) | CyclographError::InvalidShapeKind(_)
        )
    }
}

/// Result type using CyclographError
pub type Result<T> = std::result::Result<T, CyclographError>;
