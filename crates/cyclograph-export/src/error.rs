//! Error types for the export crate.
//!
//! Rendering a pattern can fail in the engine (bad design), while encoding
//! an image or document, or while writing the result to disk.

use cyclograph_core::CyclographError;
use std::io;
use thiserror::Error;

/// Errors that can occur while rendering or writing an export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The engine rejected the design or pattern.
    #[error(transparent)]
    Engine(#[from] CyclographError),

    /// Raster encoding failed.
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A colour string could not be parsed.
    #[error("Invalid colour: {0}")]
    InvalidColor(String),

    /// Canvas dimensions are unusable.
    #[error("Invalid canvas: {0}")]
    InvalidCanvas(String),

    /// The output format is not recognized.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_error_display() {
        let err = ExportError::InvalidColor("chartreuse-ish".to_string());
        assert_eq!(err.to_string(), "Invalid colour: chartreuse-ish");

        let err = ExportError::UnsupportedFormat("bmp".to_string());
        assert_eq!(err.to_string(), "Unsupported output format: bmp");
    }

    #[test]
    fn test_engine_error_is_transparent() {
        let err: ExportError = CyclographError::invalid_input("steps must be >= 1").into();
        assert_eq!(err.to_string(), "Invalid input: steps must be >= 1");
        assert!(matches!(err, ExportError::Engine(_)));
    }
}
