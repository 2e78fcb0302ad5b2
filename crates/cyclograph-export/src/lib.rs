//! # Cyclograph Export
//!
//! Serializers for generated patterns:
//!
//! - **JSON**: `{"points": [...], "design": {...}}` documents and gear outlines
//! - **SVG**: one polyline on a fixed canvas
//! - **PNG**: the same polyline rasterized
//! - **G-code**: via the toolpath encoder in `cyclograph-camtools`

pub mod error;
pub mod format;
pub mod json;
pub mod raster;
pub mod render;
pub mod svg;

pub use error::{ExportError, ExportResult};
pub use format::{Exporter, OutputFormat};
pub use json::{pattern_json, GearOutline};
pub use raster::{render_image, render_png};
pub use render::{parse_color, RenderSettings};
pub use svg::render_svg;
