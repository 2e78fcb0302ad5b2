//! Output format selection and dispatch.

use crate::error::{ExportError, ExportResult};
use crate::render::RenderSettings;
use crate::{json, raster, svg};
use cyclograph_camtools::{ToolpathEncoder, ToolpathOptions};
use cyclograph_core::Pattern;
use std::path::Path;
use tracing::info;

/// Supported pattern encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Svg,
    Png,
    Gcode,
}

impl OutputFormat {
    /// Pick a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> ExportResult<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "gcode" | "nc" | "ngc" => Ok(Self::Gcode),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn from_path(path: &Path) -> ExportResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ExportError::UnsupportedFormat(path.display().to_string()))?;
        Self::from_extension(ext)
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Svg => "image/svg+xml",
            Self::Png => "image/png",
            Self::Gcode => "text/plain",
        }
    }

    /// Download file name offered to HTTP clients.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Json => "cyclograph.json",
            Self::Svg => "cyclograph.svg",
            Self::Png => "cyclograph.png",
            Self::Gcode => "cyclograph.gcode",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Svg => write!(f, "SVG"),
            Self::Png => write!(f, "PNG"),
            Self::Gcode => write!(f, "G-code"),
        }
    }
}

/// Pattern exporter bundling canvas and toolpath settings
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    pub render: RenderSettings,
    pub toolpath: ToolpathOptions,
}

impl Exporter {
    pub fn new(render: RenderSettings, toolpath: ToolpathOptions) -> Self {
        Self { render, toolpath }
    }

    /// Encode `pattern` in `format`.
    pub fn export(&self, pattern: &Pattern, format: OutputFormat) -> ExportResult<Vec<u8>> {
        let bytes = match format {
            OutputFormat::Json => json::pattern_json(pattern)?.into_bytes(),
            OutputFormat::Svg => svg::render_svg(pattern, &self.render)?.into_bytes(),
            OutputFormat::Png => raster::render_png(pattern, &self.render)?,
            OutputFormat::Gcode => ToolpathEncoder::new(self.toolpath.clone())
                .encode(pattern)?
                .into_bytes(),
        };
        Ok(bytes)
    }

    /// Encode `pattern` in the format implied by `path` and write it there.
    pub fn export_to_file(&self, pattern: &Pattern, path: &Path) -> ExportResult<OutputFormat> {
        let format = OutputFormat::from_path(path)?;
        let bytes = match format {
            OutputFormat::Json => json::pattern_json_pretty(pattern)?.into_bytes(),
            _ => self.export(pattern, format)?,
        };
        std::fs::write(path, &bytes)?;
        info!(
            "Exported {} ({} bytes) to {}",
            format,
            bytes.len(),
            path.display()
        );
        Ok(format)
    }
}
