//! # Cyclograph
//!
//! Generates roulette curves ("cyclographs") traced by a pen fixed to a gear
//! rolling along another gear, and delivers them as JSON, SVG, PNG or G-code.
//!
//! ## Architecture
//!
//! Cyclograph is organized as a workspace with multiple crates:
//!
//! 1. **cyclograph-core** - Shapes, rolling model, pattern generation
//! 2. **cyclograph-camtools** - G-code toolpath encoder
//! 3. **cyclograph-export** - JSON, SVG and PNG serializers
//! 4. **cyclograph-settings** - Configuration files and defaults
//! 5. **cyclograph** - HTTP API and command line front end (this crate)

pub mod commands;
pub mod routes;
pub mod server;

pub use cyclograph_camtools::{Handedness, OriginCorner, ToolpathEncoder, ToolpathOptions};
pub use cyclograph_core::{
    generate_pattern, CyclographError, Design, DesignSpec, GearSpec, LineMovementMode, Pattern,
    PatternGenerator, Point, Shape, ShapeKind, TracingMode,
};
pub use cyclograph_export::{Exporter, GearOutline, OutputFormat, RenderSettings};
pub use cyclograph_settings::{Config, ServerSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, so command output on stdout stays clean
/// - RUST_LOG environment variable support
/// - INFO as the default level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
