//! Command line operations behind the `cyclograph` binary.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use cyclograph_core::{generate_pattern, Design, Pattern};
use cyclograph_export::{json::pattern_json_pretty, Exporter, OutputFormat};
use cyclograph_settings::Config;
use tracing::info;

/// Configuration from `path`, or from the default location when `None`.
///
/// An explicit path must exist; a missing default file means defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match (path, Config::default_path()) {
        (Some(p), _) => Config::load_from_file(p)
            .with_context(|| format!("Failed to load configuration from {}", p.display()))?,
        (None, Some(p)) => Config::load_or_default(&p)
            .with_context(|| format!("Failed to load configuration from {}", p.display()))?,
        (None, None) => Config::default(),
    };
    Ok(config)
}

/// Read, parse and validate a design file, then generate its pattern.
pub fn pattern_from_file(path: &Path) -> anyhow::Result<Pattern> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read design {}", path.display()))?;
    let design = Design::from_json(&json)
        .with_context(|| format!("Invalid design in {}", path.display()))?;
    let pattern = generate_pattern(&design)?;
    info!(
        points = pattern.len(),
        "Generated pattern from {}",
        path.display()
    );
    Ok(pattern)
}

/// `generate`: pattern JSON to `output`, or stdout when `None`.
pub fn generate(design: &Path, output: Option<&PathBuf>) -> anyhow::Result<()> {
    let pattern = pattern_from_file(design)?;
    let json = pattern_json_pretty(&pattern)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote pattern to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}

/// `export`: encoding chosen by the extension of `output`.
pub fn export(config: &Config, design: &Path, output: &Path) -> anyhow::Result<OutputFormat> {
    // Reject unknown extensions before doing any work
    OutputFormat::from_path(output)?;
    let pattern = pattern_from_file(design)?;
    let exporter = Exporter::new(config.render.clone(), config.toolpath.clone());
    Ok(exporter.export_to_file(&pattern, output)?)
}

/// `config`: effective configuration as TOML.
pub fn show_config(config: &Config) -> anyhow::Result<String> {
    Ok(config.to_toml()?)
}
