//! Persistence of the package configuration as TOML.
//!
//! The file is what `pymeta write config` produces and what every later
//! command reads back: `<package root>/.package_config.toml`. Reading
//! overlays the file onto the defaults, so keys missing from an older or
//! hand-trimmed file still render.

use std::path::Path;

use tracing::{debug, instrument};

use metacode_core::{
    application::ports::Filesystem,
    domain::Configuration,
    error::{Context, MetacodeError, MetacodeResult},
};

/// Parse TOML text and overlay it onto the default configuration.
pub fn parse_configuration(text: &str) -> MetacodeResult<Configuration> {
    let persisted: Configuration =
        toml::from_str(text).map_err(|e| MetacodeError::configuration(format!("invalid configuration: {e}")))?;
    Ok(Configuration::from_persisted(persisted))
}

/// Serialize a configuration to TOML.
pub fn configuration_to_toml(configuration: &Configuration) -> MetacodeResult<String> {
    toml::to_string_pretty(configuration).context("cannot serialize configuration")
}

/// Read the configuration file at `path`.
///
/// A missing file is a configuration error, not an I/O error: it almost
/// always means the command was run outside a package root.
#[instrument(skip(fs), fields(path = %path.display()))]
pub fn read_configuration(fs: &dyn Filesystem, path: &Path) -> MetacodeResult<Configuration> {
    if !fs.is_file(path) {
        return Err(MetacodeError::configuration(format!(
            "configuration file '{}' not found",
            path.display()
        )));
    }
    let text = fs.read_to_string(path)?;
    let configuration = parse_configuration(&text)?;
    debug!(package = %configuration.package.name, "configuration loaded");
    Ok(configuration)
}

/// Write `configuration` to `path`, replacing the file.
#[instrument(skip(fs, configuration), fields(path = %path.display()))]
pub fn write_configuration(fs: &dyn Filesystem, path: &Path, configuration: &Configuration) -> MetacodeResult<()> {
    let text = configuration_to_toml(configuration)?;
    fs.write_file(path, &text)
}
