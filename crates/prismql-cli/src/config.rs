use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use prismql_core::OutputFormat;
use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "prisma-to-graphql.config.yaml";

/// Destination used when neither the command line nor a config file names one.
pub const DEFAULT_OUTPUT: &str = "apps/mobile/src/schema/models.graphql";

/// Project configuration from prisma-to-graphql.config.yaml.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConverterConfig {
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

/// Effective settings after merging arguments, config file and defaults.
#[derive(Debug, PartialEq)]
pub struct Settings {
    pub output: PathBuf,
    pub format: OutputFormat,
}

/// Load the config file.
///
/// An explicit path must exist and parse. The implicit default file is
/// optional, and an invalid one is ignored with a warning.
pub fn load_config(explicit: Option<&Path>) -> Result<ConverterConfig, String> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let implicit = Path::new(DEFAULT_CONFIG_FILE);
    if !implicit.exists() {
        return Ok(ConverterConfig::default());
    }

    read_config(implicit).or_else(|e| {
        warn!("ignoring {DEFAULT_CONFIG_FILE}: {e}");
        Ok(ConverterConfig::default())
    })
}

fn read_config(path: &Path) -> Result<ConverterConfig, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;

    debug!("loaded config from {}", path.display());
    parse_config(&content).map_err(|e| format!("Invalid YAML config {}: {}", path.display(), e))
}

pub fn parse_config(content: &str) -> Result<ConverterConfig, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(ConverterConfig::default());
    }
    serde_yaml::from_str(content)
}

/// Command line value > config file value > built-in default.
pub fn resolve_settings(
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
    config: ConverterConfig,
) -> Settings {
    Settings {
        output: output
            .or(config.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        format: format.or(config.format).unwrap_or_default(),
    }
}
