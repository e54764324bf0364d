//! Generator configuration for kindgen
//!
//! Read from a `kindgen.toml` that sits alongside the specification or is
//! passed with `--config`. Every key is optional:
//!
//! ```toml
//! package = "lightkube"        # package the smoke-test imports from
//! resources_dir = "resources"  # directory created under the output dir
//! template = "resources.j2"    # relative to this file
//! clean = true                 # remove the resources dir before writing
//! test_file = "tests/test_resources.py"
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up next to the specification
pub const CONFIG_FILE_NAME: &str = "kindgen.toml";

/// Options loaded from `kindgen.toml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub package: String,
    pub resources_dir: String,
    /// Template replacing the built-in one
    pub template: Option<PathBuf>,
    pub clean: bool,
    /// Where to write the import smoke-test file
    pub test_file: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            package: "lightkube".to_string(),
            resources_dir: "resources".to_string(),
            template: None,
            clean: true,
            test_file: None,
        }
    }
}

/// Load the generator configuration from a TOML file
///
/// Returns `Ok(Some(config))` if the file exists and parses,
/// `Ok(None)` if it does not exist (not an error),
/// `Err` if it exists but fails to parse.
///
/// Relative `template` and `test_file` paths are resolved against the
/// directory holding the config file.
pub fn load_generator_config(config_path: &Path) -> anyhow::Result<Option<GeneratorConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path).with_context(|| {
        format!("Failed to read generator config: {}", config_path.display())
    })?;

    let mut config: GeneratorConfig = toml::from_str(&contents).with_context(|| {
        format!("Failed to parse generator config: {}", config_path.display())
    })?;

    if let Some(base) = config_path.parent() {
        config.template = config.template.map(|p| base.join(p));
        config.test_file = config.test_file.map(|p| base.join(p));
    }

    Ok(Some(config))
}

/// Auto-detect `kindgen.toml` alongside the specification
pub fn auto_detect_config_path(spec_path: &Path) -> Option<PathBuf> {
    let spec_dir = spec_path.parent()?;
    let config_path = spec_dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Resolve the config path
///
/// Priority:
/// 1. Explicitly provided path (via CLI)
/// 2. Auto-detected alongside spec
/// 3. None (defaults)
pub fn resolve_config_path(explicit_path: Option<&Path>, spec_path: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    auto_detect_config_path(spec_path)
}

/// Load the config that applies to `spec_path`, falling back to defaults.
pub fn load_config_for_spec(
    explicit_path: Option<&Path>,
    spec_path: &Path,
) -> anyhow::Result<GeneratorConfig> {
    if let Some(path) = explicit_path {
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
    }
    match resolve_config_path(explicit_path, spec_path) {
        Some(path) => Ok(load_generator_config(&path)?.unwrap_or_default()),
        None => Ok(GeneratorConfig::default()),
    }
}
