//! Config discovery and loading from the XDG config directory.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

use super::document::parse_value;
use super::merge::{merge_config, SimpleConfig};
use super::Config;
use crate::diagnostics::DiagnosticSink;

/// Where the full config and the simple map are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub config: PathBuf,
    pub simple: PathBuf,
}

impl ConfigPaths {
    /// `~/.config/urlpick/config.toml` (or `config.json` when only that
    /// exists) and `~/.config/urlpick/simple.json`.
    pub fn default_paths() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("urlpick")?;
        Ok(Self::in_dir(&xdg_dirs.get_config_home().join("urlpick")))
    }

    /// Same layout rooted at `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        let toml_path = dir.join("config.toml");
        let json_path = dir.join("config.json");
        let config = if !toml_path.exists() && json_path.exists() {
            json_path
        } else {
            toml_path
        };
        Self {
            config,
            simple: dir.join("simple.json"),
        }
    }

    /// Default paths with optional overrides (from CLI flags).
    pub fn resolve(config: Option<PathBuf>, simple: Option<PathBuf>) -> Result<Self> {
        let defaults = Self::default_paths()?;
        Ok(Self {
            config: config.unwrap_or(defaults.config),
            simple: simple.unwrap_or(defaults.simple),
        })
    }

    /// Reads both sources; a missing file is `None`.
    pub fn load_sources(
        &self,
        sink: &dyn DiagnosticSink,
    ) -> Result<(Option<Config>, Option<SimpleConfig>)> {
        let config = read_config_file(&self.config, sink)?;
        let simple = read_simple_file(&self.simple)?;
        Ok((config, simple))
    }
}

fn read_optional(path: &Path, what: &str) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("read {}: {}", what, path.display())),
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Reads a full config document as JSON (`.json`) or TOML (anything else).
/// Returns `None` if the file does not exist.
pub fn read_config_file(path: &Path, sink: &dyn DiagnosticSink) -> Result<Option<Config>> {
    let Some(text) = read_optional(path, "config")? else {
        return Ok(None);
    };
    let document: Value = if is_json(path) {
        serde_json::from_str(&text).with_context(|| format!("parse config: {}", path.display()))?
    } else {
        toml::from_str(&text).with_context(|| format!("parse config: {}", path.display()))?
    };
    let config = parse_value(&document, sink)
        .with_context(|| format!("load config: {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        rewrite = config.rewrite.len(),
        handlers = config.handlers.len(),
        "loaded config"
    );
    Ok(Some(config))
}

/// Reads a simple JSON map. Returns `None` if the file does not exist.
pub fn read_simple_file(path: &Path) -> Result<Option<SimpleConfig>> {
    let Some(text) = read_optional(path, "simple config")? else {
        return Ok(None);
    };
    let simple = SimpleConfig::from_json_str(&text)
        .with_context(|| format!("parse simple config: {}", path.display()))?;
    tracing::debug!(path = %path.display(), entries = simple.handlers.len(), "loaded simple config");
    Ok(Some(simple))
}

/// Loads and merges both sources. Fails when neither file exists.
pub fn load_merged(paths: &ConfigPaths, sink: &dyn DiagnosticSink) -> Result<Config> {
    let (config, simple) = paths.load_sources(sink)?;
    match merge_config(config, simple, sink) {
        Some(config) => Ok(config),
        None => bail!(
            "no config found (looked for {} and {})",
            paths.config.display(),
            paths.simple.display()
        ),
    }
}
