//! Help presentation config.
//!
//! `HelpOverrides` is what users write (every key optional, e.g. in a YAML
//! file); `HelpConfig` is the resolved value the host compiler passes down.
//!
//! ```yaml
//! inject-help: true
//! color-main: "&a"
//! color-accent: "&b"
//! color-warn: "&c"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Effective help configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelpConfig {
    /// Append a generated `help` subcommand to every compiled host.
    pub inject_help: bool,
    pub color_main: String,
    pub color_accent: String,
    pub color_warn: String,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            inject_help: true,
            color_main: "&a".to_string(),
            color_accent: "&b".to_string(),
            color_warn: "&c".to_string(),
        }
    }
}

impl HelpConfig {
    /// Defaults with every key set in `overrides` replaced.
    pub fn merged(overrides: &HelpOverrides) -> Self {
        Self::default().with_overrides(overrides)
    }

    pub fn with_overrides(self, overrides: &HelpOverrides) -> Self {
        Self {
            inject_help: overrides.inject_help.unwrap_or(self.inject_help),
            color_main: overrides.color_main.clone().unwrap_or(self.color_main),
            color_accent: overrides.color_accent.clone().unwrap_or(self.color_accent),
            color_warn: overrides.color_warn.clone().unwrap_or(self.color_warn),
        }
    }
}

/// User-supplied partial config. Missing keys fall back to [`HelpConfig::default`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct HelpOverrides {
    #[serde(alias = "inject_help", alias = "injectHelp")]
    pub inject_help: Option<bool>,
    #[serde(alias = "color_main", alias = "colorMain")]
    pub color_main: Option<String>,
    #[serde(alias = "color_accent", alias = "colorAccent")]
    pub color_accent: Option<String>,
    #[serde(alias = "color_warn", alias = "colorWarn")]
    pub color_warn: Option<String>,
}

impl HelpOverrides {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("Invalid help config")
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn without_help(mut self) -> Self {
        self.inject_help = Some(false);
        self
    }
}
