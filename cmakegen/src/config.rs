//! Generator configuration loaded with Figment.
//!
//! Sources are merged in precedence order (later sources override earlier ones):
//! 1. Built-in defaults
//! 2. `cmakegen.toml`, `cmakegen.yaml`, `cmakegen.yml`, `cmakegen.json` in the scan root
//! 3. Environment variables prefixed with `CMAKEGEN_` (e.g. `CMAKEGEN_ANCHOR`)
//! 4. Explicit overrides, normally from the command line

use crate::emit::DEFAULT_LIBRARY_NAME;
use crate::error::{CmakegenError, Result};
use crate::normalize::{to_forward_slashes, DEFAULT_ANCHOR};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Default output location, relative to the scan root.
pub const DEFAULT_OUTPUT: &str = "../CMakeLists.txt";

/// Prefix for environment variable configuration.
pub const ENV_PREFIX: &str = "CMAKEGEN_";

/// Configuration file names looked up in the scan root, lowest precedence first.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "cmakegen.toml",
    "cmakegen.yaml",
    "cmakegen.yml",
    "cmakegen.json",
];

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Substring marking where build-relative paths begin.
    #[serde(deserialize_with = "scalar_string")]
    pub anchor: String,
    /// Name of the `add_library` target.
    #[serde(deserialize_with = "scalar_string")]
    pub library_name: String,
    /// Output file. Relative paths are resolved against the scan root.
    #[serde(deserialize_with = "scalar_path")]
    pub output: PathBuf,
    /// Render the listing without writing it.
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            anchor: DEFAULT_ANCHOR.to_string(),
            library_name: DEFAULT_LIBRARY_NAME.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            dry_run: false,
        }
    }
}

/// Any scalar a config source may produce for a text field.
///
/// Environment values such as `CMAKEGEN_LIBRARY_NAME=2024` arrive as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(s) => s,
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Signed(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(String::from)
}

fn scalar_path<'de, D>(deserializer: D) -> std::result::Result<PathBuf, D::Error>
where
    D: serde::Deserializer<'de>,
{
    scalar_string(deserializer).map(PathBuf::from)
}

impl GeneratorConfig {
    /// Rewrite the anchor in the forward-slash form discovered paths use.
    pub fn normalized(mut self) -> Self {
        self.anchor = to_forward_slashes(&self.anchor);
        self
    }

    /// Output path resolved against `root`.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            root.join(&self.output)
        }
    }

    /// Reject values the generator cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.anchor.is_empty() {
            return Err(CmakegenError::invalid_config("anchor must not be empty"));
        }
        if self.library_name.trim().is_empty() {
            return Err(CmakegenError::invalid_config(
                "library name must not be empty",
            ));
        }
        if self.library_name.chars().any(char::is_whitespace) {
            return Err(CmakegenError::invalid_config(format!(
                "library name '{}' must not contain whitespace",
                self.library_name
            )));
        }
        Ok(())
    }
}

/// Values that take precedence over every other configuration source.
///
/// Only fields that are `Some` override anything.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// Builds a [`GeneratorConfig`] for a scan root.
///
/// No caching is performed; every call reads the sources fresh.
pub struct ConfigProvider {
    root: PathBuf,
}

impl ConfigProvider {
    /// Create a provider that looks for configuration files in `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Load and validate the configuration.
    pub fn load(&self, overrides: &ConfigOverrides) -> Result<GeneratorConfig> {
        let config = self
            .build_figment(overrides)
            .extract::<GeneratorConfig>()?
            .normalized();
        config.validate()?;
        debug!(
            anchor = %config.anchor,
            library = %config.library_name,
            output = %config.output.display(),
            dry_run = config.dry_run,
            "Loaded generator configuration"
        );
        Ok(config)
    }

    fn build_figment(&self, overrides: &ConfigOverrides) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(GeneratorConfig::default()))
            .merge(self.load_config_files())
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides))
    }

    /// Config files present in the root, in precedence order.
    pub fn discover_config_files(&self) -> Vec<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| self.root.join(name))
            .filter(|path| path.is_file())
            .collect()
    }

    fn load_config_files(&self) -> Figment {
        let mut figment = Figment::new();
        for path in self.discover_config_files() {
            trace!("Loading config file: {}", path.display());
            figment = match path.extension().and_then(|e| e.to_str()) {
                Some("toml") => figment.merge(Toml::file(&path)),
                Some("json") => figment.merge(Json::file(&path)),
                _ => figment.merge(Yaml::file(&path)),
            };
        }
        figment
    }
}
