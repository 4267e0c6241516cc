// Messager - platform/config.rs
//
// Platform config directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::FormatOptions;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Messager configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/messager/ or %APPDATA%\Messager\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[catalog]` section.
    pub catalog: CatalogSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[catalog]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// Catalog file; relative paths are taken from the config file's directory.
    pub path: Option<String>,
    /// Sequence rewritten to the escape character.
    pub escape_marker: Option<String>,
    /// Escape character (exactly one character).
    pub escape_char: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Catalog file named by the config, already resolved against the
    /// config file's directory.
    pub catalog_path: Option<PathBuf>,
    /// Escape marker rewriting applied by the catalog.
    pub format: FormatOptions,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

/// Read and deserialise a config file.
///
/// Returns `Ok(None)` when the file does not exist (first run).
pub fn read_config(path: &Path) -> Result<Option<RawConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config_str(&content, path).map(Some)
}

/// Deserialise config.toml content. `path` is used for error messages only.
pub fn parse_config_str(content: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load and validate a config file.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// A missing file yields defaults with no warnings. An unreadable or
/// unparseable file yields defaults with one warning.
pub fn load_config_file(path: &Path) -> (AppConfig, Vec<String>) {
    let raw = match read_config(path) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(path = %path.display(), "No config.toml found; using defaults");
            return (AppConfig::default(), Vec::new());
        }
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            return (AppConfig::default(), vec![msg]);
        }
    };

    tracing::info!(path = %path.display(), "Loaded config.toml");
    validate(raw, path.parent().unwrap_or_else(|| Path::new(".")))
}

/// Validate a deserialised config against named constants.
///
/// `base_dir` anchors a relative `[catalog] path`.
pub fn validate(raw: RawConfig, base_dir: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let mut config = AppConfig::default();

    // -- Catalog: path --
    if let Some(ref path) = raw.catalog.path {
        if path.trim().is_empty() {
            warnings.push("[catalog] path is empty. Ignoring.".to_string());
        } else {
            let path = PathBuf::from(path);
            config.catalog_path = Some(if path.is_relative() {
                base_dir.join(path)
            } else {
                path
            });
        }
    }

    // -- Catalog: escape_marker --
    if let Some(ref marker) = raw.catalog.escape_marker {
        let len = marker.chars().count();
        if (1..=constants::MAX_ESCAPE_MARKER_LEN).contains(&len) {
            config.format.escape_marker = marker.clone();
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[catalog] escape_marker".to_string(),
                    value: marker.clone(),
                    expected: format!(
                        "1-{} characters. Using default ({})",
                        constants::MAX_ESCAPE_MARKER_LEN,
                        constants::DEFAULT_ESCAPE_MARKER
                    ),
                }
                .to_string(),
            );
        }
    }

    // -- Catalog: escape_char --
    if let Some(ref escape) = raw.catalog.escape_char {
        let mut chars = escape.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => config.format.escape_char = c,
            _ => warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[catalog] escape_char".to_string(),
                    value: escape.clone(),
                    expected: format!(
                        "exactly one character. Using default ({})",
                        constants::DEFAULT_ESCAPE_CHAR
                    ),
                }
                .to_string(),
            ),
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}
