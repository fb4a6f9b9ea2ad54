//! TOML Configuration File Support
//!
//! Runtime settings for a scene: the logical stage size, the tick period,
//! sound and logging, loaded from `~/.config/codetalk/config.toml`.
//!
//! # Configuration Priority
//!
//! Configuration values are loaded with the following priority (highest first):
//! 1. CLI arguments (applied by the caller through [`ConfigOverrides`])
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [stage]
//! width = 79
//! height = 20
//! tick_ms = 100
//!
//! [sound]
//! enabled = true
//!
//! [logging]
//! file = "/tmp/codetalk.log"
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Setting |
//! |----------|---------|
//! | `CODETALK_WIDTH` | `stage.width` |
//! | `CODETALK_HEIGHT` | `stage.height` |
//! | `CODETALK_TICK_MS` | `stage.tick_ms` |
//! | `CODETALK_SOUND` | `sound.enabled` (`0` or `false` disables) |
//! | `CODETALK_LOG_FILE` | `logging.file` |

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Stage;

/// Smallest stage a scene can be laid out on
pub const MIN_STAGE: Stage = Stage::new(20, 5);

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Stage section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StageToml {
    /// Logical canvas width in cells
    pub width: Option<i32>,

    /// Logical canvas height in cells
    pub height: Option<i32>,

    /// Scheduler period in milliseconds
    pub tick_ms: Option<u64>,
}

/// Sound section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundToml {
    /// Whether typing sounds play
    pub enabled: Option<bool>,
}

/// Logging section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingToml {
    /// Log file path
    pub file: Option<PathBuf>,
}

/// Root of the TOML configuration file
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneToml {
    /// Stage settings
    pub stage: StageToml,

    /// Sound settings
    pub sound: SoundToml,

    /// Logging settings
    pub logging: LoggingToml,
}

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Fully resolved scene configuration
#[derive(Clone, Debug)]
pub struct SceneConfig {
    /// Logical canvas the scene is authored against
    pub stage: Stage,

    /// Scheduler period
    pub tick: Duration,

    /// Whether typing sounds play
    pub sound_enabled: bool,

    /// Where logs go; `None` leaves the choice to the binary
    pub log_file: Option<PathBuf>,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of configuration values
    source: ConfigSource,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            stage: Stage::default(),
            tick: Duration::from_millis(100),
            sound_enabled: true,
            log_file: None,
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl SceneConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Set the configuration source
    pub fn set_source(&mut self, source: ConfigSource) {
        self.source = source;
    }

    /// Check the resolved values
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for a zero tick period or a
    /// stage smaller than [`MIN_STAGE`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick.is_zero() {
            return Err(ConfigError::ValidationError(
                "tick_ms must be greater than 0".to_string(),
            ));
        }
        if self.stage.width < MIN_STAGE.width || self.stage.height < MIN_STAGE.height {
            return Err(ConfigError::ValidationError(format!(
                "stage {}x{} is smaller than the minimum {}x{}",
                self.stage.width, self.stage.height, MIN_STAGE.width, MIN_STAGE.height
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/codetalk/config.toml` or
/// `~/.config/codetalk/config.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("codetalk").join("config.toml"))
}

/// Load configuration from all sources with proper priority
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed.
/// A missing config file is not an error (defaults are used).
pub fn load_config() -> Result<SceneConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path
///
/// # Arguments
///
/// * `path` - Optional path to the configuration file. If `None`, only defaults
///   and environment variables are used.
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<SceneConfig, ConfigError> {
    let mut config = SceneConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_config = read_toml(config_path)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config);

    Ok(config)
}

fn read_toml(path: &Path) -> Result<SceneToml, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut SceneConfig, toml: &SceneToml) {
    if let Some(width) = toml.stage.width {
        config.stage.width = width;
    }
    if let Some(height) = toml.stage.height {
        config.stage.height = height;
    }
    if let Some(ms) = toml.stage.tick_ms {
        config.tick = Duration::from_millis(ms);
    }
    if let Some(enabled) = toml.sound.enabled {
        config.sound_enabled = enabled;
    }
    if toml.logging.file.is_some() {
        config.log_file = toml.logging.file.clone();
    }
}

/// Apply environment variable overrides to the config
fn apply_env_config(config: &mut SceneConfig) {
    apply_env_vars(config, |key| std::env::var(key).ok());
}

/// Apply overrides from any variable lookup; unparseable values are ignored
fn apply_env_vars(config: &mut SceneConfig, var: impl Fn(&str) -> Option<String>) {
    if let Some(ms) = var("CODETALK_TICK_MS").and_then(|v| v.parse::<u64>().ok()) {
        config.tick = Duration::from_millis(ms);
        config.source = ConfigSource::Env;
    }
    if let Some(width) = var("CODETALK_WIDTH").and_then(|v| v.parse::<i32>().ok()) {
        config.stage.width = width;
        config.source = ConfigSource::Env;
    }
    if let Some(height) = var("CODETALK_HEIGHT").and_then(|v| v.parse::<i32>().ok()) {
        config.stage.height = height;
        config.source = ConfigSource::Env;
    }
    if let Some(enabled) = var("CODETALK_SOUND") {
        config.sound_enabled = enabled != "0" && enabled.to_lowercase() != "false";
        config.source = ConfigSource::Env;
    }
    if let Some(path) = var("CODETALK_LOG_FILE") {
        config.log_file = Some(PathBuf::from(path));
        config.source = ConfigSource::Env;
    }
}

// =============================================================================
// CLI Override Support
// =============================================================================

/// Builder for applying CLI overrides to configuration
///
/// Use this after [`load_config`] to apply command-line argument overrides.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Tick period override (milliseconds)
    pub tick_ms: Option<u64>,

    /// Sound override
    pub sound_enabled: Option<bool>,

    /// Log file override
    pub log_file: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Create a new empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set tick period override
    #[must_use]
    pub fn with_tick_ms(mut self, ms: u64) -> Self {
        self.tick_ms = Some(ms);
        self
    }

    /// Set sound override
    #[must_use]
    pub fn with_sound_enabled(mut self, enabled: bool) -> Self {
        self.sound_enabled = Some(enabled);
        self
    }

    /// Set log file override
    #[must_use]
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    /// Apply overrides to a configuration
    pub fn apply(&self, config: &mut SceneConfig) {
        if self.tick_ms.is_some() || self.sound_enabled.is_some() || self.log_file.is_some() {
            config.source = ConfigSource::Cli;
        }

        if let Some(ms) = self.tick_ms {
            config.tick = Duration::from_millis(ms);
        }
        if let Some(enabled) = self.sound_enabled {
            config.sound_enabled = enabled;
        }
        if let Some(ref path) = self.log_file {
            config.log_file = Some(path.clone());
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn temp_toml(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = SceneConfig::default();
        assert_eq!(config.stage, Stage::new(79, 20));
        assert_eq!(config.tick, Duration::from_millis(100));
        assert!(config.sound_enabled);
        assert_eq!(config.log_file, None);
        assert_eq!(config.source(), ConfigSource::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_path() {
        if let Some(p) = default_config_path() {
            assert!(p.ends_with("codetalk/config.toml"));
        }
    }

    #[test]
    fn test_parse_valid_toml() {
        let toml_content = r#"
[stage]
width = 100
height = 30
tick_ms = 50

[sound]
enabled = false

[logging]
file = "/tmp/codetalk-test.log"
"#;
        let parsed: SceneToml = toml::from_str(toml_content).unwrap();
        let mut config = SceneConfig::default();
        apply_toml_config(&mut config, &parsed);

        assert_eq!(config.stage, Stage::new(100, 30));
        assert_eq!(config.tick, Duration::from_millis(50));
        assert!(!config.sound_enabled);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/codetalk-test.log")));
    }

    #[test]
    fn test_parse_partial_toml() {
        let parsed: SceneToml = toml::from_str("[stage]\ntick_ms = 250\n").unwrap();
        let mut config = SceneConfig::default();
        apply_toml_config(&mut config, &parsed);

        assert_eq!(config.tick, Duration::from_millis(250));
        assert_eq!(config.stage, Stage::default());
        assert!(config.sound_enabled);
    }

    #[test]
    fn test_load_from_file() {
        let file = temp_toml("[stage]\nwidth = 90\n");
        let config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();

        // CODETALK_WIDTH in the environment would win over the file
        if std::env::var("CODETALK_WIDTH").is_err() {
            assert_eq!(config.stage.width, 90);
        }
        assert_eq!(config.config_file_path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_missing_file_graceful() {
        let path = PathBuf::from("/nonexistent/path/codetalk.toml");
        let config = load_config_from_path(Some(path)).unwrap();
        assert_eq!(config.config_file_path, None);
        assert!(
            config.source() == ConfigSource::Default || config.source() == ConfigSource::Env,
            "Expected Default or Env source, got: {:?}",
            config.source()
        );
    }

    #[test]
    fn test_malformed_toml_error() {
        let file = temp_toml("[stage\ntick_ms = \"fast\"\n");
        let result = load_config_from_path(Some(file.path().to_path_buf()));
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_env_overrides_file() {
        let parsed: SceneToml = toml::from_str("[stage]\ntick_ms = 250\nwidth = 90\n").unwrap();
        let mut config = SceneConfig::default();
        apply_toml_config(&mut config, &parsed);
        config.set_source(ConfigSource::File);

        apply_env_vars(
            &mut config,
            vars(&[("CODETALK_TICK_MS", "40"), ("CODETALK_SOUND", "false")]),
        );

        assert_eq!(config.tick, Duration::from_millis(40));
        assert_eq!(config.stage.width, 90);
        assert!(!config.sound_enabled);
        assert_eq!(config.source(), ConfigSource::Env);
    }

    #[test]
    fn test_env_ignores_garbage() {
        let mut config = SceneConfig::default();
        apply_env_vars(&mut config, vars(&[("CODETALK_WIDTH", "wide")]));
        assert_eq!(config.stage.width, 79);
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_env_sound_values() {
        for (value, expected) in [("0", false), ("FALSE", false), ("1", true), ("yes", true)] {
            let mut config = SceneConfig::default();
            apply_env_vars(&mut config, vars(&[("CODETALK_SOUND", value)]));
            assert_eq!(config.sound_enabled, expected, "CODETALK_SOUND={value}");
        }
    }

    #[test]
    fn test_cli_overrides_env() {
        let mut config = SceneConfig::default();
        apply_env_vars(&mut config, vars(&[("CODETALK_TICK_MS", "40")]));

        ConfigOverrides::new()
            .with_tick_ms(10)
            .with_sound_enabled(false)
            .apply(&mut config);

        assert_eq!(config.tick, Duration::from_millis(10));
        assert!(!config.sound_enabled);
        assert_eq!(config.source(), ConfigSource::Cli);
    }

    #[test]
    fn test_config_overrides_empty_no_change() {
        let mut config = SceneConfig::default();
        ConfigOverrides::new().apply(&mut config);
        assert_eq!(config.source(), ConfigSource::Default);
        assert_eq!(config.tick, Duration::from_millis(100));
    }

    #[test]
    fn test_validation() {
        let mut config = SceneConfig::default();
        config.tick = Duration::ZERO;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

        let mut config = SceneConfig::default();
        config.stage = Stage::new(19, 20);
        assert!(config.validate().is_err());

        config.stage = MIN_STAGE;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_source_display() {
        assert_eq!(ConfigSource::Cli.to_string(), "CLI");
        assert_eq!(ConfigSource::Env.to_string(), "environment");
        assert_eq!(ConfigSource::File.to_string(), "config file");
        assert_eq!(ConfigSource::Default.to_string(), "default");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::ValidationError("tick_ms must be greater than 0".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: tick_ms must be greater than 0"
        );
    }
}
