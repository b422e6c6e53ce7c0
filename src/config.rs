//! Configuration module for `Nissaga`

use crate::core::locale::Locale;
use crate::core::render::RenderOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder for the configuration directory inside config values
const DIR_VARIABLE: &str = "$NISSAGA";

/// Locale setting that defers to the names in each document
const AUTO_LOCALE: &str = "auto";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Rendering configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Label locale: "auto", "en" or "ja"
    #[serde(default)]
    pub locale: String,
    /// Directory that picture filenames are resolved against
    #[serde(default)]
    pub pics_dir: String,
}

impl RenderConfig {
    /// Explicit locale, or `None` when it should be derived from each document
    ///
    /// # Errors
    /// Returns an error if the configured locale is not recognized
    pub fn locale(&self) -> Result<Option<Locale>, String> {
        let value = self.locale.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(AUTO_LOCALE) {
            Ok(None)
        } else {
            value.parse().map(Some)
        }
    }

    /// Render options described by this configuration
    ///
    /// # Errors
    /// Returns an error if the configured locale is not recognized
    pub fn to_options(&self) -> Result<RenderOptions, String> {
        Ok(RenderOptions {
            locale: self.locale()?,
            pics_dir: self.pics_dir.clone(),
        })
    }
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for generated `.dot` files
    #[serde(default)]
    pub out_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Render settings
    #[serde(default)]
    pub render: RenderConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override label locale
    pub locale: Option<String>,
    /// Override pictures directory
    pub pics_dir: Option<String>,
    /// Override output directory
    pub out_dir: Option<String>,
}

impl Config {
    /// Get the `$NISSAGA` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/nissaga`
    /// - macOS: `~/Library/Application Support/nissaga`
    /// - Windows: `%APPDATA%\nissaga`
    #[must_use]
    pub fn get_nissaga_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nissaga")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are filled,
    /// so settings added in newer versions reach older config files.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;
        for (field, default) in [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.render.locale, &defaults.render.locale),
            (&mut self.render.pics_dir, &defaults.render.pics_dir),
            (&mut self.paths.out_dir, &defaults.paths.out_dir),
        ] {
            if field.is_empty() && !default.is_empty() {
                field.clone_from(default);
                changed = true;
            }
        }
        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides only affect this run; the config file is left untouched.
    /// Only non-`None` values replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(locale) = &overrides.locale {
            self.render.locale.clone_from(locale);
        }
        if let Some(pics_dir) = &overrides.pics_dir {
            self.render.pics_dir.clone_from(pics_dir);
        }

        if let Some(out_dir) = &overrides.out_dir {
            self.paths.out_dir.clone_from(out_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_nissaga_dir`](Self::get_nissaga_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_nissaga_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$NISSAGA` in a string to the configuration directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let nissaga_dir = Self::get_nissaga_dir();
            value.replace(DIR_VARIABLE, nissaga_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults (empty strings or false).
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.render.pics_dir = Self::expand_variables(&config.render.pics_dir);
        config.paths.out_dir = Self::expand_variables(&config.paths.out_dir);

        Ok(config)
    }

    /// Initialize config from the compiled-in defaults
    ///
    /// # Panics
    /// Panics if the compiled-in defaults TOML cannot be parsed
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load config from user config file, creating it from defaults on first run
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            // First run: write the defaults so the user has a file to edit
            let _ = defaults.save();
            return defaults;
        }

        if let Ok(content) = fs::read_to_string(&config_file) {
            if let Ok(mut config) = Self::from_toml(&content) {
                if config.merge_defaults(&defaults) {
                    let _ = config.save();
                }
                return config;
            }
        }

        defaults
    }

    /// Save config to user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be saved
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "locale" => Some(self.render.locale.clone()),
            "pics_dir" | "pics-dir" => Some(self.render.pics_dir.clone()),
            "out_dir" | "out-dir" => Some(self.paths.out_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "locale" => {
                if !value.eq_ignore_ascii_case(AUTO_LOCALE) {
                    value
                        .parse::<Locale>()
                        .map_err(|e| format!("{e} (use auto, en or ja)"))?;
                }
                self.render.locale = value.to_lowercase();
            }
            "pics_dir" | "pics-dir" => self.render.pics_dir = value.to_string(),
            "out_dir" | "out-dir" => self.paths.out_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "locale" => self.render.locale.clone_from(&defaults.render.locale),
            "pics_dir" | "pics-dir" => self
                .render
                .pics_dir
                .clone_from(&defaults.render.pics_dir),
            "out_dir" | "out-dir" => self.paths.out_dir.clone_from(&defaults.paths.out_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by removing the config file
    ///
    /// # Errors
    /// Returns an error if the config file cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[render]")?;
        writeln!(f, "  locale = \"{}\"", self.render.locale)?;
        writeln!(f, "  pics_dir = \"{}\"", self.render.pics_dir)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  out_dir = \"{}\"", self.paths.out_dir)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_locale_auto() {
        let mut render = RenderConfig::default();
        assert_eq!(render.locale(), Ok(None));

        render.locale = "AUTO".to_string();
        assert_eq!(render.locale(), Ok(None));

        render.locale = "ja".to_string();
        assert_eq!(render.locale(), Ok(Some(Locale::Cjk)));

        render.locale = "klingon".to_string();
        assert!(render.locale().is_err());
    }

    #[test]
    fn test_to_options() {
        let render = RenderConfig {
            locale: "en".to_string(),
            pics_dir: "photos".to_string(),
        };
        let options = render.to_options().unwrap();
        assert_eq!(options.locale, Some(Locale::Latin));
        assert_eq!(options.pics_dir, "photos");
    }

    #[test]
    fn test_expand_variables() {
        let expanded = Config::expand_variables("$NISSAGA/pics");
        assert!(!expanded.contains(DIR_VARIABLE));
        assert!(expanded.ends_with("pics"));
        assert_eq!(Config::expand_variables("plain"), "plain");
    }
}
