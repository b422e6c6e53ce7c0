//! CLI argument definitions for `Nissaga`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use nissaga::config::ConfigOverrides;
use nissaga::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Label locale argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LocaleArg {
    /// Decide from the names in each document
    Auto,
    /// English: horizontal labels, "May 01, 2019" dates
    En,
    /// Japanese: vertical labels, era dates
    Ja,
}

impl std::fmt::Display for LocaleArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Auto => "auto",
            Self::En => "en",
            Self::Ja => "ja",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `locale`, `out_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Draw family trees as Graphviz documents.
    ///
    /// Load one or more YAML family trees and write a `.dot` file for each.
    Draw {
        /// Paths to family tree YAML files (supports multiple)
        #[arg(value_name = "FILES", num_args = 1..)]
        input_files: Vec<PathBuf>,

        /// Output file paths (optional; defaults to config `out_dir` when omitted)
        ///
        /// When provided, must match the number of input files 1:1.
        #[arg(short, long, value_name = "FILES", num_args = 1..)]
        output: Vec<PathBuf>,

        /// Print the generated documents to stdout instead of writing files
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "nissaga",
    about = "Genealogy trees from YAML to Graphviz",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug", global = true)]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Label locale for this run (auto|en|ja)
    #[arg(long, value_enum, global = true)]
    pub locale: Option<LocaleArg>,

    /// Directory that picture filenames are resolved against
    #[arg(long = "pics-dir", value_name = "DIR", global = true)]
    pub pics_dir: Option<PathBuf>,

    /// Directory for generated `.dot` files
    #[arg(long = "out-dir", value_name = "DIR", global = true)]
    pub out_dir: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` fields leave the loaded configuration untouched.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            locale: self.locale.map(|locale| locale.to_string()),
            pics_dir: self
                .pics_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            out_dir: self
                .out_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            locale: None,
            pics_dir: None,
            out_dir: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli(Command::Config { subcommand: None }).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.locale.is_none());
        assert!(overrides.pics_dir.is_none());
        assert!(overrides.out_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli(Command::Config { subcommand: None });
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.locale = Some(LocaleArg::Ja);
        cli.pics_dir = Some(PathBuf::from("photos"));
        cli.out_dir = Some(PathBuf::from("/output"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.locale, Some("ja".to_string()));
        assert_eq!(overrides.pics_dir, Some("photos".to_string()));
        assert_eq!(overrides.out_dir, Some("/output".to_string()));
    }

    #[test]
    fn test_parse_draw_command() {
        let cli = Cli::parse_from(["nissaga", "draw", "a.yaml", "b.yaml", "--locale", "en"]);
        assert_eq!(cli.locale, Some(LocaleArg::En));
        match cli.command {
            Command::Draw {
                input_files,
                output,
                stdout,
            } => {
                assert_eq!(input_files.len(), 2);
                assert!(output.is_empty());
                assert!(!stdout);
            }
            Command::Config { .. } => panic!("expected draw command"),
        }
    }
}
