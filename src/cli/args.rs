//! CLI argument definitions for `gradecalc`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gradecalc::config::ConfigOverrides;
use gradecalc::logger::Level;

/// CLI log level argument
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
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key (`level`, `file`, `verbose`, `reports_dir`, `format`)
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

/// Options shared by the commands that can export a result file
#[derive(Debug, clap::Args)]
pub struct ExportArgs {
    /// Write the result to a file (defaults to `<reports_dir>/<METRIC>_Result_<date>.<ext>`)
    #[arg(short, long, value_name = "FILE", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,

    /// Export format: text (txt) or markdown (md); falls back to config `format`
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,
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
    /// Calculate SGPA from subject credits and grades.
    ///
    /// Subjects come from a CSV file (`name,credit,grade`) and/or repeated
    /// `--subject NAME:CREDIT:GRADE` values.
    Sgpa {
        /// Subjects CSV file
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,

        /// Subject as NAME:CREDIT:GRADE (NAME may be empty)
        #[arg(short, long = "subject", value_name = "NAME:CREDIT:GRADE")]
        subjects: Vec<String>,

        #[command(flatten)]
        export: ExportArgs,
    },
    /// Calculate CGPA from semester SGPAs and credits.
    ///
    /// Semesters come from a CSV file (`name,sgpa,credits`) and/or repeated
    /// `--semester NAME:SGPA:CREDITS` values.
    Cgpa {
        /// Semesters CSV file
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,

        /// Semester as NAME:SGPA:CREDITS (NAME may be empty)
        #[arg(short, long = "semester", value_name = "NAME:SGPA:CREDITS")]
        semesters: Vec<String>,

        #[command(flatten)]
        export: ExportArgs,
    },
    /// Predict the SGPA needed next semester to reach a target CGPA.
    Predict {
        /// Current CGPA
        #[arg(long, value_name = "CGPA")]
        current: f64,

        /// Credits earned so far
        #[arg(long, value_name = "CREDITS")]
        earned: f64,

        /// Target CGPA
        #[arg(long, value_name = "CGPA")]
        target: f64,

        /// Credits planned for next semester
        #[arg(long, value_name = "CREDITS")]
        next: f64,
    },
    /// Show the grade point reference table.
    Grades,
}

#[derive(Parser, Debug)]
#[command(
    name = "gradecalc",
    about = "SGPA / CGPA calculator and CGPA predictor",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--reports-dir`) take precedence over long-form
    /// flags (e.g., `--config-reports-dir`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            reports_dir: self
                .reports_dir
                .as_ref()
                .or(self.config_reports_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
            format: None,
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
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_reports_dir: None,
            reports_dir: None,
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
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli(Command::Grades).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let mut cli = bare_cli(Command::Grades);
        cli.config_level = Some(LogLevelArg::Info);
        cli.config_reports_dir = Some(PathBuf::from("/long/out"));
        cli.reports_dir = Some(PathBuf::from("/short/out"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("info".to_string()));
        assert_eq!(overrides.reports_dir, Some("/short/out".to_string()));
    }

    #[test]
    fn test_parse_sgpa_command() {
        let cli = Cli::parse_from([
            "gradecalc",
            "sgpa",
            "-s",
            "Maths:4:A",
            "--subject",
            ":3:B+",
            "--export",
            "--format",
            "md",
        ]);
        match cli.command {
            Command::Sgpa {
                input_file,
                subjects,
                export,
            } => {
                assert!(input_file.is_none());
                assert_eq!(subjects, vec!["Maths:4:A", ":3:B+"]);
                assert_eq!(export.export, Some(None));
                assert_eq!(export.format.as_deref(), Some("md"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_predict_command() {
        let cli = Cli::parse_from([
            "gradecalc",
            "predict",
            "--current",
            "7.5",
            "--earned",
            "100",
            "--target",
            "8",
            "--next",
            "25",
        ]);
        assert!(matches!(
            cli.command,
            Command::Predict { current, next, .. } if (current - 7.5).abs() < f64::EPSILON && (next - 25.0).abs() < f64::EPSILON
        ));
    }
}
