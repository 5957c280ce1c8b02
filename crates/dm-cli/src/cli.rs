//! CLI argument definitions for the DM builder.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use dm_cli::logging::{LogConfig, LogFormat};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "dm-builder",
    version,
    about = "Build the SDTM Demographics (DM) dataset from raw CSV extracts",
    long_about = "Build the SDTM Demographics (DM) dataset from raw CSV extracts.\n\n\
                  Joins a demographics file with drug exposure events, derives\n\
                  reference dates, age and planned arm, and reports data-quality\n\
                  diagnostics alongside the dataset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include subject identifiers and raw values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

impl Cli {
    /// Logging setup implied by the global flags.
    ///
    /// `--log-level` beats `-v/-q`; `RUST_LOG` only applies when neither is
    /// given. Colors follow `--color`, and `auto` disables them for log files
    /// and non-terminal stderr.
    pub fn log_config(&self) -> LogConfig {
        let explicit = self.log_level.map(LevelFilter::from);
        LogConfig {
            level_filter: explicit.unwrap_or_else(|| self.verbosity.tracing_level_filter()),
            use_env_filter: explicit.is_none() && !self.verbosity.is_present(),
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
            log_data: self.log_data,
            with_ansi: match self.color.color {
                ColorChoice::Always => true,
                ColorChoice::Never => false,
                ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
            },
            ..LogConfig::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the DM dataset from a demographics and an exposure CSV.
    Run(RunArgs),

    /// Write demo input files into a directory.
    Sample(SampleArgs),

    /// Print the DM column layout.
    Schema,
}

#[derive(Args)]
pub struct RunArgs {
    /// Demographics CSV (SUBJID, SEX, BRTHDTC).
    #[arg(value_name = "DEMOGRAPHICS_CSV")]
    pub demographics: PathBuf,

    /// Exposure CSV (SUBJID, EXSTDTC, EXTRT).
    #[arg(value_name = "EXPOSURE_CSV")]
    pub exposure: PathBuf,

    /// Output directory for generated files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormatArg,

    /// Build and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// TOML file with study_id, site_id and country.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Study identifier (overrides the config file).
    #[arg(long = "study-id")]
    pub study_id: Option<String>,

    /// Site identifier (overrides the config file).
    #[arg(long = "site-id")]
    pub site_id: Option<String>,

    /// Country code (overrides the config file).
    #[arg(long = "country")]
    pub country: Option<String>,
}

#[derive(Args)]
pub struct SampleArgs {
    /// Directory to write demographics.csv and exposure.csv into.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
    Both,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_level_disables_env_filter() {
        let cli = Cli::parse_from(["dm-builder", "--log-level", "debug", "schema"]);
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn default_flags_defer_to_env_filter() {
        let cli = Cli::parse_from(["dm-builder", "--log-format", "json", "--log-data", "schema"]);
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.log_data);
    }

    #[test]
    fn verbosity_flag_raises_level() {
        let cli = Cli::parse_from(["dm-builder", "-vv", "schema"]);
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
    }
}
