//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - NAME is used verbatim; no quoting cleanup or path validation happens here.
//! - --debug is a shorthand for --log-level debug and wins over it.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};
use crate::naming::DotfilePolicy;

/// Create a file; if the name is taken, use name(1), name(2), ... instead.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Create a new file without clobbering: picks name(1), name(2), ... when the name is taken"
)]
pub struct Args {
    /// Desired file name (defaults to the configured default name, untitled.txt).
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Directory to create the file in (default: current directory).
    #[arg(
        short = 'C',
        long = "dir",
        value_name = "DIR",
        value_hint = ValueHint::DirPath,
        help = "Directory to create the file in"
    )]
    pub directory: Option<PathBuf>,

    /// How many numbered variants to try before giving up.
    #[arg(
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Numbered variants to try before giving up (default 999)"
    )]
    pub max_attempts: Option<u32>,

    /// Longest allowed file name in bytes.
    #[arg(long, value_name = "BYTES", help = "Longest allowed file name in bytes (default 255)")]
    pub max_name_len: Option<usize>,

    /// Treatment of a leading '.': hidden-stem (.env -> .env(1)) or last-dot (.env -> (1).env).
    #[arg(long, value_name = "POLICY", help = "Leading-dot policy: hidden-stem or last-dot")]
    pub dotfile_policy: Option<DotfilePolicy>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL", help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<LogLevel>,

    /// Also write logs to this file.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath, help = "Also write logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Dry-run: report the name that would be created, create nothing.
    #[arg(long, help = "Show which name would be created, but do not create it")]
    pub dry_run: bool,

    /// Print the config file location (or CREATEFILE_CONFIG if set), then exit.
    #[arg(long, help = "Print the config file location used by createfile and exit")]
    pub print_config: bool,

    /// Write a commented template config file, then exit.
    #[arg(long, help = "Write a template config file at the config location and exit")]
    pub init_config: bool,
}

impl Args {
    /// Name to create: NAME if given, else the configured default.
    pub fn desired_name(&self, cfg: &Config) -> String {
        self.name.clone().unwrap_or_else(|| cfg.default_name.clone())
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(dir) = &self.directory {
            cfg.directory = dir.clone();
        }
        if let Some(n) = self.max_attempts {
            cfg.max_attempts = n;
        }
        if let Some(n) = self.max_name_len {
            cfg.max_name_len = n;
        }
        if let Some(p) = self.dotfile_policy {
            cfg.dotfile_policy = p;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(f) = &self.log_file {
            cfg.log_file = Some(f.clone());
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
