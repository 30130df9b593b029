//! Configuration.
//! Provides configuration types, default paths, XML loading, and validation.
//!
//! Precedence (lowest to highest): built-in defaults, XML config file, CLI flags.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{config_path, config_path_from, default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{create_template_config, load_config, load_config_from_xml_path};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CREATEFILE_CONFIG";
/// Name used when none is given on the command line.
pub const DEFAULT_NAME: &str = "untitled.txt";
/// Directory new files are created in.
pub const DIRECTORY_DEFAULT: &str = ".";
