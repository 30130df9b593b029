//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes a commented template on request (`--init-config`).
//!
//! Notes:
//! - A missing config file means defaults; a malformed one is an error.
//! - Unknown elements are rejected to surface typos early.
//! - Values are whitespace-trimmed; empty elements count as unset.

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

use super::paths::{default_log_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};
use super::{DEFAULT_NAME, DIRECTORY_DEFAULT};
use crate::fs_ops::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_NAME_LEN};
use crate::naming::DotfilePolicy;
use crate::platform::{set_dir_mode_0700, set_file_mode_0600, write_config_secure_new_0600};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(default, deserialize_with = "de_trimmed_opt")]
    directory: Option<String>,
    #[serde(default, deserialize_with = "de_trimmed_opt")]
    default_name: Option<String>,
    #[serde(default, deserialize_with = "de_parsed_opt")]
    max_attempts: Option<u32>,
    #[serde(default, deserialize_with = "de_parsed_opt")]
    max_name_len: Option<usize>,
    #[serde(default, deserialize_with = "de_parsed_opt")]
    dotfile_policy: Option<DotfilePolicy>,
    #[serde(default, deserialize_with = "de_parsed_opt")]
    log_level: Option<LogLevel>,
    #[serde(default, deserialize_with = "de_trimmed_opt")]
    log_file: Option<String>,
}

// Trim surrounding whitespace; empty -> None.
fn de_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty()))
}

// Trim, then parse with FromStr; a present but unparseable value is an error.
fn de_parsed_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match de_trimmed_opt(deserializer)? {
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

impl XmlConfig {
    /// Overlay the values present in the file onto `cfg`.
    fn apply_to(self, cfg: &mut Config) {
        if let Some(d) = self.directory {
            cfg.directory = PathBuf::from(d);
        }
        if let Some(n) = self.default_name {
            cfg.default_name = n;
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
        if let Some(l) = self.log_level {
            cfg.log_level = l;
        }
        if let Some(f) = self.log_file {
            cfg.log_file = Some(PathBuf::from(f));
        }
    }
}

/// Load a Config from a specific XML file path; unset fields keep their defaults.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    let mut cfg = Config::default();
    parsed.apply_to(&mut cfg);
    Ok(cfg)
}

/// Load the config at `path` if it exists; defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) if p.exists() => {
            debug!(path = %p.display(), "loading config");
            load_config_from_xml_path(p)
        }
        Some(p) => {
            debug!(path = %p.display(), "no config file; using defaults");
            Ok(Config::default())
        }
        None => Ok(Config::default()),
    }
}

fn template() -> String {
    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "/path/to/createfile.log".into());
    format!(
        "<!--\n  createfile configuration (XML)\n\n  Fields (all optional):\n    directory       -> directory new files are created in\n    default_name    -> name used when none is given on the command line\n    max_attempts    -> numbered variants name(1)..name(N) tried before giving up\n    max_name_len    -> longest allowed file name, in bytes\n    dotfile_policy  -> hidden-stem (.env -> .env(1)) | last-dot (.env -> (1).env)\n    log_level       -> quiet | normal | info | debug\n    log_file        -> path to log file, e.g. {} (leave empty to log to stderr only)\n\n  CLI flags override these values.\n-->\n<config>\n  <directory>{}</directory>\n  <default_name>{}</default_name>\n  <max_attempts>{}</max_attempts>\n  <max_name_len>{}</max_name_len>\n  <dotfile_policy>{}</dotfile_policy>\n  <log_level>normal</log_level>\n  <log_file></log_file>\n</config>\n",
        suggested_log,
        DIRECTORY_DEFAULT,
        DEFAULT_NAME,
        DEFAULT_MAX_ATTEMPTS,
        DEFAULT_MAX_NAME_LEN,
        DotfilePolicy::default(),
    )
}

/// Create the commented template config at `path` (0600, parent 0700).
/// Refuses to overwrite an existing file or to write below a symlinked ancestor.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir '{}'", parent.display()))?;
        let _ = set_dir_mode_0700(parent);
    }

    write_config_secure_new_0600(path, template().as_bytes())?;
    let _ = set_file_mode_0600(path);

    info!("Created template config at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn template_parses_back_to_defaults() {
        let td = tempdir().unwrap();
        let base = fs::canonicalize(td.path()).unwrap();
        let path = base.join("cfg").join("config.xml");
        create_template_config(&path).unwrap();
        let cfg = load_config_from_xml_path(&path).unwrap();
        let def = Config::default();
        assert_eq!(cfg.directory, def.directory);
        assert_eq!(cfg.default_name, def.default_name);
        assert_eq!(cfg.max_attempts, def.max_attempts);
        assert_eq!(cfg.max_name_len, def.max_name_len);
        assert_eq!(cfg.dotfile_policy, def.dotfile_policy);
        assert_eq!(cfg.log_level, def.log_level);
        assert_eq!(cfg.log_file, None);
    }

    #[test]
    fn template_is_not_overwritten() {
        let td = tempdir().unwrap();
        let path = fs::canonicalize(td.path()).unwrap().join("config.xml");
        fs::write(&path, "<config/>").unwrap();
        assert!(create_template_config(&path).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "<config/>");
    }

    #[test]
    fn missing_file_means_defaults() {
        let td = tempdir().unwrap();
        let cfg = load_config(Some(&td.path().join("nope.xml"))).unwrap();
        assert_eq!(cfg.max_attempts, DEFAULT_MAX_ATTEMPTS);
        let cfg = load_config(None).unwrap();
        assert_eq!(cfg.default_name, DEFAULT_NAME);
    }
}
