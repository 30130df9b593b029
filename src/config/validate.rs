//! Config validation logic.
//! Checks the naming limits and that the target directory exists and is a directory.
//! Write permission is not probed here: the create step reports it, naming the file.

use anyhow::{Result, bail};
use std::path::Path;
use tracing::{error, info};

use super::types::Config;

impl Config {
    /// Validate limits and the target directory.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            bail!("max_attempts must be at least 1");
        }
        if self.max_name_len == 0 {
            bail!("max_name_len must be at least 1");
        }
        if self.default_name.is_empty() {
            bail!("default_name must not be empty");
        }

        let dir = &self.directory;
        ensure_dir_exists_and_is_dir(dir, "directory")?;

        let shown = dunce::canonicalize(dir).unwrap_or_else(|_| dir.clone());
        info!(
            "Config validated: directory='{}' max_attempts={} max_name_len={} dotfiles={} log_file='{}'",
            shown.display(),
            self.max_attempts,
            self.max_name_len,
            self.dotfile_policy,
            self.log_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<none>".into())
        );
        Ok(())
    }
}

/// Ensure path exists and is a directory; emit clear errors with path context.
fn ensure_dir_exists_and_is_dir(path: &Path, name: &str) -> Result<()> {
    if !path.exists() {
        error!("{name} does not exist: {}", path.display());
        bail!("{name} does not exist: {}", path.display());
    }
    if !path.is_dir() {
        error!("{name} is not a directory: {}", path.display());
        bail!("{name} is not a directory: {}", path.display());
    }
    Ok(())
}
