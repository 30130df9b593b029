//! Unique hidden sibling names for atomic write-then-rename.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Pattern: .createfile.config.tmp.<pid>.<nanos>.<seq>
pub(super) fn tmp_config_sibling_name(target: &Path) -> PathBuf {
    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    let name = format!(".createfile.config.tmp.{pid}.{nanos}.{seq}");
    target.parent().unwrap_or_else(|| Path::new(".")).join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sibling_names_are_unique_and_hidden() {
        let target = Path::new("/etc/createfile/config.xml");
        let names: HashSet<PathBuf> = (0..64).map(|_| tmp_config_sibling_name(target)).collect();
        assert_eq!(names.len(), 64);
        for n in &names {
            assert_eq!(n.parent(), target.parent());
            let fname = n.file_name().unwrap().to_string_lossy();
            assert!(fname.starts_with(".createfile.config.tmp."));
        }
    }
}
