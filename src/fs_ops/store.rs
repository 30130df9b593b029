//! Name stores: where names are checked and files are created.
//! - `NameStore` is the seam between the allocator and the filesystem.
//! - `DirStore` is the real implementation, rooted at one directory.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::allocate::Allocator;
use super::helpers::io_error_with_help_io;
use crate::errors::CreateFileError;
use crate::platform::create_new_file;
use crate::shutdown;

/// Existence check plus create primitive for a flat namespace of file names.
pub trait NameStore {
    /// What a successful `create` hands back (an open file for `DirStore`).
    type Handle;

    /// True if an entry with exactly this name is present.
    fn exists(&self, name: &str) -> bool;

    /// Create a new entry. Must fail (not overwrite) if the name is already taken.
    fn create(&self, name: &str) -> io::Result<Self::Handle>;
}

/// Files inside a single directory. Names are joined verbatim onto the directory.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl NameStore for DirStore {
    type Handle = File;

    /// Any directory entry counts, including directories and dangling symlinks.
    /// Lookup errors other than NotFound count as absent; `create` then reports the real cause.
    fn exists(&self, name: &str) -> bool {
        let path = self.path_of(name);
        match fs::symlink_metadata(&path) {
            Ok(_) => true,
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "lookup failed; treating name as free");
                false
            }
        }
    }

    /// Atomic create-if-absent (`O_CREAT | O_EXCL`).
    fn create(&self, name: &str) -> io::Result<File> {
        let path = self.path_of(name);
        create_new_file(&path).map_err(io_error_with_help_io("create", &path))
    }
}

/// Result of a successful `create_unique`.
#[derive(Debug)]
pub struct Created<H> {
    /// The name actually created.
    pub name: String,
    /// Handle returned by the store.
    pub handle: H,
}

impl<H> Created<H> {
    /// True when the desired name was taken and a numbered variant was used.
    pub fn renamed_from(&self, desired: &str) -> bool {
        self.name != desired
    }
}

/// Allocate a free name in `store` and create it.
///
/// The create step is never retried: if a concurrent creator wins the race for the chosen
/// name, the store's create-if-absent fails and that surfaces as `CreateFailed`.
pub fn create_unique<S: NameStore>(
    store: &S,
    allocator: &Allocator,
    desired: &str,
) -> Result<Created<S::Handle>, CreateFileError> {
    let name = allocator.allocate(desired, |n| store.exists(n))?;

    if shutdown::is_requested() {
        return Err(CreateFileError::Interrupted);
    }

    let handle = store
        .create(&name)
        .map_err(|source| CreateFileError::CreateFailed {
            name: name.clone(),
            source,
        })?;
    debug!(desired, name = %name, "created");
    Ok(Created { name, handle })
}
