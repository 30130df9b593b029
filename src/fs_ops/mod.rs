//! Filesystem-facing operations: name allocation and file creation.

mod allocate;
mod helpers;
mod store;

pub use allocate::{Allocator, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_NAME_LEN};
pub use helpers::{io_error_with_help, io_error_with_help_io};
pub use store::{Created, DirStore, NameStore, create_unique};
