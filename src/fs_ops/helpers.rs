//! I/O error helpers.
//!
//! Adapters that enrich io::Error with the operation, the path and an actionable hint,
//! usable with map_err in both io::Result and anyhow::Result code paths:
//!
//!   fs::read_dir(dir).map_err(io_error_with_help("read dir", dir))?;
//!   create_new_file(p).map_err(io_error_with_help_io("create", p))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

/// Hint keyed by raw OS error code.
#[cfg(unix)]
fn os_hint(code: i32) -> Option<&'static str> {
    let hint = match code {
        libc::EACCES | libc::EPERM => "permission denied; check ownership and write permissions",
        libc::ENOENT => "path not found; verify the directory exists",
        libc::ENOTDIR => "a path component is not a directory",
        libc::EISDIR => "a directory with that name already exists",
        libc::EEXIST => "already exists; another process may have created it first",
        libc::ENOSPC => "insufficient space on device",
        libc::EDQUOT => "disk quota exceeded",
        libc::EROFS => "read-only filesystem; cannot create files here",
        libc::ELOOP => "too many symbolic link levels; possible symlink cycle",
        libc::ENAMETOOLONG => "filename or path too long; use a shorter name",
        libc::EMFILE => "process file descriptor limit reached",
        libc::ENFILE => "system-wide file table overflow",
        _ => return None,
    };
    Some(hint)
}

#[cfg(windows)]
fn os_hint(code: i32) -> Option<&'static str> {
    let hint = match code {
        5 => "access denied; check permissions",                // ERROR_ACCESS_DENIED
        2 | 3 => "path not found; verify the directory exists", // FILE/PATH NOT FOUND
        80 | 183 => "already exists; another process may have created it first", // FILE_EXISTS / ALREADY_EXISTS
        112 => "insufficient disk space",                       // ERROR_DISK_FULL
        19 => "write protected / read-only media",              // ERROR_WRITE_PROTECT
        206 => "filename or path too long",                     // ERROR_FILENAME_EXCED_RANGE
        123 => "the name contains characters Windows does not allow", // ERROR_INVALID_NAME
        _ => return None,
    };
    Some(hint)
}

#[cfg(not(any(unix, windows)))]
fn os_hint(_code: i32) -> Option<&'static str> {
    None
}

fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found; verify the directory exists"),
        io::ErrorKind::AlreadyExists => Some("already exists; another process may have created it first"),
        io::ErrorKind::InvalidInput => Some("the name was rejected by the filesystem"),
        _ => None,
    }
}

/// "<op> '<path>': <error> (<hint>) [os code: N]"
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    let hint = match e.raw_os_error() {
        Some(code) => os_hint(code),
        None => kind_hint(e.kind()),
    };
    if let Some(h) = hint {
        msg.push_str(" (");
        msg.push_str(h);
        msg.push(')');
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {code}]"));
    }
    msg
}

/// Adapter for anyhow::Result code: io::Error -> anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}

/// Adapter for io::Result code: keeps the original ErrorKind, enriches the message.
pub fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), build_message(op, path, &e))
}
