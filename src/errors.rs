//! Typed error definitions for createfile.
//! Provides a small set of well-known failure modes for better logs, exit codes and tests.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CreateFileError {
    /// The create call failed even though the chosen name looked free.
    /// The io error is available through `source()`.
    #[error("couldn't create file {name}")]
    CreateFailed {
        name: String,
        #[source]
        source: io::Error,
    },

    /// Every numbered variant up to the attempt limit is taken.
    #[error("too many files with similar names to {desired} ({attempts} numbered variants tried)")]
    Exhausted { desired: String, attempts: u32 },

    #[error("name {name:?} is {len} bytes, over the {max}-byte limit")]
    NameTooLong { name: String, len: usize, max: usize },

    #[error("invalid file name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl CreateFileError {
    /// Process exit status for this failure. Generic (untyped) failures exit with 1.
    pub fn code(&self) -> u8 {
        match self {
            CreateFileError::Exhausted { .. } => 3,
            CreateFileError::CreateFailed { .. } => 4,
            CreateFileError::NameTooLong { .. } => 5,
            CreateFileError::InvalidName { .. } => 6,
            CreateFileError::Interrupted => 130,
        }
    }

    /// Short machine-friendly tag used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            CreateFileError::Exhausted { .. } => "exhausted",
            CreateFileError::CreateFailed { .. } => "create_failed",
            CreateFileError::NameTooLong { .. } => "name_too_long",
            CreateFileError::InvalidName { .. } => "invalid_name",
            CreateFileError::Interrupted => "interrupted",
        }
    }

    /// The name the failure is about, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            CreateFileError::CreateFailed { name, .. }
            | CreateFileError::NameTooLong { name, .. }
            | CreateFileError::InvalidName { name, .. } => Some(name),
            CreateFileError::Exhausted { desired, .. } => Some(desired),
            CreateFileError::Interrupted => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_and_create_failed_are_distinct() {
        let ex = CreateFileError::Exhausted {
            desired: "x".into(),
            attempts: 999,
        };
        let cf = CreateFileError::CreateFailed {
            name: "x(1)".into(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_ne!(ex.code(), cf.code());
        assert_ne!(ex.kind(), cf.kind());
        assert!(ex.to_string().contains("too many files with similar names"));
        assert!(cf.to_string().contains("x(1)"));
    }

    #[test]
    fn codes_are_non_zero() {
        let all = [
            CreateFileError::Exhausted {
                desired: "a".into(),
                attempts: 1,
            },
            CreateFileError::CreateFailed {
                name: "a".into(),
                source: io::Error::from(io::ErrorKind::Other),
            },
            CreateFileError::NameTooLong {
                name: "a".into(),
                len: 2,
                max: 1,
            },
            CreateFileError::InvalidName {
                name: String::new(),
                reason: "name is empty",
            },
            CreateFileError::Interrupted,
        ];
        for e in &all {
            assert_ne!(e.code(), 0, "{e}");
        }
    }

    #[test]
    fn create_failed_keeps_io_source() {
        use std::error::Error as _;
        let e = CreateFileError::CreateFailed {
            name: "f".into(),
            source: io::Error::from(io::ErrorKind::AlreadyExists),
        };
        let src = e.source().and_then(|s| s.downcast_ref::<io::Error>());
        assert_eq!(src.map(|s| s.kind()), Some(io::ErrorKind::AlreadyExists));
        assert_eq!(e.name(), Some("f"));
    }
}
