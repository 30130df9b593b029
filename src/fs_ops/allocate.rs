//! Unique-name allocation.
//!
//! Policy:
//! - The desired name is used as-is when it is free.
//! - Otherwise probe "stem(1)ext", "stem(2)ext", ... in order up to `max_attempts`.
//! - Each candidate is probed at most once; the name is split only once per call.
//!
//! Notes:
//! - This only decides the name from the current store state. Creating the file is a
//!   separate step (see `create_unique`), so another process may take the name in between.

use tracing::{debug, trace, warn};

use crate::config::Config;
use crate::errors::CreateFileError;
use crate::naming::{DotfilePolicy, generate, split_name};

/// Default number of numbered variants tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 999;
/// Default name length limit in bytes (typical POSIX NAME_MAX).
pub const DEFAULT_MAX_NAME_LEN: usize = 255;

/// Stateless allocator: all knobs are fixed at construction, every call is independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocator {
    max_attempts: u32,
    max_name_len: usize,
    dotfiles: DotfilePolicy,
}

impl Default for Allocator {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_name_len: DEFAULT_MAX_NAME_LEN,
            dotfiles: DotfilePolicy::default(),
        }
    }
}

impl Allocator {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Default::default()
        }
    }

    pub fn with_max_name_len(mut self, max_name_len: usize) -> Self {
        self.max_name_len = max_name_len;
        self
    }

    pub fn with_dotfile_policy(mut self, policy: DotfilePolicy) -> Self {
        self.dotfiles = policy;
        self
    }

    /// Build an allocator from the naming knobs in `cfg`.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.max_attempts)
            .with_max_name_len(cfg.max_name_len)
            .with_dotfile_policy(cfg.dotfile_policy)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }

    pub fn dotfile_policy(&self) -> DotfilePolicy {
        self.dotfiles
    }

    /// Return the first name not reported by `exists`: `desired` itself, then its numbered variants.
    ///
    /// Errors:
    /// - `InvalidName` if `desired` is empty or contains NUL
    /// - `NameTooLong` if `desired` or a generated candidate exceeds `max_name_len`
    /// - `Exhausted` if `desired` and all `max_attempts` variants are taken
    pub fn allocate<F>(&self, desired: &str, mut exists: F) -> Result<String, CreateFileError>
    where
        F: FnMut(&str) -> bool,
    {
        check_name(desired)?;
        self.check_len(desired)?;

        if !exists(desired) {
            debug!(name = desired, "desired name is free");
            return Ok(desired.to_owned());
        }

        let parsed = split_name(desired, self.dotfiles);
        for n in 1..=self.max_attempts {
            let candidate = generate(&parsed, n);
            self.check_len(&candidate)?;
            if !exists(&candidate) {
                debug!(desired, name = %candidate, attempt = n, "picked numbered name");
                return Ok(candidate);
            }
            if n == 3 {
                trace!(desired, "allocate: experiencing multiple collisions, continuing to search");
            }
        }

        warn!(desired, attempts = self.max_attempts, "no free numbered name left");
        Err(CreateFileError::Exhausted {
            desired: desired.to_owned(),
            attempts: self.max_attempts,
        })
    }

    fn check_len(&self, name: &str) -> Result<(), CreateFileError> {
        if name.len() > self.max_name_len {
            return Err(CreateFileError::NameTooLong {
                name: name.to_owned(),
                len: name.len(),
                max: self.max_name_len,
            });
        }
        Ok(())
    }
}

fn check_name(name: &str) -> Result<(), CreateFileError> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.contains('\0') {
        "name contains a NUL byte"
    } else {
        return Ok(());
    };
    Err(CreateFileError::InvalidName {
        name: name.to_owned(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn taken(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn free_desired_name_is_probed_once() {
        let mut probes = Vec::new();
        let name = Allocator::default()
            .allocate("untitled.txt", |n| {
                probes.push(n.to_owned());
                false
            })
            .unwrap();
        assert_eq!(name, "untitled.txt");
        assert_eq!(probes, ["untitled.txt"]);
    }

    #[test]
    fn probes_are_monotonic_and_unique() {
        let set = taken(&["a.txt", "a(1).txt", "a(2).txt", "a(3).txt"]);
        let mut probes = Vec::new();
        let name = Allocator::default()
            .allocate("a.txt", |n| {
                probes.push(n.to_owned());
                set.contains(n)
            })
            .unwrap();
        assert_eq!(name, "a(4).txt");
        assert_eq!(probes, ["a.txt", "a(1).txt", "a(2).txt", "a(3).txt", "a(4).txt"]);
    }

    #[test]
    fn gaps_are_not_filled_beyond_the_first_free_slot() {
        // a(1) is free even though a(2) is taken: linear probing stops at 1.
        let set = taken(&["a", "a(2)"]);
        let name = Allocator::default().allocate("a", |n| set.contains(n)).unwrap();
        assert_eq!(name, "a(1)");
    }

    #[test]
    fn exhaustion_probes_exactly_max_attempts_candidates() {
        let mut calls = 0u32;
        let err = Allocator::new(25)
            .allocate("x", |_| {
                calls += 1;
                true
            })
            .unwrap_err();
        // one probe for the desired name plus one per candidate
        assert_eq!(calls, 26);
        match err {
            CreateFileError::Exhausted { desired, attempts } => {
                assert_eq!(desired, "x");
                assert_eq!(attempts, 25);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn zero_attempts_fails_on_first_collision() {
        let err = Allocator::new(0).allocate("x", |_| true).unwrap_err();
        assert!(matches!(err, CreateFileError::Exhausted { attempts: 0, .. }));
    }

    #[test]
    fn empty_and_nul_names_are_rejected_before_probing() {
        let mut probed = false;
        let err = Allocator::default()
            .allocate("", |_| {
                probed = true;
                false
            })
            .unwrap_err();
        assert!(matches!(err, CreateFileError::InvalidName { .. }));
        let err = Allocator::default().allocate("a\0b", |_| false).unwrap_err();
        assert!(matches!(err, CreateFileError::InvalidName { .. }));
        assert!(!probed);
    }

    #[test]
    fn overlong_desired_name_is_rejected() {
        let err = Allocator::default()
            .with_max_name_len(8)
            .allocate("123456789", |_| false)
            .unwrap_err();
        assert!(matches!(
            err,
            CreateFileError::NameTooLong { len: 9, max: 8, .. }
        ));
    }

    #[test]
    fn candidate_overflowing_limit_is_reported() {
        // "abcd.txt" fits in 8 bytes but "abcd(1).txt" does not.
        let err = Allocator::default()
            .with_max_name_len(8)
            .allocate("abcd.txt", |_| true)
            .unwrap_err();
        match err {
            CreateFileError::NameTooLong { name, len, max } => {
                assert_eq!(name, "abcd(1).txt");
                assert_eq!(len, 11);
                assert_eq!(max, 8);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn dotfile_policy_is_applied() {
        let set = taken(&[".env"]);
        let hidden = Allocator::default().allocate(".env", |n| set.contains(n)).unwrap();
        assert_eq!(hidden, ".env(1)");
        let literal = Allocator::default()
            .with_dotfile_policy(DotfilePolicy::LastDot)
            .allocate(".env", |n| set.contains(n))
            .unwrap();
        assert_eq!(literal, "(1).env");
    }

    #[test]
    fn from_config_copies_naming_knobs() {
        let cfg = Config {
            max_attempts: 7,
            max_name_len: 40,
            dotfile_policy: DotfilePolicy::LastDot,
            ..Config::default()
        };
        let a = Allocator::from_config(&cfg);
        assert_eq!(a.max_attempts(), 7);
        assert_eq!(a.max_name_len(), 40);
        assert_eq!(a.dotfile_policy(), DotfilePolicy::LastDot);
    }
}
