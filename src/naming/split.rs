//! Stem/extension splitting.
//!
//! Policy:
//! - The last '.' is the separator: "archive.tar.gz" -> ("archive.tar", ".gz").
//! - No '.' -> the whole name is the stem and the extension is empty.
//! - A '.' at byte 0 depends on `DotfilePolicy` (see below).
//!
//! The extension keeps its dot, so `stem + extension` is always the original name.

use std::fmt;
use std::str::FromStr;

/// How a leading '.' (hidden files such as ".bashrc") is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DotfilePolicy {
    /// A dot at byte 0 is part of the stem: ".bashrc" -> (".bashrc", "").
    #[default]
    HiddenStem,
    /// The last dot wins even at byte 0: ".bashrc" -> ("", ".bashrc").
    LastDot,
}

impl DotfilePolicy {
    /// Parse policy names (case-insensitive, '-' or '_' accepted).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "hidden-stem" | "hidden" => Some(DotfilePolicy::HiddenStem),
            "last-dot" | "literal" => Some(DotfilePolicy::LastDot),
            _ => None,
        }
    }
}

impl fmt::Display for DotfilePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DotfilePolicy::HiddenStem => "hidden-stem",
            DotfilePolicy::LastDot => "last-dot",
        })
    }
}

impl FromStr for DotfilePolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid dotfile policy: '{s}' (expected hidden-stem or last-dot)"))
    }
}

/// A filename split into stem and extension, borrowing from the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedName<'a> {
    pub stem: &'a str,
    /// Empty, or starts with '.'.
    pub extension: &'a str,
}

impl ParsedName<'_> {
    pub fn has_extension(&self) -> bool {
        !self.extension.is_empty()
    }
}

impl fmt::Display for ParsedName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.extension)
    }
}

/// Split `name` at its extension separator.
pub fn split_name(name: &str, policy: DotfilePolicy) -> ParsedName<'_> {
    let dot = match policy {
        DotfilePolicy::LastDot => name.rfind('.'),
        DotfilePolicy::HiddenStem => name.rfind('.').filter(|&i| i > 0),
    };
    match dot {
        // '.' is ASCII, so `i` is a char boundary.
        Some(i) => ParsedName {
            stem: &name[..i],
            extension: &name[i..],
        },
        None => ParsedName {
            stem: name,
            extension: "",
        },
    }
}
