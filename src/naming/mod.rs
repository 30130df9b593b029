//! Filename naming helpers.
//! Splits a name at its extension separator and builds numbered candidates from the parts.

mod candidate;
mod split;

pub use candidate::{decimal, generate};
pub use split::{DotfilePolicy, ParsedName, split_name};
