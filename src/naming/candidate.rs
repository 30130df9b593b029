//! Numbered candidate generation: "stem" + "(n)" + "extension".

use super::split::ParsedName;

/// Minimal decimal text for `n`: no leading zeros, a single '-' for negatives, "0" for zero.
pub fn decimal(n: i64) -> String {
    n.to_string()
}

/// Build the numbered candidate for `parsed`, e.g. ("file", ".txt", 42) -> "file(42).txt".
///
/// `n` is expected to be at least 1; the allocator never asks for 0.
pub fn generate(parsed: &ParsedName<'_>, n: u32) -> String {
    debug_assert!(n >= 1, "candidate numbers start at 1");
    let digits = decimal(i64::from(n));
    let mut out =
        String::with_capacity(parsed.stem.len() + digits.len() + 2 + parsed.extension.len());
    out.push_str(parsed.stem);
    out.push('(');
    out.push_str(&digits);
    out.push(')');
    out.push_str(parsed.extension);
    out
}
