use createfile::config::types::LogLevel;
use std::str::FromStr;

#[test]
fn parse_common_levels_case_insensitive() {
    let cases = [
        ("quiet", LogLevel::Quiet),
        ("ERROR", LogLevel::Quiet),
        ("none", LogLevel::Quiet),
        ("Normal", LogLevel::Normal),
        ("info", LogLevel::Info),
        ("VERBOSE", LogLevel::Info),
        ("detailed", LogLevel::Info),
        ("debug", LogLevel::Debug),
        ("Trace", LogLevel::Debug),
    ];
    for (s, want) in cases {
        assert_eq!(LogLevel::parse(s), Some(want), "parsing {s}");
    }
}

#[test]
fn display_roundtrips_with_fromstr() {
    for lvl in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Info, LogLevel::Debug] {
        let s = lvl.to_string();
        assert_eq!(LogLevel::from_str(&s), Ok(lvl), "roundtrip failed for {s}");
    }
}

#[test]
fn fromstr_invalid_is_err() {
    assert!(LogLevel::from_str("loud").is_err());
    assert!(LogLevel::from_str("").is_err());
}
