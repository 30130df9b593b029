//! Defaults <- XML <- CLI.

mod common;

use std::fs;

use common::{names_in, run_with_config, scratch, stdout};
use tempfile::tempdir;

fn write_cfg(path: &std::path::Path, directory: &std::path::Path) {
    let xml = format!(
        r#"<config>
  <directory>{}</directory>
  <default_name>draft.md</default_name>
  <max_attempts>1</max_attempts>
  <log_level>quiet</log_level>
</config>"#,
        directory.display()
    );
    fs::write(path, xml).unwrap();
}

#[test]
fn xml_values_apply_when_flags_absent() {
    let td = tempdir().unwrap();
    let base = scratch(&td);
    let target = base.join("drafts");
    fs::create_dir(&target).unwrap();
    let cfg = base.join("config.xml");
    write_cfg(&cfg, &target);

    let out = run_with_config(&base, &cfg, &[]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Created: draft.md"));
    let out = run_with_config(&base, &cfg, &[]);
    assert!(stdout(&out).contains("Created: draft(1).md"));
    assert_eq!(names_in(&target), ["draft(1).md", "draft.md"]);

    // max_attempts=1 from XML: the third run is exhausted
    let out = run_with_config(&base, &cfg, &[]);
    assert_eq!(out.status.code(), Some(3));
}

#[test]
fn flags_override_xml() {
    let td = tempdir().unwrap();
    let base = scratch(&td);
    let from_xml = base.join("from_xml");
    let from_cli = base.join("from_cli");
    fs::create_dir(&from_xml).unwrap();
    fs::create_dir(&from_cli).unwrap();
    let cfg = base.join("config.xml");
    write_cfg(&cfg, &from_xml);

    let out = run_with_config(&base, &cfg, &["--dir", from_cli.to_str().unwrap(), "--max-attempts", "5", "memo.txt"]);
    assert!(out.status.success());
    assert_eq!(names_in(&from_cli), ["memo.txt"]);
    assert!(names_in(&from_xml).is_empty());
}

#[test]
fn malformed_config_fails_before_creating() {
    let td = tempdir().unwrap();
    let base = scratch(&td);
    let cfg = base.join("config.xml");
    fs::write(&cfg, "<config><bogus>1</bogus></config>").unwrap();

    let out = run_with_config(&base, &cfg, &["x.txt"]);
    assert!(!out.status.success());
    assert!(!base.join("x.txt").exists());
}
