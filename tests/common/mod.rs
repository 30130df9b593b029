#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use assert_cmd::cargo;

/// Run the binary with `dir` as cwd and a config path that does not exist (defaults only).
pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    run_with_config(dir, &dir.join("absent-config.xml"), args)
}

pub fn run_with_config(dir: &Path, cfg: &Path, args: &[&str]) -> Output {
    let out = Command::new(cargo::cargo_bin!("createfile"))
        .current_dir(dir)
        .env("CREATEFILE_CONFIG", cfg)
        .args(args)
        .output()
        .expect("spawn binary");
    eprintln!("=== STDOUT ===\n{}", String::from_utf8_lossy(&out.stdout));
    eprintln!("=== STDERR ===\n{}", String::from_utf8_lossy(&out.stderr));
    out
}

pub fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

pub fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

/// Canonical scratch dir (avoids symlinked ancestors such as macOS /var).
pub fn scratch(td: &tempfile::TempDir) -> PathBuf {
    fs::canonicalize(td.path()).expect("canonicalize tempdir")
}

/// Sorted file names in `dir`.
pub fn names_in(dir: &Path) -> Vec<String> {
    let mut v: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    v.sort();
    v
}
