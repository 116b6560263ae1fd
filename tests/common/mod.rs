//! Shared test utilities and fixtures for treeview tests.

#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Build a directory layout under `root` from relative paths.
/// Paths ending with '/' become directories; others become empty files.
pub fn create_layout(root: &Path, paths: &[&str]) {
    let root = assert_fs::fixture::ChildPath::new(root);
    for p in paths {
        if let Some(dir) = p.strip_suffix('/') {
            root.child(dir).create_dir_all().unwrap();
        } else {
            root.child(p).touch().unwrap();
        }
    }
}

/// Create a temp dir holding a directory `name` with the given layout.
/// Returns the temp dir (kept alive by the caller) and the path of `name`.
pub fn named_fixture(name: &str, paths: &[&str]) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.child(name);
    root.create_dir_all().unwrap();
    create_layout(root.path(), paths);
    let path = root.path().to_path_buf();
    (tmp, path)
}

/// The tree used in the documented scenarios: `t/{a/x, b}`.
pub fn scenario_fixture() -> (TempDir, PathBuf) {
    named_fixture("t", &["a/", "a/x", "b"])
}

/// Command for the treeview binary with an isolated exclude file.
pub fn treeview(exclude_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("treeview").unwrap();
    cmd.arg("--exclude-file").arg(exclude_file);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write an exclude list with one name per line.
pub fn write_excludes(path: &Path, names: &[&str]) {
    let mut content = names.join("\n");
    content.push('\n');
    std::fs::write(path, content).unwrap();
}

/// Join lines with a trailing newline, matching the binary's stdout.
pub fn lines(lines: &[&str]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Number of connector glyphs at the start of a rendered line.
pub fn depth_of(line: &str) -> usize {
    const GLYPHS: [&str; 4] = ["|--", "|  ", "'--", "   "];
    line.as_bytes()
        .chunks(3)
        .take_while(|chunk| GLYPHS.iter().any(|g| g.as_bytes() == *chunk))
        .count()
}
