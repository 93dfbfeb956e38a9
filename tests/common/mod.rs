// tests/common/mod.rs
//! Shared test utilities.

use std::{fs, path::PathBuf};

use tempfile::TempDir;

/// Scratch directory holding the two input files of a comparison.
#[derive(Debug)]
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self { dir: tempfile::Builder::new().prefix("comm_lines").tempdir().unwrap() }
    }

    pub fn write_file(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::write(&path, contents).unwrap();
        path
    }

    /// Writes `lines` one per line, newline terminated.
    pub fn write_lines(&self, rel: &str, lines: &[&str]) -> String {
        let body: String = lines.iter().map(|l| format!("{l}\n")).collect();
        self.write_file(rel, body).to_string_lossy().into_owned()
    }

    pub fn missing(&self, rel: &str) -> String {
        self.dir.path().join(rel).to_string_lossy().into_owned()
    }
}

pub const FRUIT_A: &[&str] = &["apple", "banana", "cherry"];
pub const FRUIT_B: &[&str] = &["banana", "cherry", "date"];
