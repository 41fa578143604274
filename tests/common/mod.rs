//! Shared fixtures for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A throwaway Expo-style project on disk.
pub struct FixtureProject {
    dir: TempDir,
}

impl FixtureProject {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root, creating parent directories.
    pub fn file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    /// Write `route-reach.toml` and return its path.
    pub fn manifest(&self, contents: &str) -> PathBuf {
        self.file("route-reach.toml", contents)
    }
}

/// A screen component that only renders a title.
#[allow(dead_code)]
pub fn empty_screen(title: &str) -> String {
    format!(
        "export default function Screen() {{\n  return <View><Text>{title}</Text></View>;\n}}\n"
    )
}
