//! Helpers for driving the termclean binary in an isolated home directory

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Get the path to the shared fixtures directory
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A temporary HOME so the binary never sees the developer's config.
pub struct TestEnv {
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("Failed to create temp home"),
        }
    }

    /// A termclean command with HOME pointed at the temp dir and colors off.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_termclean"));
        cmd.env("HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn config_path(&self) -> PathBuf {
        self.home
            .path()
            .join(".config")
            .join("termclean")
            .join("config.toml")
    }

    /// Write `contents` as the termclean config file.
    pub fn write_config(&self, contents: &str) {
        let path = self.config_path();
        fs::create_dir_all(path.parent().expect("config path has a parent"))
            .expect("Failed to create config dir");
        fs::write(path, contents).expect("Failed to write config");
    }

    /// Write a scratch file under the temp home and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.home.path().join(name);
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.home.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Captured stdout of a successful run.
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to execute termclean");
    assert!(
        output.status.success(),
        "termclean failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}
