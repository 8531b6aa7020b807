//! Shared testing utilities for imgcatalog CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A complete, valid config used as the baseline for most tests.
pub const VALID_CONFIG: &str = r#"
image_root = "/var/www/Images"
url_prefix = "http://example.org/Images/"
data_source_ids = ["oisst-daily-cdr", "usdroughtmonitor-weekly-ndmc"]
resolution_directories = ["620", "1000", "hd"]
resolution_titles = ["Small: 620px", "Large: 1000px", "High Definition: 1920px"]
"#;

/// Testing harness providing an isolated work directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the work directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write a config file into the work directory and return its path.
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test config");
        path
    }

    /// Build a command for invoking the compiled `imgcatalog` binary within
    /// the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("imgcatalog").expect("Failed to locate imgcatalog binary");
        cmd.current_dir(&self.work_dir).env_remove("IMGCATALOG_CONFIG");
        cmd
    }
}
