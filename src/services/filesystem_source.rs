use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ConfigSource;

/// File-backed configuration source.
#[derive(Debug, Clone)]
pub struct FilesystemSource {
    path: PathBuf,
}

impl FilesystemSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FilesystemSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn read(&self) -> Result<String, AppError> {
        Ok(fs::read_to_string(&self.path)?)
    }
}
