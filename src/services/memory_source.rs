use crate::domain::AppError;
use crate::ports::ConfigSource;

/// In-memory configuration source for testing.
#[derive(Debug, Clone)]
pub struct MemorySource {
    label: String,
    content: Option<String>,
}

impl MemorySource {
    /// A source that exists with the given content.
    pub fn new<L: Into<String>, C: Into<String>>(label: L, content: C) -> Self {
        Self { label: label.into(), content: Some(content.into()) }
    }

    /// A source that does not exist.
    pub fn missing<L: Into<String>>(label: L) -> Self {
        Self { label: label.into(), content: None }
    }
}

impl ConfigSource for MemorySource {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn exists(&self) -> bool {
        self.content.is_some()
    }

    fn read(&self) -> Result<String, AppError> {
        self.content
            .clone()
            .ok_or_else(|| AppError::ConfigMissing(self.label.clone()))
    }
}
