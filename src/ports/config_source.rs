use crate::domain::AppError;

/// A readable configuration source.
///
/// Reading must be deterministic and side-effect-free: the loader may probe
/// `exists` and `read` in sequence and expects consistent answers.
pub trait ConfigSource {
    /// Human-readable location for error messages (a path, "inline", ...).
    fn describe(&self) -> String;

    /// Whether the source currently exists.
    fn exists(&self) -> bool;

    /// Read the full source content.
    fn read(&self) -> Result<String, AppError>;
}
