mod filesystem_source;
mod memory_source;

pub use filesystem_source::FilesystemSource;
pub use memory_source::MemorySource;
