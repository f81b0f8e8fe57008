pub mod json;
pub mod memory;

pub use json::JsonFolderSource;
pub use memory::InMemorySource;
