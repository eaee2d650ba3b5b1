mod json_file;
mod memory;
mod store;

pub use json_file::JsonFileStore;
pub use memory::{MemoryStore, Snapshot};
pub use store::ContentStore;
