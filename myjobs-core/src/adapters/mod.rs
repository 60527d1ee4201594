//! Concrete implementations of the ports

pub mod fixture;
pub mod json_store;
pub mod memory;

pub use fixture::StaticCatalog;
pub use json_store::JsonFileStore;
pub use memory::MemoryStore;
