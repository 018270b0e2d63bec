//! Cart storage adapters.

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryCartStore;
pub use json_file::JsonFileCartStore;
