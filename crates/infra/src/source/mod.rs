//! Product source adapters.
//!
//! Each adapter implements [`shopfront_catalog::ProductSource`]; the pipeline
//! does not care where the catalog comes from.

pub mod in_memory;
pub mod json_file;

#[cfg(feature = "http")]
pub mod http;

pub use in_memory::InMemoryProductSource;
pub use json_file::JsonFileProductSource;

#[cfg(feature = "http")]
pub use http::HttpProductSource;
