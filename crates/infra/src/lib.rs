//! Infrastructure layer: product sources, cart storage, configuration.

pub mod cart_store;
pub mod config;
pub mod source;

pub use cart_store::{InMemoryCartStore, JsonFileCartStore};
pub use config::{ProductLocation, ShopfrontConfig};
pub use source::{InMemoryProductSource, JsonFileProductSource};

#[cfg(feature = "http")]
pub use source::HttpProductSource;
