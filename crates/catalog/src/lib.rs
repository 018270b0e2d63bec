//! Catalog domain module.
//!
//! This crate contains the storefront catalog pipeline (filter → sort →
//! paginate), card-data derivation and the append-only cart, implemented as
//! deterministic domain logic. Fetching products and persisting the cart go
//! through the [`ProductSource`] and [`CartStore`] traits; implementations live
//! in `shopfront-infra`.

pub mod card;
pub mod cart;
pub mod category;
pub mod filter;
pub mod pagination;
pub mod pipeline;
pub mod product;
pub mod sort;
pub mod source;

pub use card::{CartBadge, Notification, NotificationLevel, ProductCard};
pub use cart::{Cart, CartStore, CartStoreError, add_to_cart, read_cart_badge};
pub use category::derive_categories;
pub use filter::{FilterForm, FilterInputError, FilterState, apply_filters};
pub use pagination::{DEFAULT_PAGE_SIZE, PageSlice, RenderMode, paginate};
pub use pipeline::{
    CatalogCommand, CatalogPipeline, CatalogSettings, CatalogState, DispatchOutcome, ProductView,
};
pub use product::{DisplayPrice, Product};
pub use sort::{SortMode, apply_sort};
pub use source::{ProductSource, SourceError};
