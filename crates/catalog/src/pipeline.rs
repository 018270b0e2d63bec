//! Catalog pipeline: state transitions and view computation.
//!
//! User actions arrive as [`CatalogCommand`]s. Filter, sort and "load more"
//! commands are pure transitions on [`CatalogState`] that yield a
//! [`RenderMode`]; the view is then recomputed from state in a separate step:
//!
//! ```text
//! products ─▶ apply_filters ─▶ apply_sort ─▶ paginate ─▶ ProductCard[]
//! ```
//!
//! The product list is fetched once at construction. If the source fails the
//! pipeline keeps working on an empty catalog.

use core::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use shopfront_core::ProductId;

use crate::card::{CartBadge, Notification, ProductCard};
use crate::cart::{CartStore, CartStoreError, add_to_cart, read_cart_badge};
use crate::category::derive_categories;
use crate::filter::{FilterForm, FilterState, apply_filters};
use crate::pagination::{DEFAULT_PAGE_SIZE, RenderMode, paginate};
use crate::product::Product;
use crate::sort::{SortMode, apply_sort};
use crate::source::{ProductSource, SourceError};

/// Presentation settings fixed for the lifetime of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    pub page_size: NonZeroUsize,
    pub currency_symbol: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            currency_symbol: "₽".to_string(),
        }
    }
}

/// Filter, sort and page position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogState {
    filters: FilterState,
    sort: SortMode,
    page: u32,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            sort: SortMode::default(),
            page: 1,
        }
    }
}

impl CatalogState {
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn submit_filters(&mut self, filters: FilterState) -> RenderMode {
        self.filters = filters;
        self.page = 1;
        RenderMode::Replace
    }

    pub fn change_sort(&mut self, sort: SortMode) -> RenderMode {
        self.sort = sort;
        self.page = 1;
        RenderMode::Replace
    }

    pub fn load_more(&mut self) -> RenderMode {
        self.page = self.page.saturating_add(1);
        RenderMode::Append
    }
}

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogCommand {
    SubmitFilters(FilterForm),
    ChangeSort(SortMode),
    LoadMore,
    AddToCart(ProductId),
}

/// What the rendering surface should show after a catalog change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductView {
    pub cards: Vec<ProductCard>,
    pub has_more: bool,
    pub mode: RenderMode,
    /// Number of products matching the current filters.
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    Render(ProductView),
    CartUpdated {
        badge: CartBadge,
        notification: Notification,
    },
}

/// Owns the catalog and its view state; one instance per page session.
#[derive(Debug)]
pub struct CatalogPipeline<C> {
    products: Vec<Product>,
    categories: Vec<String>,
    state: CatalogState,
    settings: CatalogSettings,
    cart: C,
    load_error: Option<SourceError>,
}

impl<C> CatalogPipeline<C>
where
    C: CartStore,
{
    /// Fetch the catalog from `source`, falling back to an empty catalog on failure.
    pub async fn load<S>(source: &S, cart: C, settings: CatalogSettings) -> Self
    where
        S: ProductSource + ?Sized,
    {
        match source.fetch_all().await {
            Ok(products) => {
                tracing::info!(count = products.len(), "catalog loaded");
                Self::with_products(products, cart, settings)
            }
            Err(err) => {
                tracing::error!(%err, "failed to load products; showing an empty catalog");
                let mut pipeline = Self::with_products(Vec::new(), cart, settings);
                pipeline.load_error = Some(err);
                pipeline
            }
        }
    }

    pub fn with_products(products: Vec<Product>, cart: C, settings: CatalogSettings) -> Self {
        let categories = derive_categories(&products);
        Self {
            products,
            categories,
            state: CatalogState::default(),
            settings,
            cart,
            load_error: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }

    /// Source failure recorded at load time, if any.
    pub fn load_error(&self) -> Option<&SourceError> {
        self.load_error.as_ref()
    }

    pub fn cart_badge(&self) -> CartBadge {
        read_cart_badge(&self.cart)
    }

    /// Apply a user action and return what needs re-rendering.
    ///
    /// Only `AddToCart` can fail, when the cart store cannot be written.
    pub fn dispatch(&mut self, command: CatalogCommand) -> Result<DispatchOutcome, CartStoreError> {
        let mode = match command {
            CatalogCommand::SubmitFilters(form) => {
                self.state.submit_filters(FilterState::from_form(&form))
            }
            CatalogCommand::ChangeSort(sort) => self.state.change_sort(sort),
            CatalogCommand::LoadMore => self.state.load_more(),
            CatalogCommand::AddToCart(product_id) => {
                let badge = add_to_cart(&self.cart, product_id)?;
                return Ok(DispatchOutcome::CartUpdated {
                    badge,
                    notification: Notification::success("Item added to cart"),
                });
            }
        };

        tracing::debug!(
            sort = %self.state.sort,
            page = self.state.page,
            ?mode,
            "catalog state changed"
        );
        Ok(DispatchOutcome::Render(self.render(mode)))
    }

    /// Compute the view for the current state.
    pub fn render(&self, mode: RenderMode) -> ProductView {
        let filtered = apply_filters(&self.products, &self.state.filters);
        let sorted = apply_sort(&filtered, self.state.sort);
        let slice = paginate(&sorted, self.state.page, self.settings.page_size.get(), mode);

        ProductView {
            cards: slice
                .items
                .iter()
                .map(|p| ProductCard::from_product(p, &self.settings.currency_symbol))
                .collect(),
            has_more: slice.has_more,
            mode,
            total: sorted.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::cart::test_store::VecCartStore;
    use crate::product::fixtures::product;

    struct FixedSource(Result<Vec<Product>, SourceError>);

    #[async_trait]
    impl ProductSource for FixedSource {
        async fn fetch_all(&self) -> Result<Vec<Product>, SourceError> {
            self.0.clone()
        }
    }

    fn settings(page_size: usize) -> CatalogSettings {
        CatalogSettings {
            page_size: NonZeroUsize::new(page_size).unwrap(),
            currency_symbol: String::new(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "A", 100.0, None, 4.0),
            product(2, "B", 80.0, Some(60.0), 5.0),
            product(3, "A", 50.0, None, 5.0),
            product(4, "C", 120.0, Some(90.0), 3.0),
            product(5, "B", 30.0, None, 2.0),
        ]
    }

    fn card_ids(view: &ProductView) -> Vec<u64> {
        view.cards.iter().map(|c| c.id.get()).collect()
    }

    fn render_of(outcome: DispatchOutcome) -> ProductView {
        match outcome {
            DispatchOutcome::Render(view) => view,
            other => panic!("expected Render, got {other:?}"),
        }
    }

    #[test]
    fn default_settings_show_twelve_per_page() {
        let defaults = CatalogSettings::default();
        assert_eq!(defaults.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(defaults.page_size.get(), 12);
    }

    #[test]
    fn initial_view_is_first_page_by_ascending_price() {
        let pipeline = CatalogPipeline::with_products(catalog(), VecCartStore::default(), settings(2));
        let view = pipeline.render(RenderMode::Replace);
        assert_eq!(card_ids(&view), vec![5, 3]);
        assert!(view.has_more);
        assert_eq!(view.total, 5);
        assert_eq!(pipeline.categories(), ["A", "B", "C"]);
    }

    #[test]
    fn load_more_appends_next_page_only() {
        let mut pipeline = CatalogPipeline::with_products(catalog(), VecCartStore::default(), settings(2));

        let view = render_of(pipeline.dispatch(CatalogCommand::LoadMore).unwrap());
        assert_eq!(view.mode, RenderMode::Append);
        assert_eq!(card_ids(&view), vec![2, 4]);
        assert!(view.has_more);

        let view = render_of(pipeline.dispatch(CatalogCommand::LoadMore).unwrap());
        assert_eq!(card_ids(&view), vec![1]);
        assert!(!view.has_more);
        assert_eq!(pipeline.state().page(), 3);
    }

    #[test]
    fn filter_submit_resets_page_and_replaces() {
        let mut pipeline = CatalogPipeline::with_products(catalog(), VecCartStore::default(), settings(2));
        pipeline.dispatch(CatalogCommand::LoadMore).unwrap();

        let form = FilterForm {
            discount: true,
            ..FilterForm::default()
        };
        let view = render_of(pipeline.dispatch(CatalogCommand::SubmitFilters(form)).unwrap());
        assert_eq!(pipeline.state().page(), 1);
        assert_eq!(view.mode, RenderMode::Replace);
        assert_eq!(card_ids(&view), vec![2, 4]);
        assert!(!view.has_more);
    }

    #[test]
    fn sort_change_resets_page() {
        let mut pipeline = CatalogPipeline::with_products(catalog(), VecCartStore::default(), settings(2));
        pipeline.dispatch(CatalogCommand::LoadMore).unwrap();

        let view = render_of(
            pipeline
                .dispatch(CatalogCommand::ChangeSort(SortMode::RatingDescending))
                .unwrap(),
        );
        assert_eq!(pipeline.state().page(), 1);
        assert_eq!(card_ids(&view), vec![2, 3]);
    }

    #[test]
    fn replace_after_load_more_covers_all_revealed_pages() {
        let mut pipeline = CatalogPipeline::with_products(catalog(), VecCartStore::default(), settings(2));
        pipeline.dispatch(CatalogCommand::LoadMore).unwrap();
        let view = pipeline.render(RenderMode::Replace);
        assert_eq!(card_ids(&view), vec![5, 3, 2, 4]);
    }

    #[test]
    fn malformed_bound_is_ignored() {
        let mut pipeline = CatalogPipeline::with_products(catalog(), VecCartStore::default(), settings(10));
        let form = FilterForm {
            price_from: "lots".to_string(),
            price_to: "60".to_string(),
            ..FilterForm::default()
        };
        let view = render_of(pipeline.dispatch(CatalogCommand::SubmitFilters(form)).unwrap());
        assert_eq!(card_ids(&view), vec![5, 3, 2]);
    }

    #[test]
    fn add_to_cart_updates_badge_and_notifies() {
        let mut pipeline = CatalogPipeline::with_products(catalog(), VecCartStore::default(), settings(2));
        pipeline.dispatch(CatalogCommand::AddToCart(ProductId::new(7))).unwrap();
        let outcome = pipeline.dispatch(CatalogCommand::AddToCart(ProductId::new(7))).unwrap();

        match outcome {
            DispatchOutcome::CartUpdated { badge, notification } => {
                assert_eq!(badge.count, 2);
                assert_eq!(notification, Notification::success("Item added to cart"));
            }
            other => panic!("expected CartUpdated, got {other:?}"),
        }
        assert_eq!(pipeline.cart_badge().count, 2);
    }

    #[tokio::test]
    async fn load_uses_source_products() {
        let source = FixedSource(Ok(catalog()));
        let pipeline = CatalogPipeline::load(&source, VecCartStore::default(), settings(12)).await;
        assert_eq!(pipeline.products().len(), 5);
        assert!(pipeline.load_error().is_none());
        assert!(!pipeline.render(RenderMode::Replace).has_more);
    }

    #[tokio::test]
    async fn source_failure_yields_usable_empty_catalog() {
        let source = FixedSource(Err(SourceError::Transport("connection refused".to_string())));
        let mut pipeline = CatalogPipeline::load(&source, VecCartStore::default(), settings(12)).await;

        assert!(pipeline.products().is_empty());
        assert!(pipeline.categories().is_empty());
        assert!(matches!(pipeline.load_error(), Some(SourceError::Transport(_))));

        let view = render_of(pipeline.dispatch(CatalogCommand::LoadMore).unwrap());
        assert!(view.cards.is_empty());
        assert!(!view.has_more);
    }
}
