use async_trait::async_trait;

use super::filters::{OrderFilters, OrderLineFilters};
use crate::core::AppResult;
use crate::modules::webservice::models::{Order, OrderLine, Product};

/// Read-only seam over the remote commerce webservice.
///
/// `WebserviceClient` is the production implementation; aggregation tests
/// substitute an in-memory mock. Nothing behind this trait mutates remote
/// state.
#[async_trait]
pub trait CommerceApi: Send + Sync {
    /// Every order matching the filters, paginated internally up to the
    /// safety ceiling.
    async fn fetch_all_orders(&self, filters: &OrderFilters) -> AppResult<Vec<Order>>;

    /// Every order line matching the filters, paginated internally.
    async fn fetch_all_order_lines(
        &self,
        filters: &OrderLineFilters,
    ) -> AppResult<Vec<OrderLine>>;

    /// A single product; `ProductNotFound` when the shop has no such id.
    async fn fetch_product(&self, product_id: u64) -> AppResult<Product>;

    /// Case-insensitive name search over active products, filtered in memory.
    /// An empty or whitespace-only term returns no results without a remote
    /// call.
    async fn search_products(
        &self,
        term: &str,
        limit: usize,
        max_scan: usize,
    ) -> AppResult<Vec<Product>>;
}
