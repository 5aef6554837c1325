use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::LimitsConfig;
use crate::core::{AppError, AppResult, DateRange};
use crate::modules::analytics::models::{
    OrderSummary, ProductSalesStats, SalesTotals, SortBy, TopProduct, TopProductsResult,
};
use crate::modules::batching::BatchFetcher;
use crate::modules::webservice::services::{CommerceApi, OrderFilters};

/// Upper bound on the top-products `limit` parameter
pub const MAX_PRODUCTS_PER_REQUEST: usize = 100;

/// Sales aggregation over the remote order history.
///
/// Every call recomputes from scratch: orders for the period are fetched
/// first, then their line details through the batch fetcher, then folded.
/// Nothing is cached across invocations.
pub struct AnalyticsService {
    api: Arc<dyn CommerceApi>,
    batches: BatchFetcher,
    max_date_range_days: i64,
}

impl AnalyticsService {
    pub fn new(api: Arc<dyn CommerceApi>, limits: &LimitsConfig) -> Self {
        let batches = BatchFetcher::new(
            Arc::clone(&api),
            limits.batch_size,
            limits.max_concurrent_batches,
        );
        Self {
            api,
            batches,
            max_date_range_days: limits.max_date_range_days,
        }
    }

    /// Sales statistics for one product over a period.
    ///
    /// Validates the period before any remote call, resolves the product
    /// (typed failure when absent), and returns zero-valued stats without a
    /// single line-detail fetch when the period has no orders.
    pub async fn product_sales_stats(
        &self,
        product_id: u64,
        date_from: &str,
        date_to: &str,
        order_states: Option<Vec<u32>>,
    ) -> AppResult<ProductSalesStats> {
        let period = DateRange::parse(date_from, date_to, self.max_date_range_days)?;
        let product = self.api.fetch_product(product_id).await?;

        info!(
            "computing sales stats: product={} period={}..{}",
            product_id, period.from, period.to
        );

        let filters = OrderFilters::for_period(period, order_states);
        let orders = self.api.fetch_all_orders(&filters).await?;
        if orders.is_empty() {
            info!("no orders in period, returning zero-valued stats");
            return Ok(ProductSalesStats::empty(&product, period));
        }

        let order_dates: HashMap<u64, chrono::NaiveDateTime> =
            orders.iter().map(|order| (order.id, order.date_add)).collect();
        let order_ids: Vec<u64> = orders.iter().map(|order| order.id).collect();

        let lines = self
            .batches
            .fetch_lines_for_orders(&order_ids, Some(product_id))
            .await?;

        let mut total_quantity = 0u64;
        let mut revenue_excl = Decimal::ZERO;
        let mut revenue_incl = Decimal::ZERO;
        let mut summaries: Vec<OrderSummary> = Vec::new();
        let mut index_by_order: HashMap<u64, usize> = HashMap::new();

        for line in &lines {
            let date = match order_dates.get(&line.id_order) {
                Some(date) => *date,
                None => {
                    warn!(
                        "order line {} references order {} outside the fetched set; skipping",
                        line.id, line.id_order
                    );
                    continue;
                }
            };

            total_quantity += line.product_quantity;
            revenue_excl += line.total_price_tax_excl;
            revenue_incl += line.total_price_tax_incl;

            match index_by_order.entry(line.id_order) {
                Entry::Occupied(slot) => {
                    // Several lines of the same order for this product count
                    // as one order: sum, never duplicate.
                    let summary = &mut summaries[*slot.get()];
                    summary.quantity += line.product_quantity;
                    summary.total_price += line.total_price_tax_incl;
                }
                Entry::Vacant(slot) => {
                    slot.insert(summaries.len());
                    summaries.push(OrderSummary {
                        order_id: line.id_order,
                        date,
                        quantity: line.product_quantity,
                        unit_price: line.unit_price_tax_incl,
                        total_price: line.total_price_tax_incl,
                    });
                }
            }
        }

        // Newest first; equal dates keep encounter order (stable sort).
        summaries.sort_by(|a, b| b.date.cmp(&a.date));

        let average_unit_price = if total_quantity > 0 {
            revenue_incl / Decimal::from(total_quantity)
        } else {
            Decimal::ZERO
        };

        info!(
            "sales stats computed: {} units over {} orders",
            total_quantity,
            summaries.len()
        );

        Ok(ProductSalesStats {
            product_id,
            product_name: product.name.display().to_string(),
            product_reference: product.reference.clone(),
            period,
            sales: SalesTotals {
                total_quantity_sold: total_quantity,
                total_revenue_excl_tax: revenue_excl,
                total_revenue_incl_tax: revenue_incl,
                average_unit_price,
                number_of_orders: summaries.len() as u64,
            },
            orders: summaries,
            truncated: false,
            truncation_message: None,
        })
    }

    /// Best-selling products over a period.
    ///
    /// "No sales in period" is a valid empty result, never a failure.
    pub async fn top_products(
        &self,
        date_from: &str,
        date_to: &str,
        limit: usize,
        sort_by: SortBy,
        order_states: Option<Vec<u32>>,
    ) -> AppResult<TopProductsResult> {
        let period = DateRange::parse(date_from, date_to, self.max_date_range_days)?;
        if limit == 0 || limit > MAX_PRODUCTS_PER_REQUEST {
            return Err(AppError::validation(format!(
                "limit must be between 1 and {}",
                MAX_PRODUCTS_PER_REQUEST
            )));
        }

        info!(
            "computing top products: period={}..{} sort_by={} limit={}",
            period.from, period.to, sort_by, limit
        );

        let filters = OrderFilters::for_period(period, order_states);
        let orders = self.api.fetch_all_orders(&filters).await?;
        if orders.is_empty() {
            info!("no orders in period, returning empty ranking");
            return Ok(TopProductsResult {
                period,
                sort_by,
                total_products_found: 0,
                products: Vec::new(),
                has_more: false,
                next_limit: None,
            });
        }

        let order_ids: Vec<u64> = orders.iter().map(|order| order.id).collect();
        let lines = self.batches.fetch_lines_for_orders(&order_ids, None).await?;

        struct Accumulator {
            quantity: u64,
            revenue: Decimal,
            orders: HashSet<u64>,
            name: String,
            reference: String,
        }

        let mut by_product: HashMap<u64, Accumulator> = HashMap::new();
        for line in &lines {
            // Name and reference stick from the first line seen; later lines
            // never overwrite them.
            let entry = by_product
                .entry(line.product_id)
                .or_insert_with(|| Accumulator {
                    quantity: 0,
                    revenue: Decimal::ZERO,
                    orders: HashSet::new(),
                    name: line.product_name.clone(),
                    reference: line.product_reference.clone(),
                });
            entry.quantity += line.product_quantity;
            entry.revenue += line.total_price_tax_incl;
            entry.orders.insert(line.id_order);
        }

        let total_found = by_product.len();

        let mut ranked: Vec<TopProduct> = by_product
            .into_iter()
            .map(|(product_id, acc)| TopProduct {
                rank: 0,
                product_id,
                product_name: acc.name,
                product_reference: acc.reference,
                total_quantity_sold: acc.quantity,
                total_revenue_incl_tax: acc.revenue,
                number_of_orders: acc.orders.len() as u64,
                average_unit_price: if acc.quantity > 0 {
                    acc.revenue / Decimal::from(acc.quantity)
                } else {
                    Decimal::ZERO
                },
            })
            .collect();

        // Ties on the sort criterion break by ascending product id so the
        // ranking never depends on map iteration order.
        match sort_by {
            SortBy::Quantity => ranked.sort_by(|a, b| {
                b.total_quantity_sold
                    .cmp(&a.total_quantity_sold)
                    .then(a.product_id.cmp(&b.product_id))
            }),
            SortBy::Revenue => ranked.sort_by(|a, b| {
                b.total_revenue_incl_tax
                    .cmp(&a.total_revenue_incl_tax)
                    .then(a.product_id.cmp(&b.product_id))
            }),
        }

        ranked.truncate(limit);
        for (index, product) in ranked.iter_mut().enumerate() {
            product.rank = index + 1;
        }

        let has_more = total_found > limit;

        info!(
            "top products computed: {} found, returning {}",
            total_found,
            ranked.len()
        );

        Ok(TopProductsResult {
            period,
            sort_by,
            total_products_found: total_found,
            products: ranked,
            has_more,
            next_limit: if has_more { Some(limit * 2) } else { None },
        })
    }
}
