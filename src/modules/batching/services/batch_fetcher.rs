use std::sync::Arc;

use futures_util::future;
use tracing::debug;

use crate::core::AppResult;
use crate::modules::webservice::models::OrderLine;
use crate::modules::webservice::services::{CommerceApi, OrderLineFilters};

/// Hard ceiling on order ids per group, independent of configuration. Keeps
/// the encoded `[id1|id2|...]` OR list within the webservice's URL length
/// tolerance.
pub const MAX_IDS_PER_BATCH: usize = 200;

/// Retrieves order-line details for a set of orders in bounded-size,
/// bounded-concurrency batches.
///
/// Ids are split into contiguous groups of `batch_size`, and groups are
/// issued in waves of at most `max_concurrent` concurrent requests. A wave is
/// awaited in full before the next starts, so peak concurrent load on the
/// webservice is deterministic regardless of input size. Results are merged
/// only after every branch of a wave completes; no state is shared across
/// in-flight requests.
pub struct BatchFetcher {
    api: Arc<dyn CommerceApi>,
    batch_size: usize,
    max_concurrent: usize,
}

impl BatchFetcher {
    pub fn new(api: Arc<dyn CommerceApi>, batch_size: usize, max_concurrent: usize) -> Self {
        Self {
            api,
            batch_size: batch_size.clamp(1, MAX_IDS_PER_BATCH),
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Fetch line details for `order_ids`, optionally narrowed to a product.
    ///
    /// An empty id list returns no lines without issuing any request. A
    /// failure in any group aborts the whole fetch; there is no partial
    /// result and no per-group retry.
    pub async fn fetch_lines_for_orders(
        &self,
        order_ids: &[u64],
        product_id: Option<u64>,
    ) -> AppResult<Vec<OrderLine>> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }

        let groups: Vec<&[u64]> = order_ids.chunks(self.batch_size).collect();
        debug!(
            "fetching lines for {} orders: {} groups in waves of {}",
            order_ids.len(),
            groups.len(),
            self.max_concurrent
        );

        let mut lines = Vec::new();
        for wave in groups.chunks(self.max_concurrent) {
            let requests = wave.iter().map(|group| {
                let filters = OrderLineFilters {
                    order_ids: group.to_vec(),
                    product_id,
                };
                let api = Arc::clone(&self.api);
                async move { api.fetch_all_order_lines(&filters).await }
            });

            for group_lines in future::try_join_all(requests).await? {
                lines.extend(group_lines);
            }
        }

        Ok(lines)
    }
}
