use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::commerce_api::CommerceApi;
use super::filters::{OrderFilters, OrderLineFilters, PRODUCT_DISPLAY_FIELDS};
use crate::config::{LimitsConfig, WebserviceConfig};
use crate::core::{AppError, AppResult};
use crate::modules::webservice::models::{
    Order, OrderLine, OrderLinesEnvelope, OrdersEnvelope, Product, ProductEnvelope,
    ProductsEnvelope,
};

/// Fixed page size for automatic pagination
pub const PAGE_SIZE: usize = 100;

/// HTTP client for the PrestaShop webservice.
///
/// Pure request/response wrapper; never mutates remote state. Authenticates
/// with the webservice key as basic-auth username and an empty password.
pub struct WebserviceClient {
    http: Client,
    base_url: String,
    ws_key: String,
    max_results_unfiltered: usize,
    max_results_filtered: usize,
}

impl WebserviceClient {
    pub fn new(config: &WebserviceConfig, limits: &LimitsConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: format!("{}/api", config.base_url.trim_end_matches('/')),
            ws_key: config.ws_key.clone(),
            max_results_unfiltered: limits.max_results_unfiltered,
            max_results_filtered: limits.max_results_filtered,
        })
    }

    /// One GET against a webservice resource.
    ///
    /// Returns `Ok(None)` on HTTP 404: for list resources the platform
    /// answers 404 when nothing matches, and absence of matches is not
    /// exceptional. Every other failure is classified into the error
    /// taxonomy here, once.
    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(String, String)],
    ) -> AppResult<Option<T>> {
        let url = format!("{}/{}", self.base_url, resource);
        debug!("GET {} ({} query params)", url, params.len());

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.ws_key, Some(""))
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(AppError::authentication(
                "webservice rejected the configured key (HTTP 401)",
            ));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AppError::rate_limited("webservice returned HTTP 429"));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::remote(format!(
                "HTTP {} ({})",
                status.as_u16(),
                body
            )));
        }

        Ok(Some(response.json::<T>().await?))
    }

    /// One page of orders.
    pub async fn fetch_orders(
        &self,
        filters: &OrderFilters,
        limit: usize,
        offset: usize,
    ) -> AppResult<Vec<Order>> {
        let params = filters.query_params(limit, offset);
        let envelope: Option<OrdersEnvelope> = self.get_json("orders", &params).await?;
        Ok(envelope.map(OrdersEnvelope::into_orders).unwrap_or_default())
    }

    /// One page of order lines.
    pub async fn fetch_order_lines(
        &self,
        filters: &OrderLineFilters,
        limit: usize,
        offset: usize,
    ) -> AppResult<Vec<OrderLine>> {
        let params = filters.query_params(limit, offset);
        let envelope: Option<OrderLinesEnvelope> =
            self.get_json("order_details", &params).await?;
        Ok(envelope.map(OrderLinesEnvelope::into_lines).unwrap_or_default())
    }

    fn result_ceiling(&self, narrowed: bool) -> usize {
        // An unfiltered query could be unbounded, so its ceiling is lower.
        if narrowed {
            self.max_results_filtered
        } else {
            self.max_results_unfiltered
        }
    }
}

#[async_trait]
impl CommerceApi for WebserviceClient {
    async fn fetch_all_orders(&self, filters: &OrderFilters) -> AppResult<Vec<Order>> {
        let ceiling = self.result_ceiling(filters.is_narrowed());
        let mut all_orders = Vec::new();
        let mut offset = 0;

        loop {
            let page = self.fetch_orders(filters, PAGE_SIZE, offset).await?;
            if page.is_empty() {
                break;
            }

            let short_page = page.len() < PAGE_SIZE;
            all_orders.extend(page);
            offset += PAGE_SIZE;

            if all_orders.len() >= ceiling {
                // Partial results are still useful; warn and stop paging.
                let scope = filters
                    .date_range
                    .map(|range| format!(" for period {}", range.to_date_filter()))
                    .unwrap_or_default();
                warn!("Reached maximum of {} orders{}", ceiling, scope);
                break;
            }

            if short_page {
                break;
            }
        }

        Ok(all_orders)
    }

    async fn fetch_all_order_lines(
        &self,
        filters: &OrderLineFilters,
    ) -> AppResult<Vec<OrderLine>> {
        let ceiling = self.result_ceiling(filters.is_narrowed());
        let mut all_lines = Vec::new();
        let mut offset = 0;

        loop {
            let page = self.fetch_order_lines(filters, PAGE_SIZE, offset).await?;
            if page.is_empty() {
                break;
            }

            let short_page = page.len() < PAGE_SIZE;
            all_lines.extend(page);
            offset += PAGE_SIZE;

            if all_lines.len() >= ceiling {
                warn!("Reached maximum of {} order lines", ceiling);
                break;
            }

            if short_page {
                break;
            }
        }

        Ok(all_lines)
    }

    async fn fetch_product(&self, product_id: u64) -> AppResult<Product> {
        let params = vec![
            ("output_format".to_string(), "JSON".to_string()),
            ("display".to_string(), PRODUCT_DISPLAY_FIELDS.to_string()),
        ];

        let envelope: Option<ProductEnvelope> = self
            .get_json(&format!("products/{}", product_id), &params)
            .await?;

        envelope
            .and_then(ProductEnvelope::into_product)
            .ok_or(AppError::ProductNotFound(product_id))
    }

    async fn search_products(
        &self,
        term: &str,
        limit: usize,
        max_scan: usize,
    ) -> AppResult<Vec<Product>> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }
        let needle = term.to_lowercase();

        // Small result sets do not justify a full catalog scan.
        let scan = if limit <= 10 {
            max_scan.min(300)
        } else {
            max_scan
        };

        let params = vec![
            ("output_format".to_string(), "JSON".to_string()),
            ("display".to_string(), PRODUCT_DISPLAY_FIELDS.to_string()),
            ("limit".to_string(), scan.to_string()),
            ("filter[active]".to_string(), "1".to_string()),
        ];

        let envelope: Option<ProductsEnvelope> = self.get_json("products", &params).await?;
        let candidates = envelope
            .map(ProductsEnvelope::into_products)
            .unwrap_or_default();
        let scanned = candidates.len();

        let matches: Vec<Product> = candidates
            .into_iter()
            .filter(|product| product.name.matches(&needle))
            .take(limit)
            .collect();

        debug!(
            "product search {:?} matched {} of {} scanned",
            term,
            matches.len(),
            scanned
        );

        Ok(matches)
    }
}
