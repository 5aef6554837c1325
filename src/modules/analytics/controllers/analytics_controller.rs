use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::{AppError, AppResult};
use crate::modules::analytics::formatters;
use crate::modules::analytics::models::SortBy;
use crate::modules::analytics::services::AnalyticsService;
use crate::modules::webservice::services::CommerceApi;

/// Catalog scan ceiling for the search endpoint
const SEARCH_MAX_SCAN: usize = 500;

/// Shared state for the HTTP layer
pub struct AppState {
    pub analytics: AnalyticsService,
    pub api: Arc<dyn CommerceApi>,
    pub character_limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    Json,
    Markdown,
}

impl Default for ResponseFormat {
    fn default() -> Self {
        ResponseFormat::Markdown
    }
}

#[derive(Debug, Deserialize)]
pub struct SalesStatsQuery {
    pub date_from: String,
    pub date_to: String,
    /// Comma-separated order-state codes, e.g. `2,3,4`
    pub order_states: Option<String>,
    #[serde(default)]
    pub format: ResponseFormat,
}

#[derive(Debug, Deserialize)]
pub struct TopProductsQuery {
    pub date_from: String,
    pub date_to: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub sort_by: SortBy,
    pub order_states: Option<String>,
    #[serde(default)]
    pub format: ResponseFormat,
}

fn default_limit() -> usize {
    10
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

fn default_search_limit() -> usize {
    50
}

fn parse_states(raw: &Option<String>) -> AppResult<Option<Vec<u32>>> {
    let text = match raw {
        Some(text) => text,
        None => return Ok(None),
    };

    let mut states = Vec::new();
    for part in text.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        states.push(
            part.parse::<u32>()
                .map_err(|_| AppError::validation(format!("Invalid order state: {}", part)))?,
        );
    }

    Ok(if states.is_empty() { None } else { Some(states) })
}

pub async fn product_sales_stats(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    query: web::Query<SalesStatsQuery>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    let order_states = parse_states(&query.order_states)?;

    let mut stats = state
        .analytics
        .product_sales_stats(product_id, &query.date_from, &query.date_to, order_states)
        .await?;

    let response = match query.format {
        ResponseFormat::Json => HttpResponse::Ok()
            .content_type("application/json")
            .body(formatters::product_sales_stats_json(
                &mut stats,
                state.character_limit,
            )?),
        ResponseFormat::Markdown => HttpResponse::Ok()
            .content_type("text/markdown; charset=utf-8")
            .body(formatters::product_sales_stats_markdown(
                &stats,
                state.character_limit,
            )),
    };

    Ok(response)
}

pub async fn top_products(
    state: web::Data<AppState>,
    query: web::Query<TopProductsQuery>,
) -> Result<HttpResponse, AppError> {
    let order_states = parse_states(&query.order_states)?;

    let result = state
        .analytics
        .top_products(
            &query.date_from,
            &query.date_to,
            query.limit,
            query.sort_by,
            order_states,
        )
        .await?;

    let response = match query.format {
        ResponseFormat::Json => HttpResponse::Ok()
            .content_type("application/json")
            .body(formatters::top_products_json(&result, state.character_limit)?),
        ResponseFormat::Markdown => HttpResponse::Ok()
            .content_type("text/markdown; charset=utf-8")
            .body(formatters::top_products_markdown(
                &result,
                state.character_limit,
            )),
    };

    Ok(response)
}

pub async fn search_products(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
    let products = state
        .api
        .search_products(&query.q, query.limit, SEARCH_MAX_SCAN)
        .await?;

    let matches: Vec<serde_json::Value> = products
        .iter()
        .map(|product| {
            serde_json::json!({
                "id": product.id,
                "name": product.name.display(),
                "reference": product.reference,
            })
        })
        .collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "query": query.q.trim(),
        "count": matches.len(),
        "products": matches,
    })))
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "prestalytics"
    }))
}

/// Route table for the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/api/products/search", web::get().to(search_products))
        .route(
            "/api/products/{product_id}/sales-stats",
            web::get().to(product_sales_stats),
        )
        .route("/api/top-products", web::get().to(top_products));
}
