pub mod controllers;
pub mod formatters;
pub mod models;
pub mod services;

pub use models::{ProductSalesStats, SortBy, TopProductsResult};
pub use services::AnalyticsService;
