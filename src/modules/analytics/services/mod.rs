pub mod analytics_service;

pub use analytics_service::{AnalyticsService, MAX_PRODUCTS_PER_REQUEST};
