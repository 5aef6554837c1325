use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Upstream webservice failures are classified here once (auth, rate limit,
/// timeout, generic) so every caller sees the same taxonomy. Absence of list
/// results is never an error; absence of a single entity is `ProductNotFound`.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for request parameters (dates, limits, states)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A specific product does not exist in the shop catalog
    #[error("Product with ID {0} not found")]
    ProductNotFound(u64),

    /// The webservice rejected our credentials (HTTP 401)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The webservice throttled us (HTTP 429)
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// An outbound request exceeded the configured timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Any other webservice failure (non-2xx, connection refused, ...)
    #[error("Webservice error: {0}")]
    Remote(String),

    /// Malformed data from the webservice (unparseable price/quantity,
    /// unexpected payload shape). Fatal to the containing call.
    #[error("Malformed webservice response: {0}")]
    Decode(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Remediation hint shown to the caller alongside the message
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            AppError::ProductNotFound(_) => {
                Some("Verify the product_id parameter exists in the shop catalog")
            }
            AppError::Authentication(_) => {
                Some("Verify the PRESTASHOP_WS_KEY environment variable")
            }
            AppError::RateLimited(_) => Some("Wait before making more requests"),
            AppError::Timeout(_) => {
                Some("Try reducing the date range or the limit parameter")
            }
            AppError::Remote(_) => Some("Try again later"),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(err.to_string())
        } else if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Remote(err.to_string())
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": self.to_string(),
                "code": status_code.as_u16(),
                "suggestion": self.suggestion(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Authentication(_) => StatusCode::BAD_GATEWAY,
            AppError::RateLimited(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Remote(_) => StatusCode::BAD_GATEWAY,
            AppError::Decode(_) => StatusCode::BAD_GATEWAY,
            AppError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn authentication(msg: impl Into<String>) -> Self {
        AppError::Authentication(msg.into())
    }

    pub fn rate_limited(msg: impl Into<String>) -> Self {
        AppError::RateLimited(msg.into())
    }

    pub fn remote(msg: impl Into<String>) -> Self {
        AppError::Remote(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        AppError::Decode(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}
