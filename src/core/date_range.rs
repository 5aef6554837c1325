use chrono::NaiveDate;
use serde::Serialize;

use super::error::{AppError, AppResult};

/// An inclusive closed date range `[from, to]` bounding which orders are
/// considered. Validated before any remote call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Parse and validate a `YYYY-MM-DD` pair.
    ///
    /// Rejects malformed dates, inverted ranges and spans longer than
    /// `max_days` (inclusive span, in days).
    pub fn parse(date_from: &str, date_to: &str, max_days: i64) -> AppResult<Self> {
        let from = NaiveDate::parse_from_str(date_from.trim(), "%Y-%m-%d").map_err(|_| {
            AppError::validation(format!("Invalid date_from format: {}", date_from))
        })?;
        let to = NaiveDate::parse_from_str(date_to.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::validation(format!("Invalid date_to format: {}", date_to)))?;

        if from > to {
            return Err(AppError::validation(
                "date_from must be before or equal to date_to",
            ));
        }

        let span = (to - from).num_days();
        if span > max_days {
            return Err(AppError::validation(format!(
                "Date range exceeds maximum of {} days ({} days requested)",
                max_days, span
            )));
        }

        Ok(Self { from, to })
    }

    /// Span in days, `0` for a single-day range.
    pub fn span_days(&self) -> i64 {
        (self.to - self.from).num_days()
    }

    /// Render as the webservice's bracketed date filter, `[from,to]`.
    pub fn to_date_filter(&self) -> String {
        format!("[{},{}]", self.from, self.to)
    }
}
