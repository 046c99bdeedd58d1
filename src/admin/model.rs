//! Report query parameters and result rows

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ApiError, ApiResult};

/// Default number of rows returned by the best-clients report
pub const DEFAULT_BEST_CLIENTS_LIMIT: i64 = 2;

/// Query string shared by the admin reports
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ReportQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}

impl ReportQuery {
    /// Validate the query and resolve its date window
    pub fn window(&self) -> ApiResult<DateWindow> {
        self.validate()?;

        match (self.start.as_deref(), self.end.as_deref()) {
            (Some(start), Some(end)) if !start.trim().is_empty() && !end.trim().is_empty() => {
                DateWindow::parse(start, end)
            }
            _ => Err(ApiError::ValidationError(
                "Start and end dates are required".to_string(),
            )),
        }
    }

    pub fn limit_or_default(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_BEST_CLIENTS_LIMIT)
    }
}

/// Inclusive payment-date window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    /// Parse both bounds. Plain dates widen to the whole day so that an end
    /// date includes payments made during that day.
    pub fn parse(start: &str, end: &str) -> ApiResult<Self> {
        let start = parse_bound(start, NaiveTime::MIN)?;
        let end = parse_bound(end, end_of_day())?;

        if start > end {
            return Err(ApiError::ValidationError(
                "start must not be after end".to_string(),
            ));
        }

        Ok(Self { start, end })
    }
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN)
}

fn parse_bound(raw: &str, time_of_day: NaiveTime) -> ApiResult<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(time_of_day).and_utc())
        .map_err(|_| {
            ApiError::ValidationError(format!(
                "Invalid date '{}', expected YYYY-MM-DD or RFC 3339",
                raw
            ))
        })
}

/// Row of `GET /admin/best-profession`
#[derive(Debug, Clone, Serialize, sqlx::FromRow, PartialEq)]
pub struct BestProfession {
    pub profession: String,
    pub total_earned: f64,
}

/// Row of `GET /admin/best-clients`
#[derive(Debug, Clone, Serialize, sqlx::FromRow, PartialEq)]
pub struct BestClient {
    pub id: i64,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub total_paid: f64,
}
