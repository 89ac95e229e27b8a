use chrono::{Duration, NaiveDate};
use std::fmt;
use thiserror::Error;

/// Date format accepted on the command line and sent to 17Lands
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days of history requested when no start date is given
pub const DEFAULT_LOOKBACK_DAYS: i64 = 365;

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Start date {start} is after end date {end}")]
pub struct InvalidDateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Inclusive date window for the win rate statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidDateRange> {
        if start > end {
            return Err(InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Fill in missing bounds: the end defaults to `today` and the start to
    /// `DEFAULT_LOOKBACK_DAYS` before `today`.
    pub fn resolve(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Self, InvalidDateRange> {
        let end = end.unwrap_or(today);
        let start = start.unwrap_or(today - Duration::days(DEFAULT_LOOKBACK_DAYS));
        Self::new(start, end)
    }

    pub fn start_str(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start_str(), self.end_str())
    }
}
