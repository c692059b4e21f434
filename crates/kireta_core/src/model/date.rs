//! Calendar dates used as check-list keys.
//!
//! # Responsibility
//! - Validate `YYYY-MM-DD` text before it reaches the store.
//! - Provide the UTC-midnight arithmetic behind "days since last checked".
//!
//! # Invariants
//! - A `DateString` always renders as zero-padded `YYYY-MM-DD`, so text
//!   order and chronological order agree.
//! - Day arithmetic is done against 00:00 UTC of the stored date, never
//!   local time.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const MILLIS_PER_DAY: i64 = 86_400_000;

static DATE_STRING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// Validation failures for model values built from untrusted text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelValidationError {
    /// Text is not shaped like `YYYY-MM-DD`.
    #[error("date `{0}` must use the YYYY-MM-DD form")]
    InvalidDateFormat(String),
    /// Text is shaped correctly but names no real day (e.g. `2023-02-30`).
    #[error("date `{0}` is not a valid calendar date")]
    InvalidCalendarDate(String),
}

/// Calendar date in `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateString(NaiveDate);

impl DateString {
    /// Parses strict `YYYY-MM-DD` text.
    ///
    /// # Errors
    /// - `InvalidDateFormat` when the text is not four-two-two digits.
    /// - `InvalidCalendarDate` when the digits do not name a real day.
    pub fn parse(value: &str) -> Result<Self, ModelValidationError> {
        if !DATE_STRING_RE.is_match(value) {
            return Err(ModelValidationError::InvalidDateFormat(value.to_owned()));
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ModelValidationError::InvalidCalendarDate(value.to_owned()))
    }

    /// Returns the UTC calendar date of `instant`.
    pub fn from_utc(instant: DateTime<Utc>) -> Self {
        Self(instant.date_naive())
    }

    /// 00:00:00 UTC on this date.
    pub fn utc_midnight(&self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }

    /// Whole days elapsed from this date's UTC midnight to `now`, rounded
    /// toward negative infinity.
    pub fn days_until(&self, now: DateTime<Utc>) -> i64 {
        (now - self.utc_midnight())
            .num_milliseconds()
            .div_euclid(MILLIS_PER_DAY)
    }
}

impl From<NaiveDate> for DateString {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl Display for DateString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for DateString {
    type Err = ModelValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateString {
    type Error = ModelValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateString> for String {
    fn from(value: DateString) -> Self {
        value.to_string()
    }
}
