use crate::types::errors::DateError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const LABEL_FORMAT: &str = "%m-%d";

/// Point in time a transaction was booked at, normalized to UTC.
///
/// Accepts either a plain ISO-8601 date (`2024-05-01`, taken as midnight) or an RFC 3339
/// timestamp. Ordering is chronological down to the second, so two transactions on the same
/// day are ordered by their time when one is given.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TransactionDate(NaiveDateTime);

impl TransactionDate {
    /// Short `MM-DD` label used on chart axes.
    pub fn label(&self) -> String {
        self.0.format(LABEL_FORMAT).to_string()
    }
}

impl Display for TransactionDate {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        if self.0.time() == NaiveTime::MIN {
            write!(formatter, "{}", self.0.format(DATE_FORMAT))
        } else {
            write!(formatter, "{}", self.0.format(TIMESTAMP_FORMAT))
        }
    }
}

impl FromStr for TransactionDate {
    type Err = DateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(DateError::InvalidFormat("Value is an empty string".to_string()));
        }

        if value.contains('T') {
            let timestamp = DateTime::parse_from_rfc3339(value)?;
            return Ok(TransactionDate(timestamp.naive_utc()));
        }

        let date = NaiveDate::parse_from_str(value, DATE_FORMAT)?;

        Ok(TransactionDate(date.and_time(NaiveTime::MIN)))
    }
}

impl<'de> Deserialize<'de> for TransactionDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        TransactionDate::from_str(&value).map_err(de::Error::custom)
    }
}
