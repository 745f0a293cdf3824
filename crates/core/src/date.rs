//! Calendar date value object used for issuance and sale dates.

use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar day, rendered and parsed as `YYYY-MM-DD`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BusinessDate(NaiveDate);

impl BusinessDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build from year/month/day; invalid calendar dates are rejected.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DomainError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                DomainError::invalid_argument(format!(
                    "not a calendar date: {year:04}-{month:02}-{day:02}"
                ))
            })
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for BusinessDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for BusinessDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for BusinessDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map_err(|e| DomainError::invalid_argument(format!("date {s:?}: {e}")))?;
        Ok(Self(date))
    }
}

impl TryFrom<String> for BusinessDate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BusinessDate> for String {
    fn from(value: BusinessDate) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_zero_padded_iso_day() {
        let date = BusinessDate::from_ymd(2024, 1, 5).unwrap();
        assert_eq!(date.to_string(), "2024-01-05");
    }

    #[test]
    fn parses_its_own_rendering() {
        let date: BusinessDate = "2024-01-15".parse().unwrap();
        assert_eq!(date, BusinessDate::from_ymd(2024, 1, 15).unwrap());
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(matches!(
            "15/01/2024".parse::<BusinessDate>(),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!(BusinessDate::from_ymd(2024, 2, 30).is_err());
    }

    #[test]
    fn serializes_as_string() {
        let date = BusinessDate::from_ymd(2024, 12, 31).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2024-12-31\"");
    }
}
