//! Memorial records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{JesaError, JesaResult};

/// A remembered person and the date of their passing.
///
/// The death date carries no time component. The death day counts as day 1
/// when computing day-offset rites, so the 49th-day rite is death + 48 days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memorial {
    /// Opaque token, unique within the active collection.
    pub id: String,
    pub name: String,
    pub death_date: NaiveDate,
    /// Free-form photo reference (e.g. a file path).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Memorial {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        death_date: NaiveDate,
        photo: Option<String>,
    ) -> Self {
        Memorial {
            id: id.into(),
            name: name.into(),
            death_date,
            photo,
        }
    }

    /// Create a memorial with a freshly generated id.
    pub fn create(name: impl Into<String>, death_date: NaiveDate, photo: Option<String>) -> Self {
        Memorial::new(Uuid::new_v4().to_string(), name, death_date, photo)
    }

    /// Parse a YYYY-MM-DD death date, rejecting malformed or missing input
    /// at the boundary instead of letting a bogus date propagate.
    pub fn parse_death_date(input: &str) -> JesaResult<NaiveDate> {
        NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
            .map_err(|_| JesaError::InvalidDate(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_death_date() {
        let date = Memorial::parse_death_date("2024-01-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn rejects_malformed_death_date() {
        for input in ["", "2024-13-01", "2023-02-29", "not-a-date", "01/01/2024"] {
            assert!(
                matches!(
                    Memorial::parse_death_date(input),
                    Err(JesaError::InvalidDate(_))
                ),
                "expected InvalidDate for {:?}",
                input
            );
        }
    }

    #[test]
    fn create_generates_unique_ids() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let a = Memorial::create("A", date, None);
        let b = Memorial::create("B", date, None);
        assert_ne!(a.id, b.id);
    }
}
