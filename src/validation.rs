//! Field-level validation rules
//!
//! Every check is total: malformed or absent input yields `false` (or a
//! structured "missing fields" result), never an error. Callers decide
//! whether a failed check blocks a mutation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::formatting::parse_iso_date;
use crate::models::AthleteInput;

/// `local@domain.tld`, no whitespace, at least one `.` after the `@`
static EMAIL_PATTERN: LazyLock<Option<Regex>> =
  LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

const MIN_PASSWORD_LEN: usize = 8;

/// Required athlete fields, in reporting order
pub const REQUIRED_ATHLETE_FIELDS: [&str; 4] = ["name", "email", "sport", "status"];

pub fn is_valid_email(email: Option<&str>) -> bool {
  match (email, EMAIL_PATTERN.as_ref()) {
    (Some(e), Some(pattern)) => pattern.is_match(e),
    _ => false,
  }
}

pub fn is_valid_password(password: Option<&str>) -> bool {
  password.is_some_and(|p| p.chars().count() >= MIN_PASSWORD_LEN)
}

/// Score must be a number within [0, 100]. NaN fails both bounds.
pub fn is_valid_score(score: f64) -> bool {
  (0.0..=100.0).contains(&score)
}

/// Score check for untyped input (form or JSON payloads).
///
/// Only JSON numbers qualify; numeric strings such as `"85"` are rejected.
pub fn is_valid_score_value(value: &serde_json::Value) -> bool {
  value.as_f64().is_some_and(is_valid_score)
}

/// True iff both dates parse and `start <= end`
pub fn is_valid_date_range(start: &str, end: &str) -> bool {
  match (parse_iso_date(start), parse_iso_date(end)) {
    (Some(s), Some(e)) => s <= e,
    _ => false,
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteValidation {
  pub is_valid: bool,
  pub missing_fields: Vec<String>,
}

pub fn validate_athlete(input: &AthleteInput) -> AthleteValidation {
  let present = [
    !input.name.is_empty(),
    !input.email.is_empty(),
    !input.sport.is_empty(),
    input.status.is_some(),
  ];

  let missing_fields: Vec<String> = REQUIRED_ATHLETE_FIELDS
    .iter()
    .zip(present)
    .filter(|(_, ok)| !ok)
    .map(|(field, _)| field.to_string())
    .collect();

  AthleteValidation {
    is_valid: missing_fields.is_empty(),
    missing_fields,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::AthleteStatus;
  use serde_json::json;

  #[test]
  fn test_valid_emails() {
    assert!(is_valid_email(Some("coach@sports.com")));
    assert!(is_valid_email(Some("athlete.name@university.edu")));
    assert!(is_valid_email(Some("analyst123@analytics.org")));
  }

  #[test]
  fn test_invalid_emails() {
    assert!(!is_valid_email(Some("")));
    assert!(!is_valid_email(Some("invalid")));
    assert!(!is_valid_email(Some("missing@domain")));
    assert!(!is_valid_email(Some("@nodomain.com")));
    assert!(!is_valid_email(Some("spaces in@email.com")));
    assert!(!is_valid_email(Some("two@@signs.com")));
    assert!(!is_valid_email(None));
  }

  #[test]
  fn test_password_length() {
    assert!(is_valid_password(Some("password123")));
    assert!(is_valid_password(Some("12345678")));
    assert!(is_valid_password(Some("securePassword!")));

    assert!(!is_valid_password(Some("short")));
    assert!(!is_valid_password(Some("1234567")));
    assert!(!is_valid_password(Some("")));
    assert!(!is_valid_password(None));
  }

  #[test]
  fn test_validate_complete_athlete() {
    let input = AthleteInput {
      name: "John Smith".to_string(),
      email: "john@sports.com".to_string(),
      sport: "Swimming".to_string(),
      status: Some(AthleteStatus::Active),
      ..Default::default()
    };

    let result = validate_athlete(&input);
    assert!(result.is_valid);
    assert!(result.missing_fields.is_empty());
  }

  #[test]
  fn test_validate_lists_missing_fields() {
    let input = AthleteInput {
      name: "John Smith".to_string(),
      email: "john@sports.com".to_string(),
      ..Default::default()
    };

    let result = validate_athlete(&input);
    assert!(!result.is_valid);
    assert_eq!(result.missing_fields, vec!["sport", "status"]);
  }

  #[test]
  fn test_validate_empty_input_reports_all_in_order() {
    let result = validate_athlete(&AthleteInput::default());
    assert!(!result.is_valid);
    assert_eq!(result.missing_fields, vec!["name", "email", "sport", "status"]);
  }

  #[test]
  fn test_score_range() {
    assert!(is_valid_score(0.0));
    assert!(is_valid_score(50.0));
    assert!(is_valid_score(100.0));
    assert!(is_valid_score(85.5));

    assert!(!is_valid_score(-1.0));
    assert!(!is_valid_score(101.0));
    assert!(!is_valid_score(150.0));
    assert!(!is_valid_score(f64::NAN));
  }

  #[test]
  fn test_score_value_rejects_non_numbers() {
    assert!(is_valid_score_value(&json!(85)));
    assert!(is_valid_score_value(&json!(85.5)));
    assert!(!is_valid_score_value(&json!("85")));
    assert!(!is_valid_score_value(&json!(null)));
    assert!(!is_valid_score_value(&json!(101)));
  }

  #[test]
  fn test_date_range() {
    assert!(is_valid_date_range("2025-01-01", "2025-12-31"));
    assert!(is_valid_date_range("2025-11-01", "2025-11-30"));
    assert!(is_valid_date_range("2025-11-15", "2025-11-15"));
    assert!(!is_valid_date_range("2025-12-31", "2025-01-01"));
    assert!(!is_valid_date_range("not-a-date", "2025-01-01"));
  }
}
