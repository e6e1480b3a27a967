//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Mock data factories
//! - Directory fixtures
//! - Helper assertions

use chrono::NaiveDate;

use crate::config::AppConfig;
use crate::directory::AthleteDirectory;
use crate::models::{AthleteId, AthleteInput, AthleteRecord, AthleteStatus, TrainingSession};

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Create a mock athlete record for testing
pub fn mock_athlete(id: AthleteId, name: &str, sport: &str) -> AthleteRecord {
  let email = format!(
    "{}@sports.com",
    name.split_whitespace().next().unwrap_or("athlete").to_lowercase()
  );

  AthleteRecord {
    id,
    name: name.to_string(),
    email,
    phone: None,
    sport: sport.to_string(),
    position: None,
    status: AthleteStatus::Active,
    age: Some(24),
    height_cm: Some(180.0),
    weight_kg: Some(75.0),
    performance_score: 80.0,
    join_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid fixture date"),
  }
}

/// Create a complete, valid form payload
pub fn mock_athlete_input(name: &str, sport: &str) -> AthleteInput {
  AthleteInput {
    name: name.to_string(),
    email: format!("{}@sports.com", name.replace(' ', ".").to_lowercase()),
    sport: sport.to_string(),
    ..Default::default()
  }
}

/// The three-athlete directory used by the listing scenarios:
/// John Smith (Swimming, Active), Jane Doe (Athletics, Active),
/// Bob Wilson (Basketball, Injured)
pub fn three_athlete_directory() -> AthleteDirectory {
  let mut john = mock_athlete(1, "John Smith", "Swimming");
  john.performance_score = 87.0;

  let mut jane = mock_athlete(2, "Jane Doe", "Athletics");
  jane.performance_score = 92.0;

  let mut bob = mock_athlete(3, "Bob Wilson", "Basketball");
  bob.status = AthleteStatus::Injured;
  bob.performance_score = 75.0;

  AthleteDirectory::from_records(vec![john, jane, bob])
}

/// A week of sessions: (minutes, intensity)
pub fn mock_training_week() -> Vec<TrainingSession> {
  vec![
    TrainingSession::new(60.0, 0.8),
    TrainingSession::new(45.0, 0.9),
    TrainingSession::new(90.0, 0.6),
  ]
}

/// Config with no artificial latency
pub fn instant_config() -> AppConfig {
  AppConfig {
    login_delay_ms: 0,
    report_delay_ms: 0,
    ..AppConfig::default()
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::validation::validate_athlete;

  #[test]
  fn test_mock_factories_create_valid_data() {
    let athlete = mock_athlete(1, "John Smith", "Swimming");
    assert_eq!(athlete.email, "john@sports.com");

    let input = AthleteInput {
      status: Some(AthleteStatus::Active),
      ..mock_athlete_input("Jane Doe", "Athletics")
    };
    assert_eq!(input.email, "jane.doe@sports.com");
    assert!(validate_athlete(&input).is_valid);
  }

  #[test]
  fn test_three_athlete_directory_layout() {
    let directory = three_athlete_directory();
    assert_eq!(directory.len(), 3);
    assert_eq!(directory.get(3).map(|a| a.status), Some(AthleteStatus::Injured));
  }

  #[test]
  fn test_mock_training_week_load() {
    let load: f64 = mock_training_week().iter().map(|s| s.load()).sum();
    assert_approx_eq!(load, 142.5, 1e-9);
  }
}
