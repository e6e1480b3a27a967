//! Deterministic performance calculations
//!
//! Pure functions over score series and training sessions. Rounding follows
//! one rule everywhere: halves go up at the tenths digit, so
//! `[85.5, 90.5]` averages to exactly `88` and `-10.25` rounds to `-10.2`.

use serde::{Deserialize, Serialize};

use crate::models::TrainingSession;

/// Relative change (in percent) between half-averages that counts as a trend
const TREND_THRESHOLD_PCT: f64 = 5.0;

/// ---------------------------------------------------------------------------
/// Rounding
/// ---------------------------------------------------------------------------

/// Round to one decimal place, halves toward positive infinity
fn round_to_tenth(value: f64) -> f64 {
  (value * 10.0 + 0.5).floor() / 10.0
}

/// ---------------------------------------------------------------------------
/// Averages and change
/// ---------------------------------------------------------------------------

/// Arithmetic mean rounded to one decimal place; 0 for an empty series
pub fn average_score(scores: &[f64]) -> f64 {
  if scores.is_empty() {
    return 0.0;
  }
  let sum: f64 = scores.iter().sum();
  round_to_tenth(sum / scores.len() as f64)
}

/// Percent change from `previous` to `current`, one decimal place.
///
/// A zero baseline has no ratio: any growth counts as 100%, anything else 0.
pub fn percentage_change(current: f64, previous: f64) -> f64 {
  if previous == 0.0 {
    return if current > 0.0 { 100.0 } else { 0.0 };
  }
  round_to_tenth(((current - previous) / previous) * 100.0)
}

/// ---------------------------------------------------------------------------
/// Trend Direction
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
  Improving,
  Declining,
  #[default]
  Stable,
}

impl TrendDirection {
  pub fn as_str(&self) -> &'static str {
    match self {
      TrendDirection::Improving => "improving",
      TrendDirection::Declining => "declining",
      TrendDirection::Stable => "stable",
    }
  }

  /// Classify a percent change against the fixed +/-5% band
  pub fn from_change(change_pct: f64) -> Self {
    if change_pct > TREND_THRESHOLD_PCT {
      TrendDirection::Improving
    } else if change_pct < -TREND_THRESHOLD_PCT {
      TrendDirection::Declining
    } else {
      TrendDirection::Stable
    }
  }
}

impl std::fmt::Display for TrendDirection {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Compare the average of the first half (`floor(n/2)` points) with the
/// average of the rest. Fewer than two points is always stable.
pub fn trend_direction(series: &[f64]) -> TrendDirection {
  if series.len() < 2 {
    return TrendDirection::Stable;
  }

  let (first_half, second_half) = series.split_at(series.len() / 2);
  let first_avg = average_score(first_half);
  let second_avg = average_score(second_half);

  TrendDirection::from_change(percentage_change(second_avg, first_avg))
}

/// ---------------------------------------------------------------------------
/// Percentile Rank
/// ---------------------------------------------------------------------------

/// Share of the population strictly below `score`, 0-100.
///
/// Scores above every member rank 100; an empty population ranks 0.
pub fn percentile_rank(score: f64, population: &[f64]) -> u32 {
  if population.is_empty() {
    return 0;
  }

  let mut sorted = population.to_vec();
  sorted.sort_by(|a, b| a.total_cmp(b));

  match sorted.iter().position(|&s| s >= score) {
    Some(index) => ((index as f64 / sorted.len() as f64) * 100.0).round() as u32,
    None => 100,
  }
}

/// ---------------------------------------------------------------------------
/// Training Load
/// ---------------------------------------------------------------------------

/// Sum of `duration * intensity` across sessions, unrounded
pub fn weekly_training_load(sessions: &[TrainingSession]) -> f64 {
  sessions.iter().fold(0.0, |total, s| total + s.load())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
