//! Display formatting for raw values
//!
//! Each function is total with a fixed fallback for absent or malformed
//! input: `"0%"`, `"0m"`, `""`, `"Unknown"` and `"N/A"`.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Decimal places used for percentages unless a caller asks otherwise
pub const PERCENTAGE_DECIMALS: usize = 1;

/// ---------------------------------------------------------------------------
/// Numbers and durations
/// ---------------------------------------------------------------------------

/// Widest precision `format_percentage` will honour
pub const MAX_PERCENTAGE_DECIMALS: usize = 100;

/// Fixed-point percentage, halves rounded away from zero ("85.56%", "86%").
///
/// Every finite value prints; magnitudes too large to pre-round are printed
/// as-is. `decimals` is capped at `MAX_PERCENTAGE_DECIMALS`.
pub fn format_percentage(value: Option<f64>, decimals: usize) -> String {
  let value = match value {
    Some(v) if v.is_finite() => v,
    _ => return "0%".to_string(),
  };

  let decimals = decimals.min(MAX_PERCENTAGE_DECIMALS);
  let factor = 10f64.powi(decimals as i32);
  let scaled = value * factor;
  let rounded = if scaled.is_finite() {
    scaled.round() / factor
  } else {
    value
  };
  format!("{:.*}%", decimals, rounded)
}

/// Percentage with an explicit "+" on gains ("+6.8%", "-3.1%", "0.0%")
pub fn format_signed_percentage(change: f64, decimals: usize) -> String {
  let formatted = format_percentage(Some(change), decimals);
  if change > 0.0 {
    format!("+{}", formatted)
  } else {
    formatted
  }
}

/// "45m", "2h", "1h 30m", "1h 30.5m"; zero, negative, non-finite or absent
/// minutes give "0m"
pub fn format_duration(minutes: Option<f64>) -> String {
  let minutes = match minutes {
    Some(m) if m.is_finite() && m > 0.0 => m,
    _ => return "0m".to_string(),
  };

  let hours = (minutes / 60.0).floor();
  let mins = minutes % 60.0;
  if hours == 0.0 {
    format!("{}m", mins)
  } else if mins == 0.0 {
    format!("{}h", hours)
  } else {
    format!("{}h {}m", hours, mins)
  }
}

/// Value with its display unit, e.g. "175 cm". Absent values render as "-".
pub fn format_measurement(value: Option<f64>, unit: &str) -> String {
  match value {
    Some(v) if v.is_finite() => format!("{} {}", v, unit),
    _ => "-".to_string(),
  }
}

/// ---------------------------------------------------------------------------
/// Dates
/// ---------------------------------------------------------------------------

/// Parse `YYYY-MM-DD`, or an RFC 3339 timestamp reduced to its date
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
  let s = s.trim();
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .ok()
    .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// "Nov 15, 2025". Empty, absent or unparseable input gives "".
pub fn format_date(iso: Option<&str>) -> String {
  iso
    .and_then(parse_iso_date)
    .map(|d| d.format("%b %-d, %Y").to_string())
    .unwrap_or_default()
}

/// ---------------------------------------------------------------------------
/// Status and score labels
/// ---------------------------------------------------------------------------

/// Case-insensitive status code to display label
pub fn format_athlete_status(code: Option<&str>) -> &'static str {
  match code.map(str::to_lowercase).as_deref() {
    Some("active") => "Active",
    Some("injured") => "Injured",
    Some("inactive") => "Inactive",
    Some("recovery") => "In Recovery",
    _ => "Unknown",
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLabel {
  Excellent,
  Good,
  Average,
  #[serde(rename = "Needs Improvement")]
  NeedsImprovement,
}

impl ScoreLabel {
  /// Inclusive lower bounds, checked from the top
  pub fn from_score(score: f64) -> Self {
    match score {
      s if s >= 90.0 => ScoreLabel::Excellent,
      s if s >= 75.0 => ScoreLabel::Good,
      s if s >= 60.0 => ScoreLabel::Average,
      _ => ScoreLabel::NeedsImprovement,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      ScoreLabel::Excellent => "Excellent",
      ScoreLabel::Good => "Good",
      ScoreLabel::Average => "Average",
      ScoreLabel::NeedsImprovement => "Needs Improvement",
    }
  }

  pub fn color(&self) -> &'static str {
    match self {
      ScoreLabel::Excellent => "green",
      ScoreLabel::Good => "blue",
      ScoreLabel::Average => "yellow",
      ScoreLabel::NeedsImprovement => "red",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreRating {
  pub value: f64,
  pub label: ScoreLabel,
  pub color: &'static str,
}

/// Serializes as the rating object, or as the bare string `"N/A"`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ScoreClassification {
  #[serde(rename = "N/A")]
  NotAvailable,
  #[serde(untagged)]
  Rated(ScoreRating),
}

impl ScoreClassification {
  pub fn rating(&self) -> Option<&ScoreRating> {
    match self {
      ScoreClassification::Rated(r) => Some(r),
      ScoreClassification::NotAvailable => None,
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      ScoreClassification::Rated(r) => r.label.as_str(),
      ScoreClassification::NotAvailable => "N/A",
    }
  }
}

impl std::fmt::Display for ScoreClassification {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.label())
  }
}

pub fn classify_performance_score(score: Option<f64>) -> ScoreClassification {
  match score {
    Some(value) if !value.is_nan() => {
      let label = ScoreLabel::from_score(value);
      ScoreClassification::Rated(ScoreRating {
        value,
        label,
        color: label.color(),
      })
    }
    _ => ScoreClassification::NotAvailable,
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
