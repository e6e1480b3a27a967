//! Trend analysis over monthly and weekly score series
//!
//! Every derived number goes through the shared calculations so the trend
//! screen and the dashboard agree on rounding and thresholds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculations::{
  average_score, percentage_change, trend_direction, weekly_training_load, TrendDirection,
};
use crate::formatting::{format_duration, format_signed_percentage, PERCENTAGE_DECIMALS};
use crate::models::TrainingSession;

/// ---------------------------------------------------------------------------
/// Metric Selection
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrendMetric {
  #[default]
  Overall,
  Speed,
  Endurance,
  Strength,
}

impl TrendMetric {
  pub const ALL: [TrendMetric; 4] = [
    TrendMetric::Overall,
    TrendMetric::Speed,
    TrendMetric::Endurance,
    TrendMetric::Strength,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      TrendMetric::Overall => "overall",
      TrendMetric::Speed => "speed",
      TrendMetric::Endurance => "endurance",
      TrendMetric::Strength => "strength",
    }
  }
}

impl std::fmt::Display for TrendMetric {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for TrendMetric {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "overall" | "performance" => Ok(Self::Overall),
      "speed" => Ok(Self::Speed),
      "endurance" => Ok(Self::Endurance),
      "strength" => Ok(Self::Strength),
      _ => Err(format!("Unknown trend metric: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Monthly Series
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
  pub month: String,
  pub performance: f64,
  pub speed: f64,
  pub endurance: f64,
  pub strength: f64,
  pub target: f64,
}

impl MonthlyPoint {
  pub fn value(&self, metric: TrendMetric) -> f64 {
    match metric {
      TrendMetric::Overall => self.performance,
      TrendMetric::Speed => self.speed,
      TrendMetric::Endurance => self.endurance,
      TrendMetric::Strength => self.strength,
    }
  }
}

/// Jun through Nov, target rising two points a month
pub fn demo_monthly_trends() -> Vec<MonthlyPoint> {
  [
    ("Jun", 72.0, 70.0, 68.0, 75.0, 75.0),
    ("Jul", 75.0, 73.0, 71.0, 78.0, 77.0),
    ("Aug", 78.0, 76.0, 74.0, 80.0, 79.0),
    ("Sep", 82.0, 80.0, 78.0, 84.0, 81.0),
    ("Oct", 88.0, 85.0, 82.0, 88.0, 83.0),
    ("Nov", 94.0, 91.0, 87.0, 92.0, 85.0),
  ]
  .into_iter()
  .map(|(month, performance, speed, endurance, strength, target)| MonthlyPoint {
    month: month.to_string(),
    performance,
    speed,
    endurance,
    strength,
    target,
  })
  .collect()
}

/// One metric's values in month order
pub fn metric_series(points: &[MonthlyPoint], metric: TrendMetric) -> Vec<f64> {
  points.iter().map(|p| p.value(metric)).collect()
}

/// Headline numbers for one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
  pub direction: TrendDirection,
  pub latest: Option<f64>,
  pub peak: Option<f64>,
  pub average: f64,
  /// Percent change from the first point to the latest
  pub change_pct: f64,
}

impl TrendAnalysis {
  pub fn compute(series: &[f64]) -> Self {
    let latest = series.last().copied();
    let peak = series.iter().copied().reduce(f64::max);
    let change_pct = match (series.first(), latest) {
      (Some(&first), Some(last)) => percentage_change(last, first),
      _ => 0.0,
    };

    Self {
      direction: trend_direction(series),
      latest,
      peak,
      average: average_score(series),
      change_pct,
    }
  }

  pub fn for_metric(points: &[MonthlyPoint], metric: TrendMetric) -> Self {
    Self::compute(&metric_series(points, metric))
  }
}

/// Months where the overall score met or beat the target
pub fn months_on_target(points: &[MonthlyPoint]) -> usize {
  points.iter().filter(|p| p.performance >= p.target).count()
}

/// ---------------------------------------------------------------------------
/// Category Comparison
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryComparison {
  pub category: String,
  pub current: f64,
  pub previous: f64,
  pub change: f64,
  pub status: TrendDirection,
}

impl CategoryComparison {
  /// Status derived from the two readings with the shared trend rule
  pub fn new(category: &str, current: f64, previous: f64) -> Self {
    Self::with_status(category, current, previous, trend_direction(&[previous, current]))
  }

  /// Keep a coach-assessed status; the change is still computed
  pub fn with_status(category: &str, current: f64, previous: f64, status: TrendDirection) -> Self {
    Self {
      category: category.to_string(),
      current,
      previous,
      change: percentage_change(current, previous),
      status,
    }
  }
}

/// Period-over-period rows as assessed on the trend screen
pub fn demo_category_comparison() -> Vec<CategoryComparison> {
  use TrendDirection::{Improving, Stable};
  vec![
    CategoryComparison::with_status("Sprint Performance", 94.0, 88.0, Improving),
    CategoryComparison::with_status("Endurance Capacity", 87.0, 78.0, Improving),
    CategoryComparison::with_status("Strength Metrics", 92.0, 88.0, Improving),
    CategoryComparison::with_status("Reaction Time", 85.0, 82.0, Stable),
    CategoryComparison::with_status("Flexibility Score", 78.0, 72.0, Improving),
  ]
}

/// ---------------------------------------------------------------------------
/// Skill Comparison
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillComparison {
  pub skill: String,
  pub current: f64,
  pub previous: f64,
  /// Signed, e.g. "+7.1%"
  pub change: String,
}

impl SkillComparison {
  pub fn new(skill: &str, current: f64, previous: f64) -> Self {
    Self {
      skill: skill.to_string(),
      current,
      previous,
      change: format_signed_percentage(percentage_change(current, previous), PERCENTAGE_DECIMALS),
    }
  }
}

/// Current vs previous period, one entry per skill axis
pub fn demo_skill_comparison() -> Vec<SkillComparison> {
  vec![
    SkillComparison::new("Speed", 91.0, 85.0),
    SkillComparison::new("Endurance", 87.0, 78.0),
    SkillComparison::new("Strength", 92.0, 88.0),
    SkillComparison::new("Agility", 85.0, 80.0),
    SkillComparison::new("Flexibility", 78.0, 72.0),
    SkillComparison::new("Recovery", 82.0, 75.0),
  ]
}

/// ---------------------------------------------------------------------------
/// Performance Insights
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightTrend {
  Up,
  Down,
  Neutral,
}

impl InsightTrend {
  fn from_delta(delta: f64) -> Self {
    if delta > 0.0 {
      InsightTrend::Up
    } else if delta < 0.0 {
      InsightTrend::Down
    } else {
      InsightTrend::Neutral
    }
  }
}

/// Headline card on the trend screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceInsight {
  pub label: String,
  pub value: f64,
  /// "+6" for point deltas, "+12%" for relative ones, "Oct 28" for dates
  pub change: String,
  pub trend: InsightTrend,
}

impl PerformanceInsight {
  /// Change shown as whole points
  pub fn points(label: &str, value: f64, previous: f64) -> Self {
    let delta = value - previous;
    let change = if delta > 0.0 {
      format!("+{}", delta)
    } else {
      delta.to_string()
    };
    Self {
      label: label.to_string(),
      value,
      change,
      trend: InsightTrend::from_delta(delta),
    }
  }

  /// Change shown as a whole-number percentage
  pub fn relative(label: &str, value: f64, previous: f64) -> Self {
    let pct = percentage_change(value, previous);
    Self {
      label: label.to_string(),
      value,
      change: format_signed_percentage(pct, 0),
      trend: InsightTrend::from_delta(pct),
    }
  }

  /// A value pinned to the day it was reached
  pub fn dated(label: &str, value: f64, on: NaiveDate) -> Self {
    Self {
      label: label.to_string(),
      value,
      change: on.format("%b %-d").to_string(),
      trend: InsightTrend::Neutral,
    }
  }
}

/// Cards for the selected athlete: score vs last month, best session, load and recovery
pub fn performance_insights(
  points: &[MonthlyPoint],
  peak: (f64, NaiveDate),
  training_load: (f64, f64),
  recovery_rate: (f64, f64),
) -> Vec<PerformanceInsight> {
  let mut insights = Vec::new();
  if let [.., previous, current] = points {
    insights.push(PerformanceInsight::points(
      "Current Score",
      current.performance,
      previous.performance,
    ));
  }
  insights.push(PerformanceInsight::dated("Peak Performance", peak.0, peak.1));
  insights.push(PerformanceInsight::relative(
    "Avg Training Load",
    training_load.0,
    training_load.1,
  ));
  insights.push(PerformanceInsight::relative(
    "Recovery Rate",
    recovery_rate.0,
    recovery_rate.1,
  ));
  insights
}

pub fn demo_performance_insights() -> Vec<PerformanceInsight> {
  let peak_day = NaiveDate::from_ymd_opt(2025, 10, 28).unwrap_or(NaiveDate::MIN);
  performance_insights(
    &demo_monthly_trends(),
    (96.0, peak_day),
    (82.0, 73.2),
    (88.0, 83.8),
  )
}

/// ---------------------------------------------------------------------------
/// Weekly Progress
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyProgress {
  pub week: String,
  pub hours: f64,
  pub sessions: u32,
  pub score: f64,
}

impl WeeklyProgress {
  pub fn new(week: &str, hours: f64, sessions: u32, score: f64) -> Self {
    Self {
      week: week.to_string(),
      hours,
      sessions,
      score,
    }
  }

  /// The week's hours spread evenly over its sessions, each at the week's
  /// score as intensity
  pub fn training_sessions(&self) -> Vec<TrainingSession> {
    if self.sessions == 0 {
      return Vec::new();
    }
    let minutes = self.hours * 60.0 / f64::from(self.sessions);
    let intensity = self.score / 100.0;
    (0..self.sessions)
      .map(|_| TrainingSession::new(minutes, intensity))
      .collect()
  }

  pub fn training_load(&self) -> f64 {
    weekly_training_load(&self.training_sessions())
  }

  /// "12h", "13h 30m"
  pub fn formatted_hours(&self) -> String {
    format_duration(Some(self.hours * 60.0))
  }
}

pub fn demo_weekly_progress() -> Vec<WeeklyProgress> {
  vec![
    WeeklyProgress::new("Week 1", 12.0, 5, 72.0),
    WeeklyProgress::new("Week 2", 14.0, 6, 75.0),
    WeeklyProgress::new("Week 3", 13.0, 5, 78.0),
    WeeklyProgress::new("Week 4", 16.0, 7, 82.0),
  ]
}
