//! Athlete performance reports
//!
//! A report is built from the athlete's directory record plus the period's
//! weekly scores. `generate_report` is pure; `generate_report_delayed` wraps
//! the same build in the configured artificial latency.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculations::percentage_change;
use crate::config::AppConfig;
use crate::dashboard::NamedValue;
use crate::directory::AthleteDirectory;
use crate::formatting::{
  classify_performance_score, format_date, format_duration, format_measurement,
  format_signed_percentage, ScoreClassification, PERCENTAGE_DECIMALS,
};
use crate::models::AthleteRecord;
use crate::pending::Pending;

const TRAINING_SESSIONS: u32 = 24;
const TRAINING_MINUTES: f64 = 56.0 * 60.0;
const PERSONAL_RECORDS: u32 = 3;
const GOALS_MET: u32 = 4;
const GOALS_SET: u32 = 5;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ReportError {
  #[error("No athlete named {0}")]
  AthleteNotFound(String),

  #[error("Report generation was cancelled")]
  Cancelled,
}

/// ---------------------------------------------------------------------------
/// Request
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
  #[default]
  Comprehensive,
  Summary,
  TrainingFocus,
  CompetitionReady,
}

impl ReportType {
  pub const ALL: [ReportType; 4] = [
    ReportType::Comprehensive,
    ReportType::Summary,
    ReportType::TrainingFocus,
    ReportType::CompetitionReady,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      ReportType::Comprehensive => "Comprehensive",
      ReportType::Summary => "Summary",
      ReportType::TrainingFocus => "Training Focus",
      ReportType::CompetitionReady => "Competition Ready",
    }
  }

  fn includes_weekly_scores(&self) -> bool {
    !matches!(self, ReportType::Summary)
  }

  fn includes_achievements(&self) -> bool {
    matches!(self, ReportType::Comprehensive | ReportType::CompetitionReady)
  }
}

impl std::fmt::Display for ReportType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for ReportType {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ReportType::ALL
      .into_iter()
      .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| format!("Unknown report type: {}", s))
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
  /// Athlete name as listed in the directory
  pub athlete: String,
  pub period: String,
  pub report_type: ReportType,
}

impl ReportRequest {
  pub fn new(athlete: &str, period: &str, report_type: ReportType) -> Self {
    Self {
      athlete: athlete.to_string(),
      period: period.to_string(),
      report_type,
    }
  }
}

impl Default for ReportRequest {
  fn default() -> Self {
    Self::new("Sarah Johnson", "November 2025", ReportType::Comprehensive)
  }
}

/// ---------------------------------------------------------------------------
/// Report Contents
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
  High,
  Medium,
  Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyScore {
  pub week: String,
  pub score: f64,
  pub target: f64,
}

impl WeeklyScore {
  pub fn on_target(&self) -> bool {
    self.score >= self.target
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
  pub title: String,
  /// Display form, e.g. "Nov 15, 2025"
  pub date: String,
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
  pub priority: Priority,
  pub area: String,
  pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
  pub athlete: String,
  pub initials: String,
  pub sport: String,
  pub position: Option<String>,
  /// "175 cm", or "-" when unknown
  pub height: String,
  pub weight: String,
  pub period: String,
  pub overall_score: f64,
  pub classification: ScoreClassification,
  /// Signed, e.g. "+6.8%"
  pub improvement: String,
  pub training_sessions: u32,
  pub training_time: String,
  pub personal_records: u32,
  pub goals_achieved: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceReport {
  pub report_type: ReportType,
  pub summary: ReportSummary,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub weekly_scores: Option<Vec<WeeklyScore>>,
  pub metrics: Vec<NamedValue>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub achievements: Option<Vec<Achievement>>,
  /// Highest priority first
  pub recommendations: Vec<Recommendation>,
}

impl PerformanceReport {
  pub fn to_json(&self) -> String {
    serde_json::to_string_pretty(self).unwrap_or_default()
  }
}

fn period_weekly_scores() -> Vec<WeeklyScore> {
  [(88.0, 85.0), (90.0, 86.0), (92.0, 87.0), (94.0, 88.0)]
    .into_iter()
    .enumerate()
    .map(|(i, (score, target))| WeeklyScore {
      week: format!("Week {}", i + 1),
      score,
      target,
    })
    .collect()
}

fn period_metrics() -> Vec<NamedValue> {
  vec![
    NamedValue::new("Speed", 91.0),
    NamedValue::new("Endurance", 87.0),
    NamedValue::new("Strength", 92.0),
    NamedValue::new("Agility", 85.0),
    NamedValue::new("Recovery", 82.0),
  ]
}

fn period_achievements() -> Vec<Achievement> {
  [
    ("New 100m Personal Best", "2025-11-15", "Achieved 10.82s in sprint trials"),
    ("Endurance Milestone", "2025-11-10", "Completed 5K under target time"),
    ("Strength Goal Met", "2025-11-05", "Reached 1.5x bodyweight squat"),
  ]
  .into_iter()
  .map(|(title, date, description)| Achievement {
    title: title.to_string(),
    date: format_date(Some(date)),
    description: description.to_string(),
  })
  .collect()
}

fn recommendations() -> Vec<Recommendation> {
  let mut recs = vec![
    Recommendation {
      priority: Priority::Medium,
      area: "Flexibility".to_string(),
      recommendation: "Add 15 min daily stretching routine".to_string(),
    },
    Recommendation {
      priority: Priority::Low,
      area: "Nutrition".to_string(),
      recommendation: "Consider increasing protein intake by 10%".to_string(),
    },
    Recommendation {
      priority: Priority::High,
      area: "Recovery".to_string(),
      recommendation: "Increase rest days between high-intensity sessions".to_string(),
    },
  ];
  recs.sort_by_key(|r| r.priority);
  recs
}

/// ---------------------------------------------------------------------------
/// Generation
/// ---------------------------------------------------------------------------

fn build_report(athlete: &AthleteRecord, request: &ReportRequest) -> PerformanceReport {
  let weekly_scores = period_weekly_scores();
  let improvement = match (weekly_scores.first(), weekly_scores.last()) {
    (Some(first), Some(last)) => percentage_change(last.score, first.score),
    _ => 0.0,
  };

  let summary = ReportSummary {
    athlete: athlete.name.clone(),
    initials: athlete.initials(),
    sport: athlete.sport.clone(),
    position: athlete.position.clone(),
    height: format_measurement(athlete.height_cm, "cm"),
    weight: format_measurement(athlete.weight_kg, "kg"),
    period: request.period.clone(),
    overall_score: athlete.performance_score,
    classification: classify_performance_score(Some(athlete.performance_score)),
    improvement: format_signed_percentage(improvement, PERCENTAGE_DECIMALS),
    training_sessions: TRAINING_SESSIONS,
    training_time: format_duration(Some(TRAINING_MINUTES)),
    personal_records: PERSONAL_RECORDS,
    goals_achieved: format!("{}/{}", GOALS_MET, GOALS_SET),
  };

  let report_type = request.report_type;
  PerformanceReport {
    report_type,
    summary,
    weekly_scores: report_type.includes_weekly_scores().then_some(weekly_scores),
    metrics: period_metrics(),
    achievements: report_type
      .includes_achievements()
      .then(period_achievements),
    recommendations: recommendations(),
  }
}

/// Build a report for the named athlete
pub fn generate_report(
  directory: &AthleteDirectory,
  request: &ReportRequest,
) -> Result<PerformanceReport, ReportError> {
  let athlete = directory.find_by_name(&request.athlete).ok_or_else(|| {
    warn!(athlete = %request.athlete, "Report requested for unknown athlete");
    ReportError::AthleteNotFound(request.athlete.clone())
  })?;

  let report = build_report(athlete, request);
  info!(
    athlete = %athlete.name,
    report_type = %request.report_type,
    period = %request.period,
    "Report generated"
  );
  Ok(report)
}

/// Resolve the report after the configured delay.
///
/// The athlete is looked up when the request is made, so later directory
/// edits do not affect a report already in flight.
pub fn generate_report_delayed(
  config: &AppConfig,
  directory: &AthleteDirectory,
  request: ReportRequest,
) -> Pending<Result<PerformanceReport, ReportError>> {
  let snapshot = AthleteDirectory::from_records(
    directory.find_by_name(&request.athlete).cloned().into_iter().collect(),
  );
  Pending::resolve_after(config.report_delay(), move || {
    generate_report(&snapshot, &request)
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::formatting::ScoreLabel;
  use crate::models::AthleteInput;
  use crate::test_utils::instant_config;

  fn demo_directory() -> AthleteDirectory {
    AthleteDirectory::with_demo_roster()
  }

  #[test]
  fn test_comprehensive_report() {
    // Arrange
    let request = ReportRequest::default();

    // Act
    let report = generate_report(&demo_directory(), &request).unwrap();

    // Assert
    let summary = &report.summary;
    assert_eq!(summary.athlete, "Sarah Johnson");
    assert_eq!(summary.initials, "SJ");
    assert_eq!(summary.sport, "Track & Field");
    assert_eq!(summary.position.as_deref(), Some("Sprinter"));
    assert_eq!(summary.period, "November 2025");
    assert_eq!(summary.overall_score, 94.0);
    assert_eq!(summary.classification.label(), "Excellent");
    assert_eq!(summary.improvement, "+6.8%");
    assert_eq!(summary.training_time, "56h");
    assert_eq!(summary.goals_achieved, "4/5");

    assert_eq!(report.weekly_scores.as_ref().map(Vec::len), Some(4));
    assert_eq!(report.metrics.len(), 5);
    assert_eq!(report.achievements.as_ref().map(Vec::len), Some(3));
  }

  #[test]
  fn test_report_uses_athlete_record() {
    let request = ReportRequest::new("James Rodriguez", "October 2025", ReportType::Comprehensive);

    let report = generate_report(&demo_directory(), &request).unwrap();

    assert_eq!(report.summary.sport, "Basketball");
    assert_eq!(report.summary.overall_score, 85.0);
    assert_eq!(
      report.summary.classification.rating().map(|r| r.label),
      Some(ScoreLabel::Good)
    );
  }

  #[test]
  fn test_summary_report_omits_detail_sections() {
    let request = ReportRequest::new("Emma Williams", "November 2025", ReportType::Summary);

    let report = generate_report(&demo_directory(), &request).unwrap();

    assert!(report.weekly_scores.is_none());
    assert!(report.achievements.is_none());
    assert!(!report.recommendations.is_empty());
  }

  #[test]
  fn test_training_focus_omits_achievements() {
    let request = ReportRequest::new("Emma Williams", "November 2025", ReportType::TrainingFocus);

    let report = generate_report(&demo_directory(), &request).unwrap();

    assert!(report.weekly_scores.is_some());
    assert!(report.achievements.is_none());
  }

  #[test]
  fn test_unknown_athlete() {
    let request = ReportRequest::new("Nobody", "November 2025", ReportType::Summary);

    assert_eq!(
      generate_report(&demo_directory(), &request),
      Err(ReportError::AthleteNotFound("Nobody".to_string()))
    );
  }

  #[test]
  fn test_recommendations_ordered_by_priority() {
    let report = generate_report(&demo_directory(), &ReportRequest::default()).unwrap();

    let priorities: Vec<Priority> = report.recommendations.iter().map(|r| r.priority).collect();
    assert_eq!(priorities, vec![Priority::High, Priority::Medium, Priority::Low]);
    assert_eq!(report.recommendations[0].area, "Recovery");
  }

  #[test]
  fn test_achievement_dates_are_display_formatted() {
    let report = generate_report(&demo_directory(), &ReportRequest::default()).unwrap();
    let dates: Vec<&str> = report
      .achievements
      .iter()
      .flatten()
      .map(|a| a.date.as_str())
      .collect();
    assert_eq!(dates, vec!["Nov 15, 2025", "Nov 10, 2025", "Nov 5, 2025"]);
  }

  #[test]
  fn test_weekly_scores_beat_target() {
    assert!(period_weekly_scores().iter().all(WeeklyScore::on_target));
  }

  #[test]
  fn test_summary_measurements() {
    let report = generate_report(&demo_directory(), &ReportRequest::default()).unwrap();
    assert_eq!(report.summary.height, "175 cm");
    assert_eq!(report.summary.weight, "62 kg");

    let mut directory = demo_directory();
    let input = AthleteInput {
      height_cm: None,
      weight_kg: None,
      ..AthleteInput::from_record(directory.get(5).unwrap())
    };
    directory.update(5, input).unwrap();
    let request = ReportRequest::new("Lisa Thompson", "November 2025", ReportType::Summary);
    let report = generate_report(&directory, &request).unwrap();
    assert_eq!(report.summary.height, "-");
    assert_eq!(report.summary.weight, "-");
  }

  #[test]
  fn test_report_type_from_str() {
    assert_eq!("Training Focus".parse::<ReportType>(), Ok(ReportType::TrainingFocus));
    assert_eq!("competition ready".parse::<ReportType>(), Ok(ReportType::CompetitionReady));
    assert!("Weekly".parse::<ReportType>().is_err());
  }

  #[test]
  fn test_to_json_skips_omitted_sections() {
    let request = ReportRequest::new("Sarah Johnson", "November 2025", ReportType::Summary);
    let json = generate_report(&demo_directory(), &request).unwrap().to_json();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("weekly_scores").is_none());
    assert!(value.get("achievements").is_none());
    assert_eq!(value["summary"]["classification"]["label"], "Excellent");
    assert_eq!(value["report_type"], "summary");
  }

  #[tokio::test(start_paused = true)]
  async fn test_delayed_report_waits_configured_delay() {
    let config = AppConfig::default();
    let start = tokio::time::Instant::now();

    let pending = generate_report_delayed(&config, &demo_directory(), ReportRequest::default());
    let report = pending.wait().await.unwrap().unwrap();

    assert_eq!(report.summary.athlete, "Sarah Johnson");
    assert!(start.elapsed() >= config.report_delay());
  }

  #[tokio::test]
  async fn test_delayed_report_unknown_athlete() {
    let request = ReportRequest::new("Nobody", "November 2025", ReportType::Summary);
    let pending = generate_report_delayed(&instant_config(), &demo_directory(), request);

    assert_eq!(
      pending.wait().await.unwrap(),
      Err(ReportError::AthleteNotFound("Nobody".to_string()))
    );
  }

  #[tokio::test(start_paused = true)]
  async fn test_cancelled_report() {
    let pending =
      generate_report_delayed(&AppConfig::default(), &demo_directory(), ReportRequest::default());
    pending.cancel();

    let result = pending.wait().await.map_err(|_| ReportError::Cancelled);
    assert!(matches!(result, Err(ReportError::Cancelled)));
  }
}
