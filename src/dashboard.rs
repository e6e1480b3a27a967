//! Performance dashboard summary
//!
//! Derives the headline numbers for the team dashboard from a week of daily
//! performance readings and the athlete directory.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::calculations::{
  average_score, percentage_change, percentile_rank, trend_direction, TrendDirection,
};
use crate::directory::AthleteDirectory;
use crate::formatting::{classify_performance_score, format_signed_percentage, ScoreLabel};
use crate::models::{AthleteId, AthleteStatus};

const TOP_PERFORMER_COUNT: usize = 3;

/// ---------------------------------------------------------------------------
/// Inputs
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPerformance {
  pub day: String,
  pub performance: f64,
  pub target: f64,
}

/// Named value on a 0-100 scale (metric breakdowns, training shares)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
  pub name: String,
  pub value: f64,
}

impl NamedValue {
  pub fn new(name: &str, value: f64) -> Self {
    Self {
      name: name.to_string(),
      value,
    }
  }
}

/// The week shown on the demo dashboard
pub fn demo_week() -> Vec<DailyPerformance> {
  [
    ("Mon", 78.0),
    ("Tue", 82.0),
    ("Wed", 75.0),
    ("Thu", 88.0),
    ("Fri", 92.0),
    ("Sat", 85.0),
    ("Sun", 79.0),
  ]
  .into_iter()
  .map(|(day, performance)| DailyPerformance {
    day: day.to_string(),
    performance,
    target: 80.0,
  })
  .collect()
}

pub fn demo_metric_breakdown() -> Vec<NamedValue> {
  vec![
    NamedValue::new("Speed", 85.0),
    NamedValue::new("Endurance", 72.0),
    NamedValue::new("Strength", 90.0),
    NamedValue::new("Agility", 78.0),
  ]
}

/// Share of training time per category, in percent
pub fn demo_training_distribution() -> Vec<NamedValue> {
  vec![
    NamedValue::new("Cardio", 30.0),
    NamedValue::new("Strength", 25.0),
    NamedValue::new("Flexibility", 20.0),
    NamedValue::new("Skills", 25.0),
  ]
}

/// Recent score history per athlete, oldest first
pub type ScoreHistory = HashMap<AthleteId, Vec<f64>>;

/// History for the top of the demo roster
pub fn demo_score_history() -> ScoreHistory {
  HashMap::from([
    (1, vec![86.0, 89.0, 91.0, 94.0]),
    (2, vec![88.0, 90.0, 89.0, 91.0]),
    (3, vec![84.0, 85.0, 87.0, 88.0]),
  ])
}

/// ---------------------------------------------------------------------------
/// Activity Feed
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
  pub athlete: String,
  pub initials: String,
  pub activity: String,
  /// "2 hours ago"
  pub time: String,
  /// Whole-number gain such as "+12%"; `None` for sessions without a measure
  pub improvement: Option<String>,
}

impl RecentActivity {
  /// `measure` is `(current, previous)` for the activity's tracked value
  pub fn new(athlete: &str, activity: &str, hours_ago: u32, measure: Option<(f64, f64)>) -> Self {
    Self {
      athlete: athlete.to_string(),
      initials: athlete
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect(),
      activity: activity.to_string(),
      time: hours_ago_label(hours_ago),
      improvement: measure.map(|(current, previous)| {
        format_signed_percentage(percentage_change(current, previous), 0)
      }),
    }
  }
}

fn hours_ago_label(hours: u32) -> String {
  match hours {
    0 => "just now".to_string(),
    1 => "1 hour ago".to_string(),
    h => format!("{} hours ago", h),
  }
}

/// Newest first
pub fn demo_recent_activities() -> Vec<RecentActivity> {
  vec![
    RecentActivity::new("Sarah Johnson", "Completed sprint training", 2, Some((94.0, 89.5))),
    RecentActivity::new("Michael Chen", "New personal record in deadlift", 4, Some((224.0, 200.0))),
    RecentActivity::new("Emma Williams", "Finished endurance session", 5, Some((88.0, 85.4))),
    RecentActivity::new("James Rodriguez", "Recovery session completed", 6, None),
  ]
}

/// ---------------------------------------------------------------------------
/// Summary
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPerformer {
  pub name: String,
  pub sport: String,
  pub score: f64,
  pub label: ScoreLabel,
  /// Rank within the whole team, 0-100
  pub percentile: u32,
  /// Stable when no history is known
  pub trend: TrendDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
  pub average_performance: f64,
  pub days_on_target: usize,
  pub best_day: Option<String>,
  pub weekly_trend: TrendDirection,
  pub team_average: f64,
  pub active_athletes: usize,
  pub injured_athletes: usize,
  pub top_performers: Vec<TopPerformer>,
  pub metric_breakdown: Vec<NamedValue>,
  pub training_distribution: Vec<NamedValue>,
  pub recent_activities: Vec<RecentActivity>,
}

impl DashboardSummary {
  pub fn compute(
    week: &[DailyPerformance],
    directory: &AthleteDirectory,
    history: &ScoreHistory,
  ) -> Self {
    let performances: Vec<f64> = week.iter().map(|d| d.performance).collect();
    let team_scores: Vec<f64> = directory.all().iter().map(|a| a.performance_score).collect();

    let days_on_target = week.iter().filter(|d| d.performance >= d.target).count();

    // First day wins ties
    let best_day = week
      .iter()
      .fold(None::<&DailyPerformance>, |best, d| match best {
        Some(b) if b.performance >= d.performance => Some(b),
        _ => Some(d),
      })
      .map(|d| d.day.clone());

    let count_status = |status: AthleteStatus| {
      directory.all().iter().filter(|a| a.status == status).count()
    };

    Self {
      average_performance: average_score(&performances),
      days_on_target,
      best_day,
      weekly_trend: trend_direction(&performances),
      team_average: average_score(&team_scores),
      active_athletes: count_status(AthleteStatus::Active),
      injured_athletes: count_status(AthleteStatus::Injured),
      top_performers: Self::top_performers(directory, &team_scores, history),
      metric_breakdown: demo_metric_breakdown(),
      training_distribution: demo_training_distribution(),
      recent_activities: demo_recent_activities(),
    }
  }

  /// Highest scores first; equal scores keep directory order
  fn top_performers(
    directory: &AthleteDirectory,
    team_scores: &[f64],
    history: &ScoreHistory,
  ) -> Vec<TopPerformer> {
    let mut ranked: Vec<_> = directory.all().iter().collect();
    ranked.sort_by(|a, b| b.performance_score.total_cmp(&a.performance_score));

    ranked
      .into_iter()
      .take(TOP_PERFORMER_COUNT)
      .filter_map(|a| {
        let rating = *classify_performance_score(Some(a.performance_score)).rating()?;
        Some(TopPerformer {
          name: a.name.clone(),
          sport: a.sport.clone(),
          score: a.performance_score,
          label: rating.label,
          percentile: percentile_rank(a.performance_score, team_scores),
          trend: history
            .get(&a.id)
            .map(|scores| trend_direction(scores))
            .unwrap_or_default(),
        })
      })
      .collect()
  }
}
