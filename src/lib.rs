pub mod auth;
pub mod calculations;
pub mod config;
pub mod dashboard;
pub mod directory;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod pending;
pub mod reports;
pub mod session;
pub mod trends;
pub mod validation;

#[cfg(test)]
pub mod test_utils;

use tracing::{debug, error, info, warn};

use config::AppConfig;
use dashboard::{demo_score_history, demo_week, DashboardSummary};
use directory::AthleteQuery;
use models::{AthleteInput, AthleteStatus};
use reports::{ReportError, ReportRequest};
use session::AppState;
use trends::{
  demo_category_comparison, demo_monthly_trends, demo_performance_insights, demo_skill_comparison,
  demo_weekly_progress, TrendAnalysis, TrendMetric,
};

/// Scripted walk through every screen against the demo data
pub async fn run() {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let (config, config_error) = match AppConfig::from_env() {
    Ok(config) => (config, None),
    Err(e) => (AppConfig::default(), Some(e)),
  };
  logging::init_logging(&config);
  if let Some(e) = config_error {
    error!(error = %e, "Falling back to default configuration");
  }

  let mut state = AppState::demo(config);

  // Sign in
  match state.login("coach@sports.com", "password123").await {
    Ok(user) => {
      let dashboard = auth::RoleDashboard::for_role(user.role);
      info!(
        role = %user.role.title(),
        access = dashboard.access_description(),
        "{}",
        auth::welcome_message(&user)
      );
    }
    Err(e) => {
      error!(error = %e, "Demo sign-in failed");
      return;
    }
  }

  // Dashboard
  let summary = DashboardSummary::compute(&demo_week(), &state.directory, &demo_score_history());
  info!(
    average = summary.average_performance,
    days_on_target = summary.days_on_target,
    best_day = summary.best_day.as_deref().unwrap_or("-"),
    trend = %summary.weekly_trend,
    "Weekly performance"
  );
  for performer in &summary.top_performers {
    info!(
      name = %performer.name,
      score = performer.score,
      label = performer.label.as_str(),
      trend = %performer.trend,
      "Top performer"
    );
  }

  for activity in &summary.recent_activities {
    info!(
      athlete = %activity.athlete,
      activity = %activity.activity,
      time = %activity.time,
      improvement = activity.improvement.as_deref().unwrap_or("-"),
      "Recent activity"
    );
  }

  // Directory
  let active = state
    .directory
    .query(&AthleteQuery::from_filters("", "All Sports", AthleteStatus::Active.as_str()))
    .len();
  info!(active, total = state.directory.len(), "Athlete listing");

  let input = AthleteInput {
    name: "Alex Rivera".to_string(),
    email: "alex.r@email.com".to_string(),
    sport: "Cycling".to_string(),
    status: Some(AthleteStatus::Active),
    ..Default::default()
  };
  match state.submit_athlete(None, input.clone()) {
    Ok(created) => {
      let edited = AthleteInput {
        position: Some("Sprinter".to_string()),
        ..input
      };
      if let Err(e) = state.submit_athlete(Some(created.id), edited) {
        warn!(error = %e, "Demo athlete update failed");
      }
      state.delete_athlete(created.id);
    }
    Err(e) => warn!(error = %e, "Demo athlete rejected"),
  }

  // Trends
  let months = demo_monthly_trends();
  for metric in TrendMetric::ALL {
    let analysis = TrendAnalysis::for_metric(&months, metric);
    info!(
      metric = %metric,
      direction = %analysis.direction,
      latest = analysis.latest.unwrap_or_default(),
      change_pct = analysis.change_pct,
      "Monthly trend"
    );
  }
  for row in demo_category_comparison() {
    info!(category = %row.category, change = row.change, status = %row.status, "Category");
  }
  for skill in demo_skill_comparison() {
    info!(skill = %skill.skill, current = skill.current, change = %skill.change, "Skill");
  }
  for insight in demo_performance_insights() {
    info!(label = %insight.label, value = insight.value, change = %insight.change, "Insight");
  }
  for week in demo_weekly_progress() {
    info!(
      week = %week.week,
      hours = %week.formatted_hours(),
      load = week.training_load(),
      "Weekly progress"
    );
  }

  // Report
  let pending =
    reports::generate_report_delayed(&state.config, &state.directory, ReportRequest::default());
  match pending.wait().await.map_err(|_| ReportError::Cancelled) {
    Ok(Ok(report)) => {
      info!(
        athlete = %report.summary.athlete,
        score = report.summary.overall_score,
        improvement = %report.summary.improvement,
        "Report ready"
      );
      debug!(report = %report.to_json(), "Report contents");
    }
    Ok(Err(e)) | Err(e) => error!(error = %e, "Report generation failed"),
  }

  state.logout();
}
