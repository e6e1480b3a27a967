//! Demo sign-in
//!
//! Credential checking is an in-memory table lookup behind an artificial
//! delay. It is not a security mechanism.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::models::{Credential, Role, UserAccount};
use crate::pending::Pending;

const DEMO_PASSWORD: &str = "password123";

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum AuthError {
  #[error("Please enter both email and password")]
  MissingCredentials,

  #[error("Invalid email or password. Please try again.")]
  InvalidCredentials,

  #[error("Sign-in was cancelled")]
  Cancelled,
}

/// ---------------------------------------------------------------------------
/// Credential Table
/// ---------------------------------------------------------------------------

/// The three demo accounts, one per role
pub fn demo_users() -> Vec<Credential> {
  [
    ("coach@sports.com", "John Mitchell", Role::Coach),
    ("athlete@sports.com", "Sarah Johnson", Role::Athlete),
    ("analyst@sports.com", "Michael Chen", Role::Analyst),
  ]
  .into_iter()
  .map(|(email, name, role)| Credential {
    account: UserAccount {
      email: email.to_string(),
      name: name.to_string(),
      role,
    },
    password: DEMO_PASSWORD.to_string(),
  })
  .collect()
}

/// Exact email + password match against the table
pub fn authenticate(
  users: &[Credential],
  email: &str,
  password: &str,
) -> Result<UserAccount, AuthError> {
  users
    .iter()
    .find(|c| c.account.email == email && c.password == password)
    .map(|c| c.account.clone())
    .ok_or(AuthError::InvalidCredentials)
}

/// Start a sign-in attempt.
///
/// Empty fields are rejected up front without waiting. Otherwise the lookup
/// runs once after the configured login delay.
pub fn login(
  config: &AppConfig,
  users: Vec<Credential>,
  email: &str,
  password: &str,
) -> Result<Pending<Result<UserAccount, AuthError>>, AuthError> {
  if email.is_empty() || password.is_empty() {
    return Err(AuthError::MissingCredentials);
  }

  let email = email.to_string();
  let password = password.to_string();
  Ok(Pending::resolve_after(config.login_delay(), move || {
    let result = authenticate(&users, &email, &password);
    match &result {
      Ok(user) => info!(email = %user.email, role = %user.role, "Sign-in succeeded"),
      Err(_) => warn!(email = %email, "Sign-in rejected"),
    }
    result
  }))
}

/// ---------------------------------------------------------------------------
/// Role Dispatch
/// ---------------------------------------------------------------------------

/// Landing dashboard for a signed-in role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleDashboard {
  TeamOverview,
  PersonalPerformance,
  AnalyticsWorkbench,
}

impl RoleDashboard {
  pub fn for_role(role: Role) -> Self {
    match role {
      Role::Coach => RoleDashboard::TeamOverview,
      Role::Athlete => RoleDashboard::PersonalPerformance,
      Role::Analyst => RoleDashboard::AnalyticsWorkbench,
    }
  }

  pub fn access_description(&self) -> &'static str {
    match self {
      RoleDashboard::TeamOverview => {
        "Access to team management, athlete profiles, and training plans."
      }
      RoleDashboard::PersonalPerformance => {
        "Access to personal performance data and training schedules."
      }
      RoleDashboard::AnalyticsWorkbench => {
        "Access to analytics tools, reports, and trend analysis."
      }
    }
  }
}

/// Greeting shown once signed in
pub fn welcome_message(user: &UserAccount) -> String {
  format!("Welcome, {}!", user.name)
}
