//! Per-session application state
//!
//! One owner holds the directory, the signed-in user and the profile
//! screen's selection. Nothing here is shared across threads.

use tracing::{debug, info};

use crate::auth::{self, AuthError, RoleDashboard};
use crate::config::AppConfig;
use crate::directory::{AthleteDirectory, DirectoryError};
use crate::models::{AthleteId, AthleteInput, AthleteRecord, Credential, UserAccount};
use crate::validation::validate_athlete;

pub struct AppState {
  pub config: AppConfig,
  pub directory: AthleteDirectory,
  users: Vec<Credential>,
  current_user: Option<UserAccount>,
  selected: Option<AthleteId>,
}

impl AppState {
  pub fn new(config: AppConfig, directory: AthleteDirectory) -> Self {
    Self {
      config,
      directory,
      users: auth::demo_users(),
      current_user: None,
      selected: None,
    }
  }

  /// Demo roster and demo accounts
  pub fn demo(config: AppConfig) -> Self {
    Self::new(config, AthleteDirectory::with_demo_roster())
  }

  // --- Sign-in ---

  /// Sign in after the configured delay; the resolved account is stored as-is
  pub async fn login(&mut self, email: &str, password: &str) -> Result<UserAccount, AuthError> {
    let pending = auth::login(&self.config, self.users.clone(), email, password)?;
    let user = pending.wait().await.map_err(|_| AuthError::Cancelled)??;
    self.current_user = Some(user.clone());
    Ok(user)
  }

  pub fn logout(&mut self) {
    if let Some(user) = self.current_user.take() {
      info!(email = %user.email, "Signed out");
    }
  }

  pub fn current_user(&self) -> Option<&UserAccount> {
    self.current_user.as_ref()
  }

  pub fn dashboard(&self) -> Option<RoleDashboard> {
    self.current_user.as_ref().map(|u| RoleDashboard::for_role(u.role))
  }

  // --- Athlete profiles ---

  /// Form submission: validate, then create (`editing == None`) or update.
  ///
  /// Missing required fields reject the submission without touching the
  /// directory.
  pub fn submit_athlete(
    &mut self,
    editing: Option<AthleteId>,
    input: AthleteInput,
  ) -> Result<AthleteRecord, DirectoryError> {
    let validation = validate_athlete(&input);
    if !validation.is_valid {
      debug!(missing = ?validation.missing_fields, "Athlete form rejected");
      return Err(DirectoryError::MissingRequiredFields(validation.missing_fields));
    }

    match editing {
      Some(id) => self.directory.update(id, input),
      None => Ok(self.directory.create(input)),
    }
  }

  /// Select a record for the detail panel; unknown ids clear the selection
  pub fn select_athlete(&mut self, id: AthleteId) -> Option<&AthleteRecord> {
    self.selected = self.directory.get(id).map(|a| a.id);
    self.selected()
  }

  pub fn clear_selection(&mut self) {
    self.selected = None;
  }

  pub fn selected(&self) -> Option<&AthleteRecord> {
    self.selected.and_then(|id| self.directory.get(id))
  }

  /// Delete, clearing the selection if it pointed at the removed record
  pub fn delete_athlete(&mut self, id: AthleteId) -> bool {
    let removed = self.directory.delete(id);
    if self.selected == Some(id) {
      self.selected = None;
    }
    removed
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::{AthleteStatus, Role};
  use crate::test_utils::{instant_config, mock_athlete_input, three_athlete_directory};

  fn state() -> AppState {
    AppState::new(instant_config(), three_athlete_directory())
  }

  #[tokio::test]
  async fn test_login_stores_resolved_user() {
    let mut state = state();

    let user = state.login("analyst@sports.com", "password123").await.unwrap();

    assert_eq!(user.role, Role::Analyst);
    assert_eq!(state.current_user(), Some(&user));
    assert_eq!(state.dashboard(), Some(RoleDashboard::AnalyticsWorkbench));
  }

  #[tokio::test]
  async fn test_failed_login_leaves_session_signed_out() {
    let mut state = state();

    let err = state.login("coach@sports.com", "wrong").await.unwrap_err();

    assert_eq!(err, AuthError::InvalidCredentials);
    assert!(state.current_user().is_none());
    assert!(state.dashboard().is_none());
  }

  #[tokio::test]
  async fn test_logout_clears_user() {
    let mut state = state();
    state.login("coach@sports.com", "password123").await.unwrap();

    state.logout();

    assert!(state.current_user().is_none());
  }

  #[test]
  fn test_submit_rejects_missing_fields_without_mutation() {
    // Arrange
    let mut state = state();
    let input = AthleteInput {
      name: "No Sport".to_string(),
      email: "nosport@sports.com".to_string(),
      status: Some(AthleteStatus::Active),
      ..Default::default()
    };

    // Act
    let result = state.submit_athlete(None, input);

    // Assert
    assert_eq!(
      result,
      Err(DirectoryError::MissingRequiredFields(vec!["sport".to_string()]))
    );
    assert_eq!(state.directory.len(), 3);
  }

  #[test]
  fn test_submit_creates_and_updates() {
    let mut state = state();
    let input = AthleteInput {
      status: Some(AthleteStatus::Active),
      ..mock_athlete_input("Alice Brown", "Tennis")
    };

    let created = state.submit_athlete(None, input.clone()).unwrap();
    assert_eq!(created.id, 4);

    let edited = AthleteInput {
      sport: "Squash".to_string(),
      ..input
    };
    let updated = state.submit_athlete(Some(4), edited).unwrap();
    assert_eq!(updated.id, 4);
    assert_eq!(updated.sport, "Squash");
    assert_eq!(state.directory.len(), 4);
  }

  #[test]
  fn test_submit_update_of_unknown_id() {
    let mut state = state();
    let input = AthleteInput {
      status: Some(AthleteStatus::Active),
      ..mock_athlete_input("Ghost", "Golf")
    };

    assert_eq!(
      state.submit_athlete(Some(77), input),
      Err(DirectoryError::NotFound(77))
    );
  }

  #[test]
  fn test_delete_selected_clears_selection() {
    let mut state = state();
    assert_eq!(state.select_athlete(2).map(|a| a.name.as_str()), Some("Jane Doe"));

    assert!(state.delete_athlete(2));

    assert!(state.selected().is_none());
  }

  #[test]
  fn test_delete_other_keeps_selection() {
    let mut state = state();
    state.select_athlete(1);

    assert!(state.delete_athlete(3));

    assert_eq!(state.selected().map(|a| a.id), Some(1));
  }

  #[test]
  fn test_clear_selection() {
    let mut state = state();
    state.select_athlete(2);

    state.clear_selection();

    assert!(state.selected().is_none());
    assert_eq!(state.directory.len(), 3);
  }

  #[test]
  fn test_select_unknown_clears() {
    let mut state = state();
    state.select_athlete(1);
    assert!(state.select_athlete(99).is_none());
    assert!(state.selected().is_none());
  }
}
