//! In-memory athlete directory
//!
//! Owns the session's athlete records and exposes the listing query plus
//! create/update/delete. The directory never validates input itself; the
//! form-submission path in `session` runs `validation::validate_athlete`
//! before mutating.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::models::{AthleteId, AthleteInput, AthleteRecord, AthleteStatus};

/// Score assigned to new athletes that arrive without one
pub const DEFAULT_PERFORMANCE_SCORE: f64 = 75.0;

/// Listing choices that mean "no filter"
const ALL_SPORTS: &str = "All Sports";
const ALL_STATUSES: &str = "All Status";

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DirectoryError {
  #[error("No athlete with id {0}")]
  NotFound(AthleteId),

  #[error("Please fill in all required fields")]
  MissingRequiredFields(Vec<String>),
}

/// ---------------------------------------------------------------------------
/// Query
/// ---------------------------------------------------------------------------

/// Search text plus exact sport/status filters. Empty means "match all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AthleteQuery {
  pub text: String,
  pub sport: String,
  pub status: String,
}

impl AthleteQuery {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_text(mut self, text: impl Into<String>) -> Self {
    self.text = text.into();
    self
  }

  pub fn with_sport(mut self, sport: impl Into<String>) -> Self {
    self.sport = sport.into();
    self
  }

  pub fn with_status(mut self, status: AthleteStatus) -> Self {
    self.status = status.to_string();
    self
  }

  /// Build a query from the listing's search box and dropdown choices,
  /// where "All Sports" / "All Status" mean no filter
  pub fn from_filters(search: &str, sport: &str, status: &str) -> Self {
    let sport = if sport == ALL_SPORTS { "" } else { sport };
    let status = if status == ALL_STATUSES { "" } else { status };
    Self {
      text: search.to_string(),
      sport: sport.to_string(),
      status: status.to_string(),
    }
  }

  pub fn matches(&self, athlete: &AthleteRecord) -> bool {
    let needle = self.text.to_lowercase();
    let matches_text = needle.is_empty()
      || athlete.name.to_lowercase().contains(&needle)
      || athlete.email.to_lowercase().contains(&needle);
    let matches_sport = self.sport.is_empty() || athlete.sport == self.sport;
    let matches_status = self.status.is_empty() || athlete.status.as_str() == self.status;

    matches_text && matches_sport && matches_status
  }
}

/// ---------------------------------------------------------------------------
/// Directory
/// ---------------------------------------------------------------------------

/// Seed row for the demo roster
struct RosterEntry {
  id: AthleteId,
  name: &'static str,
  email: &'static str,
  phone: &'static str,
  sport: &'static str,
  position: &'static str,
  age: u32,
  height_cm: f64,
  weight_kg: f64,
  status: AthleteStatus,
  joined: (i32, u32, u32),
  score: f64,
}

impl RosterEntry {
  fn into_record(self) -> AthleteRecord {
    let (y, m, d) = self.joined;
    AthleteRecord {
      id: self.id,
      name: self.name.to_string(),
      email: self.email.to_string(),
      phone: Some(self.phone.to_string()),
      sport: self.sport.to_string(),
      position: Some(self.position.to_string()),
      status: self.status,
      age: Some(self.age),
      height_cm: Some(self.height_cm),
      weight_kg: Some(self.weight_kg),
      performance_score: self.score,
      join_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
    }
  }
}

#[derive(Debug, Clone, Default)]
pub struct AthleteDirectory {
  athletes: Vec<AthleteRecord>,
}

impl AthleteDirectory {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_records(athletes: Vec<AthleteRecord>) -> Self {
    Self { athletes }
  }

  /// The five-athlete roster the profile screens open with
  pub fn with_demo_roster() -> Self {
    let athletes = vec![
      RosterEntry {
        id: 1,
        name: "Sarah Johnson",
        email: "sarah.j@email.com",
        phone: "+1 234 567 8901",
        sport: "Track & Field",
        position: "Sprinter",
        age: 24,
        height_cm: 175.0,
        weight_kg: 62.0,
        status: AthleteStatus::Active,
        joined: (2023, 3, 15),
        score: 94.0,
      },
      RosterEntry {
        id: 2,
        name: "Michael Chen",
        email: "michael.c@email.com",
        phone: "+1 234 567 8902",
        sport: "Weightlifting",
        position: "Heavyweight",
        age: 28,
        height_cm: 185.0,
        weight_kg: 95.0,
        status: AthleteStatus::Active,
        joined: (2022, 8, 20),
        score: 91.0,
      },
      RosterEntry {
        id: 3,
        name: "Emma Williams",
        email: "emma.w@email.com",
        phone: "+1 234 567 8903",
        sport: "Swimming",
        position: "Freestyle",
        age: 22,
        height_cm: 172.0,
        weight_kg: 58.0,
        status: AthleteStatus::Active,
        joined: (2023, 1, 10),
        score: 88.0,
      },
      RosterEntry {
        id: 4,
        name: "James Rodriguez",
        email: "james.r@email.com",
        phone: "+1 234 567 8904",
        sport: "Basketball",
        position: "Point Guard",
        age: 26,
        height_cm: 188.0,
        weight_kg: 82.0,
        status: AthleteStatus::Injured,
        joined: (2022, 5, 18),
        score: 85.0,
      },
      RosterEntry {
        id: 5,
        name: "Lisa Thompson",
        email: "lisa.t@email.com",
        phone: "+1 234 567 8905",
        sport: "Tennis",
        position: "Singles",
        age: 23,
        height_cm: 168.0,
        weight_kg: 60.0,
        status: AthleteStatus::Active,
        joined: (2023, 6, 22),
        score: 82.0,
      },
    ]
    .into_iter()
    .map(RosterEntry::into_record)
    .collect();

    Self { athletes }
  }

  pub fn len(&self) -> usize {
    self.athletes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.athletes.is_empty()
  }

  /// All records in insertion order
  pub fn all(&self) -> &[AthleteRecord] {
    &self.athletes
  }

  pub fn get(&self, id: AthleteId) -> Option<&AthleteRecord> {
    self.athletes.iter().find(|a| a.id == id)
  }

  pub fn find_by_name(&self, name: &str) -> Option<&AthleteRecord> {
    self.athletes.iter().find(|a| a.name == name)
  }

  /// Distinct sports, in the order they first appear
  pub fn sports(&self) -> Vec<&str> {
    let mut sports: Vec<&str> = Vec::new();
    for athlete in &self.athletes {
      if !sports.contains(&athlete.sport.as_str()) {
        sports.push(&athlete.sport);
      }
    }
    sports
  }

  /// Records matching the query, in insertion order
  pub fn query(&self, query: &AthleteQuery) -> Vec<&AthleteRecord> {
    let results: Vec<&AthleteRecord> = self.athletes.iter().filter(|a| query.matches(a)).collect();
    debug!(
      text = %query.text,
      sport = %query.sport,
      status = %query.status,
      matched = results.len(),
      "Athlete query"
    );
    results
  }

  /// Max existing id + 1, or 1 for an empty directory
  fn next_id(&self) -> AthleteId {
    self.athletes.iter().map(|a| a.id).max().map_or(1, |max| max + 1)
  }

  pub fn create(&mut self, input: AthleteInput) -> AthleteRecord {
    let record = AthleteRecord {
      id: self.next_id(),
      name: input.name,
      email: input.email,
      phone: input.phone,
      sport: input.sport,
      position: input.position,
      status: input.status.unwrap_or_default(),
      age: input.age,
      height_cm: input.height_cm,
      weight_kg: input.weight_kg,
      performance_score: input.performance_score.unwrap_or(DEFAULT_PERFORMANCE_SCORE),
      join_date: input.join_date.unwrap_or_else(|| Local::now().date_naive()),
    };

    info!(id = record.id, name = %record.name, "Athlete created");
    self.athletes.push(record.clone());
    record
  }

  /// Replace a record's fields, keeping its `id` and `join_date`.
  ///
  /// An absent status or score keeps the stored value.
  pub fn update(
    &mut self,
    id: AthleteId,
    input: AthleteInput,
  ) -> Result<AthleteRecord, DirectoryError> {
    let Some(record) = self.athletes.iter_mut().find(|a| a.id == id) else {
      warn!(id, "Update of unknown athlete");
      return Err(DirectoryError::NotFound(id));
    };

    record.name = input.name;
    record.email = input.email;
    record.phone = input.phone;
    record.sport = input.sport;
    record.position = input.position;
    record.status = input.status.unwrap_or(record.status);
    record.age = input.age;
    record.height_cm = input.height_cm;
    record.weight_kg = input.weight_kg;
    record.performance_score = input.performance_score.unwrap_or(record.performance_score);

    info!(id, name = %record.name, "Athlete updated");
    Ok(record.clone())
  }

  /// Remove a record. Unknown ids are a no-op; returns whether anything was removed.
  pub fn delete(&mut self, id: AthleteId) -> bool {
    let before = self.athletes.len();
    self.athletes.retain(|a| a.id != id);
    let removed = self.athletes.len() < before;

    if removed {
      info!(id, "Athlete deleted");
    } else {
      debug!(id, "Delete of unknown athlete ignored");
    }
    removed
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
