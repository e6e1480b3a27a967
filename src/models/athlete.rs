use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Directory-assigned identity. Never reused while the record exists.
pub type AthleteId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AthleteStatus {
  #[default]
  Active,
  Injured,
  Inactive,
}

impl AthleteStatus {
  pub const ALL: [AthleteStatus; 3] = [
    AthleteStatus::Active,
    AthleteStatus::Injured,
    AthleteStatus::Inactive,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      AthleteStatus::Active => "Active",
      AthleteStatus::Injured => "Injured",
      AthleteStatus::Inactive => "Inactive",
    }
  }
}

impl std::fmt::Display for AthleteStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for AthleteStatus {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Active" => Ok(Self::Active),
      "Injured" => Ok(Self::Injured),
      "Inactive" => Ok(Self::Inactive),
      _ => Err(format!("Unknown athlete status: {}", s)),
    }
  }
}

/// A stored athlete profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteRecord {
  pub id: AthleteId,
  pub name: String,
  pub email: String,
  pub phone: Option<String>,
  pub sport: String,
  pub position: Option<String>,
  pub status: AthleteStatus,
  pub age: Option<u32>,
  pub height_cm: Option<f64>,
  pub weight_kg: Option<f64>,
  pub performance_score: f64,
  pub join_date: NaiveDate,
}

impl AthleteRecord {
  /// First letter of each name part, e.g. "Sarah Johnson" -> "SJ"
  pub fn initials(&self) -> String {
    self
      .name
      .split_whitespace()
      .filter_map(|part| part.chars().next())
      .collect()
  }
}

/// Form payload for creating or editing an athlete.
///
/// Every field may be empty or absent; the directory stores whatever it is
/// given and `validation::validate_athlete` is the gate for required fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AthleteInput {
  pub name: String,
  pub email: String,
  pub phone: Option<String>,
  pub sport: String,
  pub position: Option<String>,
  pub status: Option<AthleteStatus>,
  pub age: Option<u32>,
  pub height_cm: Option<f64>,
  pub weight_kg: Option<f64>,
  pub performance_score: Option<f64>,
  pub join_date: Option<NaiveDate>,
}

impl AthleteInput {
  /// Pre-fill an edit form from a stored record
  pub fn from_record(record: &AthleteRecord) -> Self {
    Self {
      name: record.name.clone(),
      email: record.email.clone(),
      phone: record.phone.clone(),
      sport: record.sport.clone(),
      position: record.position.clone(),
      status: Some(record.status),
      age: record.age,
      height_cm: record.height_cm,
      weight_kg: record.weight_kg,
      performance_score: Some(record.performance_score),
      join_date: Some(record.join_date),
    }
  }
}
