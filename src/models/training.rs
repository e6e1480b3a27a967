use serde::{Deserialize, Serialize};

/// One training session, supplied per load calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
  /// Minutes, >= 0
  pub duration: f64,
  /// Typically 0.0 - 1.0
  pub intensity: f64,
}

impl TrainingSession {
  pub fn new(duration: f64, intensity: f64) -> Self {
    Self { duration, intensity }
  }

  pub fn load(&self) -> f64 {
    self.duration * self.intensity
  }
}
