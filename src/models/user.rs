use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
  Coach,
  Athlete,
  Analyst,
}

impl Role {
  pub fn as_str(&self) -> &'static str {
    match self {
      Role::Coach => "Coach",
      Role::Athlete => "Athlete",
      Role::Analyst => "Analyst",
    }
  }

  /// Long-form title shown next to the user's name
  pub fn title(&self) -> &'static str {
    match self {
      Role::Coach => "Coach",
      Role::Athlete => "Athlete",
      Role::Analyst => "Performance Analyst",
    }
  }
}

impl std::fmt::Display for Role {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for Role {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "coach" => Ok(Self::Coach),
      "athlete" => Ok(Self::Athlete),
      "analyst" | "performance analyst" => Ok(Self::Analyst),
      _ => Err(format!("Unknown role: {}", s)),
    }
  }
}

/// A resolved, signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
  pub email: String,
  pub name: String,
  pub role: Role,
}

/// Entry in the credential table
#[derive(Debug, Clone)]
pub struct Credential {
  pub account: UserAccount,
  pub password: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_role_parse_accepts_title() {
    assert_eq!("Performance Analyst".parse::<Role>(), Ok(Role::Analyst));
    assert_eq!("COACH".parse::<Role>(), Ok(Role::Coach));
    assert!("manager".parse::<Role>().is_err());
  }

  #[test]
  fn test_role_title() {
    assert_eq!(Role::Analyst.title(), "Performance Analyst");
    assert_eq!(Role::Analyst.to_string(), "Analyst");
  }
}
