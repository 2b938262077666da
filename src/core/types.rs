//! Strongly-typed wrappers for adventure concepts
//!
//! Player names, difficulty settings and map locations get their own types so
//! that a raw string or integer read from the console is validated exactly
//! once, at the point it enters the game.

use crate::{AdventureError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Item the player starts with; required to open the lab door
pub const KEYCARD: &str = "Keycard";

/// Item recovered when the mission is completed
pub const RESEARCH_DOCUMENTS: &str = "Research Documents";

/// Operative name chosen during setup
///
/// Never empty or whitespace-only once produced by [`PlayerName::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerName(String);

impl PlayerName {
    /// Validate a raw input line, trimming surrounding whitespace
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AdventureError::InvalidInput(
                "name cannot be empty".to_string(),
            ));
        }
        Ok(PlayerName(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PlayerName {
    fn default() -> Self {
        PlayerName("Unknown".to_string())
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerName {
    fn from(s: &str) -> Self {
        PlayerName(s.to_string())
    }
}

/// Security level of the facility
///
/// Chosen once at setup. It has no mechanical effect on play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DifficultyLevel {
    #[default]
    Low = 1,
    Medium = 2,
    High = 3,
}

impl DifficultyLevel {
    /// Map a menu choice (1, 2 or 3) to a difficulty level
    pub fn from_choice(choice: i64) -> Result<Self> {
        match choice {
            1 => Ok(DifficultyLevel::Low),
            2 => Ok(DifficultyLevel::Medium),
            3 => Ok(DifficultyLevel::High),
            _ => Err(AdventureError::InvalidInput(format!(
                "difficulty must be 1, 2 or 3 (got {choice})"
            ))),
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DifficultyLevel::Low => "LOW",
            DifficultyLevel::Medium => "MEDIUM",
            DifficultyLevel::High => "HIGH",
        };
        write!(f, "{name}")
    }
}

/// Mission time limit in minutes (positive and finite)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct TimeLimit(f64);

impl TimeLimit {
    pub fn new(minutes: f64) -> Result<Self> {
        if !minutes.is_finite() || minutes <= 0.0 {
            return Err(AdventureError::InvalidInput(format!(
                "time limit must be a positive number of minutes (got {minutes})"
            )));
        }
        Ok(TimeLimit(minutes))
    }

    pub fn minutes(&self) -> f64 {
        self.0
    }
}

/// The four fixed places on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Location {
    #[default]
    Outside,
    Cave,
    LabDoor,
    Lab,
}

impl Location {
    /// Area name recorded in the session log when the player walks in
    ///
    /// `Outside` is where the game starts and is never logged.
    pub fn area_name(self) -> Option<&'static str> {
        match self {
            Location::Outside => None,
            Location::Cave => Some("Entrance Cave"),
            Location::LabDoor => Some("Lab Door"),
            Location::Lab => Some("Laboratory"),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Location::Outside => "Outside",
            Location::Cave => "Cave",
            Location::LabDoor => "LabDoor",
            Location::Lab => "Lab",
        };
        write!(f, "{name}")
    }
}
