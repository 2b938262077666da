//! Main game state structure

use crate::core::{
    DifficultyLevel, InventoryStore, Location, PlayerName, SessionLog, TimeLimit, KEYCARD,
    RESEARCH_DOCUMENTS,
};
use crate::game::GameLogger;

/// Outcome of searching the lab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Documents recovered on this search
    Completed,
    /// The mission had already been completed; nothing changed
    AlreadyCompleted,
}

/// Outcome of trying to walk somewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelOutcome {
    /// Player moved
    Moved,
    /// The door is locked and the player lacks the keycard
    MissingKeycard,
}

/// Complete game state
///
/// Owns the player's inventory and visit log. The menu controller is the only
/// thing that mutates it during play.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    pub player_name: PlayerName,
    pub difficulty: DifficultyLevel,
    pub mission_time_limit: TimeLimit,
    pub current_location: Location,
    mission_complete: bool,
    pub inventory: InventoryStore,
    pub sessions: SessionLog,
    pub logger: GameLogger,
}

impl GameState {
    /// Create a fresh state: player outside the cave, nothing carried
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the validated setup answers and hand the player their keycard
    pub fn configure(&mut self, name: PlayerName, difficulty: DifficultyLevel, limit: TimeLimit) {
        self.player_name = name;
        self.difficulty = difficulty;
        self.mission_time_limit = limit;
        self.inventory.add(KEYCARD);
        self.logger.event(
            "setup",
            &format!(
                "operative {} ready (difficulty {}, limit {} minutes)",
                self.player_name,
                self.difficulty,
                self.mission_time_limit.minutes()
            ),
        );
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.contains(item)
    }

    pub fn mission_complete(&self) -> bool {
        self.mission_complete
    }

    /// Move deeper into the map, logging a session for the area entered
    ///
    /// Entering the lab requires the keycard; without it nothing changes.
    pub fn travel(&mut self, destination: Location) -> TravelOutcome {
        if destination == Location::Lab && !self.has_item(KEYCARD) {
            self.logger
                .event("travel", "lab door refused entry: no keycard in inventory");
            return TravelOutcome::MissingKeycard;
        }

        let origin = self.current_location;
        self.current_location = destination;
        self.logger
            .event("travel", &format!("{origin} -> {destination}"));

        if let Some(area) = destination.area_name() {
            if self.sessions.log(area) {
                self.logger.event(
                    "session",
                    &format!("logged visit {} to {area}", self.sessions.len()),
                );
            } else {
                self.logger
                    .event("session", &format!("session log full, visit to {area} not recorded"));
            }
        }

        TravelOutcome::Moved
    }

    /// Walk back to an area already visited; no session is logged
    pub fn retreat(&mut self, destination: Location) {
        let origin = self.current_location;
        self.current_location = destination;
        self.logger
            .event("travel", &format!("{origin} -> {destination}"));
    }

    /// Search the lab for the research documents
    ///
    /// The first call completes the mission; every later call is a no-op.
    pub fn search_for_documents(&mut self) -> SearchOutcome {
        if self.mission_complete {
            self.logger.event("search", "mission already complete");
            return SearchOutcome::AlreadyCompleted;
        }

        if !self.inventory.add(RESEARCH_DOCUMENTS) {
            self.logger
                .event("search", "inventory full, documents not added");
        }
        self.sessions.mark_latest_found();
        self.mission_complete = true;
        self.logger.event("search", "research documents recovered");

        SearchOutcome::Completed
    }
}
