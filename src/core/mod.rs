//! Core adventure types and bounded collections

pub mod inventory;
pub mod session;
pub mod types;

pub use inventory::{InventoryStore, MAX_INVENTORY};
pub use session::{Session, SessionLog, MAX_SESSIONS};
pub use types::{DifficultyLevel, Location, PlayerName, TimeLimit, KEYCARD, RESEARCH_DOCUMENTS};
