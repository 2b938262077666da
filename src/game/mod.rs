//! Game state, menus and the play loop

pub mod config;
pub mod console;
pub mod game_loop;
pub mod input;
pub mod logger;
pub mod menu;
pub mod report;
pub mod setup;
pub mod state;

pub use config::{GameConfig, DEFAULT_REPORT_PATH};
pub use console::Console;
pub use game_loop::{Flow, GameEndReason, GameLoop, GameResult};
pub use input::{FixedScriptInput, InteractiveInput, PlayerInput};
pub use logger::{GameLogger, LogEntry, OutputMode, VerbosityLevel};
pub use menu::{LocationMenu, MenuAction, MenuOption};
pub use report::ReportSummary;
pub use state::{GameState, SearchOutcome, TravelOutcome};
