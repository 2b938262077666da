//! Runtime configuration for a play session

use crate::game::VerbosityLevel;
use std::path::PathBuf;

/// Default destination for "Save report to file"
pub const DEFAULT_REPORT_PATH: &str = "report.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Where the save action writes the report (overwritten each time)
    pub report_path: PathBuf,
    /// Event log verbosity
    pub verbosity: VerbosityLevel,
}

impl GameConfig {
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }

    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.verbosity = verbosity;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            verbosity: VerbosityLevel::default(),
        }
    }
}
