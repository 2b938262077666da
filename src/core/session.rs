//! Visit log
//!
//! Every time the player walks into a new area a [`Session`] is appended to
//! the [`SessionLog`]. The report is built entirely from this log.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Maximum number of visits the log records
pub const MAX_SESSIONS: usize = 10;

/// One visit to an area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Area name as shown in the report
    pub area_name: String,
    /// Whether the documents were found during this visit
    pub found_documents: bool,
}

impl Session {
    pub fn new(area_name: impl Into<String>) -> Self {
        Session {
            area_name: area_name.into(),
            found_documents: false,
        }
    }
}

/// Fixed-capacity, append-only list of visits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLog {
    sessions: SmallVec<[Session; MAX_SESSIONS]>,
}

impl SessionLog {
    pub fn new() -> Self {
        SessionLog {
            sessions: SmallVec::new(),
        }
    }

    /// Record a visit; returns false (and records nothing) once the log is full
    pub fn log(&mut self, area_name: impl Into<String>) -> bool {
        if self.is_full() {
            return false;
        }
        self.sessions.push(Session::new(area_name));
        true
    }

    /// Flag the most recent visit as the one where documents were found
    ///
    /// Returns false if nothing has been logged yet.
    pub fn mark_latest_found(&mut self) -> bool {
        match self.sessions.last_mut() {
            Some(session) => {
                session.found_documents = true;
                true
            }
            None => false,
        }
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn latest(&self) -> Option<&Session> {
        self.sessions.last()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.sessions.len() >= MAX_SESSIONS
    }

    /// Number of visits where documents were found
    pub fn documents_found(&self) -> usize {
        self.sessions.iter().filter(|s| s.found_documents).count()
    }
}
