//! Sources of player input
//!
//! The menu loop never touches stdin directly. It pulls lines from a
//! [`PlayerInput`], which is either a human at the console or a fixed script
//! used for deterministic runs and tests.

use crate::{AdventureError, Result};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// Separator between lines in a `--fixed-inputs` script
pub const SCRIPT_SEPARATOR: char = ';';

/// Supplies one line of player input at a time
pub trait PlayerInput {
    /// Read the next line without its trailing newline
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn next_line(&mut self) -> Result<Option<String>>;

    /// Whether the transcript should echo each line back
    ///
    /// A terminal already shows what the player typed; a script does not.
    fn echoes_input(&self) -> bool {
        false
    }
}

/// Reads player input from a buffered reader (normally stdin)
pub struct InteractiveInput<R: BufRead> {
    reader: R,
}

impl<R: BufRead> InteractiveInput<R> {
    pub fn new(reader: R) -> Self {
        InteractiveInput { reader }
    }
}

impl<R: BufRead> PlayerInput for InteractiveInput<R> {
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// malformed line is re-prompted like any other bad answer.
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Follows a predetermined sequence of input lines
///
/// Once the script is exhausted it reports end of input, which the game
/// treats as quitting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedScriptInput {
    /// The predetermined sequence of lines
    script: Vec<String>,
    /// Current position in the script
    pub current_index: usize,
}

impl FixedScriptInput {
    /// Create a scripted input from individual lines
    ///
    /// # Example
    /// ```
    /// use lab_adventure::game::{FixedScriptInput, PlayerInput};
    ///
    /// let mut input = FixedScriptInput::new(vec!["Alex".to_string(), "2".to_string()]);
    /// assert_eq!(input.next_line().unwrap(), Some("Alex".to_string()));
    /// ```
    pub fn new(script: Vec<String>) -> Self {
        FixedScriptInput {
            script,
            current_index: 0,
        }
    }

    /// Parse a `;`-separated script such as `"Alex;2;30;1;5"`
    ///
    /// Whitespace around each entry is kept, so a blank entry can be scripted
    /// to exercise input validation.
    pub fn parse(script: &str) -> Result<Self> {
        if script.trim().is_empty() {
            return Err(AdventureError::InvalidScript(
                "script must contain at least one input".to_string(),
            ));
        }
        Ok(Self::new(
            script.split(SCRIPT_SEPARATOR).map(str::to_string).collect(),
        ))
    }

    pub fn remaining(&self) -> usize {
        self.script.len().saturating_sub(self.current_index)
    }
}

impl PlayerInput for FixedScriptInput {
    fn next_line(&mut self) -> Result<Option<String>> {
        match self.script.get(self.current_index) {
            Some(line) => {
                self.current_index += 1;
                Ok(Some(line.clone()))
            }
            None => Ok(None),
        }
    }

    fn echoes_input(&self) -> bool {
        true
    }
}
