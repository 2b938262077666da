//! Prompt/response plumbing shared by setup and the location menus
//!
//! [`Console`] pairs a [`PlayerInput`] with an output sink. Every read returns
//! `Ok(None)` when input runs out so callers can unwind with a quit signal
//! instead of spinning on a closed stream.

use crate::game::PlayerInput;
use crate::Result;
use std::io::Write;
use std::str::FromStr;

pub struct Console<'a> {
    input: &'a mut dyn PlayerInput,
    out: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(input: &'a mut dyn PlayerInput, out: &'a mut dyn Write) -> Self {
        Console { input, out }
    }

    /// Direct access to the output sink (used by the report writers)
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    /// Write text verbatim
    pub fn say(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Write text and flush so a prompt shows before blocking on input
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        self.say(text)?;
        self.out.flush()?;
        Ok(())
    }

    /// Read one raw line
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let line = self.input.next_line()?;
        if let Some(line) = &line {
            if self.input.echoes_input() {
                writeln!(self.out, "{line}")?;
            }
        }
        Ok(line)
    }

    /// Read until the first token of a line parses as `T`
    ///
    /// Anything after the first whitespace-separated token is discarded.
    /// Blank lines are skipped without comment; a line whose first token does
    /// not parse prints `retry` and reads again.
    pub fn read_number<T: FromStr>(&mut self, retry: &str) -> Result<Option<T>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let Some(token) = line.split_whitespace().next() else {
                continue;
            };
            match token.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.prompt(retry)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{FixedScriptInput, InteractiveInput};
    use std::io::Cursor;

    #[test]
    fn test_read_number_skips_garbage() {
        let mut input = InteractiveInput::new(Cursor::new("abc\n\n  7 trailing words\n"));
        let mut out = Vec::new();
        let mut console = Console::new(&mut input, &mut out);

        let value: Option<i64> = console.read_number("Try again: ").unwrap();
        assert_eq!(value, Some(7));
        assert_eq!(String::from_utf8(out).unwrap(), "Try again: ");
    }

    #[test]
    fn test_read_number_end_of_input() {
        let mut input = InteractiveInput::new(Cursor::new("x\n"));
        let mut out = Vec::new();
        let mut console = Console::new(&mut input, &mut out);

        let value: Option<f64> = console.read_number("Again: ").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_scripted_input_is_echoed() {
        let mut input = FixedScriptInput::new(vec!["Alex".to_string()]);
        let mut out = Vec::new();
        let mut console = Console::new(&mut input, &mut out);

        console.prompt("Name: ").unwrap();
        assert_eq!(console.read_line().unwrap(), Some("Alex".to_string()));
        assert_eq!(String::from_utf8(out).unwrap(), "Name: Alex\n");
    }
}
