//! Summary report and inventory rendering
//!
//! The report body is written to any [`Write`] sink, so the console view and
//! the saved `report.txt` come from the same code and always match.

use crate::core::{DifficultyLevel, Session, MAX_SESSIONS};
use crate::game::GameState;
use crate::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const AREA_COL_WIDTH: usize = 20;
const STATUS_COL_WIDTH: usize = 15;
const RULE_WIDTH: usize = 35;
const REPORT_TITLE: &str = "==================== ADVENTURE SUMMARY ====================";

/// Figures shown below the report table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub player_name: String,
    pub difficulty: DifficultyLevel,
    pub mission_complete: bool,
    pub locations_visited: usize,
    pub document_finds: usize,
    pub percent_explored: f64,
    pub mission_time_limit: f64,
    pub inventory: Vec<String>,
    pub sessions: Vec<Session>,
}

impl ReportSummary {
    pub fn from_state(game: &GameState) -> Self {
        let locations_visited = game.sessions.len();
        ReportSummary {
            player_name: game.player_name.to_string(),
            difficulty: game.difficulty,
            mission_complete: game.mission_complete(),
            locations_visited,
            document_finds: game.sessions.documents_found(),
            percent_explored: (locations_visited * 100) as f64 / MAX_SESSIONS as f64,
            mission_time_limit: game.mission_time_limit.minutes(),
            inventory: game.inventory.items().to_vec(),
            sessions: game.sessions.sessions().to_vec(),
        }
    }
}

/// Significant digits shown for report numbers
const SIGNIFICANT_DIGITS: i32 = 6;

/// Format a number with six significant digits, `%g` style
///
/// `30`, `12.5`, `0.333333`, `12.3457`, `1e-07`, `1e+20`. Trailing zeros are
/// dropped; exponents below -4 or at least six switch to scientific notation.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Rounding to the shown precision can bump the exponent (999999.5 -> 1e+06).
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// Write the report table and summary lines
pub fn write_report<W: Write + ?Sized>(out: &mut W, game: &GameState) -> io::Result<()> {
    let summary = ReportSummary::from_state(game);
    let rule = "-".repeat(RULE_WIDTH);

    writeln!(out, "{REPORT_TITLE}")?;
    writeln!(
        out,
        "{:<area$}{:<status$}",
        "Area",
        "Documents",
        area = AREA_COL_WIDTH,
        status = STATUS_COL_WIDTH
    )?;
    writeln!(out, "{rule}")?;

    for session in game.sessions.sessions() {
        let status = if session.found_documents { "Found" } else { "None" };
        writeln!(
            out,
            "{:<area$}{:<status_w$}",
            session.area_name,
            status,
            area = AREA_COL_WIDTH,
            status_w = STATUS_COL_WIDTH
        )?;
    }

    writeln!(out, "{rule}")?;
    writeln!(out, "Total locations visited: {}", summary.locations_visited)?;
    writeln!(out, "Total document finds:    {}", summary.document_finds)?;
    writeln!(
        out,
        "Percent of map explored: {}%",
        format_number(summary.percent_explored)
    )?;
    writeln!(
        out,
        "Mission time limit:      {} minutes",
        format_number(summary.mission_time_limit)
    )?;
    Ok(())
}

/// Console view of the report, framed by blank lines
pub fn show_report<W: Write + ?Sized>(out: &mut W, game: &GameState) -> io::Result<()> {
    writeln!(out)?;
    write_report(out, game)?;
    writeln!(out)
}

/// Console view of the inventory
pub fn show_inventory<W: Write + ?Sized>(out: &mut W, game: &GameState) -> io::Result<()> {
    writeln!(out, "\n--- Inventory ---")?;
    for item in game.inventory.items() {
        writeln!(out, "- {item}")?;
    }
    writeln!(out)
}

/// Write the report to `path`, replacing any previous file
pub fn save_report(path: &Path, game: &GameState) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_report(&mut writer, game)?;
    writer.flush()
}

/// Write the summary as pretty-printed JSON
pub fn save_summary_json(path: &Path, game: &GameState) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &ReportSummary::from_state(game))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Location, PlayerName, TimeLimit};

    fn completed_game() -> GameState {
        let mut game = GameState::new();
        game.logger.enable_capture();
        game.configure(
            PlayerName::from("Alex"),
            DifficultyLevel::Medium,
            TimeLimit::new(30.0).unwrap(),
        );
        game.travel(Location::Cave);
        game.travel(Location::LabDoor);
        game.travel(Location::Lab);
        game.search_for_documents();
        game
    }

    fn render(game: &GameState) -> String {
        let mut out = Vec::new();
        write_report(&mut out, game).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(30.0), "30");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(1.0 / 3.0), "0.333333");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(12.3456789), "12.3457");
        assert_eq!(format_number(999999.0), "999999");
        assert_eq!(format_number(1234567.0), "1.23457e+06");
    }

    #[test]
    fn test_format_number_never_rounds_to_zero() {
        assert_eq!(format_number(1e-7), "1e-07");
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(0.00001234), "1.234e-05");
        assert_eq!(format_number(1e20), "1e+20");
    }

    #[test]
    fn test_tiny_time_limit_is_echoed() {
        let mut game = GameState::new();
        game.logger.enable_capture();
        game.configure(
            PlayerName::from("Alex"),
            DifficultyLevel::Low,
            TimeLimit::new(1e-7).unwrap(),
        );

        assert!(render(&game).contains("Mission time limit:      1e-07 minutes\n"));
    }

    #[test]
    fn test_report_layout() {
        let game = completed_game();

        let expected = [
            "==================== ADVENTURE SUMMARY ====================",
            "Area                Documents      ",
            "-----------------------------------",
            "Entrance Cave       None           ",
            "Lab Door            None           ",
            "Laboratory          Found          ",
            "-----------------------------------",
            "Total locations visited: 3",
            "Total document finds:    1",
            "Percent of map explored: 30%",
            "Mission time limit:      30 minutes",
            "",
        ]
        .join("\n");
        similar_asserts::assert_eq!(render(&game), expected);
    }

    #[test]
    fn test_empty_report() {
        let game = GameState::new();
        let report = render(&game);

        assert!(report.contains("Total locations visited: 0\n"));
        assert!(report.contains("Percent of map explored: 0%\n"));
        assert!(report.contains("Mission time limit:      0 minutes\n"));
    }

    #[test]
    fn test_percent_tracks_session_count() {
        let mut game = GameState::new();
        game.logger.enable_capture();
        for visits in 1..=12usize {
            game.travel(Location::Cave);
            game.retreat(Location::Outside);

            let summary = ReportSummary::from_state(&game);
            let logged = visits.min(MAX_SESSIONS);
            assert_eq!(summary.locations_visited, logged);
            assert_eq!(summary.percent_explored, (logged * 10) as f64);
        }
    }

    #[test]
    fn test_console_views() {
        let game = completed_game();

        let mut out = Vec::new();
        show_inventory(&mut out, &game).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n--- Inventory ---\n- Keycard\n- Research Documents\n\n"
        );

        let mut out = Vec::new();
        show_report(&mut out, &game).unwrap();
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown, format!("\n{}\n", render(&game)));
    }

    #[test]
    fn test_save_report_matches_console_body() {
        let game = completed_game();
        let path = std::env::temp_dir().join(format!(
            "lab_adventure_report_{}.txt",
            std::process::id()
        ));

        save_report(&path, &game).unwrap();
        let saved = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(saved, render(&game));
    }

    #[test]
    fn test_save_report_to_missing_directory_fails() {
        let game = completed_game();
        let path = std::env::temp_dir()
            .join("lab_adventure_missing_dir")
            .join("nested")
            .join("report.txt");

        assert!(save_report(&path, &game).is_err());
    }

    #[test]
    fn test_summary_json() {
        let game = completed_game();
        let value = serde_json::to_value(ReportSummary::from_state(&game)).unwrap();

        assert_eq!(value["player_name"], "Alex");
        assert_eq!(value["difficulty"], "MEDIUM");
        assert_eq!(value["locations_visited"], 3);
        assert_eq!(value["document_finds"], 1);
        assert_eq!(value["percent_explored"], 30.0);
        assert_eq!(value["mission_complete"], true);
        assert_eq!(value["sessions"][2]["area_name"], "Laboratory");
        assert_eq!(value["sessions"][2]["found_documents"], true);
    }
}
