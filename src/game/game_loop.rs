//! Game loop implementation
//!
//! Runs setup and then the location menus until the player quits or input
//! runs out. The loop is a flat state machine keyed on
//! [`GameState::current_location`]; quitting is a value returned up the call
//! chain, never a process exit, so the caller can still flush output and write
//! its summary.

use crate::core::Location;
use crate::game::menu::{banner, LocationMenu, MenuAction};
use crate::game::report::{save_report, show_inventory, show_report};
use crate::game::setup::{collect_player_setup, display_banner};
use crate::game::{Console, GameConfig, GameState, PlayerInput, SearchOutcome, TravelOutcome};
use crate::Result;
use std::io::Write;

/// Whether the loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Reason the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEndReason {
    /// The player chose Quit from the menu at this location
    PlayerQuit(Location),
    /// Input ended before the player quit
    InputExhausted,
}

/// Result of running a game to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub end_reason: GameEndReason,
    pub mission_complete: bool,
    /// Number of valid menu selections made
    pub choices_made: u32,
}

/// Game loop manager
pub struct GameLoop<'a> {
    /// The game state
    pub game: &'a mut GameState,
    config: &'a GameConfig,
    choice_counter: u32,
}

impl<'a> GameLoop<'a> {
    pub fn new(game: &'a mut GameState, config: &'a GameConfig) -> Self {
        game.logger.set_verbosity(config.verbosity);
        GameLoop {
            game,
            config,
            choice_counter: 0,
        }
    }

    /// Show the banner, run setup, then play until the player quits
    pub fn run_game(
        &mut self,
        input: &mut dyn PlayerInput,
        out: &mut dyn Write,
    ) -> Result<GameResult> {
        let mut console = Console::new(input, out);
        display_banner(&mut console)?;

        if collect_player_setup(self.game, &mut console)? == Flow::Quit {
            return self.finish(&mut console, GameEndReason::InputExhausted);
        }

        self.run_menus(&mut console)
    }

    /// Run the location menus on an already configured state
    pub fn run_menus(&mut self, console: &mut Console<'_>) -> Result<GameResult> {
        loop {
            let location = self.game.current_location;
            let menu = LocationMenu::for_location(location);

            let Some(action) = self.read_selection(menu, console)? else {
                return self.finish(console, GameEndReason::InputExhausted);
            };
            self.choice_counter += 1;

            if self.dispatch(action, console)? == Flow::Quit {
                return self.finish(console, GameEndReason::PlayerQuit(location));
            }
        }
    }

    /// Show a menu and read until a listed option is chosen
    ///
    /// Returns `None` once input is exhausted.
    fn read_selection(
        &mut self,
        menu: &LocationMenu,
        console: &mut Console<'_>,
    ) -> Result<Option<MenuAction>> {
        let retry = menu.retry_prompt();
        loop {
            console.prompt(&menu.render())?;
            let Some(choice) = console.read_number::<i64>(&retry)? else {
                return Ok(None);
            };
            match menu.select(choice) {
                Some(action) => return Ok(Some(action)),
                None => console.say("Invalid choice.\n\n")?,
            }
        }
    }

    /// Perform one menu action
    pub fn dispatch(&mut self, action: MenuAction, console: &mut Console<'_>) -> Result<Flow> {
        match action {
            MenuAction::Enter(destination) => self.enter(destination, console)?,
            MenuAction::Return(destination) => self.game.retreat(destination),
            MenuAction::SearchDocuments => {
                self.search(console)?;
                self.game.retreat(Location::Outside);
            }
            MenuAction::ViewInventory => show_inventory(console.out(), self.game)?,
            MenuAction::ViewReport => show_report(console.out(), self.game)?,
            MenuAction::SaveReport => self.save(console)?,
            MenuAction::Quit => {
                if self.game.current_location == Location::Outside {
                    console.say(&format!(
                        "Exiting game. Goodbye, {}.\n",
                        self.game.player_name
                    ))?;
                } else {
                    console.say("Exiting game.\n")?;
                }
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn enter(&mut self, destination: Location, console: &mut Console<'_>) -> Result<()> {
        match self.game.travel(destination) {
            TravelOutcome::Moved if destination == Location::Lab => {
                console.say("You swipe the keycard. The door unlocks.\n")
            }
            TravelOutcome::Moved => Ok(()),
            TravelOutcome::MissingKeycard => console.say("You do not have the keycard.\n\n"),
        }
    }

    fn search(&mut self, console: &mut Console<'_>) -> Result<()> {
        let already_done = self.game.mission_complete();
        if !already_done {
            console.say("You search the lab thoroughly...\n")?;
            console.say("You find the classified research documents!\n")?;
        }

        match self.game.search_for_documents() {
            SearchOutcome::AlreadyCompleted => {
                console.say("You have already completed your mission.\n\n")
            }
            SearchOutcome::Completed => console.say(&format!(
                "\n{}\nYou have secured the research documents.\n\
                 You may now review your report or quit the game.\n\n",
                banner("MISSION COMPLETE")
            )),
        }
    }

    /// Save the report; a failure is reported to the player and play continues
    fn save(&mut self, console: &mut Console<'_>) -> Result<()> {
        let path = &self.config.report_path;
        match save_report(path, self.game) {
            Ok(()) => {
                self.game
                    .logger
                    .event("report", &format!("report saved to {}", path.display()));
                console.say(&format!("Report saved to {}\n\n", path.display()))
            }
            Err(err) => {
                self.game
                    .logger
                    .minimal(&format!("failed to save report to {}: {err}", path.display()));
                console.say("Error saving report.\n")
            }
        }
    }

    fn finish(&mut self, console: &mut Console<'_>, end_reason: GameEndReason) -> Result<GameResult> {
        console.out().flush()?;
        self.game.logger.event(
            "game",
            &format!(
                "game over ({end_reason:?}) after {} choices",
                self.choice_counter
            ),
        );
        Ok(GameResult {
            end_reason,
            mission_complete: self.game.mission_complete(),
            choices_made: self.choice_counter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DifficultyLevel, PlayerName, TimeLimit, KEYCARD};
    use crate::game::FixedScriptInput;

    fn script(lines: &[&str]) -> FixedScriptInput {
        FixedScriptInput::new(lines.iter().map(|l| l.to_string()).collect())
    }

    fn configured_state(with_keycard: bool) -> GameState {
        let mut game = GameState::new();
        game.logger.enable_capture();
        if with_keycard {
            game.configure(
                PlayerName::from("Alex"),
                DifficultyLevel::Medium,
                TimeLimit::new(30.0).unwrap(),
            );
        }
        game
    }

    fn play_menus(game: &mut GameState, lines: &[&str]) -> (GameResult, String) {
        let config = GameConfig::default();
        let mut input = script(lines);
        let mut out = Vec::new();
        let result = {
            let mut console = Console::new(&mut input, &mut out);
            let mut game_loop = GameLoop::new(game, &config);
            game_loop.run_menus(&mut console).unwrap()
        };
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_game_loop_creation() {
        let mut game = GameState::new();
        let config = GameConfig::default();
        let _game_loop = GameLoop::new(&mut game, &config);
    }

    #[test]
    fn test_full_route_to_lab() {
        let mut game = configured_state(true);
        let (result, transcript) = play_menus(&mut game, &["1", "2", "1", "1", "5"]);

        assert_eq!(result.end_reason, GameEndReason::PlayerQuit(Location::Outside));
        assert!(result.mission_complete);
        assert_eq!(result.choices_made, 5);
        assert_eq!(game.current_location, Location::Outside);
        assert_eq!(game.sessions.len(), 3);
        assert!(transcript.contains("You swipe the keycard. The door unlocks.\n"));
        assert!(transcript.contains("MISSION COMPLETE"));
        assert!(transcript.ends_with("Exiting game. Goodbye, Alex.\n"));
    }

    #[test]
    fn test_lab_door_denies_without_keycard() {
        let mut game = configured_state(false);
        assert!(!game.has_item(KEYCARD));

        let (result, transcript) = play_menus(&mut game, &["1", "2", "1", "6"]);

        assert_eq!(result.end_reason, GameEndReason::PlayerQuit(Location::LabDoor));
        assert_eq!(game.current_location, Location::LabDoor);
        assert_eq!(game.sessions.len(), 2);
        assert!(transcript.contains("You do not have the keycard.\n\n"));
        assert!(transcript.ends_with("Exiting game.\n"));
    }

    #[test]
    fn test_second_search_reports_already_completed() {
        let mut game = configured_state(true);
        let (_, transcript) =
            play_menus(&mut game, &["1", "2", "1", "1", "1", "2", "1", "1", "5"]);

        assert_eq!(transcript.matches("You find the classified research documents!").count(), 1);
        assert_eq!(
            transcript.matches("You have already completed your mission.").count(),
            1
        );
        assert_eq!(
            game.inventory.items(),
            &["Keycard".to_string(), "Research Documents".to_string()]
        );
        assert_eq!(game.sessions.len(), 6);
        assert_eq!(game.sessions.documents_found(), 1);
        assert_eq!(game.current_location, Location::Outside);
    }

    #[test]
    fn test_invalid_selections_reprompt() {
        let mut game = configured_state(true);
        let (result, transcript) = play_menus(&mut game, &["go", "9", "0", "5"]);

        assert_eq!(result.choices_made, 1);
        assert!(transcript.contains("Invalid input. Enter 1-5: "));
        assert_eq!(transcript.matches("Invalid choice.\n\n").count(), 2);
        assert_eq!(
            transcript.matches("OUTSIDE THE CAVE").count(),
            3,
            "menu is re-displayed after each out-of-range choice"
        );
    }

    #[test]
    fn test_leave_and_return_do_not_log_sessions() {
        let mut game = configured_state(true);
        let (_, _) = play_menus(&mut game, &["1", "2", "2", "1", "5"]);

        let names: Vec<&str> = game
            .sessions
            .sessions()
            .iter()
            .map(|s| s.area_name.as_str())
            .collect();
        assert_eq!(names, vec!["Entrance Cave", "Lab Door"]);
        assert_eq!(game.current_location, Location::Outside);
    }

    #[test]
    fn test_end_of_input_stops_cleanly() {
        let mut game = configured_state(true);
        let (result, _) = play_menus(&mut game, &["1"]);

        assert_eq!(result.end_reason, GameEndReason::InputExhausted);
        assert_eq!(game.current_location, Location::Cave);
    }

    #[test]
    fn test_save_failure_is_not_fatal() {
        let mut game = configured_state(true);
        let config = GameConfig::default().with_report_path(
            std::env::temp_dir()
                .join("lab_adventure_no_such_dir")
                .join("report.txt"),
        );
        let mut input = script(&["4", "1", "6"]);
        let mut out = Vec::new();
        let result = {
            let mut console = Console::new(&mut input, &mut out);
            GameLoop::new(&mut game, &config)
                .run_menus(&mut console)
                .unwrap()
        };
        let transcript = String::from_utf8(out).unwrap();

        assert!(transcript.contains("Error saving report.\n"));
        assert_eq!(result.end_reason, GameEndReason::PlayerQuit(Location::Cave));
        assert!(game
            .logger
            .logs()
            .iter()
            .any(|log| log.message.starts_with("failed to save report")));
    }
}
