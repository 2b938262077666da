//! Opening banner and one-time player setup

use crate::core::{DifficultyLevel, PlayerName, TimeLimit};
use crate::game::{Console, Flow, GameState};
use crate::Result;

const NAME_PROMPT: &str = "Enter your operative name: ";
const NAME_RETRY: &str = "Name cannot be empty. Enter your operative name: ";
const DIFFICULTY_PROMPT: &str = "Choose difficulty (1=Low, 2=Medium, 3=High): ";
const DIFFICULTY_RETRY: &str = "Invalid choice. Enter 1, 2, or 3: ";
const TIME_LIMIT_PROMPT: &str = "Enter your mission time limit in minutes: ";
const TIME_LIMIT_RETRY: &str = "Invalid. Enter a positive number: ";

pub fn display_banner(console: &mut Console<'_>) -> Result<()> {
    console.say(concat!(
        "=====================================================\n",
        "      WELCOME TO THE UNDERGROUND LAB ADVENTURE       \n",
        "=====================================================\n",
        "You begin with a keycard and stand outside a cave\n",
        "that leads to a hidden underground laboratory.\n",
        "Your mission: Find the research documents and escape.\n\n",
    ))
}

/// Ask for name, difficulty and time limit, re-prompting until each is valid
///
/// On success the state is configured and the keycard is in the inventory.
/// Returns [`Flow::Quit`] if input ends before setup is finished.
pub fn collect_player_setup(game: &mut GameState, console: &mut Console<'_>) -> Result<Flow> {
    let Some(name) = read_name(console)? else {
        return Ok(Flow::Quit);
    };

    console.prompt(DIFFICULTY_PROMPT)?;
    let difficulty = loop {
        let Some(choice) = console.read_number::<i64>(DIFFICULTY_RETRY)? else {
            return Ok(Flow::Quit);
        };
        match DifficultyLevel::from_choice(choice) {
            Ok(level) => break level,
            Err(_) => console.prompt(DIFFICULTY_RETRY)?,
        }
    };

    console.prompt(TIME_LIMIT_PROMPT)?;
    let limit = loop {
        let Some(minutes) = console.read_number::<f64>(TIME_LIMIT_RETRY)? else {
            return Ok(Flow::Quit);
        };
        match TimeLimit::new(minutes) {
            Ok(limit) => break limit,
            Err(_) => console.prompt(TIME_LIMIT_RETRY)?,
        }
    };

    game.configure(name, difficulty, limit);
    console.say(&format!(
        "\nWelcome, {}. Your keycard has been added to your inventory.\n\n",
        game.player_name
    ))?;
    Ok(Flow::Continue)
}

fn read_name(console: &mut Console<'_>) -> Result<Option<PlayerName>> {
    console.prompt(NAME_PROMPT)?;
    loop {
        let Some(line) = console.read_line()? else {
            return Ok(None);
        };
        match PlayerName::parse(&line) {
            Ok(name) => return Ok(Some(name)),
            Err(_) => console.prompt(NAME_RETRY)?,
        }
    }
}
