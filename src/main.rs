//! Underground Lab Adventure - Main Binary
//!
//! Text-menu adventure played on the console

use clap::Parser;
use lab_adventure::{
    game::{
        report::save_summary_json, FixedScriptInput, GameConfig, GameLoop, GameState,
        InteractiveInput, PlayerInput, VerbosityLevel, DEFAULT_REPORT_PATH,
    },
    Result,
};
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lab-adventure")]
#[command(about = "Underground Lab Adventure - find the research documents and escape", long_about = None)]
struct Cli {
    /// File written by the "Save report to file" menu option (overwritten each save)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_REPORT_PATH)]
    report_path: PathBuf,

    /// Event log verbosity on stderr (0=silent, 1=minimal, 2=normal, 3=verbose)
    #[arg(long, short = 'v', default_value = "normal")]
    verbosity: VerbosityLevel,

    /// Play from a fixed script instead of stdin (inputs separated by ';', e.g. "Alex;2;30;1;5")
    #[arg(long, value_name = "SCRIPT")]
    fixed_inputs: Option<String>,

    /// Write the final report summary as JSON to this file when the game ends
    #[arg(long, value_name = "PATH")]
    summary_json: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::default()
        .with_report_path(cli.report_path)
        .with_verbosity(cli.verbosity);

    let mut input: Box<dyn PlayerInput> = match cli.fixed_inputs {
        Some(script) => Box::new(FixedScriptInput::parse(&script)?),
        None => Box::new(InteractiveInput::new(io::stdin().lock())),
    };
    let mut out = BufWriter::new(io::stdout().lock());

    let mut game = GameState::new();
    let result = GameLoop::new(&mut game, &config).run_game(input.as_mut(), &mut out)?;
    drop(out);

    if let Some(path) = cli.summary_json {
        match save_summary_json(&path, &game) {
            Ok(()) => game
                .logger
                .event("report", &format!("summary written to {}", path.display())),
            Err(err) => game.logger.minimal(&format!(
                "failed to write summary to {}: {err}",
                path.display()
            )),
        }
    }

    game.logger
        .verbose(&format!("exit: {:?}", result.end_reason));
    Ok(())
}
