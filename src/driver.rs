//! Line-oriented terminal driver.
//!
//! Reads one command per line and writes the board and status after
//! each. All game decisions are made by [`GameEngine`].

use crate::games::tictactoe::{GameEngine, Position, TurnResult};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Play at a square. Carries the raw index so out-of-range numbers
    /// reach the engine and are reported as invalid moves.
    Play(i64),
    /// Start over.
    Reset,
    /// Print the board.
    Board,
    /// Stop the driver.
    Quit,
    /// Blank line.
    Empty,
    /// Anything unrecognised.
    Unknown,
}

impl Input {
    /// Parses a line of input.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => Input::Empty,
            "reset" | "r" => Input::Reset,
            "board" | "b" => Input::Board,
            "quit" | "q" | "exit" => Input::Quit,
            _ => {
                if let Ok(index) = line.parse::<i64>() {
                    Input::Play(index)
                } else {
                    Position::from_label_or_number(line)
                        .map(|pos| Input::Play(pos.into()))
                        .unwrap_or(Input::Unknown)
                }
            }
        }
    }
}

/// Output format for turn results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Board drawing followed by the status line.
    #[default]
    Text,
    /// One JSON object per result.
    Json,
}

/// Runs the game loop until `quit` or end of input.
///
/// # Errors
///
/// Returns I/O errors from `input` or `output`, or a serialization error
/// in JSON mode.
#[instrument(skip_all, fields(format = ?format))]
pub fn run<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> anyhow::Result<()> {
    writeln!(output, "{}\n{}'s turn.", engine.board(), engine.active_player().name())?;

    for line in input.lines() {
        let line = line?;
        let command = Input::parse(&line);
        debug!(?command, "Parsed input");
        match command {
            Input::Play(index) => {
                let result = engine.play_turn(index);
                report(engine, &result, &mut output, format)?;
            }
            Input::Reset => {
                let result = engine.reset_game();
                report(engine, &result, &mut output, format)?;
            }
            Input::Board => writeln!(output, "{}", engine.board())?,
            Input::Quit => break,
            Input::Empty => {}
            Input::Unknown => writeln!(
                output,
                "Enter a square (0-8 or a name like \"center\"), reset, board or quit."
            )?,
        }
    }
    Ok(())
}

fn report<W: Write>(
    engine: &GameEngine,
    result: &TurnResult,
    output: &mut W,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(output, "{}\n{}", engine.board(), result)?,
        OutputFormat::Json => writeln!(output, "{}", serde_json::to_string(result)?)?,
    }
    Ok(())
}
