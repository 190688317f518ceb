#![cfg(feature = "std")]

//! Terminal front end: draws the grid, forwards typed coordinates to the
//! session and offers a restart once the game is won.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use rand::Rng;

use crate::{format_label, CellState, GameConfig, GameSession, SessionStatus};

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Restart,
    Reveal,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "restart" | "new" => Command::Restart,
            "reveal" => Command::Reveal,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Guess(line.trim().to_string()),
        }
    }
}

/// One-line fleet description, e.g. `Battleship (5), Destroyer (4)`.
pub fn fleet_summary(config: &GameConfig) -> String {
    config
        .fleet()
        .iter()
        .map(|def| format!("{} ({})", def.name(), def.size()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Draw the grid with row letters down the side and column numbers across
/// the top. Unhit ship cells are only drawn when `reveal` is set.
pub fn render_grid<R>(session: &GameSession<R>, reveal: bool) -> String {
    let n = session.grid_size();
    let mut header = String::from("   ");
    let mut body = String::new();
    for cell in 0..n * n {
        let Ok(label) = format_label(cell, n) else {
            continue;
        };
        if label.is_first_row {
            let _ = write!(header, "{:>3}", label.column);
        }
        if label.is_first_column {
            let _ = write!(body, " {} ", label.row_letter);
        }
        let ch = match session.cell_state(cell) {
            Some(CellState::Hit) => 'X',
            Some(CellState::Miss) => 'o',
            Some(CellState::Ship) if reveal => 'S',
            _ => '.',
        };
        let _ = write!(body, "{:>3}", ch);
        if label.column == n {
            body.push('\n');
        }
    }
    header.push('\n');
    header + &body
}

/// Run an interactive game until the player quits or input ends.
pub fn run<R, I, O>(session: &mut GameSession<R>, input: I, mut output: O) -> anyhow::Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    if session.status() == SessionStatus::Idle {
        session.reset()?;
    }
    writeln!(output, "Fleet: {}", fleet_summary(session.config()))?;
    let mut reveal = false;
    let mut lines = input.lines();
    loop {
        write!(output, "\n{}", render_grid(session, reveal || session.is_over()))?;
        let message = session.message();
        if !message.is_empty() {
            writeln!(output, "{}", message)?;
        }
        if session.is_over() {
            write!(output, "Type restart to play again or quit: ")?;
        } else {
            write!(output, "Enter a cell (e.g. A6): ")?;
        }
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };
        match Command::parse(&line?) {
            Command::Quit => return Ok(()),
            Command::Restart => {
                reveal = false;
                session.reset()?;
            }
            Command::Reveal => reveal = !reveal,
            Command::Guess(_) if session.is_over() => {}
            Command::Guess(text) => {
                session.submit_guess(&text)?;
            }
        }
    }
}
