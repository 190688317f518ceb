//! Single-player game session: owns the layout, guess history and the
//! status message, and resolves guesses.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::Rng;
#[cfg(feature = "std")]
use rand::SeedableRng;

use crate::common::{CoordError, EngineError};
use crate::config::GameConfig;
use crate::coord::{parse_coordinate, CellIndex};
use crate::placement::place_fleet;
use crate::ship::Fleet;

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum SessionStatus {
    /// Constructed, no fleet yet.
    Idle,
    InProgress,
    Won,
}

/// Result of one `submit_guess` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GuessOutcome {
    /// Text was empty, malformed or off the grid. Nothing recorded.
    Invalid(CoordError),
    /// Cell was guessed before. Nothing recorded.
    AlreadyGuessed(CellIndex),
    Miss(CellIndex),
    Hit(CellIndex),
    /// Hit that took the last cell of ship `ship`.
    Sunk { cell: CellIndex, ship: usize },
    /// Hit that sank the last afloat ship.
    Won { cell: CellIndex, ship: usize },
    /// Session already won; the guess was ignored.
    GameOver,
}

impl GuessOutcome {
    /// `true` when the guess was recorded in the guess history.
    pub fn is_recorded(&self) -> bool {
        matches!(
            self,
            GuessOutcome::Miss(_)
                | GuessOutcome::Hit(_)
                | GuessOutcome::Sunk { .. }
                | GuessOutcome::Won { .. }
        )
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessOutcome::Invalid(e) => write!(f, "{}", e),
            GuessOutcome::AlreadyGuessed(_) => write!(f, "You already tried this cell"),
            GuessOutcome::Miss(_) => write!(f, "You missed!"),
            GuessOutcome::Hit(_) => write!(f, "You hit a ship!"),
            GuessOutcome::Sunk { ship, .. } => write!(f, "You sank ship #{}!", ship + 1),
            GuessOutcome::Won { .. } => write!(f, "You won!"),
            GuessOutcome::GameOver => write!(f, "The game is over. Restart to play again"),
        }
    }
}

/// What a renderer should draw for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum CellState {
    /// Not guessed, no ship.
    Water,
    /// Not guessed, holds a ship. Renderers hide this during play.
    Ship,
    Miss,
    Hit,
}

/// Per-game state. Replaced wholesale on reset.
#[derive(Debug, Clone)]
struct Round {
    fleet: Fleet,
    owners: Vec<Option<usize>>,
    remaining: Vec<Vec<CellIndex>>,
    sunk: Vec<bool>,
    guessed: Vec<CellIndex>,
    guessed_mask: Vec<bool>,
    last: Option<GuessOutcome>,
    won: bool,
}

impl Round {
    fn new(fleet: Fleet) -> Self {
        let cells = fleet.grid_size() * fleet.grid_size();
        let remaining = fleet.ships().iter().map(|s| s.cells().to_vec()).collect();
        Self {
            owners: fleet.owner_map(),
            remaining,
            sunk: alloc::vec![false; fleet.len()],
            guessed: Vec::new(),
            guessed_mask: alloc::vec![false; cells],
            last: None,
            won: false,
            fleet,
        }
    }

    fn all_sunk(&self) -> bool {
        self.remaining.iter().all(Vec::is_empty)
    }

    fn resolve(&mut self, cell: CellIndex) -> GuessOutcome {
        if self.guessed_mask[cell] {
            return GuessOutcome::AlreadyGuessed(cell);
        }
        self.guessed_mask[cell] = true;
        self.guessed.push(cell);

        let mut outcome = match self.owners[cell] {
            Some(ship) => {
                self.remaining[ship].retain(|&c| c != cell);
                if self.remaining[ship].is_empty() && !self.sunk[ship] {
                    self.sunk[ship] = true;
                    GuessOutcome::Sunk { cell, ship }
                } else {
                    GuessOutcome::Hit(cell)
                }
            }
            None => GuessOutcome::Miss(cell),
        };

        // The victory check runs last and supersedes hit/sink.
        if self.all_sunk() {
            self.won = true;
            if let GuessOutcome::Sunk { ship, .. } = outcome {
                outcome = GuessOutcome::Won { cell, ship };
            }
        }
        outcome
    }
}

/// An explicitly owned game. Independent sessions share nothing.
///
/// Access to one session must be serialised by its owner; every operation
/// runs to completion synchronously.
#[derive(Debug, Clone)]
pub struct GameSession<R = SmallRng> {
    config: GameConfig,
    rng: R,
    round: Option<Round>,
}

#[cfg(feature = "std")]
impl GameSession<SmallRng> {
    /// Session seeded from the thread RNG. Starts `Idle`.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        let mut seed_rng = rand::rng();
        Self::with_rng(config, SmallRng::from_rng(&mut seed_rng))
    }
}

impl<R: Rng> GameSession<R> {
    /// Session drawing placements from `rng`. Starts `Idle`.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            round: None,
        })
    }

    /// Start a fresh game with a new random layout, discarding all state of
    /// the previous one.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        let fleet = place_fleet(
            self.config.grid_size(),
            &self.config.ship_sizes(),
            &mut self.rng,
        )?;
        info!(
            "new game: {} ship(s) on a {}x{} grid",
            fleet.len(),
            fleet.grid_size(),
            fleet.grid_size()
        );
        self.round = Some(Round::new(fleet));
        Ok(())
    }

    /// Start a fresh game with a caller-supplied layout.
    pub fn start_with_fleet(&mut self, fleet: Fleet) -> Result<(), EngineError> {
        if fleet.grid_size() != self.config.grid_size() {
            return Err(EngineError::GridMismatch {
                expected: self.config.grid_size(),
                found: fleet.grid_size(),
            });
        }
        debug!("new game with a fixed layout of {} ship(s)", fleet.len());
        self.round = Some(Round::new(fleet));
        Ok(())
    }

    /// Resolve one raw guess. Only an `Idle` session is an error; every
    /// kind of bad input comes back as an outcome and becomes the message.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, EngineError> {
        let grid_size = self.config.grid_size();
        let round = self.round.as_mut().ok_or(EngineError::NotStarted)?;
        if round.won {
            return Ok(GuessOutcome::GameOver);
        }

        let outcome = match parse_coordinate(raw, grid_size) {
            Ok(cell) => round.resolve(cell),
            Err(e) => GuessOutcome::Invalid(e),
        };
        debug!("guess {:?} -> {:?}", raw, outcome);
        if round.won {
            info!("game won after {} guess(es)", round.guessed.len());
        }
        round.last = Some(outcome);
        Ok(outcome)
    }
}

impl<R> GameSession<R> {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid_size(&self) -> usize {
        self.config.grid_size()
    }

    pub fn status(&self) -> SessionStatus {
        match &self.round {
            None => SessionStatus::Idle,
            Some(r) if r.won => SessionStatus::Won,
            Some(_) => SessionStatus::InProgress,
        }
    }

    /// `true` once every ship is sunk.
    pub fn is_over(&self) -> bool {
        self.status() == SessionStatus::Won
    }

    pub fn fleet(&self) -> Option<&Fleet> {
        self.round.as_ref().map(|r| &r.fleet)
    }

    /// Guessed cells in the order they were submitted.
    pub fn guessed_cells(&self) -> &[CellIndex] {
        self.round
            .as_ref()
            .map(|r| r.guessed.as_slice())
            .unwrap_or(&[])
    }

    /// Guessed cells that landed on a ship, in guess order.
    pub fn hit_cells(&self) -> Vec<CellIndex> {
        match &self.round {
            Some(r) => r
                .guessed
                .iter()
                .copied()
                .filter(|&c| r.owners[c].is_some())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Cells of `ship` not yet hit, in index order.
    pub fn remaining_cells(&self, ship: usize) -> Option<&[CellIndex]> {
        self.round
            .as_ref()
            .and_then(|r| r.remaining.get(ship))
            .map(Vec::as_slice)
    }

    /// Ship cells not yet hit, across the fleet.
    pub fn remaining_total(&self) -> usize {
        self.round
            .as_ref()
            .map_or(0, |r| r.remaining.iter().map(Vec::len).sum())
    }

    pub fn is_sunk(&self, ship: usize) -> bool {
        self.round
            .as_ref()
            .and_then(|r| r.sunk.get(ship).copied())
            .unwrap_or(false)
    }

    pub fn sunk_count(&self) -> usize {
        self.round
            .as_ref()
            .map_or(0, |r| r.sunk.iter().filter(|&&s| s).count())
    }

    /// Outcome of the latest guess, if any since the last reset.
    pub fn last_outcome(&self) -> Option<GuessOutcome> {
        self.round.as_ref().and_then(|r| r.last)
    }

    /// Status line for the latest guess; empty when there is none.
    pub fn message(&self) -> String {
        self.last_outcome()
            .map(|o| o.to_string())
            .unwrap_or_default()
    }

    pub fn cell_state(&self, cell: CellIndex) -> Option<CellState> {
        let r = self.round.as_ref()?;
        let owner = *r.owners.get(cell)?;
        Some(match (r.guessed_mask[cell], owner.is_some()) {
            (true, true) => CellState::Hit,
            (true, false) => CellState::Miss,
            (false, true) => CellState::Ship,
            (false, false) => CellState::Water,
        })
    }

    /// Serializable view of the session for front ends.
    #[cfg(feature = "std")]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            grid_size: self.grid_size(),
            status: self.status(),
            ships: self
                .fleet()
                .map(|f| f.ships().iter().map(|s| s.cells().to_vec()).collect())
                .unwrap_or_default(),
            guessed: self.guessed_cells().to_vec(),
            hits: self.hit_cells(),
            remaining: self
                .round
                .as_ref()
                .map(|r| r.remaining.clone())
                .unwrap_or_default(),
            message: self.message(),
        }
    }
}

/// Everything a renderer reads after an update.
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SessionSnapshot {
    pub grid_size: usize,
    pub status: SessionStatus,
    pub ships: Vec<Vec<CellIndex>>,
    pub guessed: Vec<CellIndex>,
    pub hits: Vec<CellIndex>,
    pub remaining: Vec<Vec<CellIndex>>,
    pub message: String,
}
