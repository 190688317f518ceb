//! Common types for the engine: configuration/precondition errors and
//! coordinate classification.

use core::fmt;

/// Errors returned by placement and session operations.
///
/// These are programming or configuration mistakes. Bad player input is
/// never reported through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Grid side must be in `1..=26` (one row letter per row).
    InvalidGridSize(usize),
    /// Fleet definition has no ships.
    EmptyFleet,
    /// Ship at `ship` has size zero.
    ZeroShipSize { ship: usize },
    /// Ship at `ship` is longer than the grid side.
    ShipTooLong { ship: usize, size: usize, grid_size: usize },
    /// Total ship cells exceed the grid's cell count.
    FleetTooLarge { cells: usize, capacity: usize },
    /// Random placement gave up on ship `ship`.
    PlacementExhausted { ship: usize },
    /// A hand-built fleet targets a different grid than the session.
    GridMismatch { expected: usize, found: usize },
    /// A ship's run leaves the grid or wraps a row.
    ShipOutOfBounds { ship: usize },
    /// Two ships share a cell.
    ShipOverlaps { ship: usize, cell: usize },
    /// A guess was submitted before the first `reset`.
    NotStarted,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidGridSize(n) => {
                write!(f, "Grid size {} is not supported (must be 1-26)", n)
            }
            EngineError::EmptyFleet => write!(f, "Fleet must contain at least one ship"),
            EngineError::ZeroShipSize { ship } => write!(f, "Ship #{} has size 0", ship + 1),
            EngineError::ShipTooLong {
                ship,
                size,
                grid_size,
            } => write!(
                f,
                "Ship #{} of size {} does not fit a {}x{} grid",
                ship + 1,
                size,
                grid_size,
                grid_size
            ),
            EngineError::FleetTooLarge { cells, capacity } => write!(
                f,
                "Fleet needs {} cells but the grid only has {}",
                cells, capacity
            ),
            EngineError::PlacementExhausted { ship } => {
                write!(f, "Unable to place ship #{}", ship + 1)
            }
            EngineError::GridMismatch { expected, found } => write!(
                f,
                "Fleet was laid out for grid size {} but the session uses {}",
                found, expected
            ),
            EngineError::ShipOutOfBounds { ship } => {
                write!(f, "Ship #{} placement is out of bounds", ship + 1)
            }
            EngineError::ShipOverlaps { ship, cell } => write!(
                f,
                "Ship #{} overlaps another ship at cell {}",
                ship + 1,
                cell
            ),
            EngineError::NotStarted => write!(f, "Game has not been started"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

/// Why a piece of guess text could not be turned into a cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum CoordError {
    /// Nothing but whitespace.
    Empty,
    /// Not a row letter followed by a column number.
    Malformed,
    /// Well formed, but the row or column is outside the grid.
    OutOfRange,
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::Empty => write!(f, "Please enter a cell (e.g. A6)"),
            CoordError::Malformed => write!(
                f,
                "Please enter a valid cell: a row letter followed by a column number"
            ),
            CoordError::OutOfRange => write!(f, "That cell is outside the grid"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordError {}
