//! Placed ships and fleets.

use alloc::vec::Vec;

use crate::common::EngineError;
use crate::config::MAX_GRID_SIZE;
use crate::coord::{row_col, CellIndex};

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship laid out on the grid. Immutable once placed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    id: usize,
    orientation: Orientation,
    cells: Vec<CellIndex>,
}

impl Ship {
    /// Lay out a ship of `size` cells from `anchor`, checking it stays on
    /// the grid.
    pub fn new(
        id: usize,
        size: usize,
        orientation: Orientation,
        anchor: CellIndex,
        grid_size: usize,
    ) -> Result<Self, EngineError> {
        if size == 0 {
            return Err(EngineError::ZeroShipSize { ship: id });
        }
        if anchor >= grid_size * grid_size
            || is_overflowing(orientation, grid_size, size, anchor)
        {
            return Err(EngineError::ShipOutOfBounds { ship: id });
        }
        Ok(Self {
            id,
            orientation,
            cells: ship_run(orientation, grid_size, size, anchor),
        })
    }

    /// Wrap a run produced by `ship_run` from an in-bounds anchor.
    pub(crate) fn from_run(id: usize, orientation: Orientation, cells: Vec<CellIndex>) -> Self {
        Self {
            id,
            orientation,
            cells,
        }
    }

    /// Ordinal of the ship within its fleet, starting at 0.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn anchor(&self) -> CellIndex {
        self.cells[0]
    }

    /// Occupied cells in index order.
    pub fn cells(&self) -> &[CellIndex] {
        &self.cells
    }

}

/// Would a ship of `size` starting at `anchor` run off the grid?
pub fn is_overflowing(
    orientation: Orientation,
    grid_size: usize,
    size: usize,
    anchor: CellIndex,
) -> bool {
    let (row, col) = row_col(anchor, grid_size);
    match orientation {
        Orientation::Horizontal => col + size > grid_size,
        Orientation::Vertical => row + size > grid_size,
    }
}

/// The `size` contiguous cells starting at `anchor`. The caller checks
/// overflow first.
pub fn ship_run(
    orientation: Orientation,
    grid_size: usize,
    size: usize,
    anchor: CellIndex,
) -> Vec<CellIndex> {
    let step = match orientation {
        Orientation::Horizontal => 1,
        Orientation::Vertical => grid_size,
    };
    (0..size).map(|i| anchor + i * step).collect()
}

/// Ordered, non-overlapping set of ships on one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Fleet {
    grid_size: usize,
    ships: Vec<Ship>,
}

impl Fleet {
    /// Assemble a fleet from explicit `(size, orientation, anchor)` layouts.
    /// Ship ids follow slice order.
    pub fn from_layout(
        grid_size: usize,
        layout: &[(usize, Orientation, CellIndex)],
    ) -> Result<Self, EngineError> {
        let ships = layout
            .iter()
            .enumerate()
            .map(|(id, &(size, orientation, anchor))| {
                Ship::new(id, size, orientation, anchor, grid_size)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_ships(grid_size, ships)
    }

    /// Assemble a fleet, rejecting ships that leave the grid or overlap.
    /// Ships are renumbered to follow their order in `ships`.
    pub fn from_ships(grid_size: usize, mut ships: Vec<Ship>) -> Result<Self, EngineError> {
        if grid_size == 0 || grid_size > MAX_GRID_SIZE {
            return Err(EngineError::InvalidGridSize(grid_size));
        }
        if ships.is_empty() {
            return Err(EngineError::EmptyFleet);
        }
        let mut occupied = alloc::vec![false; grid_size * grid_size];
        for (id, ship) in ships.iter_mut().enumerate() {
            ship.id = id;
            let size = ship.size();
            if size > grid_size
                || ship.anchor() >= occupied.len()
                || is_overflowing(ship.orientation, grid_size, size, ship.anchor())
                || ship.cells != ship_run(ship.orientation, grid_size, size, ship.anchor())
            {
                return Err(EngineError::ShipOutOfBounds { ship: ship.id });
            }
            for &cell in &ship.cells {
                if occupied[cell] {
                    return Err(EngineError::ShipOverlaps { ship: ship.id, cell });
                }
                occupied[cell] = true;
            }
        }
        Ok(Self { grid_size, ships })
    }

    pub(crate) fn from_placed(grid_size: usize, ships: Vec<Ship>) -> Self {
        Self { grid_size, ships }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Sum of ship sizes.
    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(Ship::size).sum()
    }

    /// All occupied cells, ship by ship.
    pub fn occupied_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.ships.iter().flat_map(|s| s.cells.iter().copied())
    }

    /// Owner lookup table: entry `i` is the id of the ship covering cell `i`.
    pub fn owner_map(&self) -> Vec<Option<usize>> {
        let mut owners = alloc::vec![None; self.grid_size * self.grid_size];
        for ship in &self.ships {
            for &cell in &ship.cells {
                owners[cell] = Some(ship.id);
            }
        }
        owners
    }
}
