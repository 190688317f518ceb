//! Random fleet placement by rejection sampling.

use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::common::EngineError;
use crate::config::validate_layout;
use crate::coord::CellIndex;
use crate::ship::{is_overflowing, ship_run, Fleet, Orientation, Ship};

/// Whole-run attempts allowed per ship before the layout starts over.
pub const MAX_ATTEMPTS_PER_SHIP: usize = 10_000;
/// Full layout restarts before placement gives up.
pub const MAX_LAYOUT_RESTARTS: usize = 32;

/// Uniformly random orientation.
pub fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Draw anchors until one keeps a ship of `size` on the grid.
///
/// Requires `size <= grid_size`, otherwise no anchor exists.
pub fn random_anchor<R: Rng + ?Sized>(
    rng: &mut R,
    orientation: Orientation,
    grid_size: usize,
    size: usize,
) -> CellIndex {
    let cells = grid_size * grid_size;
    loop {
        let anchor = rng.random_range(0..cells);
        if !is_overflowing(orientation, grid_size, size, anchor) {
            return anchor;
        }
    }
}

/// Place one ship of `size` clear of `occupied`.
///
/// Each attempt re-rolls the orientation. Returns `None` once
/// `MAX_ATTEMPTS_PER_SHIP` runs have collided.
fn place_ship<R: Rng + ?Sized>(
    rng: &mut R,
    id: usize,
    size: usize,
    grid_size: usize,
    occupied: &[bool],
) -> Option<Ship> {
    for attempt in 1..=MAX_ATTEMPTS_PER_SHIP {
        let orientation = random_orientation(rng);
        let anchor = random_anchor(rng, orientation, grid_size, size);
        let run = ship_run(orientation, grid_size, size, anchor);
        if run.iter().any(|&cell| occupied[cell]) {
            continue;
        }
        debug!(
            "placed ship #{} ({} cells, {:?}) at {} after {} attempt(s)",
            id + 1,
            size,
            orientation,
            anchor,
            attempt
        );
        return Some(Ship::from_run(id, orientation, run));
    }
    None
}

/// Lay out ships of `ship_sizes`, in order, on a `grid_size` square grid.
///
/// The result always satisfies the fleet invariants: every ship is a
/// contiguous in-bounds run and no two ships share a cell.
pub fn place_fleet<R: Rng + ?Sized>(
    grid_size: usize,
    ship_sizes: &[usize],
    rng: &mut R,
) -> Result<Fleet, EngineError> {
    validate_layout(grid_size, ship_sizes)?;

    let mut stuck_on = 0;
    for restart in 0..=MAX_LAYOUT_RESTARTS {
        if restart > 0 {
            warn!(
                "ship #{} could not be placed, restarting layout ({}/{})",
                stuck_on + 1,
                restart,
                MAX_LAYOUT_RESTARTS
            );
        }
        let mut occupied = alloc::vec![false; grid_size * grid_size];
        let mut ships = Vec::with_capacity(ship_sizes.len());
        for (id, &size) in ship_sizes.iter().enumerate() {
            match place_ship(rng, id, size, grid_size, &occupied) {
                Some(ship) => {
                    for &cell in ship.cells() {
                        occupied[cell] = true;
                    }
                    ships.push(ship);
                }
                None => {
                    stuck_on = id;
                    break;
                }
            }
        }
        if ships.len() == ship_sizes.len() {
            return Ok(Fleet::from_placed(grid_size, ships));
        }
    }
    Err(EngineError::PlacementExhausted { ship: stuck_on })
}
