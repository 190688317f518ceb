use alloc::vec::Vec;

use crate::common::EngineError;

/// Row letters, one per grid row. Bounds the supported grid side.
pub const ROW_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const MAX_GRID_SIZE: usize = ROW_LETTERS.len();

pub const DEFAULT_GRID_SIZE: usize = 10;
pub const DEFAULT_FLEET: [ShipDef; 3] = [
    ShipDef::new("Battleship", 5),
    ShipDef::new("Destroyer", 4),
    ShipDef::new("Destroyer", 4),
];

/// Fleet entry: display name and cell count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipDef {
    name: &'static str,
    size: usize,
}

impl ShipDef {
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self { name, size }
    }

    /// A ship known only by its size.
    pub const fn unnamed(size: usize) -> Self {
        Self { name: "Ship", size }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// Grid side and fleet definition for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    grid_size: usize,
    fleet: Vec<ShipDef>,
}

impl GameConfig {
    /// Build and validate a configuration.
    pub fn new(grid_size: usize, fleet: Vec<ShipDef>) -> Result<Self, EngineError> {
        let config = Self { grid_size, fleet };
        config.validate()?;
        Ok(config)
    }

    /// Configuration with anonymous ships of the given sizes.
    pub fn from_sizes(grid_size: usize, sizes: &[usize]) -> Result<Self, EngineError> {
        Self::new(grid_size, sizes.iter().map(|&s| ShipDef::unnamed(s)).collect())
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn fleet(&self) -> &[ShipDef] {
        &self.fleet
    }

    pub fn ship_sizes(&self) -> Vec<usize> {
        self.fleet.iter().map(ShipDef::size).collect()
    }

    /// Check the bounds every placeable configuration satisfies.
    pub fn validate(&self) -> Result<(), EngineError> {
        validate_layout(self.grid_size, &self.ship_sizes())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            fleet: DEFAULT_FLEET.to_vec(),
        }
    }
}

/// Reject grid/fleet combinations that can never be laid out.
///
/// Passing this check does not prove a layout exists for dense fleets; the
/// placement engine reports those with `PlacementExhausted`.
pub fn validate_layout(grid_size: usize, ship_sizes: &[usize]) -> Result<(), EngineError> {
    if grid_size == 0 || grid_size > MAX_GRID_SIZE {
        return Err(EngineError::InvalidGridSize(grid_size));
    }
    if ship_sizes.is_empty() {
        return Err(EngineError::EmptyFleet);
    }
    for (ship, &size) in ship_sizes.iter().enumerate() {
        if size == 0 {
            return Err(EngineError::ZeroShipSize { ship });
        }
        if size > grid_size {
            return Err(EngineError::ShipTooLong {
                ship,
                size,
                grid_size,
            });
        }
    }
    let cells: usize = ship_sizes.iter().sum();
    let capacity = grid_size * grid_size;
    if cells > capacity {
        return Err(EngineError::FleetTooLarge { cells, capacity });
    }
    Ok(())
}
