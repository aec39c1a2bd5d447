//! World configuration.

use crate::{
    cells::{Coord, State},
    error::Error,
    world::World,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell whose state is set before authoring begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KnownCell {
    /// The coordinates of the cell.
    pub coord: Coord,

    /// The state.
    pub state: State,
}

/// World configuration.
///
/// The dimensions are fixed for the lifetime of the world. A frontend
/// usually derives them from its window size and a fixed cell size in
/// pixels, which is of no concern to the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Number of columns.
    pub width: i32,

    /// Number of rows.
    pub height: i32,

    /// Cells to seed the board with at creation.
    pub known_cells: Vec<KnownCell>,
}

impl Config {
    /// Creates a new configuration with the given dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        Config {
            width,
            height,
            known_cells: Vec::new(),
        }
    }

    /// Sets the cells to seed the board with.
    pub fn set_known_cells(mut self, known_cells: Vec<KnownCell>) -> Self {
        self.known_cells = known_cells;
        self
    }

    /// Creates a new world from the configuration.
    ///
    /// Returns [`Error::NonPositiveError`] if either dimension is not
    /// positive; no partial world is produced.
    pub fn world(&self) -> Result<World, Error> {
        World::new(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(16, 16)
    }
}
