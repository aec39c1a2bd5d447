//! Toroidal cell storage for one generation.

use crate::{
    cells::{Coord, State},
    error::Error,
};
use rand::Rng;

/// A fixed-size grid of cells with toroidal topology.
///
/// The cells of one generation are stored in a single linear vector,
/// row by row. Both axes wrap around, so every `(x, y)` over the whole
/// of `i32` resolves to exactly one cell and the neighbor computation
/// never has a boundary case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns.
    width: i32,
    /// Number of rows.
    height: i32,
    /// The cells, row by row.
    cells: Vec<State>,
}

impl Grid {
    /// Creates a grid with every cell set to `state`.
    ///
    /// Returns [`Error::NonPositiveError`] if either dimension is not
    /// positive.
    pub fn new(width: i32, height: i32, state: State) -> Result<Self, Error> {
        if width <= 0 || height <= 0 {
            return Err(Error::NonPositiveError);
        }
        Ok(Grid {
            width,
            height,
            cells: vec![state; (width * height) as usize],
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Translates `(x, y)` into an index in the linear vector.
    ///
    /// This function implements wrapping: coordinates that are
    /// negative or beyond the grid bounds resolve to the same cell as
    /// their modulo-wrapped equivalent, so for any `k` and `m`,
    /// `wrap_index(x + k * width, y + m * height)` equals
    /// `wrap_index(x, y)`.
    #[inline]
    pub fn wrap_index(&self, x: i32, y: i32) -> usize {
        let x = x.rem_euclid(self.width);
        let y = y.rem_euclid(self.height);
        (y * self.width + x) as usize
    }

    /// The state of the cell at `(x, y)`, wrapped.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> State {
        self.cells[self.wrap_index(x, y)]
    }

    /// Sets the state of the cell at `(x, y)`, wrapped.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, state: State) {
        let index = self.wrap_index(x, y);
        self.cells[index] = state;
    }

    /// Flips the cell at `(x, y)` and returns its new state.
    pub fn toggle(&mut self, x: i32, y: i32) -> State {
        let index = self.wrap_index(x, y);
        let state = !self.cells[index];
        self.cells[index] = state;
        state
    }

    /// Sets every cell to `state`.
    pub fn fill(&mut self, state: State) {
        for cell in self.cells.iter_mut() {
            *cell = state;
        }
    }

    /// Sets every cell to a random state.
    ///
    /// Each cell is alive with probability `density`, independently of
    /// the others.
    ///
    /// # Panics
    ///
    /// Panics if `density` is not in the range `0.0..=1.0`.
    pub fn randomize(&mut self, density: f64) {
        let mut rng = rand::thread_rng();
        for cell in self.cells.iter_mut() {
            *cell = if rng.gen_bool(density) {
                State::Alive
            } else {
                State::Dead
            };
        }
    }

    /// Iterates over the coordinates of all living cells.
    pub fn alive_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().filter_map(move |(i, &state)| {
            if state == State::Alive {
                Some((i as i32 % width, i as i32 / width))
            } else {
                None
            }
        })
    }
}
