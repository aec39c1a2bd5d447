//! The generation transition.

use crate::{
    cells::{Coord, State},
    grid::Grid,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of advancing the world by one generation.
///
/// The changed cells are what a frontend needs for an incremental
/// redraw; `settled` tells it the board has reached a fixed point and
/// will never change again.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepResult {
    /// Cells whose state differs from the previous generation,
    /// in row-major order.
    pub changed_cells: Vec<Coord>,
    /// Whether no cell changed state in this generation.
    pub settled: bool,
}

/// Counts the living neighbors of `(x, y)`.
///
/// The neighborhood is the 8 surrounding cells, read through the
/// wrapped index, so cells on an edge or a corner see through to the
/// opposite side of the grid. The count is always in `0..=8`.
fn count_living_neighbors(grid: &Grid, x: i32, y: i32) -> u8 {
    let mut alive = 0;
    for yo in -1..=1 {
        for xo in -1..=1 {
            if xo == 0 && yo == 0 {
                continue;
            }
            if grid.get(x + xo, y + yo) == State::Alive {
                alive += 1;
            }
        }
    }
    alive
}

/// Computes the next generation of `src` into `dst`.
///
/// Applies the B3/S23 rule to every cell: a living cell survives with
/// 2 or 3 living neighbors, a dead cell is born with exactly 3.
///
/// `src` is never mutated. Every cell of `dst` is assigned, since the
/// staging grid still holds the board of two generations ago and no
/// stale state may leak through the double buffer.
pub(crate) fn step(src: &Grid, dst: &mut Grid) -> StepResult {
    let mut changed_cells = Vec::new();
    for y in 0..src.height() {
        for x in 0..src.width() {
            let n_alive = count_living_neighbors(src, x, y);
            let old_state = src.get(x, y);
            let new_state = match old_state {
                State::Alive if n_alive == 2 || n_alive == 3 => State::Alive,
                State::Dead if n_alive == 3 => State::Alive,
                _ => State::Dead,
            };
            dst.set(x, y, new_state);
            if old_state != new_state {
                changed_cells.push((x, y));
            }
        }
    }
    let settled = changed_cells.is_empty();
    StepResult {
        changed_cells,
        settled,
    }
}
