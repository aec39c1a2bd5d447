//! Cell states and coordinates.

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
///
/// There is no third state: a toggle request is a transient command,
/// never something a cell stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// A dead cell.
    Dead,
    /// A living cell.
    Alive,
}

impl Default for State {
    fn default() -> Self {
        State::Dead
    }
}

/// Flips the state.
impl Not for State {
    type Output = State;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            State::Alive => State::Dead,
            State::Dead => State::Alive,
        }
    }
}

/// Random state, dead or alive with equal probability.
impl Distribution<State> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> State {
        if rng.gen::<bool>() {
            State::Alive
        } else {
            State::Dead
        }
    }
}

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`. Both coordinates are 0-indexed.
pub type Coord = (i32, i32);
