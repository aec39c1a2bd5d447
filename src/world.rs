//! The world.

use crate::{
    cells::{Coord, State},
    config::{Config, KnownCell},
    error::Error,
    grid::Grid,
    step::{self, StepResult},
};
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether the world is being edited or simulated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// The board is being edited; the simulation is not advancing.
    Authoring,
    /// The simulation advances through [`World::tick`].
    Running,
}

/// Commands from the presentation layer.
///
/// These mirror the input bindings of a typical frontend: Enter starts
/// the game, `P` pauses it, Space stops it and clears the board, a
/// right click toggles a cell, dragging with the right button held
/// sets cells alive, and a timer drives `Tick` at whatever interval
/// the frontend chooses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Command {
    /// Start the simulation.
    Start,
    /// Pause the simulation, keeping the board.
    Pause,
    /// Stop the simulation and clear the board.
    Clear,
    /// Flip one cell.
    ToggleCell(Coord),
    /// Set one cell alive.
    SetCellAlive(Coord),
    /// Advance the simulation by one generation.
    Tick,
}

/// The world.
///
/// Owns two grids of identical dimensions. One holds the current
/// generation; the other is the staging buffer the next generation is
/// written into. Their roles swap after every [`tick`](World::tick),
/// so the next generation is always computed from a fully intact
/// snapshot of the current one.
#[derive(Clone, Debug)]
pub struct World {
    /// World configuration.
    config: Config,

    /// The double buffer.
    grids: [Grid; 2],

    /// Index of the current grid in `grids`.
    ///
    /// The other grid is the staging buffer.
    current: usize,

    /// Whether the world is being edited or simulated.
    status: Status,

    /// Number of generations computed since the last clear.
    generation: u64,
}

impl World {
    /// Creates a new world from the configuration.
    ///
    /// Both grids start all dead, then the configuration's
    /// [`known_cells`](Config#structfield.known_cells) are applied to
    /// the current grid. The world starts in [`Status::Authoring`].
    pub(crate) fn new(config: &Config) -> Result<Self, Error> {
        let mut world = World {
            config: config.clone(),
            grids: [
                Grid::new(config.width, config.height, State::Dead)?,
                Grid::new(config.width, config.height, State::Dead)?,
            ],
            current: 0,
            status: Status::Authoring,
            generation: 0,
        };
        for &KnownCell { coord: (x, y), state } in config.known_cells.iter() {
            world.grids[world.current].set(x, y, state);
        }
        Ok(world)
    }

    /// World configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.config.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.config.height
    }

    /// Whether the world is being edited or simulated.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of generations computed since the last clear.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts the simulation.
    ///
    /// Does nothing when the game is already running.
    pub fn start(&mut self) {
        if self.status != Status::Running {
            self.status = Status::Running;
            debug!("game started");
        }
    }

    /// Pauses the simulation, keeping the board.
    ///
    /// Cells can be edited while paused and the game restarted
    /// afterwards. Does nothing when the world is already authoring.
    pub fn pause(&mut self) {
        if self.status != Status::Authoring {
            self.status = Status::Authoring;
            debug!("game paused");
        }
    }

    /// Stops the simulation and clears the board.
    ///
    /// Fills both grids with dead cells, resets the generation counter
    /// and returns the world to [`Status::Authoring`]. Always
    /// available; calling it twice has the same effect as calling it
    /// once.
    pub fn clear(&mut self) {
        self.grids[0].fill(State::Dead);
        self.grids[1].fill(State::Dead);
        self.status = Status::Authoring;
        self.generation = 0;
        debug!("board cleared");
    }

    /// Flips one cell of the current grid and returns its new state.
    ///
    /// Editing is only allowed while authoring. While the game is
    /// running the grid is left untouched and
    /// [`Error::EditWhileRunning`] is returned.
    pub fn toggle_cell(&mut self, x: i32, y: i32) -> Result<State, Error> {
        if self.status == Status::Running {
            return Err(Error::EditWhileRunning);
        }
        Ok(self.grids[self.current].toggle(x, y))
    }

    /// Sets one cell of the current grid.
    ///
    /// Editing is only allowed while authoring; see
    /// [`toggle_cell`](World::toggle_cell).
    pub fn set_cell(&mut self, x: i32, y: i32, state: State) -> Result<(), Error> {
        if self.status == Status::Running {
            return Err(Error::EditWhileRunning);
        }
        self.grids[self.current].set(x, y, state);
        Ok(())
    }

    /// Fills the current grid with random cells.
    ///
    /// Each cell is alive with probability `density`. Editing is only
    /// allowed while authoring; see
    /// [`toggle_cell`](World::toggle_cell).
    pub fn randomize(&mut self, density: f64) -> Result<(), Error> {
        if self.status == Status::Running {
            return Err(Error::EditWhileRunning);
        }
        self.grids[self.current].randomize(density);
        Ok(())
    }

    /// Advances the simulation by one generation.
    ///
    /// Computes the next generation from the current grid into the
    /// staging grid, swaps their roles, and returns which cells
    /// changed. Returns [`Error::NotRunningError`] while authoring.
    ///
    /// When the result reports `settled`, the board has reached a
    /// fixed point and will never change again. The world does not
    /// pause itself; the caller decides whether to stop ticking,
    /// matching the legacy behavior of restarting the game manually.
    pub fn tick(&mut self) -> Result<StepResult, Error> {
        if self.status != Status::Running {
            return Err(Error::NotRunningError);
        }
        let (left, right) = self.grids.split_at_mut(1);
        let result = if self.current == 0 {
            step::step(&left[0], &mut right[0])
        } else {
            step::step(&right[0], &mut left[0])
        };
        self.current = 1 - self.current;
        self.generation += 1;
        if result.settled {
            debug!("game settled after {} generations", self.generation);
        }
        Ok(result)
    }

    /// The state of the cell at `coord` in the current generation.
    pub fn get_cell_state(&self, coord: Coord) -> State {
        self.grids[self.current].get(coord.0, coord.1)
    }

    /// Iterates over the living cells of the current generation.
    ///
    /// Intended for a full redraw, e.g. when authoring begins or
    /// after a clear.
    pub fn alive_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.grids[self.current].alive_cells()
    }

    /// Dispatches a command from the presentation layer.
    ///
    /// Only [`Command::Tick`] produces a [`StepResult`].
    pub fn apply(&mut self, command: Command) -> Result<Option<StepResult>, Error> {
        match command {
            Command::Start => {
                self.start();
                Ok(None)
            }
            Command::Pause => {
                self.pause();
                Ok(None)
            }
            Command::Clear => {
                self.clear();
                Ok(None)
            }
            Command::ToggleCell((x, y)) => self.toggle_cell(x, y).map(|_| None),
            Command::SetCellAlive((x, y)) => self.set_cell(x, y, State::Alive).map(|_| None),
            Command::Tick => self.tick().map(Some),
        }
    }

    /// Displays the current generation.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `O`.
    pub fn display(&self) -> String {
        let grid = &self.grids[self.current];
        let mut board = String::with_capacity(((grid.width() + 1) * grid.height()) as usize);
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                board.push(match grid.get(x, y) {
                    State::Dead => '.',
                    State::Alive => 'O',
                });
            }
            board.push('\n');
        }
        board
    }
}
