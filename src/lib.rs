//! A toroidal Game of Life simulation engine.
//!
//! The engine owns a pair of fixed-size grids with wraparound edges
//! and evolves them generation by generation under the B3/S23 rule,
//! computing each generation from an intact snapshot of the previous
//! one (double buffering).
//!
//! Rendering, input handling and frame timing are left to the
//! embedding frontend: it feeds [`Command`]s into the [`World`] and
//! receives a [`StepResult`] after every tick, listing the cells that
//! changed for an incremental redraw and whether the simulation has
//! settled.
//!
//! # Example
//!
//! ```
//! use torlife::{Config, State};
//!
//! # fn main() -> Result<(), torlife::Error> {
//! let mut world = Config::new(5, 5).world()?;
//!
//! // Author a horizontal blinker, then start the game.
//! world.set_cell(1, 2, State::Alive)?;
//! world.set_cell(2, 2, State::Alive)?;
//! world.set_cell(3, 2, State::Alive)?;
//! world.start();
//!
//! let result = world.tick()?;
//! assert!(!result.settled);
//! assert_eq!(result.changed_cells.len(), 4);
//! # Ok(())
//! # }
//! ```

mod cells;
mod config;
mod error;
mod grid;
mod step;
mod world;

pub use cells::{Coord, State};
pub use config::{Config, KnownCell};
pub use error::Error;
pub use grid::Grid;
pub use step::StepResult;
pub use world::{Command, Status, World};
