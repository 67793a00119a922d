//! Gridlife runs Conway's Game of Life on a fixed-size toroidal grid.
//!
//! A generation is computed by a pipeline of resumable routines. The
//! [`GenerationDriver`] walks every cell and hands each one to a
//! [`CellStepper`], which in turn delegates to a [`NeighborCounter`]. Every
//! read they need travels up as a [`Query`] and every result as a
//! [`Transition`]; [`advance`] answers the queries from the current grid and
//! writes the transitions into a fresh one until the driver reports
//! [`Message::SweepComplete`].
//!
//! [`scan::step`] computes the same generation by reading the grid directly.

mod cell;
mod config;
mod counter;
mod driver;
mod error;
mod grid;
mod moore;
mod protocol;
mod routine;
mod rule;
mod runner;
pub mod scan;
mod sim;
mod stepper;

pub use cell::*;
pub use config::*;
pub use counter::*;
pub use driver::*;
pub use error::*;
pub use grid::*;
pub use moore::*;
pub use protocol::*;
pub use routine::{Routine, Step};
pub use rule::*;
pub use runner::*;
pub use sim::*;
pub use stepper::*;
