//! Grid layout engine for Mapwright maps.
//!
//! Projects the room nodes of a world onto a bounded, multi-floor 2D grid:
//! - [`compute_borders`] - Tight bounding box over room coordinates
//! - [`build_grid`] - Renderable grid for the active floor and its
//!   immediate vertical neighbors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod borders;
mod grid;

pub use borders::{Borders, compute_borders};
pub use grid::{CELL_SIZE, Cell, FloorGrid, GridModel, build_grid};
