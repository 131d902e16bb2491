//! Dungeon system
//!
//! Cell codes, the tile grid occupancy model, and levels that own a grid
//! together with their mobs.

mod cell;
mod grid;
mod level;

pub use cell::Cell;
pub use grid::{Position, TileGrid};
pub use level::{Level, main_template};
