//! oc-core: Core game logic for The Story of Ocala
//!
//! This crate contains all game logic with no terminal dependencies.
//! Drawing and key reading go through the [`Frontend`] trait, so the whole
//! simulation can be driven from tests.

pub mod action;
pub mod combat;
pub mod dungeon;
pub mod entity;
pub mod magic;
pub mod object;
pub mod world;

mod consts;
mod frontend;
mod gameloop;
mod rng;

pub use consts::*;
pub use frontend::Frontend;
pub use gameloop::{GameLoop, GameLoopResult, GameState};
pub use rng::GameRng;
