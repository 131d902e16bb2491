//! oc-tui: Terminal UI layer using ratatui
//!
//! Provides the terminal front end for the game.

pub mod app;
pub mod input;
pub mod widgets;

pub use app::App;
