//! Game rule errors
//!
//! None of these end the game. Callers narrate the error into the message
//! log and carry on.

use thiserror::Error;

/// Errors raised by world operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("({x}, {y}) is outside the {width}x{height} map")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("Your backpack is full!")]
    SlotCapacityExceeded { item: String },

    #[error("You don't have enough of that item")]
    InsufficientQuantity { slot: usize, requested: u32 },

    #[error("You don't have enough of that item")]
    UnknownSkillOrItem { name: String },

    #[error("{name} is dead!")]
    EntityAlreadyDead { name: String },

    #[error("{name} doesn't have enough mana for {skill}")]
    InsufficientMana { name: String, skill: String },

    #[error("{name} is not usable!")]
    NotUsable { name: String },

    #[error("no free cell found on map {map} after {attempts} attempts")]
    NoFreeCell { map: String, attempts: usize },
}
