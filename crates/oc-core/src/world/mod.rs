//! World state
//!
//! Options, identity registry, message log and error types shared by the
//! rest of the simulation.

pub mod errors;
pub mod ids;
mod messages;
pub mod options;

pub use errors::GameError;
pub use ids::{EntityId, ItemId, MapId, Registry, SkillId};
pub use messages::Messages;
pub use options::{DropRule, GameOptions, OptionsError};
