//! Combat system
//!
//! Attacks themselves live on [`crate::entity::Character`]; this module
//! runs whole battles and hands out their rewards.

mod battle;

pub use battle::{BattleOutcome, BattleState, experience_reward, run_battle};
