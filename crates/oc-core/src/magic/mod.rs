//! Magic system
//!
//! Skills and the effects they (and items) apply.

pub mod effects;
mod skill;

pub use effects::Effect;
pub use skill::{Skill, SkillBook};
