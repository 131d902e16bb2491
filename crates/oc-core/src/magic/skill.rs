//! Skills: named effects paid for with mana

use super::effects::{Effect, heal_small};
use crate::entity::Character;
use crate::world::{GameError, Messages, Registry, SkillId};

/// A castable skill
#[derive(Debug, Clone)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    pub effect: Effect,
    pub mp_cost: i32,
    /// Level needed to learn the skill (not enforced yet)
    pub required_level: u32,
}

impl Skill {
    pub fn new(
        id: SkillId,
        name: impl Into<String>,
        effect: Effect,
        mp_cost: i32,
        required_level: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            effect,
            mp_cost,
            required_level,
        }
    }

    /// Cast on `receiver`, or on the caster itself when `receiver` is `None`
    ///
    /// The cost is deducted before the effect applies. Without `mana_check`
    /// mana may go negative.
    pub fn cast(
        &self,
        caster: &mut Character,
        receiver: Option<&mut Character>,
        mana_check: bool,
        log: &mut Messages,
    ) -> Result<(), GameError> {
        if mana_check && caster.mp < self.mp_cost {
            log.push(format!(
                "{} doesn't have enough mana for {}",
                caster.name, self.name
            ));
            return Err(GameError::InsufficientMana {
                name: caster.name.clone(),
                skill: self.name.clone(),
            });
        }
        caster.mp -= self.mp_cost;
        match receiver {
            Some(receiver) => {
                (self.effect)(receiver, Some(&*caster), log);
                log.push(format!(
                    "{} casted {} on {}!",
                    caster.name, self.name, receiver.name
                ));
            }
            None => {
                (self.effect)(caster, None, log);
                log.push(format!("{} casted {} on themselves!", caster.name, self.name));
            }
        }
        Ok(())
    }
}

/// Every skill that exists in the game
#[derive(Debug, Clone)]
pub struct SkillBook {
    skills: Vec<Skill>,
}

impl SkillBook {
    /// The standard skill set
    pub fn standard(registry: &mut Registry) -> Self {
        Self {
            skills: vec![Skill::new(registry.skill(), "Heal I", heal_small, 10, 5)],
        }
    }

    /// A fresh copy of a skill, for a character to learn
    pub fn get(&self, name: &str) -> Option<Skill> {
        self.skills.iter().find(|s| s.name == name).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }
}
