//! Effects shared by skills and items

use crate::consts::{SMALL_HEAL, SMALL_MANA};
use crate::entity::Character;
use crate::world::Messages;

/// Effect applied to a receiver, optionally on behalf of a caster
pub type Effect = fn(receiver: &mut Character, caster: Option<&Character>, log: &mut Messages);

/// Restore up to `amount` health, capped at the maximum
pub fn heal(receiver: &mut Character, amount: i32, log: &mut Messages) {
    if receiver.dead {
        log.push(format!("{} is dead!", receiver.name));
        return;
    }
    receiver.hp = (receiver.hp + amount).min(receiver.hp_max);
}

/// Restore up to `amount` mana, capped at the maximum
pub fn mana(receiver: &mut Character, amount: i32, log: &mut Messages) {
    if receiver.dead {
        log.push(format!("{} is dead!", receiver.name));
        return;
    }
    receiver.mp = (receiver.mp + amount).min(receiver.mp_max);
}

pub fn heal_small(receiver: &mut Character, _caster: Option<&Character>, log: &mut Messages) {
    heal(receiver, SMALL_HEAL, log);
}

pub fn mana_small(receiver: &mut Character, _caster: Option<&Character>, log: &mut Messages) {
    mana(receiver, SMALL_MANA, log);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Cell, Position};
    use crate::world::EntityId;

    fn target() -> Character {
        Character::new(EntityId(0), "Target", 100, 50, 1, 2, Position::default(), Cell::Player)
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut log = Messages::new();
        let mut c = target();
        c.hp = 70;
        heal_small(&mut c, None, &mut log);
        assert_eq!(c.hp, 90);
        heal_small(&mut c, None, &mut log);
        assert_eq!(c.hp, 100);
    }

    #[test]
    fn test_mana_caps_at_max() {
        let mut log = Messages::new();
        let mut c = target();
        c.mp = 35;
        mana_small(&mut c, None, &mut log);
        assert_eq!(c.mp, 45);
        mana_small(&mut c, None, &mut log);
        assert_eq!(c.mp, 50);
    }

    #[test]
    fn test_dead_receiver_unchanged() {
        let mut log = Messages::new();
        let mut c = target();
        c.hp = 0;
        c.mp = 0;
        c.check_dead();
        heal(&mut c, 20, &mut log);
        mana(&mut c, 20, &mut log);
        assert_eq!((c.hp, c.mp), (0, 0));
        assert!(log.contains("Target is dead!"));
    }
}
