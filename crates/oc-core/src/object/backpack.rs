//! Backpack: a fixed number of stack slots

use super::Item;
use crate::entity::Character;
use crate::world::{GameError, Messages};

/// Some units of one item kind
#[derive(Debug, Clone)]
pub struct Stack {
    pub item: Item,
    pub quantity: u32,
}

/// Slot-based container; a slot is empty or holds one stack
#[derive(Debug, Clone)]
pub struct Backpack {
    slots: Vec<Option<Stack>>,
}

impl Backpack {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of non-empty slots
    pub fn occupied(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn slots(&self) -> &[Option<Stack>] {
        &self.slots
    }

    /// Non-empty stacks with their slot index
    pub fn stacks(&self) -> impl Iterator<Item = (usize, &Stack)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|stack| (i, stack)))
    }

    /// Total units held of the item named `name`
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.stacks()
            .filter(|(_, s)| s.item.name == name)
            .map(|(_, s)| s.quantity)
            .sum()
    }

    /// Add `quantity` units, stacking onto an existing stack of the same item
    ///
    /// Returns the slot used. A zero quantity never opens a new stack.
    pub fn add(&mut self, item: &Item, quantity: u32) -> Result<usize, GameError> {
        if let Some(idx) = self.slots.iter().position(|slot| {
            slot.as_ref().is_some_and(|stack| stack.item.id == item.id)
        }) {
            if let Some(stack) = self.slots[idx].as_mut() {
                stack.quantity += quantity;
            }
            return Ok(idx);
        }

        let Some(idx) = self.slots.iter().position(Option::is_none) else {
            tracing::debug!(item = %item.name, "backpack full");
            return Err(GameError::SlotCapacityExceeded {
                item: item.name.clone(),
            });
        };
        if quantity > 0 {
            self.slots[idx] = Some(Stack {
                item: item.clone(),
                quantity,
            });
        }
        Ok(idx)
    }

    /// Take `quantity` units out of `slot`
    ///
    /// Fails without change if the slot holds fewer units.
    pub fn remove(&mut self, slot: usize, quantity: u32) -> Result<(), GameError> {
        let held = self
            .slots
            .get(slot)
            .and_then(Option::as_ref)
            .map_or(0, |stack| stack.quantity);
        if held < quantity {
            return Err(GameError::InsufficientQuantity {
                slot,
                requested: quantity,
            });
        }
        if let Some(entry) = self.slots.get_mut(slot) {
            if held == quantity {
                *entry = None;
            } else if let Some(stack) = entry.as_mut() {
                stack.quantity -= quantity;
            }
        }
        Ok(())
    }

    /// Use one unit of the first stack named `name` on `owner`
    ///
    /// The unit is consumed only if the item could be used.
    pub fn use_item(
        &mut self,
        name: &str,
        owner: &mut Character,
        log: &mut Messages,
    ) -> Result<(), GameError> {
        let Some((slot, stack)) = self.stacks().find(|(_, s)| s.item.name == name) else {
            log.push("You don't have enough of that item");
            return Err(GameError::UnknownSkillOrItem {
                name: name.to_string(),
            });
        };
        let item = stack.item.clone();
        item.use_on(owner, log)?;
        self.remove(slot, 1)
    }

    /// One-line description of the contents
    pub fn summary(&self) -> String {
        let listed: Vec<String> = self
            .stacks()
            .map(|(_, s)| format!("{} {}", s.quantity, s.item.name))
            .collect();
        if listed.is_empty() {
            "You don't have any items in your backpack".to_string()
        } else {
            format!("You have {} items in your backpack", listed.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Cell, Position};
    use crate::magic::effects::heal_small;
    use crate::world::{EntityId, ItemId};

    fn potion(id: u32, name: &str) -> Item {
        Item::new(ItemId(id), name, true, Some(heal_small))
    }

    fn owner() -> Character {
        Character::new(EntityId(0), "Adrian", 100, 10, 1, 2, Position::default(), Cell::Player)
    }

    #[test]
    fn test_add_stacks() {
        let mut pack = Backpack::new(12);
        let hp = potion(0, "HP Potion");
        assert_eq!(pack.add(&hp, 1), Ok(0));
        assert_eq!(pack.add(&hp, 2), Ok(0));
        assert_eq!(pack.occupied(), 1);
        assert_eq!(pack.quantity_of("HP Potion"), 3);
    }

    #[test]
    fn test_stacking_prefers_existing_slot_over_hole() {
        let mut pack = Backpack::new(3);
        let hp = potion(0, "HP Potion");
        let mp = potion(1, "MP Potion");
        pack.add(&hp, 1).unwrap();
        pack.add(&mp, 1).unwrap();
        pack.remove(0, 1).unwrap();
        assert_eq!(pack.add(&mp, 1), Ok(1));
        assert_eq!(pack.occupied(), 1);
        assert_eq!(pack.add(&hp, 1), Ok(0));
    }

    #[test]
    fn test_full_backpack() {
        let mut pack = Backpack::new(2);
        pack.add(&potion(0, "A"), 1).unwrap();
        pack.add(&potion(1, "B"), 1).unwrap();
        assert_eq!(
            pack.add(&potion(2, "C"), 1),
            Err(GameError::SlotCapacityExceeded { item: "C".into() })
        );
        assert_eq!(pack.occupied(), 2);
        // Existing stacks still grow
        assert_eq!(pack.add(&potion(0, "A"), 4), Ok(0));
        assert_eq!(pack.quantity_of("A"), 5);
    }

    #[test]
    fn test_zero_quantity_opens_nothing() {
        let mut pack = Backpack::new(2);
        assert_eq!(pack.add(&potion(0, "A"), 0), Ok(0));
        assert_eq!(pack.occupied(), 0);
    }

    #[test]
    fn test_remove() {
        let mut pack = Backpack::new(4);
        pack.add(&potion(0, "A"), 3).unwrap();
        pack.remove(0, 2).unwrap();
        assert_eq!(pack.quantity_of("A"), 1);
        assert_eq!(
            pack.remove(0, 2),
            Err(GameError::InsufficientQuantity { slot: 0, requested: 2 })
        );
        assert_eq!(pack.quantity_of("A"), 1);
        pack.remove(0, 1).unwrap();
        assert_eq!(pack.occupied(), 0);
        assert!(pack.remove(3, 1).is_err());
        assert!(pack.remove(99, 1).is_err());
    }

    #[test]
    fn test_use_item_consumes_one() {
        let mut log = Messages::new();
        let mut pack = Backpack::new(4);
        let mut adrian = owner();
        adrian.hp = 10;
        pack.add(&potion(0, "HP Potion"), 2).unwrap();

        pack.use_item("HP Potion", &mut adrian, &mut log).unwrap();
        assert_eq!(adrian.hp, 30);
        assert_eq!(pack.quantity_of("HP Potion"), 1);

        pack.use_item("HP Potion", &mut adrian, &mut log).unwrap();
        assert_eq!(adrian.hp, 50);
        assert_eq!(pack.occupied(), 0);
        assert!(pack.slots()[0].is_none());
    }

    #[test]
    fn test_use_missing_item() {
        let mut log = Messages::new();
        let mut pack = Backpack::new(4);
        let mut adrian = owner();
        assert!(matches!(
            pack.use_item("HP Potion", &mut adrian, &mut log),
            Err(GameError::UnknownSkillOrItem { .. })
        ));
        assert!(log.contains("You don't have enough of that item"));
    }

    #[test]
    fn test_unusable_item_not_consumed() {
        let mut log = Messages::new();
        let mut pack = Backpack::new(4);
        let mut adrian = owner();
        pack.add(&Item::new(ItemId(5), "Rock", false, None), 1).unwrap();
        assert!(pack.use_item("Rock", &mut adrian, &mut log).is_err());
        assert_eq!(pack.quantity_of("Rock"), 1);
    }

    #[test]
    fn test_summary() {
        let mut pack = Backpack::new(12);
        assert_eq!(pack.summary(), "You don't have any items in your backpack");
        pack.add(&potion(0, "HP Potion"), 2).unwrap();
        pack.add(&potion(1, "MP Potion"), 1).unwrap();
        assert_eq!(
            pack.summary(),
            "You have 2 HP Potion, 1 MP Potion items in your backpack"
        );
    }
}
