//! Items and the item catalog

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::entity::Character;
use crate::magic::Effect;
use crate::magic::effects::{heal_small, mana_small};
use crate::world::{GameError, ItemId, Messages, Registry};

/// An item kind; stacks in a backpack share its id
#[derive(Debug, Clone)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub usable: bool,
    pub effect: Option<Effect>,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, usable: bool, effect: Option<Effect>) -> Self {
        Self {
            id,
            name: name.into(),
            usable,
            effect,
        }
    }

    /// Apply the item's effect to its owner
    pub fn use_on(&self, owner: &mut Character, log: &mut Messages) -> Result<(), GameError> {
        match (self.usable, self.effect) {
            (true, Some(effect)) => {
                effect(owner, None, log);
                Ok(())
            }
            _ => {
                log.push(format!("{} is not usable!", self.name));
                Err(GameError::NotUsable {
                    name: self.name.clone(),
                })
            }
        }
    }
}

/// Items that mobs can drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ItemKind {
    #[strum(to_string = "HP Potion")]
    HpPotion,
    #[strum(to_string = "MP Potion")]
    MpPotion,
}

impl ItemKind {
    fn effect(self) -> Effect {
        match self {
            ItemKind::HpPotion => heal_small,
            ItemKind::MpPotion => mana_small,
        }
    }
}

/// One item per [`ItemKind`], in declaration order
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    pub fn standard(registry: &mut Registry) -> Self {
        let items = ItemKind::iter()
            .map(|kind| Item::new(registry.item(), kind.to_string(), true, Some(kind.effect())))
            .collect();
        Self { items }
    }

    pub fn get(&self, kind: ItemKind) -> &Item {
        &self.items[kind as usize]
    }

    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}
