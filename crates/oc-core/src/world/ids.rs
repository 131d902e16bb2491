//! Identity allocation
//!
//! Each kind of thing (entities, items, skills, maps) has its own typed id and
//! its own monotonic counter, all owned by one [`Registry`].

use std::fmt;

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u32);

        impl $name {
            pub fn next(self) -> Self {
                $name(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

typed_id!(
    /// Unique identifier for players and mobs
    EntityId
);
typed_id!(
    /// Unique identifier for item kinds
    ItemId
);
typed_id!(
    /// Unique identifier for skills
    SkillId
);
typed_id!(
    /// Unique identifier for map instances
    MapId
);

/// Hands out fresh ids, one counter per kind
#[derive(Debug, Clone, Default)]
pub struct Registry {
    next_entity: u32,
    next_item: u32,
    next_skill: u32,
    next_map: u32,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity(&mut self) -> EntityId {
        let id = EntityId(self.next_entity);
        self.next_entity += 1;
        id
    }

    pub fn item(&mut self) -> ItemId {
        let id = ItemId(self.next_item);
        self.next_item += 1;
        id
    }

    pub fn skill(&mut self) -> SkillId {
        let id = SkillId(self.next_skill);
        self.next_skill += 1;
        id
    }

    pub fn map(&mut self) -> MapId {
        let id = MapId(self.next_map);
        self.next_map += 1;
        id
    }
}
