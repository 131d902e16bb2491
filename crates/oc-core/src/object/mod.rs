//! Object system
//!
//! Item kinds, the item catalog, and the backpack container.

mod backpack;
mod item;

pub use backpack::{Backpack, Stack};
pub use item::{Item, ItemCatalog, ItemKind};
