//! Map cell codes

use strum::{Display, EnumIter, IntoEnumIterator};

/// What occupies a single map cell
///
/// Terrain and entity markers share one code space: a cell holding a
/// marker is not floor, so it blocks movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[repr(u16)]
pub enum Cell {
    /// Impassable void ("bedrock")
    #[default]
    Empty = 0,
    Floor = 1,
    Player = 2,
    GenericMob = 5,
    Bison = 100,
    Goblin = 101,
}

impl Cell {
    /// Numeric cell code
    pub const fn code(self) -> u16 {
        self as u16
    }

    pub fn from_code(code: u16) -> Option<Self> {
        Cell::iter().find(|c| c.code() == code)
    }

    pub const fn is_floor(self) -> bool {
        matches!(self, Cell::Floor)
    }

    /// Terrain cells (void and floor) are not entities
    pub const fn is_terrain(self) -> bool {
        matches!(self, Cell::Empty | Cell::Floor)
    }

    /// Character drawn for this cell
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '#',
            Cell::Floor => ' ',
            Cell::Player => '@',
            Cell::GenericMob => 'M',
            Cell::Bison => 'B',
            Cell::Goblin => 'G',
        }
    }
}
