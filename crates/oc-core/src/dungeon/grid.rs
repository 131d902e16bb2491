//! Tile grid: the occupancy model of a map

use std::fmt;

use super::Cell;
use crate::world::GameError;

/// Map coordinate, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by (dx, dy)
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Squared Euclidean distance
    pub const fn distance_sq(self, other: Position) -> i32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Fixed-size 2D grid of cells, stored row by row
///
/// The grid owns its cells outright: building one from a template copies
/// the template, so later plotting never touches the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    cells: Vec<Vec<Cell>>,
    width: usize,
    height: usize,
}

impl TileGrid {
    /// Create a grid filled with one cell type
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self {
            cells: vec![vec![cell; width]; height],
            width,
            height,
        }
    }

    /// Copy a template, row by row
    ///
    /// Short rows are padded with [`Cell::Empty`] up to the widest row.
    pub fn from_template(template: &[Vec<Cell>]) -> Self {
        let width = template.iter().map(Vec::len).max().unwrap_or(0);
        let cells = template
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.resize(width, Cell::Empty);
                row
            })
            .collect::<Vec<_>>();
        Self {
            height: cells.len(),
            cells,
            width,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    fn check(&self, pos: Position) -> Result<(usize, usize), GameError> {
        if self.in_bounds(pos) {
            Ok((pos.x as usize, pos.y as usize))
        } else {
            Err(GameError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Cell at a position
    pub fn cell(&self, pos: Position) -> Result<Cell, GameError> {
        let (x, y) = self.check(pos)?;
        Ok(self.cells[y][x])
    }

    /// A cell is occupied iff it is not floor
    pub fn is_occupied(&self, pos: Position) -> Result<bool, GameError> {
        Ok(!self.cell(pos)?.is_floor())
    }

    /// Entity markers in the 3x3 block centred on `pos`, centre included
    ///
    /// Each marker is listed once, in scan order. The block is clipped to
    /// the grid.
    pub fn surroundings(&self, pos: Position) -> Vec<Cell> {
        let mut found = Vec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                let Ok(cell) = self.cell(pos.offset(dx, dy)) else {
                    continue;
                };
                if !cell.is_terrain() && !found.contains(&cell) {
                    found.push(cell);
                }
            }
        }
        found
    }

    /// Write a marker into a free cell
    ///
    /// Returns `Ok(false)` and leaves the grid unchanged if the cell is
    /// occupied.
    pub fn plot(&mut self, pos: Position, marker: Cell) -> Result<bool, GameError> {
        let (x, y) = self.check(pos)?;
        if !self.cells[y][x].is_floor() {
            return Ok(false);
        }
        self.cells[y][x] = marker;
        Ok(true)
    }

    /// Reset an occupied cell to floor
    ///
    /// Returns `Ok(false)` if the cell already was floor.
    pub fn unplot(&mut self, pos: Position) -> Result<bool, GameError> {
        let (x, y) = self.check(pos)?;
        if self.cells[y][x].is_floor() {
            return Ok(false);
        }
        self.cells[y][x] = Cell::Floor;
        Ok(true)
    }

    /// Number of free cells
    pub fn floor_count(&self) -> usize {
        self.rows().flatten().filter(|c| c.is_floor()).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Text frame of the grid, one line per row
    pub fn render(&self) -> String {
        let mut rep = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            rep.extend(row.iter().map(|c| c.glyph()));
            rep.push('\n');
        }
        rep
    }
}
