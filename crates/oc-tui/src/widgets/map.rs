//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use oc_core::dungeon::{Cell, Level};

/// Widget for rendering a level's grid
pub struct MapWidget<'a> {
    level: &'a Level,
}

impl<'a> MapWidget<'a> {
    pub fn new(level: &'a Level) -> Self {
        Self { level }
    }

    fn cell_style(cell: Cell) -> Style {
        match cell {
            Cell::Empty => Style::default().fg(Color::DarkGray),
            Cell::Floor => Style::default(),
            Cell::Player => Style::default().fg(Color::White).bold(),
            Cell::GenericMob => Style::default().fg(Color::Red),
            Cell::Bison => Style::default().fg(Color::Yellow),
            Cell::Goblin => Style::default().fg(Color::Green),
        }
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.level.name.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        for (y, row) in self.level.grid.rows().take(inner.height as usize).enumerate() {
            for (x, &cell) in row.iter().take(inner.width as usize).enumerate() {
                if let Some(out) =
                    buf.cell_mut(Position::new(inner.x + x as u16, inner.y + y as u16))
                {
                    out.set_char(cell.glyph());
                    out.set_style(Self::cell_style(cell));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::row_text;
    use oc_core::dungeon::Position as MapPos;
    use oc_core::entity::Species;
    use oc_core::world::Registry;

    #[test]
    fn test_map_glyphs() {
        let mut registry = Registry::new();
        let mut level = Level::main(&mut registry, 0);
        level.grid.plot(MapPos::new(5, 5), Cell::Player).unwrap();
        level
            .spawn_mob(&mut registry, Species::Goblin, MapPos::new(7, 5))
            .unwrap();

        let area = Rect::new(0, 0, 34, 18);
        let mut buf = Buffer::empty(area);
        MapWidget::new(&level).render(area, &mut buf);

        // Border row, then the map's top wall
        assert!(row_text(&buf, 0).contains("Main"));
        assert!((1..33).all(|x| buf[(x, 1)].symbol() == "#"));
        assert_eq!(buf[(1, 6)].symbol(), "#");
        assert_eq!(buf[(6, 6)].symbol(), "@");
        assert_eq!(buf[(7, 6)].symbol(), " ");
        assert_eq!(buf[(8, 6)].symbol(), "G");
        assert_eq!(buf[(8, 6)].fg, Color::Green);
    }

    #[test]
    fn test_map_clipped_to_area() {
        let mut registry = Registry::new();
        let level = Level::main(&mut registry, 0);
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        MapWidget::new(&level).render(area, &mut buf);
        assert!((1..9).all(|x| buf[(x, 1)].symbol() == "#"));
        assert_eq!(buf[(9, 1)].symbol(), "│");
    }
}
