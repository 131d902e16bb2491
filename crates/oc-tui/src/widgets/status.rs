//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use oc_core::GameState;
use oc_core::action::InputMode;

/// Widget for rendering the player's status bar
pub struct StatusWidget<'a> {
    state: &'a GameState,
    mode: InputMode,
}

impl<'a> StatusWidget<'a> {
    pub fn new(state: &'a GameState, mode: InputMode) -> Self {
        Self { state, mode }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = format!(
            "{} # {}",
            self.state.player.base.name,
            self.state.status_line()
        );
        let style = match self.mode {
            InputMode::Explore => Style::default().fg(Color::White),
            InputMode::Battle => Style::default().fg(Color::LightRed).bold(),
        };
        buf.set_string(area.x, area.y, &line, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::row_text;
    use oc_core::world::GameOptions;

    #[test]
    fn test_status_line() {
        let state = GameState::new(GameOptions {
            seed: Some(42),
            spawn_spots: 0,
            ..GameOptions::default()
        })
        .unwrap();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusWidget::new(&state, InputMode::Explore).render(area, &mut buf);
        assert_eq!(
            row_text(&buf, 0).trim_end(),
            "Adrian # HP: 500 # MP: 500 ## Lvl: 1 # XP: 0.00"
        );

        let mut buf = Buffer::empty(area);
        StatusWidget::new(&state, InputMode::Battle).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, Color::LightRed);
    }
}
