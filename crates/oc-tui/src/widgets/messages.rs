//! Message log widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use oc_core::world::Messages;

/// Widget showing the latest messages, newest at the bottom
pub struct MessagesWidget<'a> {
    messages: &'a Messages,
    prompt: Option<&'a str>,
}

impl<'a> MessagesWidget<'a> {
    pub fn new(messages: &'a Messages) -> Self {
        Self {
            messages,
            prompt: None,
        }
    }

    /// Line shown under the messages, e.g. the battle prompt
    pub fn prompt(mut self, prompt: &'a str) -> Self {
        self.prompt = Some(prompt);
        self
    }
}

impl Widget for MessagesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::TOP).title("Messages");
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let mut lines: Vec<(&str, Style)> = self
            .messages
            .pending()
            .iter()
            .map(|m| (m.as_str(), Style::default()))
            .collect();
        if let Some(prompt) = self.prompt {
            lines.push((prompt, Style::default().fg(Color::Yellow).bold()));
        }

        let skip = lines.len().saturating_sub(inner.height as usize);
        for (i, (text, style)) in lines.into_iter().skip(skip).enumerate() {
            buf.set_stringn(inner.x, inner.y + i as u16, text, inner.width as usize, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::row_text;

    #[test]
    fn test_latest_messages_shown() {
        let mut log = Messages::new();
        for i in 0..5 {
            log.push(format!("line {i}"));
        }
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        MessagesWidget::new(&log).render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("Messages"));
        assert!(row_text(&buf, 1).starts_with("line 2"));
        assert!(row_text(&buf, 3).starts_with("line 4"));
    }

    #[test]
    fn test_prompt_last() {
        let mut log = Messages::new();
        log.push("Adrian attacks Bison! Bison loses 12 health points!");
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        MessagesWidget::new(&log)
            .prompt("Press A to attack")
            .render(area, &mut buf);

        assert!(row_text(&buf, 1).starts_with("Adrian attacks Bison!"));
        assert!(row_text(&buf, 2).starts_with("Press A to attack"));
    }
}
