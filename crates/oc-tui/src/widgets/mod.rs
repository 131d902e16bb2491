//! Custom widgets for the game UI

mod map;
mod messages;
mod status;

pub use map::MapWidget;
pub use messages::MessagesWidget;
pub use status::StatusWidget;

#[cfg(test)]
pub(crate) fn row_text(buf: &ratatui::buffer::Buffer, y: u16) -> String {
    let area = buf.area;
    (area.x..area.x + area.width)
        .map(|x| buf[(x, y)].symbol())
        .collect()
}
