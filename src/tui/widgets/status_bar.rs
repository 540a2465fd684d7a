/// StatusBar widget - outcome of the last action on the left, key hints on the right
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::tui::state::StatusMessage;
use crate::tui::widgets::RenderableWidget;

pub const KEY_HINTS: &str = "1-9/Enter: run  Tab: panel  q: quit";

#[derive(Debug)]
pub struct StatusBar<'a> {
    pub status: Option<&'a StatusMessage>,
}

impl<'a> StatusBar<'a> {
    pub fn new(status: Option<&'a StatusMessage>) -> Self {
        Self { status }
    }
}

impl RenderableWidget for StatusBar<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;

        let mut used = 0;
        if let Some(status) = self.status {
            let style = match status {
                StatusMessage::Info(_) => Style::default(),
                StatusMessage::Error(_) => Style::default().fg(config.error_fg),
            };
            let text = status.text();
            buf.set_stringn(area.x, area.y, text, width, style);
            used = text.width();
        }

        let hints_width = KEY_HINTS.width();
        if used + 1 + hints_width <= width {
            let x = area.x + (width - hints_width) as u16;
            buf.set_string(x, area.y, KEY_HINTS, Style::default());
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
