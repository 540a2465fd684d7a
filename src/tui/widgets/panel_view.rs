/// PanelView widget - content area of the visible dashboard panel
///
/// Shows the path the panel currently displays, when it was loaded, and every
/// path loaded into it during the session.
use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};
use crate::config::DisplayConfig;
use crate::registry::{Panel, Tab};
use crate::tui::widgets::RenderableWidget;

#[derive(Debug)]
pub struct PanelView<'a> {
    pub panel: Option<&'a Panel>,
    pub time_format: &'a str,
}

impl<'a> PanelView<'a> {
    pub fn new(panel: Option<&'a Panel>, time_format: &'a str) -> Self {
        Self { panel, time_format }
    }

    fn lines(&self, config: &DisplayConfig, width: usize) -> Vec<(String, Style)> {
        let Some(panel) = self.panel else {
            return vec![("No panels configured".to_string(), Style::default())];
        };

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = vec![(panel.name().to_string(), bold)];
        match panel.content() {
            Some(path) => lines.push((format!("Showing: {}", path), Style::default())),
            None => lines.push(("Nothing loaded yet".to_string(), Style::default())),
        }
        if let Some(at) = panel.loaded_at() {
            lines.push((format!("Loaded at: {}", at.format(self.time_format)), Style::default()));
        }

        if !panel.history().is_empty() {
            lines.push((config.box_chars.horizontal.repeat(width), Style::default()));
            lines.push(("History".to_string(), bold));
            for (i, path) in panel.history().iter().enumerate() {
                lines.push((format!("{:>3}. {}", i + 1, path), Style::default()));
            }
        }
        lines
    }
}

impl RenderableWidget for PanelView<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;
        for ((text, style), y) in self.lines(config, width).into_iter().zip(area.y..area.y + area.height) {
            buf.set_stringn(area.x, y, &text, width, style);
        }
    }
}
