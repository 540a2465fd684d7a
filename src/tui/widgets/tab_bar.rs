/// TabBar widget - displays the dashboard panels as navigation tabs
///
/// This widget renders a horizontal bar with one label per dashboard panel,
/// separated by box-drawing characters, and a separator line underneath.
/// The visible panel is highlighted.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

/// Widget for displaying panel names as a horizontal bar
#[derive(Debug)]
pub struct TabBar {
    /// Panel names, in dashboard order
    pub labels: Vec<String>,
    /// Index of the visible panel
    pub current_tab: usize,
}

impl TabBar {
    pub fn new(labels: Vec<String>, current_tab: usize) -> Self {
        Self { labels, current_tab }
    }

    fn tab_style(&self, index: usize, config: &DisplayConfig) -> Style {
        if index == self.current_tab {
            Style::default().fg(config.selection_fg)
        } else {
            Style::default()
        }
    }

    /// Build the tab line with separators
    fn build_tab_line(&self, config: &DisplayConfig) -> Vec<(String, Style)> {
        let separator = format!(" {} ", config.box_chars.vertical);
        let mut segments = Vec::new();

        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                segments.push((separator.clone(), Style::default()));
            }
            segments.push((label.clone(), self.tab_style(i, config)));
        }

        segments
    }

    /// Build the separator line with connectors under tab gaps
    fn build_separator_line(&self, area_width: usize, config: &DisplayConfig) -> String {
        let horizontal = &config.box_chars.horizontal;
        let connector = &config.box_chars.connector2;

        let mut line = String::new();
        let mut pos = 0;

        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                line.push_str(horizontal);
                line.push_str(connector);
                line.push_str(horizontal);
                pos += 3;
            }
            let tab_width = label.width();
            line.push_str(&horizontal.repeat(tab_width));
            pos += tab_width;
        }

        if pos < area_width {
            line.push_str(&horizontal.repeat(area_width - pos));
        }

        line
    }
}

impl RenderableWidget for TabBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if self.labels.is_empty() || area.width == 0 || area.height < 2 {
            return;
        }

        let mut x = area.x;
        for (text, style) in self.build_tab_line(config) {
            if x >= area.x + area.width {
                break;
            }
            let remaining = (area.x + area.width - x) as usize;
            buf.set_stringn(x, area.y, &text, remaining, style);
            x += text.width() as u16;
        }

        let separator = self.build_separator_line(area.width as usize, config);
        buf.set_stringn(area.x, area.y + 1, &separator, area.width as usize, Style::default());
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Tab line + separator line
    }
}
