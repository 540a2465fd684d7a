/// ActionMenu widget - the list of router actions the user can trigger
///
/// The first nine actions are numbered with the digit key that triggers them.
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

const TITLE: &str = "Actions";

#[derive(Debug)]
pub struct ActionMenu {
    pub items: Vec<String>,
    pub selected: usize,
}

impl ActionMenu {
    pub fn new(items: Vec<String>, selected: usize) -> Self {
        Self { items, selected }
    }

    /// Digit key bound to the item at `index`, if any
    pub fn shortcut(index: usize) -> Option<char> {
        if index < 9 {
            char::from_digit(index as u32 + 1, 10)
        } else {
            None
        }
    }

    fn item_line(&self, index: usize, config: &DisplayConfig) -> String {
        let marker = if index == self.selected {
            config.box_chars.selector.as_str()
        } else {
            " "
        };
        let key = Self::shortcut(index).unwrap_or(' ');
        format!("{} {} {}", marker, key, self.items[index])
    }
}

impl RenderableWidget for ActionMenu {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;

        buf.set_stringn(area.x, area.y, TITLE, width, Style::default());
        if area.height > 1 {
            let rule = config.box_chars.horizontal.repeat(width);
            buf.set_stringn(area.x, area.y + 1, &rule, width, Style::default());
        }

        for (i, y) in (0..self.items.len()).zip(area.y + 2..area.y + area.height) {
            let style = if i == self.selected {
                Style::default().fg(config.selection_fg)
            } else {
                Style::default()
            };
            buf.set_stringn(area.x, y, self.item_line(i, config), width, style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.items.len() as u16 + 2)
    }

    fn preferred_width(&self) -> Option<u16> {
        let widest = self.items.iter().map(|i| i.width()).max().unwrap_or(0);
        Some((widest + 4).max(TITLE.len()) as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    fn menu(selected: usize) -> ActionMenu {
        ActionMenu::new(
            vec!["biota".to_string(), "tables".to_string(), "testviews".to_string()],
            selected,
        )
    }

    #[test]
    fn test_action_menu_rendering() {
        let buf = render_widget(&menu(0), 16, 5);

        assert_buffer(&buf, &[
            "Actions",
            "────────────────",
            "► 1 biota",
            "  2 tables",
            "  3 testviews",
        ]);
    }

    #[test]
    fn test_action_menu_ascii_selector() {
        let buf = render_widget_with_config(&menu(1), 16, 5, &test_config_ascii());

        assert_buffer(&buf, &[
            "Actions",
            "----------------",
            "  1 biota",
            "> 2 tables",
            "  3 testviews",
        ]);
    }

    #[test]
    fn test_action_menu_highlights_selection() {
        let buf = render_widget(&menu(2), 16, 5);
        let config = test_config();
        assert_eq!(buf[(4, 4)].fg, config.selection_fg);
        assert_ne!(buf[(4, 2)].fg, config.selection_fg);
    }

    #[test]
    fn test_action_menu_clips_to_height() {
        let buf = render_widget(&menu(0), 16, 3);
        assert_buffer(&buf, &[
            "Actions",
            "────────────────",
            "► 1 biota",
        ]);
    }

    #[test]
    fn test_shortcuts_stop_after_nine() {
        assert_eq!(ActionMenu::shortcut(0), Some('1'));
        assert_eq!(ActionMenu::shortcut(8), Some('9'));
        assert_eq!(ActionMenu::shortcut(9), None);
    }

    #[test]
    fn test_preferred_size() {
        let widget = menu(0);
        assert_eq!(widget.preferred_height(), Some(5));
        assert_eq!(widget.preferred_width(), Some(13));
    }
}
