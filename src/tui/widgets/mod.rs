/// Widget-based rendering infrastructure for TUI
///
/// Widgets render themselves directly to a ratatui Buffer and are composed by
/// the renderer into the dashboard layout.

#[cfg(test)]
pub mod testing;

pub mod action_menu;
pub use action_menu::ActionMenu;

pub mod panel_view;
pub use panel_view::PanelView;

pub mod status_bar;
pub use status_bar::StatusBar;

pub mod tab_bar;
pub use tab_bar::TabBar;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
};
use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// Widgets render themselves directly to a ratatui Buffer, avoiding string-based
/// intermediate representations. This keeps them composable and lets tests
/// render into plain buffers.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }

    /// Get the preferred width of this widget
    ///
    /// Returns None if the widget can adapt to any width.
    fn preferred_width(&self) -> Option<u16> {
        None
    }
}
