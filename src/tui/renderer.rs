/// Composes the dashboard widgets into the terminal layout
///
/// ```text
/// tab bar      (2 rows)
/// menu │ panel (remaining rows)
/// status bar   (1 row)
/// ```
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
};

use super::state::AppState;
use super::widgets::{ActionMenu, PanelView, RenderableWidget, StatusBar, TabBar};

/// Width of the gap between menu and panel, including the vertical rule
const GUTTER_WIDTH: u16 = 3;

pub fn render(state: &AppState, area: Rect, buf: &mut Buffer) {
    let config = &state.system.config.display;

    let [tabs_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    TabBar::new(state.tab_labels(), state.navigation.current_tab).render(tabs_area, buf, config);

    let menu = ActionMenu::new(state.action_names(), state.navigation.selected_action);
    let menu_width = menu
        .preferred_width()
        .unwrap_or(0)
        .min(body_area.width / 2);
    let [menu_area, gutter_area, panel_area] = Layout::horizontal([
        Constraint::Length(menu_width),
        Constraint::Length(GUTTER_WIDTH),
        Constraint::Min(0),
    ])
    .areas(body_area);

    menu.render(menu_area, buf, config);
    render_gutter(gutter_area, buf, &config.box_chars.vertical);
    PanelView::new(state.current_panel(), &state.system.config.time_format)
        .render(panel_area, buf, config);

    StatusBar::new(state.system.status.as_ref()).render(status_area, buf, config);
}

fn render_gutter(area: Rect, buf: &mut Buffer, vertical: &str) {
    if area.width < GUTTER_WIDTH {
        return;
    }
    for y in area.y..area.y + area.height {
        buf.set_string(area.x + 1, y, vertical, Style::default());
    }
}
