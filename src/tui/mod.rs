pub mod widgets;

pub mod action;
pub mod keys;
pub mod reducer;
pub mod renderer;
pub mod state;


pub use action::Action;
pub use keys::key_to_action;
pub use reducer::reduce;
pub use state::{AppState, StatusMessage};

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use crate::config::Config;
use crate::registry::Dashboard;
use crate::router::Router;

/// Interval between input polls
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main entry point for TUI mode
pub fn run(router: Router<Dashboard>, config: Config) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, AppState::new(router, config));

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut state: AppState,
) -> Result<(), io::Error> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            renderer::render(&state, area, f.buffer_mut());
        })?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if let Some(action) = key_to_action(key, &state) {
            state = reduce(state, action);
        }

        if state.system.should_quit {
            tracing::debug!("ACTION: Quitting application");
            return Ok(());
        }
    }
}
