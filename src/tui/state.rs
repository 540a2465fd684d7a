use crate::config::Config;
use crate::registry::{Dashboard, Panel, Tab};
use crate::router::Router;

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
pub struct AppState {
    /// Router over the dashboard panels; owns the panels for the session
    pub router: Router<Dashboard>,

    /// Navigation state (visible panel, menu selection)
    pub navigation: NavigationState,

    /// System state
    pub system: SystemState,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    /// Index of the visible dashboard panel
    pub current_tab: usize,
    /// Index of the highlighted menu action
    pub selected_action: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
}

/// Outcome of the last triggered action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Info(text) | StatusMessage::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Error(_))
    }
}

impl AppState {
    pub fn new(router: Router<Dashboard>, config: Config) -> Self {
        Self {
            router,
            navigation: NavigationState::default(),
            system: SystemState {
                config,
                ..Default::default()
            },
        }
    }

    /// Action names in menu order
    pub fn action_names(&self) -> Vec<String> {
        self.router.actions().map(str::to_string).collect()
    }

    pub fn action_count(&self) -> usize {
        self.router.binding().len()
    }

    /// Panel names in tab bar order
    pub fn tab_labels(&self) -> Vec<String> {
        self.router
            .registry()
            .panels()
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    pub fn tab_count(&self) -> usize {
        self.router.registry().len()
    }

    pub fn current_panel(&self) -> Option<&Panel> {
        self.router.registry().panels().get(self.navigation.current_tab)
    }

    /// Index of the panel with the given name
    pub fn tab_index(&self, name: &str) -> Option<usize> {
        self.router
            .registry()
            .panels()
            .iter()
            .position(|p| p.name() == name)
    }
}
