/// Tab lookup abstractions, plus the in-memory dashboard that backs the TUI and CLI
use chrono::{DateTime, Local};
use tracing::debug;

/// A named panel that can display the resource at a path
pub trait Tab {
    fn name(&self) -> &str;

    /// Replace the tab content with the resource at `path`
    fn load(&mut self, path: &str);
}

/// Lookup of tabs by name, owned by the host shell
pub trait TabRegistry {
    fn tab_by_name(&mut self, name: &str) -> Option<&mut dyn Tab>;
}

/// A dashboard panel that remembers what it has been asked to display
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    name: String,
    content: Option<String>,
    loaded_at: Option<DateTime<Local>>,
    history: Vec<String>,
}

impl Panel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: None,
            loaded_at: None,
            history: Vec::new(),
        }
    }

    /// Path currently displayed, if anything was loaded
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.loaded_at
    }

    /// Every path loaded into this panel, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Tab for Panel {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&mut self, path: &str) {
        debug!("PANEL: {} loading {}", self.name, path);
        self.content = Some(path.to_string());
        self.loaded_at = Some(Local::now());
        self.history.push(path.to_string());
    }
}

/// Ordered set of uniquely named panels
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    panels: Vec<Panel>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dashboard with one empty panel per name
    ///
    /// Repeated names are ignored after their first occurrence.
    pub fn with_tabs<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dashboard = Dashboard::new();
        for name in names {
            dashboard.add_tab(name);
        }
        dashboard
    }

    /// Add an empty panel; returns false if the name is already taken
    pub fn add_tab(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.panel(&name).is_some() {
            return false;
        }
        self.panels.push(Panel::new(name));
        true
    }

    pub fn panel(&self, name: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.name == name)
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

impl TabRegistry for Dashboard {
    fn tab_by_name(&mut self, name: &str) -> Option<&mut dyn Tab> {
        self.panels
            .iter_mut()
            .find(|p| p.name == name)
            .map(|p| p as &mut dyn Tab)
    }
}
