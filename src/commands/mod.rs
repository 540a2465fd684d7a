pub mod actions;
pub mod dispatch;

use anyhow::{Context, Result};

use crate::binding::{ActionBinding, Preset};
use crate::config::Config;
use crate::registry::Dashboard;
use crate::router::Router;

/// Resolve the effective binding, letting a CLI preset override the configured one
pub fn resolve_binding(config: &Config, preset: Option<Preset>) -> Result<ActionBinding> {
    config
        .binding(preset)
        .with_context(|| format!("Invalid action binding (preset '{}')", preset.unwrap_or(config.preset)))
}

/// Build a router over a fresh dashboard
///
/// An empty `tabs` list falls back to the tabs named in the config.
pub fn build_router(config: &Config, preset: Option<Preset>, tabs: &[String]) -> Result<Router<Dashboard>> {
    let binding = resolve_binding(config, preset)?;
    let dashboard = if tabs.is_empty() {
        Dashboard::with_tabs(config.tabs.iter().cloned())
    } else {
        Dashboard::with_tabs(tabs.iter().cloned())
    };
    Ok(Router::new(binding, dashboard))
}
