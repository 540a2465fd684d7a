use anyhow::{Context, Result};

use crate::config::DisplayConfig;
use crate::formatting::format_header;
use crate::registry::{Dashboard, Tab};
use crate::router::Router;

/// Render the current content of every dashboard panel
pub fn format_panels(dashboard: &Dashboard, time_format: &str, display: &DisplayConfig) -> String {
    let mut output = format_header("Panels", false, display);

    let width = dashboard.panels().iter().map(|p| p.name().chars().count()).max().unwrap_or(0);
    for panel in dashboard.panels() {
        let line = match (panel.content(), panel.loaded_at()) {
            (Some(path), Some(at)) => format!("{}  (loaded {})", path, at.format(time_format)),
            (Some(path), None) => path.to_string(),
            _ => "(empty)".to_string(),
        };
        output.push_str(&format!("{:<width$}  {}\n", panel.name(), line, width = width));
    }
    output
}

/// Dispatch one action against the router's dashboard and print every panel
///
/// Panels are printed even when a bound tab is missing, so the loads that did
/// happen stay visible next to the error.
pub fn run(
    router: &mut Router<Dashboard>,
    action: &str,
    time_format: &str,
    display: &DisplayConfig,
) -> Result<()> {
    let result = router.dispatch(action);
    print!("{}", format_panels(router.registry(), time_format, display));
    result.with_context(|| format!("Action '{}' did not complete", action))
}
