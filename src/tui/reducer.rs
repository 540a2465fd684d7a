use tracing::{debug, warn};

use super::action::Action;
use super::state::{AppState, StatusMessage};

/// State reducer
///
/// Takes the current state and an action and returns the new state. Router
/// actions are the only side effect: they load paths into dashboard panels,
/// which the state owns through the router.
pub fn reduce(state: AppState, action: Action) -> AppState {
    debug!("REDUCER: {:?}", action);
    match action {
        Action::TriggerIndex(index) => match state.action_names().get(index).cloned() {
            Some(name) => {
                let mut state = trigger(state, &name);
                state.navigation.selected_action = index;
                state
            }
            None => state,
        },
        Action::TriggerSelected => {
            match state.action_names().get(state.navigation.selected_action).cloned() {
                Some(name) => trigger(state, &name),
                None => state,
            }
        }
        Action::SelectNextAction => select_action(state, 1),
        Action::SelectPreviousAction => select_action(state, -1),
        Action::NextTab => cycle_tab(state, 1),
        Action::PreviousTab => cycle_tab(state, -1),
        Action::Quit => {
            let mut state = state;
            state.system.should_quit = true;
            state
        }
    }
}

/// Dispatch a router action and report the outcome in the status bar
///
/// The first panel the action targets becomes the visible one, whether or not
/// every bound tab resolved.
fn trigger(mut state: AppState, name: &str) -> AppState {
    let targets: Vec<String> = state
        .router
        .binding()
        .get(name)
        .map(|spec| spec.loads.iter().map(|load| load.tab.clone()).collect())
        .unwrap_or_default();

    state.system.status = Some(match state.router.dispatch(name) {
        Ok(()) => StatusMessage::Info(format!("{}: loaded {}", name, targets.join(", "))),
        Err(e) => {
            warn!("REDUCER: action '{}' failed: {}", name, e);
            StatusMessage::Error(format!("{}: {}", name, e))
        }
    });

    if let Some(index) = targets.iter().find_map(|tab| state.tab_index(tab)) {
        state.navigation.current_tab = index;
    }
    state
}

/// Move the menu selection, clamped to the menu bounds
fn select_action(mut state: AppState, delta: isize) -> AppState {
    let count = state.action_count();
    if count == 0 {
        return state;
    }
    let current = state.navigation.selected_action as isize;
    state.navigation.selected_action = (current + delta).clamp(0, count as isize - 1) as usize;
    state
}

/// Switch the visible panel, wrapping around at both ends
fn cycle_tab(mut state: AppState, delta: isize) -> AppState {
    let count = state.tab_count() as isize;
    if count == 0 {
        return state;
    }
    let current = state.navigation.current_tab as isize;
    state.navigation.current_tab = (current + delta).rem_euclid(count) as usize;
    state
}
