/// Actions - every state change in the TUI goes through one of these
///
/// Actions are produced from key events by [`super::keys::key_to_action`] and
/// applied by [`super::reducer::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fire the menu action at an index (digit shortcuts)
    TriggerIndex(usize),
    /// Fire the highlighted menu action
    TriggerSelected,

    // Menu navigation
    SelectNextAction,
    SelectPreviousAction,

    // Panel navigation
    NextTab,
    PreviousTab,

    Quit,
}
