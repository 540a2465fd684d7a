//! Action bindings
//!
//! An [`ActionBinding`] maps each action name to the ordered list of
//! `(tab, path)` loads it performs. Bindings are validated once when they are
//! built and never change afterwards.
//!
//! Two built-in presets reproduce the dashboard variants that shipped:
//!
//! - [`Preset::Public`]: `biota` opens the tables view in the explorer and
//!   announces itself at debug level
//! - [`Preset::Draft`]: `biota` opens the home view in the explorer

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::BindingError;

/// Action that opens both biota views
pub const BIOTA: &str = "biota";
/// Action that opens the tables view in the explorer
pub const TABLES: &str = "tables";
/// Action that opens the test views in the viewer
pub const TESTVIEWS: &str = "testviews";

/// Tab that hosts the navigation views
pub const EXPLORER_TAB: &str = "explorer";
/// Tab that hosts the detail views
pub const VIEWER_TAB: &str = "viewer";

pub const HOME_PATH: &str = "/biota/home";
pub const TABLES_PATH: &str = "/biota/tables";
pub const TESTVIEWS_PATH: &str = "/biota/testviews";

/// A single `(tab, path)` load
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoadInstruction {
    pub tab: String,
    pub path: String,
}

impl LoadInstruction {
    pub fn new(tab: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            tab: tab.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for LoadInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.tab, self.path)
    }
}

/// What an action does when it is triggered
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionSpec {
    /// Loads performed in declaration order
    pub loads: Vec<LoadInstruction>,
    /// Emit a debug event each time the action fires
    #[serde(default)]
    pub announce: bool,
}

impl ActionSpec {
    pub fn new(loads: Vec<LoadInstruction>) -> Self {
        Self {
            loads,
            announce: false,
        }
    }

    pub fn announced(mut self) -> Self {
        self.announce = true;
        self
    }

    fn validate(&self, action: &str) -> Result<(), BindingError> {
        if self.loads.is_empty() {
            return Err(BindingError::NoLoads(action.to_string()));
        }
        for load in &self.loads {
            if load.tab.is_empty() {
                return Err(BindingError::EmptyTabName(action.to_string()));
            }
            if load.path.is_empty() {
                return Err(BindingError::EmptyPath {
                    action: action.to_string(),
                    tab: load.tab.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Built-in bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Public,
    Draft,
}

impl Preset {
    pub fn name(&self) -> &str {
        match self {
            Preset::Public => "public",
            Preset::Draft => "draft",
        }
    }

    pub fn all() -> [Preset; 2] {
        [Preset::Public, Preset::Draft]
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable mapping from action name to its loads, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBinding {
    actions: Vec<(String, ActionSpec)>,
}

impl ActionBinding {
    /// Build a binding, validating every entry
    pub fn new<I, S>(actions: I) -> Result<Self, BindingError>
    where
        I: IntoIterator<Item = (S, ActionSpec)>,
        S: Into<String>,
    {
        let mut binding = ActionBinding { actions: Vec::new() };
        for (name, spec) in actions {
            let name = name.into();
            if name.is_empty() {
                return Err(BindingError::EmptyActionName);
            }
            spec.validate(&name)?;
            if binding.get(&name).is_some() {
                return Err(BindingError::DuplicateAction(name));
            }
            binding.actions.push((name, spec));
        }
        Ok(binding)
    }

    /// Binding for one of the built-in presets
    pub fn preset(preset: Preset) -> Self {
        let biota_home = match preset {
            Preset::Public => TABLES_PATH,
            Preset::Draft => HOME_PATH,
        };
        let biota = ActionSpec {
            loads: vec![
                LoadInstruction::new(EXPLORER_TAB, biota_home),
                LoadInstruction::new(VIEWER_TAB, TESTVIEWS_PATH),
            ],
            announce: preset == Preset::Public,
        };
        let tables = ActionSpec::new(vec![LoadInstruction::new(EXPLORER_TAB, TABLES_PATH)]);
        let testviews =
            ActionSpec::new(vec![LoadInstruction::new(VIEWER_TAB, TESTVIEWS_PATH)]);

        ActionBinding {
            actions: vec![
                (BIOTA.to_string(), biota),
                (TABLES.to_string(), tables),
                (TESTVIEWS.to_string(), testviews),
            ],
        }
    }

    /// Apply overrides on top of this binding
    ///
    /// An override replaces the action of the same name in place; new actions
    /// are appended after the existing ones in name order.
    pub fn with_overrides(
        self,
        overrides: &BTreeMap<String, ActionSpec>,
    ) -> Result<Self, BindingError> {
        let mut actions = self.actions;
        for (name, spec) in overrides {
            if name.is_empty() {
                return Err(BindingError::EmptyActionName);
            }
            spec.validate(name)?;
            match actions.iter_mut().find(|(existing, _)| existing == name) {
                Some(entry) => entry.1 = spec.clone(),
                None => actions.push((name.clone(), spec.clone())),
            }
        }
        Ok(ActionBinding { actions })
    }

    pub fn get(&self, action: &str) -> Option<&ActionSpec> {
        self.actions
            .iter()
            .find(|(name, _)| name == action)
            .map(|(_, spec)| spec)
    }

    /// Action names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActionSpec)> {
        self.actions.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionBinding {
    fn default() -> Self {
        ActionBinding::preset(Preset::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(tab: &str, path: &str) -> LoadInstruction {
        LoadInstruction::new(tab, path)
    }

    #[test]
    fn test_public_preset_actions_in_order() {
        let binding = ActionBinding::preset(Preset::Public);
        let names: Vec<&str> = binding.names().collect();
        assert_eq!(names, vec![BIOTA, TABLES, TESTVIEWS]);
    }

    #[test]
    fn test_public_preset_biota_loads_tables() {
        let binding = ActionBinding::preset(Preset::Public);
        let biota = binding.get(BIOTA).unwrap();
        assert_eq!(
            biota.loads,
            vec![load("explorer", "/biota/tables"), load("viewer", "/biota/testviews")]
        );
        assert!(biota.announce);
    }

    #[test]
    fn test_draft_preset_biota_loads_home() {
        let binding = ActionBinding::preset(Preset::Draft);
        let biota = binding.get(BIOTA).unwrap();
        assert_eq!(
            biota.loads,
            vec![load("explorer", "/biota/home"), load("viewer", "/biota/testviews")]
        );
        assert!(!biota.announce);
    }

    #[test]
    fn test_presets_share_single_tab_actions() {
        for preset in Preset::all() {
            let binding = ActionBinding::preset(preset);
            assert_eq!(
                binding.get(TABLES).unwrap().loads,
                vec![load("explorer", "/biota/tables")]
            );
            assert_eq!(
                binding.get(TESTVIEWS).unwrap().loads,
                vec![load("viewer", "/biota/testviews")]
            );
            assert!(!binding.get(TABLES).unwrap().announce);
        }
    }

    #[test]
    fn test_default_binding_is_public() {
        assert_eq!(ActionBinding::default(), ActionBinding::preset(Preset::Public));
    }

    #[test]
    fn test_new_rejects_empty_loads() {
        let result = ActionBinding::new([("nothing", ActionSpec::new(vec![]))]);
        assert_eq!(result, Err(BindingError::NoLoads("nothing".to_string())));
    }

    #[test]
    fn test_new_rejects_empty_action_name() {
        let result = ActionBinding::new([("", ActionSpec::new(vec![load("t", "/p")]))]);
        assert_eq!(result, Err(BindingError::EmptyActionName));
    }

    #[test]
    fn test_new_rejects_empty_tab_name() {
        let result = ActionBinding::new([("a", ActionSpec::new(vec![load("", "/p")]))]);
        assert_eq!(result, Err(BindingError::EmptyTabName("a".to_string())));
    }

    #[test]
    fn test_new_rejects_empty_path() {
        let result = ActionBinding::new([("a", ActionSpec::new(vec![load("t1", "")]))]);
        assert_eq!(
            result,
            Err(BindingError::EmptyPath {
                action: "a".to_string(),
                tab: "t1".to_string()
            })
        );
    }

    #[test]
    fn test_new_rejects_duplicate_action() {
        let result = ActionBinding::new([
            ("a", ActionSpec::new(vec![load("t1", "/p1")])),
            ("a", ActionSpec::new(vec![load("t2", "/p2")])),
        ]);
        assert_eq!(result, Err(BindingError::DuplicateAction("a".to_string())));
    }

    #[test]
    fn test_new_keeps_declaration_order() {
        let binding = ActionBinding::new([
            ("zeta", ActionSpec::new(vec![load("t1", "/z")])),
            ("alpha", ActionSpec::new(vec![load("t2", "/a")])),
        ])
        .unwrap();
        let names: Vec<&str> = binding.names().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(binding.len(), 2);
        assert!(!binding.is_empty());
    }

    #[test]
    fn test_overrides_replace_in_place_and_append() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            TABLES.to_string(),
            ActionSpec::new(vec![load("viewer", "/biota/tables")]),
        );
        overrides.insert(
            "compounds".to_string(),
            ActionSpec::new(vec![load("explorer", "/biota/compounds")]).announced(),
        );

        let binding = ActionBinding::preset(Preset::Public)
            .with_overrides(&overrides)
            .unwrap();

        let names: Vec<&str> = binding.names().collect();
        assert_eq!(names, vec![BIOTA, TABLES, TESTVIEWS, "compounds"]);
        assert_eq!(
            binding.get(TABLES).unwrap().loads,
            vec![load("viewer", "/biota/tables")]
        );
        assert!(binding.get("compounds").unwrap().announce);
    }

    #[test]
    fn test_overrides_are_validated() {
        let mut overrides = BTreeMap::new();
        overrides.insert("broken".to_string(), ActionSpec::new(vec![]));
        let result = ActionBinding::preset(Preset::Draft).with_overrides(&overrides);
        assert_eq!(result, Err(BindingError::NoLoads("broken".to_string())));
    }

    #[test]
    fn test_load_instruction_display() {
        assert_eq!(load("explorer", "/biota/tables").to_string(), "explorer <- /biota/tables");
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(Preset::Public.to_string(), "public");
        assert_eq!(Preset::Draft.name(), "draft");
    }
}
