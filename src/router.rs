//! Named-tab router
//!
//! The router owns an [`ActionBinding`] and the host's [`TabRegistry`]. Each
//! action resolves its bound tabs by name and asks every resolved tab to load
//! its path, in declaration order. A tab that does not resolve is reported as
//! [`RouterError::TabNotFound`] once all the other loads have been attempted.
//!
//! The router keeps no state between dispatches: firing the same action twice
//! issues the same loads twice.

use tracing::{debug, warn};

use crate::binding::{ActionBinding, BIOTA, TABLES, TESTVIEWS};
use crate::error::{RouterError, RouterResult};
use crate::registry::TabRegistry;

pub struct Router<R> {
    binding: ActionBinding,
    registry: R,
}

impl<R: TabRegistry> Router<R> {
    pub fn new(binding: ActionBinding, registry: R) -> Self {
        Self { binding, registry }
    }

    pub fn binding(&self) -> &ActionBinding {
        &self.binding
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    pub fn into_registry(self) -> R {
        self.registry
    }

    /// Registered action names, for the host to bind to its own events
    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.binding.names()
    }

    /// Run every load bound to `action`
    ///
    /// Loads are attempted independently. If any bound tab is missing, the
    /// first missing tab is returned as the error after the remaining loads ran.
    pub fn dispatch(&mut self, action: &str) -> RouterResult<()> {
        let spec = self
            .binding
            .get(action)
            .ok_or_else(|| RouterError::UnknownAction(action.to_string()))?;

        if spec.announce {
            debug!("ROUTER: action '{}' triggered", action);
        }

        let mut first_missing = None;
        for load in &spec.loads {
            match self.registry.tab_by_name(&load.tab) {
                Some(tab) => {
                    debug!("ROUTER: {} -> {}.load({})", action, load.tab, load.path);
                    tab.load(&load.path);
                }
                None => {
                    warn!("ROUTER: action '{}' skipped missing tab '{}'", action, load.tab);
                    first_missing.get_or_insert_with(|| load.tab.clone());
                }
            }
        }

        match first_missing {
            Some(tab) => Err(RouterError::TabNotFound(tab)),
            None => Ok(()),
        }
    }

    pub fn biota(&mut self) -> RouterResult<()> {
        self.dispatch(BIOTA)
    }

    pub fn tables(&mut self) -> RouterResult<()> {
        self.dispatch(TABLES)
    }

    pub fn testviews(&mut self) -> RouterResult<()> {
        self.dispatch(TESTVIEWS)
    }
}
