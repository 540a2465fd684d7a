pub mod binding;
pub mod commands;
pub mod config;
pub mod error;
pub mod formatting;
pub mod registry;
pub mod router;
pub mod tui;

#[cfg(test)]
mod testing;

pub use binding::{ActionBinding, ActionSpec, LoadInstruction, Preset};
pub use error::{BindingError, RouterError};
pub use registry::{Dashboard, Panel, Tab, TabRegistry};
pub use router::Router;
