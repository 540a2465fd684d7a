use thiserror::Error;

/// Errors raised while dispatching an action
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("Tab not found: {0}")]
    TabNotFound(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

/// Errors raised while building an action binding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    #[error("Action name must not be empty")]
    EmptyActionName,

    #[error("Action '{0}' has no tab loads bound to it")]
    NoLoads(String),

    #[error("Action '{0}' binds a load to an empty tab name")]
    EmptyTabName(String),

    #[error("Action '{action}' binds an empty path to tab '{tab}'")]
    EmptyPath { action: String, tab: String },

    #[error("Action '{0}' is bound more than once")]
    DuplicateAction(String),
}

/// Result type for router operations
pub type RouterResult<T> = Result<T, RouterError>;
