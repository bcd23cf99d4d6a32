use thiserror::Error;

/// Failures of the structural stack operations (`push`, `pop_top`, `remove`).
///
/// Every operation returning one of these leaves the stacks untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("context stack is empty")]
    Empty,

    #[error("cannot reserve bindings: no context below {0:?}")]
    NothingToReserve(String),

    #[error("context {0:?} is not on the stack")]
    NotFound(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AliasError {
    #[error("action not found in alias table: {0}")]
    UnknownAction(String),

    #[error("alias mode is enabled but no alias config was supplied")]
    MissingConfig,
}
