use thiserror::Error;

use super::controller::ControllerState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("No title mapping for page '{name}'")]
    MissingLabel { name: String },

    #[error("Page set is empty")]
    EmptyPageSet,

    #[error("Page count mismatch: {expected} pages in set, {actual} in {what}")]
    CountMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Index {index} out of range for {count} pages")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("No such page: {position} (factory builds {count})")]
    InvalidPosition { position: usize, count: usize },

    /// Reserved for controller states other than `Ready` and `TornDown`.
    /// Construction fails before a controller can be observed uninitialized.
    #[error("Navigation is not ready (state: {0:?})")]
    NotReady(ControllerState),

    #[error("Page host has been torn down")]
    TornDown,
}

impl NavError {
    /// Errors detected while building the controller; these abort construction.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            NavError::MissingLabel { .. } | NavError::EmptyPageSet | NavError::CountMismatch { .. }
        )
    }
}
