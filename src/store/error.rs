use crate::persistence::PersistenceError;
use thiserror::Error;

/// Errors returned by store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no list with id {0}")]
    ListNotFound(usize),

    #[error("no task with id {0}")]
    TaskNotFound(usize),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
