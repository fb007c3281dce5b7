use thiserror::Error;
use uuid::Uuid;

/// Failures a repository can report. Absence of a record is not an error;
/// lookups return `Option` and point writes return whether anything matched.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Item {0} already exists")]
    DuplicateKey(Uuid),
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
