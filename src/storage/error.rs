use thiserror::Error;

use crate::domain::{DomainError, OperationKind};

/// Storage-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Account not found")]
    NotFound,

    #[error("Ledger already holds a {kind} for round {round_id}")]
    DuplicateRecord {
        round_id: String,
        kind: OperationKind,
    },

    #[error("Domain error: {0}")]
    DomainError(#[from] DomainError),
}
