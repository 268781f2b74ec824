use thiserror::Error;

use crate::domain::OperationKind;
use crate::storage::StorageError;

/// Engine-level errors for wager processing.
///
/// These are the rejection kinds surfaced to callers. Every rejection
/// leaves account and ledger state untouched; `Busy` and `Storage` are the
/// only kinds worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Insufficient funds on account {0}")]
    InsufficientFunds(String),

    #[error("Round {round_id} already has an accepted {kind}")]
    DuplicateRound {
        round_id: String,
        kind: OperationKind,
    },

    #[error("No matching debit for round {0}")]
    NoMatchingDebit(String),

    #[error("Account {0} is busy, retry later")]
    Busy(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
