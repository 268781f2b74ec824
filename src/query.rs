use std::marker::PhantomData;

use thiserror::Error;

use crate::domain::{Account, Amount, LedgerRecord, OperationKind};
use crate::storage::{AccountStore, RoundLedger, StorageError};

/// Query-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Read-only view over the wallet state.
///
/// Reads are lock-free: each call takes one consistent snapshot from the
/// backing store and never observes a partially-applied operation. Holds the
/// same stores as the engine through shared handles.
pub struct WalletQuery<A, S, L>
where
    A: Amount,
    S: AccountStore<A>,
    L: RoundLedger<A>,
{
    accounts: S,
    ledger: L,
    _phantom: PhantomData<A>,
}

impl<A, S, L> WalletQuery<A, S, L>
where
    A: Amount,
    S: AccountStore<A>,
    L: RoundLedger<A>,
{
    /// Create a query view over the given stores.
    pub fn new(accounts: S, ledger: L) -> Self {
        Self {
            accounts,
            ledger,
            _phantom: PhantomData,
        }
    }

    /// Snapshot of a single wallet.
    pub fn wallet(&self, account_id: &str) -> Result<Account<A>, QueryError> {
        self.accounts
            .get(account_id)?
            .ok_or_else(|| QueryError::AccountNotFound(account_id.to_string()))
    }

    /// Accepted operations for an account in acceptance order, optionally
    /// narrowed to one kind. Pure read; an unknown account simply has no
    /// history.
    pub fn transactions(
        &self,
        account_id: &str,
        kind: Option<OperationKind>,
    ) -> Vec<LedgerRecord<A>> {
        self.ledger.account_records(account_id, kind)
    }
}
