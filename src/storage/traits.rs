use super::error::StorageError;
use crate::domain::{Account, Amount, DomainError, LedgerRecord, OperationKind, operations};

/// Trait for managing player accounts with pluggable storage backends.
///
/// Accounts are created through `provision` only; wager operations never
/// create accounts implicitly.
pub trait AccountStore<A: Amount>: Send + Sync {
    type Entry<'a>: AccountEntry<'a, A>
    where
        Self: 'a;

    /// Get an entry handle for the given account ID. The handle itself is
    /// cheap; existence is checked when it is read or updated.
    fn entry(&self, account_id: &str) -> Result<Self::Entry<'_>, StorageError>;

    /// Snapshot of a single account, None if unknown.
    fn get(&self, account_id: &str) -> Result<Option<Account<A>>, StorageError>;

    /// Insert or replace an account. This is the operator-facing seam for
    /// seeding wallets.
    fn provision(&self, account: Account<A>) -> Result<(), StorageError>;

    /// Check whether an account exists.
    fn contains(&self, account_id: &str) -> bool;

    /// Subtract `amount` from the account balance, failing on unknown
    /// accounts and insufficient funds. Returns the new balance.
    fn debit(&self, account_id: &str, amount: A) -> Result<A, StorageError> {
        let mut entry = self.entry(account_id)?;
        entry.try_update(|account| operations::apply_debit(account, amount))
    }

    /// Add `amount` to the account balance, failing on unknown accounts.
    /// Returns the new balance.
    fn credit(&self, account_id: &str, amount: A) -> Result<A, StorageError> {
        let mut entry = self.entry(account_id)?;
        entry.try_update(|account| operations::apply_credit(account, amount))
    }
}

/// Entry pattern for atomic account operations
pub trait AccountEntry<'a, A: Amount> {
    /// Non-locking read (clones the account data), None if the account
    /// does not exist.
    fn read(&self) -> Option<Account<A>>;

    /// Atomic read-modify-write with validation. The closure runs while the
    /// backing slot is exclusively held, so checks and mutation cannot be
    /// torn apart by concurrent writers.
    fn try_update<F>(&mut self, update_fn: F) -> Result<A, StorageError>
    where
        F: FnOnce(&mut Account<A>) -> Result<A, DomainError>;
}

/// Trait for the idempotency ledger: the append-only record of accepted
/// wager operations, keyed by (round_id, kind).
pub trait RoundLedger<A: Amount>: Send + Sync {
    /// Record an accepted operation. Each (round_id, kind) slot can be
    /// claimed exactly once; a second append for the same slot fails with
    /// `StorageError::DuplicateRecord` and leaves the first record intact.
    fn append(&self, record: LedgerRecord<A>) -> Result<(), StorageError>;

    /// Look up the accepted record of `kind` for a round, whichever account
    /// it belongs to.
    fn round_record(&self, round_id: &str, kind: OperationKind) -> Option<LedgerRecord<A>>;

    /// Look up the round's debit if it was accepted for this account.
    fn debit_for(&self, round_id: &str, account_id: &str) -> Option<LedgerRecord<A>>;

    /// All accepted records for an account in acceptance order, optionally
    /// narrowed to one kind.
    fn account_records(
        &self,
        account_id: &str,
        kind: Option<OperationKind>,
    ) -> Vec<LedgerRecord<A>>;
}

// Shared handles delegate to the inner store, so the engine and the query
// interface can hold the same state through Arc clones.
impl<A: Amount, T: AccountStore<A>> AccountStore<A> for std::sync::Arc<T> {
    type Entry<'a>
        = T::Entry<'a>
    where
        Self: 'a;

    fn entry(&self, account_id: &str) -> Result<Self::Entry<'_>, StorageError> {
        (**self).entry(account_id)
    }

    fn get(&self, account_id: &str) -> Result<Option<Account<A>>, StorageError> {
        (**self).get(account_id)
    }

    fn provision(&self, account: Account<A>) -> Result<(), StorageError> {
        (**self).provision(account)
    }

    fn contains(&self, account_id: &str) -> bool {
        (**self).contains(account_id)
    }
}

impl<A: Amount, T: RoundLedger<A>> RoundLedger<A> for std::sync::Arc<T> {
    fn append(&self, record: LedgerRecord<A>) -> Result<(), StorageError> {
        (**self).append(record)
    }

    fn round_record(&self, round_id: &str, kind: OperationKind) -> Option<LedgerRecord<A>> {
        (**self).round_record(round_id, kind)
    }

    fn debit_for(&self, round_id: &str, account_id: &str) -> Option<LedgerRecord<A>> {
        (**self).debit_for(round_id, account_id)
    }

    fn account_records(
        &self,
        account_id: &str,
        kind: Option<OperationKind>,
    ) -> Vec<LedgerRecord<A>> {
        (**self).account_records(account_id, kind)
    }
}
