use std::marker::PhantomData;
use std::time::Duration;

use tracing::{debug, warn};

use super::error::EngineError;
use super::locks::AccountLocks;
use crate::domain::{Amount, LedgerRecord, OperationKind, WagerRequest, operations};
use crate::storage::{AccountEntry, AccountStore, RoundLedger};

/// Default bounded wait for the per-account lock.
const DEFAULT_LOCK_WAIT: Duration = Duration::from_millis(250);

/// Result of an accepted wager operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt<A: Amount> {
    pub transaction_id: String,
    pub round_id: String,
    pub kind: OperationKind,
    pub new_balance: A,
}

/// Wager engine orchestrating domain operations, account storage and the
/// idempotency ledger.
///
/// Debit, credit and rollback run through one code path parameterized by
/// [`OperationKind`]; only the per-kind preconditions differ. Each call is
/// atomic for its account: the per-account lock is held across
/// validate-then-mutate-then-append, and the ledger's (round_id, kind) claim
/// settles same-round races the account lock cannot see.
pub struct WalletEngine<A, S, L>
where
    A: Amount,
    S: AccountStore<A>,
    L: RoundLedger<A>,
{
    accounts: S,
    ledger: L,
    locks: AccountLocks,
    lock_wait: Duration,
    _phantom: PhantomData<A>,
}

impl<A, S, L> WalletEngine<A, S, L>
where
    A: Amount,
    S: AccountStore<A>,
    L: RoundLedger<A>,
{
    /// Create a new engine over the given stores.
    pub fn new(accounts: S, ledger: L) -> Self {
        Self {
            accounts,
            ledger,
            locks: AccountLocks::new(),
            lock_wait: DEFAULT_LOCK_WAIT,
            _phantom: PhantomData,
        }
    }

    /// Set how long an operation waits for a congested account before
    /// failing with `Busy`.
    pub fn with_lock_wait(mut self, wait: Duration) -> Self {
        self.lock_wait = wait;
        self
    }

    /// Reserve a wager for a round.
    pub async fn debit(&self, request: WagerRequest<A>) -> Result<Receipt<A>, EngineError> {
        self.execute(OperationKind::Debit, request).await
    }

    /// Settle a round, paying out on the reserved wager.
    pub async fn credit(&self, request: WagerRequest<A>) -> Result<Receipt<A>, EngineError> {
        self.execute(OperationKind::Credit, request).await
    }

    /// Void a round, returning the reserved wager.
    pub async fn rollback(&self, request: WagerRequest<A>) -> Result<Receipt<A>, EngineError> {
        self.execute(OperationKind::Rollback, request).await
    }

    /// Shared access to the account store for snapshot reads.
    pub fn accounts(&self) -> &S {
        &self.accounts
    }

    /// Apply one wager operation as an atomic unit.
    pub async fn execute(
        &self,
        kind: OperationKind,
        request: WagerRequest<A>,
    ) -> Result<Receipt<A>, EngineError> {
        request
            .validate()
            .map_err(|e| EngineError::InvalidRequest(e.to_string()))?;

        debug!(
            account_id = %request.account_id,
            round_id = %request.round_id,
            transaction_id = %request.transaction_id,
            %kind,
            "Processing wager operation"
        );

        let _guard = self
            .locks
            .acquire(&request.account_id, self.lock_wait)
            .await
            .ok_or_else(|| {
                warn!(account_id = %request.account_id, "Lock wait exceeded");
                EngineError::Busy(request.account_id.clone())
            })?;

        let mut entry = self.accounts.entry(&request.account_id)?;
        let account = entry
            .read()
            .ok_or_else(|| EngineError::AccountNotFound(request.account_id.clone()))?;

        // Duplicate guard applies uniformly: each (round, kind) slot is
        // accepted once. For debit this rejects a replayed reservation, for
        // credit/rollback a replayed settlement.
        if self
            .ledger
            .round_record(&request.round_id, kind)
            .is_some()
        {
            return Err(EngineError::DuplicateRound {
                round_id: request.round_id,
                kind,
            });
        }

        let resulting_balance = match kind {
            OperationKind::Debit => {
                if account.balance() < request.amount {
                    return Err(EngineError::InsufficientFunds(request.account_id));
                }
                account
                    .balance()
                    .checked_sub(request.amount)
                    .ok_or_else(|| EngineError::InvalidRequest("amount out of range".to_string()))?
            }
            OperationKind::Credit | OperationKind::Rollback => {
                if self
                    .ledger
                    .debit_for(&request.round_id, &request.account_id)
                    .is_none()
                {
                    return Err(EngineError::NoMatchingDebit(request.round_id));
                }
                account
                    .balance()
                    .checked_add(request.amount)
                    .ok_or_else(|| EngineError::InvalidRequest("amount out of range".to_string()))?
            }
        };

        // The append is the commit point. It atomically claims the
        // (round, kind) slot, so a same-round request that raced in on a
        // different account loses here with no balance touched.
        let record = LedgerRecord::accepted(kind, &request, resulting_balance);
        self.ledger.append(record).map_err(|err| match err {
            crate::storage::StorageError::DuplicateRecord { round_id, kind } => {
                warn!(%round_id, %kind, "Lost round claim to a concurrent request");
                EngineError::DuplicateRound { round_id, kind }
            }
            other => EngineError::Storage(other),
        })?;

        // The checks above ran under the account lock, so this mutation
        // cannot fail with a different answer.
        let new_balance = entry.try_update(|acc| match kind {
            OperationKind::Debit => operations::apply_debit(acc, request.amount),
            OperationKind::Credit | OperationKind::Rollback => {
                operations::apply_credit(acc, request.amount)
            }
        })?;
        debug_assert_eq!(new_balance, resulting_balance);

        Ok(Receipt {
            transaction_id: request.transaction_id,
            round_id: request.round_id,
            kind,
            new_balance,
        })
    }
}
