use dashmap::DashMap;

use super::error::StorageError;
use super::traits::RoundLedger;
use crate::domain::{Amount, LedgerRecord, OperationKind};

/// Accepted records for one round, one slot per operation kind.
#[derive(Debug, Clone)]
struct RoundSlots<A: Amount> {
    debit: Option<LedgerRecord<A>>,
    credit: Option<LedgerRecord<A>>,
    rollback: Option<LedgerRecord<A>>,
}

impl<A: Amount> Default for RoundSlots<A> {
    fn default() -> Self {
        Self {
            debit: None,
            credit: None,
            rollback: None,
        }
    }
}

impl<A: Amount> RoundSlots<A> {
    fn slot(&self, kind: OperationKind) -> &Option<LedgerRecord<A>> {
        match kind {
            OperationKind::Debit => &self.debit,
            OperationKind::Credit => &self.credit,
            OperationKind::Rollback => &self.rollback,
        }
    }

    fn slot_mut(&mut self, kind: OperationKind) -> &mut Option<LedgerRecord<A>> {
        match kind {
            OperationKind::Debit => &mut self.debit,
            OperationKind::Credit => &mut self.credit,
            OperationKind::Rollback => &mut self.rollback,
        }
    }
}

/// DashMap-based concurrent idempotency ledger. Records are immutable once
/// appended.
///
/// The round index is the arbiter for duplicate submissions: whichever
/// append claims the (round_id, kind) slot first wins, and every later
/// append for that slot fails while the shard guard still serializes them.
/// A per-account history is kept alongside for ordered reads.
pub struct ConcurrentRoundLedger<A: Amount> {
    rounds: DashMap<String, RoundSlots<A>>,
    history: DashMap<String, Vec<LedgerRecord<A>>>,
}

impl<A: Amount> ConcurrentRoundLedger<A> {
    /// Create a new empty concurrent round ledger
    pub fn new() -> Self {
        Self {
            rounds: DashMap::new(),
            history: DashMap::new(),
        }
    }
}

impl<A: Amount> Default for ConcurrentRoundLedger<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Amount> RoundLedger<A> for ConcurrentRoundLedger<A> {
    fn append(&self, record: LedgerRecord<A>) -> Result<(), StorageError> {
        {
            let mut slots = self.rounds.entry(record.round_id.clone()).or_default();
            let slot = slots.slot_mut(record.kind);
            if slot.is_some() {
                return Err(StorageError::DuplicateRecord {
                    round_id: record.round_id,
                    kind: record.kind,
                });
            }
            *slot = Some(record.clone());
        }

        self.history
            .entry(record.account_id.clone())
            .or_default()
            .push(record);
        Ok(())
    }

    fn round_record(&self, round_id: &str, kind: OperationKind) -> Option<LedgerRecord<A>> {
        self.rounds
            .get(round_id)
            .and_then(|slots| slots.slot(kind).clone())
    }

    fn debit_for(&self, round_id: &str, account_id: &str) -> Option<LedgerRecord<A>> {
        self.round_record(round_id, OperationKind::Debit)
            .filter(|record| record.account_id == account_id)
    }

    fn account_records(
        &self,
        account_id: &str,
        kind: Option<OperationKind>,
    ) -> Vec<LedgerRecord<A>> {
        match self.history.get(account_id) {
            Some(records) => records
                .iter()
                .filter(|record| kind.is_none_or(|k| record.kind == k))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }
}
