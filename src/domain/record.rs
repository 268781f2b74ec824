use std::fmt;

use chrono::{DateTime, Utc};

use super::amount::Amount;
use super::error::DomainError;

/// The three wager operations a round can go through.
///
/// A round opens with a `Debit` that reserves the wager and closes with
/// either a `Credit` (settlement) or a `Rollback` (void). At most one
/// accepted record of each kind exists per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Debit,
    Credit,
    Rollback,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
            Self::Rollback => "rollback",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome recorded for a ledger entry. Rejected operations are never
/// written to the ledger, so every stored record is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    Accepted,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated wager operation ready for the engine. The kind is carried
/// separately so debit, credit and rollback share one shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WagerRequest<A: Amount> {
    pub account_id: String,
    pub amount: A,
    pub round_id: String,
    pub transaction_id: String,
    pub game: String,
}

impl<A: Amount> WagerRequest<A> {
    /// Check the request is well formed: all identifiers present and the
    /// amount strictly positive.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.account_id.is_empty() {
            return Err(DomainError::MissingField("account_id"));
        }
        if self.round_id.is_empty() {
            return Err(DomainError::MissingField("round_id"));
        }
        if self.transaction_id.is_empty() {
            return Err(DomainError::MissingField("transaction_id"));
        }
        if self.game.is_empty() {
            return Err(DomainError::MissingField("game"));
        }
        if !self.amount.is_positive() {
            return Err(DomainError::InvalidAmount);
        }
        Ok(())
    }
}

/// Immutable record of an accepted wager operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRecord<A: Amount> {
    pub transaction_id: String,
    pub round_id: String,
    pub account_id: String,
    pub kind: OperationKind,
    pub amount: A,
    /// Account balance immediately after this operation was applied.
    pub resulting_balance: A,
    pub game: String,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
}

impl<A: Amount> LedgerRecord<A> {
    /// Build the accepted record for a request, stamped with the current
    /// time.
    pub fn accepted(kind: OperationKind, request: &WagerRequest<A>, resulting_balance: A) -> Self {
        Self {
            transaction_id: request.transaction_id.clone(),
            round_id: request.round_id.clone(),
            account_id: request.account_id.clone(),
            kind,
            amount: request.amount,
            resulting_balance,
            game: request.game.clone(),
            status: RecordStatus::Accepted,
            created_at: Utc::now(),
        }
    }
}
