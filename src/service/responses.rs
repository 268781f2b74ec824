use serde::Serialize;

use crate::domain::{Account, Amount, LedgerRecord};
use crate::engine::Receipt;

/// Acknowledgement for an accepted wager operation. Balances travel as
/// decimal strings so the transport binding never rounds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationAck {
    pub success: bool,
    pub new_balance: String,
    pub transaction_id: String,
}

impl OperationAck {
    pub fn from_receipt<A: Amount>(receipt: Receipt<A>) -> Self {
        Self {
            success: true,
            new_balance: receipt.new_balance.to_decimal_string(),
            transaction_id: receipt.transaction_id,
        }
    }
}

/// Full wallet snapshot returned by balance lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletSnapshot {
    pub account_id: String,
    pub username: String,
    pub phone_number: String,
    pub banned: bool,
    pub verified: bool,
    pub balance: String,
    pub withdrawal_count: u64,
}

impl WalletSnapshot {
    pub fn from_account<A: Amount>(account: &Account<A>) -> Self {
        Self {
            account_id: account.id().to_string(),
            username: account.username().to_string(),
            phone_number: account.phone_number().to_string(),
            banned: account.is_banned(),
            verified: account.is_verified(),
            balance: account.balance().to_decimal_string(),
            withdrawal_count: account.withdrawal_count(),
        }
    }
}

/// One accepted operation as listed by the history endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionView {
    pub transaction_id: String,
    pub round_id: String,
    pub kind: String,
    pub amount: String,
    pub resulting_balance: String,
    pub game: String,
    pub status: String,
    pub created_at: String,
}

impl TransactionView {
    pub fn from_record<A: Amount>(record: &LedgerRecord<A>) -> Self {
        Self {
            transaction_id: record.transaction_id.clone(),
            round_id: record.round_id.clone(),
            kind: record.kind.to_string(),
            amount: record.amount.to_decimal_string(),
            resulting_balance: record.resulting_balance.to_decimal_string(),
            game: record.game.clone(),
            status: record.status.to_string(),
            created_at: record.created_at.to_rfc3339(),
        }
    }
}
