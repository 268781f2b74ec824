use serde::Deserialize;

use crate::domain::{Amount, WagerRequest};
use crate::engine::EngineError;

/// Raw wager operation request as received from the transport binding.
///
/// Every field is optional at this stage; `parse` turns the raw shape into a
/// validated [`WagerRequest`] and reports missing or malformed fields as
/// `InvalidRequest` before the engine is ever touched. The `username` is
/// advisory on writes: the provisioned account record stays authoritative.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOperationRequest {
    pub transaction_id: Option<String>,
    pub round_id: Option<String>,
    pub account_id: Option<String>,
    pub username: Option<String>,
    pub amount: Option<String>,
    pub game: Option<String>,
}

impl RawOperationRequest {
    /// Parse into a strongly-typed wager request.
    pub fn parse<A: Amount>(self) -> Result<WagerRequest<A>, EngineError> {
        let transaction_id = require(self.transaction_id, "transaction_id")?;
        let round_id = require(self.round_id, "round_id")?;
        let account_id = require(self.account_id, "account_id")?;
        let game = require(self.game, "game")?;

        let amount_str = require(self.amount, "amount")?;
        let amount = A::from_decimal_str(&amount_str)
            .map_err(|_| EngineError::InvalidRequest(format!("invalid amount: {amount_str}")))?;

        let request = WagerRequest {
            account_id,
            amount,
            round_id,
            transaction_id,
            game,
        };
        // Catches non-positive amounts and empty identifiers in one place
        request
            .validate()
            .map_err(|e| EngineError::InvalidRequest(e.to_string()))?;
        Ok(request)
    }
}

/// Raw balance lookup request.
#[derive(Debug, Clone, Deserialize)]
pub struct GetWalletRequest {
    pub account_id: Option<String>,
}

impl GetWalletRequest {
    pub fn parse(self) -> Result<String, EngineError> {
        require(self.account_id, "account_id")
    }
}

fn require(field: Option<String>, name: &'static str) -> Result<String, EngineError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(EngineError::InvalidRequest(format!(
            "missing required field: {name}"
        ))),
    }
}
