use std::time::Duration;

use tracing::debug;

use super::error::ServiceError;
use super::requests::{GetWalletRequest, RawOperationRequest};
use super::responses::{OperationAck, TransactionView, WalletSnapshot};
use crate::auth::{CredentialVerifier, Credentials};
use crate::domain::{Amount, OperationKind};
use crate::engine::WalletEngine;
use crate::query::WalletQuery;
use crate::storage::{AccountStore, RoundLedger};

/// Request/response surface of the wallet.
///
/// Wraps the engine and the query view behind one credential gate; the
/// transport binding (HTTP or otherwise) deserializes into the raw request
/// DTOs and hands them here. Stores are taken as shared handles so the
/// engine and query sides see the same state.
pub struct WalletService<A, S, L, V>
where
    A: Amount,
    S: AccountStore<A>,
    L: RoundLedger<A>,
    V: CredentialVerifier,
{
    engine: WalletEngine<A, S, L>,
    query: WalletQuery<A, S, L>,
    verifier: V,
}

impl<A, S, L, V> WalletService<A, S, L, V>
where
    A: Amount,
    S: AccountStore<A> + Clone,
    L: RoundLedger<A> + Clone,
    V: CredentialVerifier,
{
    /// Create a service over shared store handles and a credential verifier.
    pub fn new(accounts: S, ledger: L, verifier: V) -> Self {
        Self {
            engine: WalletEngine::new(accounts.clone(), ledger.clone()),
            query: WalletQuery::new(accounts, ledger),
            verifier,
        }
    }

    /// Set the engine's bounded lock wait.
    pub fn with_lock_wait(mut self, wait: Duration) -> Self {
        self.engine = self.engine.with_lock_wait(wait);
        self
    }

    /// Balance lookup. Pure read, no side effects.
    pub async fn get_wallet(
        &self,
        credentials: &Credentials,
        request: GetWalletRequest,
    ) -> Result<WalletSnapshot, ServiceError> {
        self.authorize(credentials).await?;
        let account_id = request.parse()?;

        debug!(%account_id, "Wallet lookup");
        let account = self.query.wallet(&account_id)?;
        Ok(WalletSnapshot::from_account(&account))
    }

    /// Reserve a wager for a round.
    pub async fn debit(
        &self,
        credentials: &Credentials,
        request: RawOperationRequest,
    ) -> Result<OperationAck, ServiceError> {
        self.operate(OperationKind::Debit, credentials, request)
            .await
    }

    /// Settle a round, paying out on the reserved wager.
    pub async fn credit(
        &self,
        credentials: &Credentials,
        request: RawOperationRequest,
    ) -> Result<OperationAck, ServiceError> {
        self.operate(OperationKind::Credit, credentials, request)
            .await
    }

    /// Void a round, returning the reserved wager.
    pub async fn rollback(
        &self,
        credentials: &Credentials,
        request: RawOperationRequest,
    ) -> Result<OperationAck, ServiceError> {
        self.operate(OperationKind::Rollback, credentials, request)
            .await
    }

    /// Operation history for an account, optionally narrowed to one kind.
    pub async fn list_transactions(
        &self,
        credentials: &Credentials,
        request: GetWalletRequest,
        kind: Option<OperationKind>,
    ) -> Result<Vec<TransactionView>, ServiceError> {
        self.authorize(credentials).await?;
        let account_id = request.parse()?;

        Ok(self
            .query
            .transactions(&account_id, kind)
            .iter()
            .map(TransactionView::from_record)
            .collect())
    }

    async fn operate(
        &self,
        kind: OperationKind,
        credentials: &Credentials,
        request: RawOperationRequest,
    ) -> Result<OperationAck, ServiceError> {
        self.authorize(credentials).await?;
        let request = request.parse::<A>()?;

        let receipt = self.engine.execute(kind, request).await?;
        Ok(OperationAck::from_receipt(receipt))
    }

    async fn authorize(&self, credentials: &Credentials) -> Result<(), ServiceError> {
        if self.verifier.verify(credentials).await {
            Ok(())
        } else {
            Err(ServiceError::Unauthorized)
        }
    }
}
