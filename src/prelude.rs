//! Prelude module for convenient imports
//!
//! Import everything you need with: `use bankroll::prelude::*;`

// Domain types
pub use crate::domain::{
    Account, Amount, DomainError, FixedPoint, LedgerRecord, OperationKind, RecordStatus,
    WagerRequest,
};

// Storage types
pub use crate::storage::{
    AccountEntry, AccountStore, ConcurrentAccountStore, ConcurrentRoundLedger, RoundLedger,
    StorageError,
};

// Engine types
pub use crate::engine::{AccountLocks, EngineError, Receipt, WalletEngine};

// Query types
pub use crate::query::{QueryError, WalletQuery};

// Service types
pub use crate::service::{
    GetWalletRequest, OperationAck, RawOperationRequest, ServiceError, TransactionView,
    WalletService, WalletSnapshot,
};

// Auth types
pub use crate::auth::{CredentialVerifier, Credentials, StaticSecretVerifier};
