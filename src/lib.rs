//! Wallet core for betting/gaming operator integrations.
//!
//! Provides idempotent, race-safe debit/credit/rollback transitions keyed by
//! round identifiers: a round opens with a debit that reserves the wager and
//! closes with a credit (settlement) or a rollback (void). Duplicate and
//! out-of-order submissions are rejected with typed errors and never touch
//! account state.
//!
//! The [`service::WalletService`] is the transport-agnostic entry point; the
//! [`engine::WalletEngine`] and [`query::WalletQuery`] sit underneath it over
//! shared [`storage`] handles.
//!
//! ```
//! use std::sync::Arc;
//! use bankroll::prelude::*;
//!
//! let accounts = Arc::new(ConcurrentAccountStore::new());
//! accounts
//!     .provision(
//!         Account::new("player-1").with_balance(FixedPoint::from_decimal_str("5000").unwrap()),
//!     )
//!     .unwrap();
//! let engine = WalletEngine::new(accounts, Arc::new(ConcurrentRoundLedger::new()));
//!
//! let receipt = tokio_test::block_on(engine.debit(WagerRequest {
//!     account_id: "player-1".to_string(),
//!     amount: FixedPoint::from_decimal_str("1000").unwrap(),
//!     round_id: "round-1".to_string(),
//!     transaction_id: "tx-1".to_string(),
//!     game: "roulette".to_string(),
//! }))
//! .unwrap();
//! assert_eq!(receipt.new_balance.to_decimal_string(), "4000.0000");
//! ```

pub mod auth;
pub mod domain;
pub mod engine;
pub mod prelude;
pub mod query;
pub mod service;
pub mod storage;
