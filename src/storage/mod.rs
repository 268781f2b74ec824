pub mod accounts;
pub mod error;
pub mod ledger;
pub mod traits;

// Re-export commonly used types
pub use accounts::ConcurrentAccountStore;
pub use error::StorageError;
pub use ledger::ConcurrentRoundLedger;
pub use traits::{AccountEntry, AccountStore, RoundLedger};
