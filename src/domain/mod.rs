pub mod account;
pub mod amount;
pub mod error;
pub mod operations;
pub mod record;

// Re-export commonly used types
pub use account::Account;
pub use amount::{Amount, FixedPoint};
pub use error::DomainError;
pub use operations::{apply_credit, apply_debit};
pub use record::{LedgerRecord, OperationKind, RecordStatus, WagerRequest};
