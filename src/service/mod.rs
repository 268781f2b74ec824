pub mod error;
pub mod requests;
pub mod responses;
pub mod wallet;

// Re-export commonly used types
pub use error::ServiceError;
pub use requests::{GetWalletRequest, RawOperationRequest};
pub use responses::{OperationAck, TransactionView, WalletSnapshot};
pub use wallet::WalletService;
