pub mod error;
pub mod locks;
pub mod wallet;

// Re-export commonly used types
pub use error::EngineError;
pub use locks::AccountLocks;
pub use wallet::{Receipt, WalletEngine};
