use thiserror::Error;

/// Domain-level errors representing business rule violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Insufficient funds to reserve the wager")]
    InsufficientFunds,

    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Arithmetic overflow")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            DomainError::InsufficientFunds.to_string(),
            "Insufficient funds to reserve the wager"
        );
        assert_eq!(DomainError::InvalidAmount.to_string(), "Invalid amount");
        assert_eq!(
            DomainError::MissingField("round_id").to_string(),
            "Missing required field: round_id"
        );
        assert_eq!(DomainError::Overflow.to_string(), "Arithmetic overflow");
    }

    #[test]
    fn error_is_cloneable() {
        let err = DomainError::InsufficientFunds;
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }

    #[test]
    fn error_comparison_works() {
        assert_eq!(
            DomainError::InsufficientFunds,
            DomainError::InsufficientFunds
        );
        assert_ne!(DomainError::InsufficientFunds, DomainError::InvalidAmount);
    }
}
