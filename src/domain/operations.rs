use super::account::Account;
use super::amount::Amount;
use super::error::DomainError;

/// Reserve a wager: subtract `amount` from the balance and count the
/// withdrawal. Returns the resulting balance.
pub fn apply_debit<A: Amount>(account: &mut Account<A>, amount: A) -> Result<A, DomainError> {
    if !amount.is_positive() {
        return Err(DomainError::InvalidAmount);
    }

    if account.balance() < amount {
        return Err(DomainError::InsufficientFunds);
    }

    let new_balance = account
        .balance()
        .checked_sub(amount)
        .ok_or(DomainError::Overflow)?;

    account.set_balance(new_balance);
    account.record_withdrawal();
    Ok(new_balance)
}

/// Add funds to the balance. Used both for settling a winning round and for
/// returning a reserved wager on rollback. Returns the resulting balance.
pub fn apply_credit<A: Amount>(account: &mut Account<A>, amount: A) -> Result<A, DomainError> {
    if !amount.is_positive() {
        return Err(DomainError::InvalidAmount);
    }

    let new_balance = account
        .balance()
        .checked_add(amount)
        .ok_or(DomainError::Overflow)?;

    account.set_balance(new_balance);
    Ok(new_balance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::amount::FixedPoint;

    fn funded(raw: i64) -> Account<FixedPoint> {
        Account::new("player-1").with_balance(FixedPoint::from_raw(raw))
    }

    #[test]
    fn debit_decreases_balance() {
        let mut account = funded(10_000);

        let new_balance = apply_debit(&mut account, FixedPoint::from_raw(3_000)).unwrap();

        assert_eq!(new_balance, FixedPoint::from_raw(7_000));
        assert_eq!(account.balance(), FixedPoint::from_raw(7_000));
    }

    #[test]
    fn debit_counts_withdrawal() {
        let mut account = funded(10_000);

        apply_debit(&mut account, FixedPoint::from_raw(1_000)).unwrap();
        apply_debit(&mut account, FixedPoint::from_raw(1_000)).unwrap();

        assert_eq!(account.withdrawal_count(), 2);
    }

    #[test]
    fn debit_insufficient_funds_fails() {
        let mut account = funded(1_000);

        let result = apply_debit(&mut account, FixedPoint::from_raw(2_000));
        assert_eq!(result, Err(DomainError::InsufficientFunds));

        // Account unchanged
        assert_eq!(account.balance(), FixedPoint::from_raw(1_000));
        assert_eq!(account.withdrawal_count(), 0);
    }

    #[test]
    fn debit_entire_balance_leaves_zero() {
        let mut account = funded(5_000);

        let new_balance = apply_debit(&mut account, FixedPoint::from_raw(5_000)).unwrap();
        assert_eq!(new_balance, FixedPoint::zero());
    }

    #[test]
    fn debit_zero_fails() {
        let mut account = funded(10_000);

        let result = apply_debit(&mut account, FixedPoint::zero());
        assert_eq!(result, Err(DomainError::InvalidAmount));
    }

    #[test]
    fn debit_negative_fails() {
        let mut account = funded(10_000);

        let result = apply_debit(&mut account, FixedPoint::from_raw(-100));
        assert_eq!(result, Err(DomainError::InvalidAmount));
    }

    #[test]
    fn credit_increases_balance() {
        let mut account = funded(4_000);

        let new_balance = apply_credit(&mut account, FixedPoint::from_raw(2_000)).unwrap();

        assert_eq!(new_balance, FixedPoint::from_raw(6_000));
        assert_eq!(account.balance(), FixedPoint::from_raw(6_000));
    }

    #[test]
    fn credit_does_not_count_withdrawal() {
        let mut account = funded(4_000);

        apply_credit(&mut account, FixedPoint::from_raw(2_000)).unwrap();

        assert_eq!(account.withdrawal_count(), 0);
    }

    #[test]
    fn credit_zero_fails() {
        let mut account = funded(4_000);

        let result = apply_credit(&mut account, FixedPoint::zero());
        assert_eq!(result, Err(DomainError::InvalidAmount));
    }

    #[test]
    fn credit_negative_fails() {
        let mut account = funded(4_000);

        let result = apply_credit(&mut account, FixedPoint::from_raw(-100));
        assert_eq!(result, Err(DomainError::InvalidAmount));
    }

    #[test]
    fn credit_overflow_fails() {
        let mut account = funded(i64::MAX);

        let result = apply_credit(&mut account, FixedPoint::from_raw(1));
        assert_eq!(result, Err(DomainError::Overflow));

        // Account unchanged
        assert_eq!(account.balance(), FixedPoint::from_raw(i64::MAX));
    }

    #[test]
    fn debit_then_credit_restores_balance() {
        let mut account = funded(50_000);
        let wager = FixedPoint::from_raw(10_000);

        apply_debit(&mut account, wager).unwrap();
        assert_eq!(account.balance(), FixedPoint::from_raw(40_000));

        apply_credit(&mut account, wager).unwrap();
        assert_eq!(account.balance(), FixedPoint::from_raw(50_000));
    }

    #[test]
    fn balance_never_goes_negative() {
        let mut account = funded(1_000);

        // A failed debit leaves the balance untouched
        assert!(apply_debit(&mut account, FixedPoint::from_raw(1_001)).is_err());
        assert!(account.balance() >= FixedPoint::zero());

        // Draining exactly to zero is allowed, further debits are not
        apply_debit(&mut account, FixedPoint::from_raw(1_000)).unwrap();
        assert!(apply_debit(&mut account, FixedPoint::from_raw(1)).is_err());
        assert_eq!(account.balance(), FixedPoint::zero());
    }
}
