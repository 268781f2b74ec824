use super::amount::Amount;

/// Player account with private fields enforcing invariants.
///
/// The balance is only mutated through the operations module, so a
/// non-negative balance stays non-negative for the life of the account.
/// Profile fields (`username`, `phone_number`, `banned`, `verified`) are
/// metadata set at provisioning time and never touched by wager operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account<A: Amount> {
    id: String,
    balance: A,
    username: String,
    phone_number: String,
    banned: bool,
    verified: bool,
    withdrawal_count: u64,
}

impl<A: Amount> Account<A> {
    /// Create a new account with zero balance and empty profile.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            balance: A::zero(),
            username: String::new(),
            phone_number: String::new(),
            banned: false,
            verified: false,
            withdrawal_count: 0,
        }
    }

    /// Set the starting balance. Callers provision non-negative balances;
    /// wager operations keep them that way.
    pub fn with_balance(mut self, balance: A) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn with_banned(mut self, banned: bool) -> Self {
        self.banned = banned;
        self
    }

    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    /// Get the account ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the current balance
    pub fn balance(&self) -> A {
        self.balance
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn is_banned(&self) -> bool {
        self.banned
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Number of accepted debits applied to this account
    pub fn withdrawal_count(&self) -> u64 {
        self.withdrawal_count
    }

    // Internal mutation methods for use by the operations module
    pub(crate) fn set_balance(&mut self, balance: A) {
        self.balance = balance;
    }

    pub(crate) fn record_withdrawal(&mut self) {
        self.withdrawal_count += 1;
    }
}
