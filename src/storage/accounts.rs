use dashmap::DashMap;

use super::error::StorageError;
use super::traits::{AccountEntry, AccountStore};
use crate::domain::{Account, Amount, DomainError};

/// Concurrent in-memory account store using DashMap
pub struct ConcurrentAccountStore<A: Amount> {
    accounts: DashMap<String, Account<A>>,
}

impl<A: Amount> ConcurrentAccountStore<A> {
    /// Create a new empty concurrent account store
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }
}

impl<A: Amount> Default for ConcurrentAccountStore<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry for concurrent access to one account slot
pub struct ConcurrentEntry<'a, A: Amount> {
    account_id: String,
    accounts: &'a DashMap<String, Account<A>>,
}

impl<'a, A: Amount> AccountEntry<'a, A> for ConcurrentEntry<'a, A> {
    fn read(&self) -> Option<Account<A>> {
        self.accounts
            .get(&self.account_id)
            .map(|r| r.value().clone())
    }

    fn try_update<F>(&mut self, update_fn: F) -> Result<A, StorageError>
    where
        F: FnOnce(&mut Account<A>) -> Result<A, DomainError>,
    {
        // get_mut holds the shard guard for the duration of the closure,
        // making the read-modify-write atomic. Unknown accounts are never
        // created here; provisioning is the only way in.
        match self.accounts.get_mut(&self.account_id) {
            Some(mut account) => Ok(update_fn(account.value_mut())?),
            None => Err(StorageError::NotFound),
        }
    }
}

impl<A: Amount> AccountStore<A> for ConcurrentAccountStore<A> {
    type Entry<'a>
        = ConcurrentEntry<'a, A>
    where
        Self: 'a;

    fn entry(&self, account_id: &str) -> Result<Self::Entry<'_>, StorageError> {
        Ok(ConcurrentEntry {
            account_id: account_id.to_owned(),
            accounts: &self.accounts,
        })
    }

    fn get(&self, account_id: &str) -> Result<Option<Account<A>>, StorageError> {
        Ok(self.accounts.get(account_id).map(|r| r.value().clone()))
    }

    fn provision(&self, account: Account<A>) -> Result<(), StorageError> {
        self.accounts.insert(account.id().to_owned(), account);
        Ok(())
    }

    fn contains(&self, account_id: &str) -> bool {
        self.accounts.contains_key(account_id)
    }
}
