use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tokio::time::timeout;

/// Per-account mutual exclusion with bounded wait.
///
/// One async mutex per account ID, created lazily on first use. Holding a
/// guard serializes the validate-mutate-append sequence for that account;
/// operations on other accounts proceed in parallel. Acquisition waits at
/// most the given duration, so a congested account degrades to `Busy`
/// rejections instead of unbounded queueing.
pub struct AccountLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl AccountLocks {
    /// Create an empty lock table
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// Acquire the lock for `account_id`, waiting at most `wait`.
    /// Returns None if the wait elapsed.
    pub async fn acquire(&self, account_id: &str, wait: Duration) -> Option<OwnedMutexGuard<()>> {
        let lock = {
            let entry = self.locks.entry(account_id.to_owned()).or_default();
            Arc::clone(entry.value())
        };
        // The map shard guard is released before awaiting; only the
        // per-account mutex is held across the wait.
        timeout(wait, lock.lock_owned()).await.ok()
    }
}

impl Default for AccountLocks {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_millis(10);

    #[tokio::test]
    async fn uncontended_acquire_succeeds() {
        let locks = AccountLocks::new();
        assert!(locks.acquire("player-1", WAIT).await.is_some());
    }

    #[tokio::test]
    async fn contended_acquire_times_out() {
        let locks = AccountLocks::new();
        let _held = locks.acquire("player-1", WAIT).await.unwrap();

        assert!(locks.acquire("player-1", WAIT).await.is_none());
    }

    #[tokio::test]
    async fn different_accounts_do_not_contend() {
        let locks = AccountLocks::new();
        let _held = locks.acquire("player-1", WAIT).await.unwrap();

        assert!(locks.acquire("player-2", WAIT).await.is_some());
    }

    #[tokio::test]
    async fn released_lock_can_be_reacquired() {
        let locks = AccountLocks::new();

        let guard = locks.acquire("player-1", WAIT).await.unwrap();
        drop(guard);

        assert!(locks.acquire("player-1", WAIT).await.is_some());
    }

    #[tokio::test]
    async fn waiting_acquire_succeeds_once_released() {
        let locks = Arc::new(AccountLocks::new());
        let guard = locks.acquire("player-1", WAIT).await.unwrap();

        let waiter = {
            let locks = Arc::clone(&locks);
            tokio::spawn(
                async move { locks.acquire("player-1", Duration::from_secs(1)).await },
            )
        };

        tokio::time::sleep(Duration::from_millis(5)).await;
        drop(guard);

        assert!(waiter.await.unwrap().is_some());
    }
}
