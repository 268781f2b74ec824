use std::sync::Arc;

use bankroll::prelude::*;

pub type BenchEngine = WalletEngine<
    FixedPoint,
    Arc<ConcurrentAccountStore<FixedPoint>>,
    Arc<ConcurrentRoundLedger<FixedPoint>>,
>;

/// Engine over fresh stores with `num_accounts` wallets funded at
/// `balance_raw` each.
pub fn setup_engine(num_accounts: usize, balance_raw: i64) -> BenchEngine {
    let accounts = Arc::new(ConcurrentAccountStore::new());
    for i in 0..num_accounts {
        accounts
            .provision(
                Account::new(format!("player-{i}")).with_balance(FixedPoint::from_raw(balance_raw)),
            )
            .unwrap();
    }
    WalletEngine::new(accounts, Arc::new(ConcurrentRoundLedger::new()))
}

/// Shared engine for spawned concurrent load.
pub fn setup_shared_engine(num_accounts: usize, balance_raw: i64) -> Arc<BenchEngine> {
    Arc::new(setup_engine(num_accounts, balance_raw))
}

pub fn wager(account: usize, round: &str, tx: &str, amount_raw: i64) -> WagerRequest<FixedPoint> {
    WagerRequest {
        account_id: format!("player-{account}"),
        amount: FixedPoint::from_raw(amount_raw),
        round_id: round.to_string(),
        transaction_id: tx.to_string(),
        game: "slots".to_string(),
    }
}

/// One debit per round, spread round-robin over `num_accounts`.
pub fn debit_batch(count: usize, num_accounts: usize) -> Vec<WagerRequest<FixedPoint>> {
    (0..count)
        .map(|i| wager(i % num_accounts, &format!("round-{i}"), &format!("tx-{i}"), 10))
        .collect()
}

/// Reserve-then-settle pairs: a debit followed by the matching credit.
pub fn settle_batch(count: usize, num_accounts: usize) -> Vec<(WagerRequest<FixedPoint>, WagerRequest<FixedPoint>)> {
    (0..count)
        .map(|i| {
            let account = i % num_accounts;
            let round = format!("round-{i}");
            (
                wager(account, &round, &format!("d-{i}"), 10),
                wager(account, &round, &format!("c-{i}"), 20),
            )
        })
        .collect()
}
