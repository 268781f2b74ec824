//! Example: Concurrent Round Contention
//!
//! Fires simultaneous debits at the engine to show the two race guards:
//! the per-account lock serializes operations on one wallet, and the
//! ledger's (round, kind) claim lets exactly one request win a contested
//! round even across different wallets.
//!
//! Usage:
//!   cargo run --example concurrent_rounds

use std::sync::Arc;

use futures::future::join_all;

use bankroll::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let accounts = Arc::new(ConcurrentAccountStore::new());
    for i in 0..8 {
        accounts.provision(
            Account::new(format!("player-{i}")).with_balance(FixedPoint::from_decimal_str("100")?),
        )?;
    }
    let engine = Arc::new(WalletEngine::new(
        Arc::clone(&accounts),
        Arc::new(ConcurrentRoundLedger::<FixedPoint>::new()),
    ));

    // Ten debits of 50 against player-0's balance of 100: exactly two fit
    eprintln!("=== contended balance ===");
    let tasks: Vec<_> = (0..10)
        .map(|i| {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move {
                engine
                    .debit(wager("player-0", &format!("solo-{i}"), &format!("tx-a{i}"), "50"))
                    .await
            })
        })
        .collect();

    let results: Vec<_> = join_all(tasks).await.into_iter().map(|r| r.unwrap()).collect();
    let accepted = results.iter().filter(|r| r.is_ok()).count();
    eprintln!(
        "{} of {} debits accepted, final balance {}",
        accepted,
        results.len(),
        accounts.get("player-0")?.unwrap().balance()
    );

    // Eight wallets race to claim the same round id: the ledger arbitrates
    eprintln!("=== contended round ===");
    let tasks: Vec<_> = (1..8)
        .map(|i| {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move {
                let account = format!("player-{i}");
                let result = engine
                    .debit(wager(&account, "shared-round", &format!("tx-b{i}"), "10"))
                    .await;
                (account, result)
            })
        })
        .collect();

    for (account, result) in join_all(tasks).await.into_iter().map(|r| r.unwrap()) {
        match result {
            Ok(receipt) => eprintln!("{account} claimed the round, balance {}", receipt.new_balance),
            Err(err) => eprintln!("{account} rejected: {err}"),
        }
    }

    Ok(())
}

fn wager(account: &str, round: &str, tx: &str, amount: &str) -> WagerRequest<FixedPoint> {
    WagerRequest {
        account_id: account.to_string(),
        amount: FixedPoint::from_decimal_str(amount).expect("valid amount literal"),
        round_id: round.to_string(),
        transaction_id: tx.to_string(),
        game: "slots".to_string(),
    }
}
