//! Example: Wager Round Lifecycle
//!
//! Walks one account through the reserve-then-settle pattern: a debit holds
//! the wager when the bet is placed, then the round closes with either a
//! credit (payout) or a rollback (bet voided). Duplicate submissions are
//! rejected without touching the balance.
//!
//! Usage:
//!   cargo run --example wager_flow

use std::sync::Arc;

use bankroll::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Shared stores, one operator-provisioned wallet
    let accounts = Arc::new(ConcurrentAccountStore::new());
    accounts.provision(
        Account::new("player-1")
            .with_balance(FixedPoint::from_decimal_str("5000")?)
            .with_username("alice")
            .with_phone_number("+15550001111")
            .with_verified(true),
    )?;

    let service = WalletService::new(
        accounts,
        Arc::new(ConcurrentRoundLedger::new()),
        StaticSecretVerifier::new("operator-token", "s3cret"),
    );
    let creds = Credentials::new("operator-token", "s3cret");

    let snapshot = service
        .get_wallet(
            &creds,
            GetWalletRequest {
                account_id: Some("player-1".to_string()),
            },
        )
        .await?;
    eprintln!("starting balance: {}", snapshot.balance);

    // Round 1: bet placed, then won
    let ack = service
        .debit(&creds, operation("round-1", "tx-1", "1000"))
        .await?;
    eprintln!("round-1 debit accepted, balance {}", ack.new_balance);

    let ack = service
        .credit(&creds, operation("round-1", "tx-2", "2500"))
        .await?;
    eprintln!("round-1 credit accepted, balance {}", ack.new_balance);

    // Round 2: bet placed, then voided
    let ack = service
        .debit(&creds, operation("round-2", "tx-3", "1000"))
        .await?;
    eprintln!("round-2 debit accepted, balance {}", ack.new_balance);

    let ack = service
        .rollback(&creds, operation("round-2", "tx-4", "1000"))
        .await?;
    eprintln!("round-2 rollback accepted, balance {}", ack.new_balance);

    // A retried rollback loses to the duplicate guard
    match service
        .rollback(&creds, operation("round-2", "tx-5", "1000"))
        .await
    {
        Err(err) => eprintln!("replayed rollback rejected: {err}"),
        Ok(_) => unreachable!("duplicate rollback must not be accepted"),
    }

    // Full history for the account
    let history = service
        .list_transactions(
            &creds,
            GetWalletRequest {
                account_id: Some("player-1".to_string()),
            },
            None,
        )
        .await?;
    eprintln!("accepted operations: {}", history.len());
    for entry in history {
        eprintln!(
            "  {} {} {} -> balance {}",
            entry.transaction_id, entry.kind, entry.amount, entry.resulting_balance
        );
    }

    Ok(())
}

fn operation(round: &str, tx: &str, amount: &str) -> RawOperationRequest {
    RawOperationRequest {
        transaction_id: Some(tx.to_string()),
        round_id: Some(round.to_string()),
        account_id: Some("player-1".to_string()),
        username: Some("alice".to_string()),
        amount: Some(amount.to_string()),
        game: Some("roulette".to_string()),
    }
}
