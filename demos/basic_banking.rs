//! Basic banking walkthrough
//!
//! Run with `RUST_LOG=debug` to see every balance change.

use banking_core::{Account, BankAccount, BankConfig, SharedAccount, TransferService};
use bigdecimal::BigDecimal;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    println!("🏦 Banking Core - Basic Example\n");

    // 1. Open two accounts
    let mut john_savings = BankAccount::savings(
        "John Doe",
        BigDecimal::from(1000),
        BigDecimal::from_str("0.05")?,
    )?;
    let mut jane_current =
        BankAccount::current("Jane Smith", BigDecimal::from(500), BigDecimal::from(300))?;

    // 2. Everyday operations
    john_savings.deposit(&BigDecimal::from(500))?;
    john_savings.withdraw(&BigDecimal::from(200))?;
    let interest = john_savings.apply_interest()?;
    println!("  ✓ Interest credited: ${}", interest);

    // 3. Move money across
    let transfers = TransferService::new();
    let receipt = transfers.transfer(&mut john_savings, &mut jane_current, &BigDecimal::from(700))?;
    println!(
        "  ✓ Transferred ${} from {} to {}",
        receipt.amount,
        john_savings.owner(),
        jane_current.owner()
    );

    // A transfer that would break the savings floor is refused as a whole
    if let Err(err) = transfers.transfer(&mut john_savings, &mut jane_current, &BigDecimal::from(5000)) {
        println!("  ✗ {}", err);
    }
    println!();

    println!("{}", john_savings.describe());
    println!("{}", jane_current.describe());
    println!();

    // 4. Accounts from configuration, shared across threads
    let config = BankConfig::from_json_str(
        r#"{ "accounts": [
            { "type": "standard", "owner": "Alice", "balance": "250" },
            { "type": "current", "owner": "Bob", "balance": "100" }
        ] }"#,
    )?;
    let mut accounts = config.build_accounts()?.into_iter().map(SharedAccount::from);
    let (alice, bob) = match (accounts.next(), accounts.next()) {
        (Some(alice), Some(bob)) => (alice, bob),
        _ => return Err("expected two configured accounts".into()),
    };

    let worker = {
        let (alice, bob) = (alice.clone(), bob.clone());
        std::thread::spawn(move || transfers.transfer_shared(&alice, &bob, &BigDecimal::from(50)))
    };
    transfers.transfer_shared(&bob, &alice, &BigDecimal::from(400))?;
    worker.join().map_err(|_| "transfer thread panicked")??;

    println!("{}", alice.describe()?);
    println!("{}", bob.describe()?);

    Ok(())
}
