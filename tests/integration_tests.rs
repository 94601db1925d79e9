//! Integration tests for banking-core

use banking_core::{
    Account, AccountKind, BankAccount, BankConfig, LedgerError, SharedAccount, TransferService,
};
use bigdecimal::BigDecimal;
use proptest::prelude::*;
use std::str::FromStr;
use std::thread;

fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap()
}

#[test]
fn test_standard_withdraw_scenarios() {
    let mut account = BankAccount::standard("John", BigDecimal::from(100)).unwrap();
    assert!(account.withdraw(&BigDecimal::from(50)).is_ok());
    assert_eq!(account.balance(), &BigDecimal::from(50));

    let mut account = BankAccount::standard("John", BigDecimal::from(100)).unwrap();
    assert!(matches!(
        account.withdraw(&BigDecimal::from(150)),
        Err(LedgerError::InsufficientFunds { .. })
    ));
    assert_eq!(account.balance(), &BigDecimal::from(100));
}

#[test]
fn test_current_overdraft_scenarios() {
    let mut account =
        BankAccount::current("Jane", BigDecimal::from(500), BigDecimal::from(300)).unwrap();
    assert!(account.withdraw(&BigDecimal::from(700)).is_ok());
    assert_eq!(account.balance(), &BigDecimal::from(-200));

    let mut account =
        BankAccount::current("Jane", BigDecimal::from(500), BigDecimal::from(300)).unwrap();
    assert!(matches!(
        account.withdraw(&BigDecimal::from(900)),
        Err(LedgerError::OverdraftExceeded { .. })
    ));
    assert_eq!(account.balance(), &BigDecimal::from(500));
}

#[test]
fn test_complete_banking_workflow() {
    let mut john = BankAccount::savings("John Doe", BigDecimal::from(1000), dec("0.05")).unwrap();
    let mut jane =
        BankAccount::current("Jane Smith", BigDecimal::from(500), BigDecimal::from(300)).unwrap();

    john.apply_interest().unwrap();
    assert_eq!(john.balance(), &BigDecimal::from(1050));

    TransferService::new()
        .transfer(&mut john, &mut jane, &BigDecimal::from(700))
        .unwrap();

    assert_eq!(john.balance(), &BigDecimal::from(350));
    assert_eq!(jane.balance(), &BigDecimal::from(1200));
    assert_eq!(
        john.describe(),
        "Savings Account Summary:\nJohn Doe's balance is: $350.00"
    );
    assert_eq!(jane.describe(), "Jane Smith's balance is: $1200.00");
}

#[test]
fn test_deposit_withdraw_interest_then_transfer() {
    let mut john = BankAccount::savings("John Doe", BigDecimal::from(1000), dec("0.05")).unwrap();
    let mut jane =
        BankAccount::current("Jane Smith", BigDecimal::from(500), BigDecimal::from(300)).unwrap();

    john.deposit(&BigDecimal::from(500)).unwrap();
    john.withdraw(&BigDecimal::from(200)).unwrap();
    assert_eq!(john.apply_interest().unwrap(), BigDecimal::from(65));
    TransferService
        .transfer(&mut john, &mut jane, &BigDecimal::from(700))
        .unwrap();

    assert_eq!(john.balance(), &BigDecimal::from(665));
    assert_eq!(jane.balance(), &BigDecimal::from(1200));
}

#[test]
fn test_overdrawn_current_can_send_within_limit_only() {
    let mut current =
        BankAccount::current("Jane", BigDecimal::from(100), BigDecimal::from(300)).unwrap();
    let mut standard = BankAccount::standard("John", BigDecimal::from(0)).unwrap();
    let service = TransferService::new();

    assert!(service
        .transfer(&mut current, &mut standard, &BigDecimal::from(400))
        .is_ok());
    assert_eq!(current.balance(), &BigDecimal::from(-300));

    let err = service
        .transfer(&mut current, &mut standard, &dec("0.01"))
        .unwrap_err();
    assert!(matches!(
        err.transfer_cause(),
        Some(LedgerError::OverdraftExceeded { .. })
    ));
    assert_eq!(standard.balance(), &BigDecimal::from(400));
}

#[test]
fn test_config_driven_accounts() {
    let config = BankConfig::from_json_str(
        r#"{ "accounts": [
            { "type": "savings", "owner": "John Doe", "balance": "1000", "interest_rate": "0.05" },
            { "type": "current", "owner": "Jane Smith", "balance": "500", "overdraft_limit": "300" }
        ] }"#,
    )
    .unwrap();

    let mut accounts = config.build_accounts().unwrap();
    let mut jane = accounts.pop().unwrap();
    let mut john = accounts.pop().unwrap();

    john.apply_interest().unwrap();
    TransferService
        .transfer(&mut john, &mut jane, &BigDecimal::from(700))
        .unwrap();
    assert_eq!(john.balance(), &BigDecimal::from(350));
    assert_eq!(
        jane.kind(),
        &AccountKind::Current {
            overdraft_limit: BigDecimal::from(300)
        }
    );
}

#[test]
fn test_opposite_shared_transfers_conserve_funds() {
    let a = SharedAccount::new(BankAccount::standard("A", BigDecimal::from(1000)).unwrap());
    let b = SharedAccount::new(
        BankAccount::current("B", BigDecimal::from(1000), BigDecimal::from(200)).unwrap(),
    );

    let forward = {
        let (a, b) = (a.clone(), b.clone());
        thread::spawn(move || {
            for _ in 0..500 {
                let _ = TransferService.transfer_shared(&a, &b, &BigDecimal::from(7));
            }
        })
    };
    let backward = {
        let (a, b) = (a.clone(), b.clone());
        thread::spawn(move || {
            for _ in 0..500 {
                let _ = TransferService.transfer_shared(&b, &a, &BigDecimal::from(5));
            }
        })
    };
    forward.join().unwrap();
    backward.join().unwrap();

    let a_balance = a.balance().unwrap();
    let b_balance = b.balance().unwrap();
    assert_eq!(&a_balance + &b_balance, BigDecimal::from(2000));
    assert!(a_balance >= BigDecimal::from(0));
    assert!(b_balance >= BigDecimal::from(-200));
}

fn amount_strategy() -> impl Strategy<Value = BigDecimal> {
    (-10_000i64..10_000i64).prop_map(|cents| BigDecimal::new(cents.into(), 2))
}

#[derive(Debug, Clone)]
enum Op {
    Deposit(BigDecimal),
    Withdraw(BigDecimal),
    Interest,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        amount_strategy().prop_map(Op::Deposit),
        amount_strategy().prop_map(Op::Withdraw),
        Just(Op::Interest),
    ]
}

fn run(account: &mut BankAccount, op: &Op) {
    let _ = match op {
        Op::Deposit(amount) => account.deposit(amount),
        Op::Withdraw(amount) => account.withdraw(amount),
        Op::Interest => account.apply_interest(),
    };
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Standard and savings balances never go negative
    #[test]
    fn non_overdraft_balance_never_negative(
        savings in any::<bool>(),
        ops in prop::collection::vec(op_strategy(), 1..40)
    ) {
        let mut account = if savings {
            BankAccount::savings("John", BigDecimal::from(10), dec("0.05")).unwrap()
        } else {
            BankAccount::standard("John", BigDecimal::from(10)).unwrap()
        };
        for op in &ops {
            run(&mut account, op);
            prop_assert!(account.balance() >= &BigDecimal::from(0));
        }
    }

    /// Current balances never go below the overdraft floor
    #[test]
    fn current_balance_respects_overdraft(
        limit in 0i64..500,
        ops in prop::collection::vec(op_strategy(), 1..40)
    ) {
        let mut account =
            BankAccount::current("Jane", BigDecimal::from(0), BigDecimal::from(limit)).unwrap();
        let floor = BigDecimal::from(-limit);
        for op in &ops {
            run(&mut account, op);
            prop_assert!(account.balance() >= &floor);
        }
    }

    /// Non-positive amounts never change any balance
    #[test]
    fn rejected_amounts_leave_balance_unchanged(cents in -10_000i64..=0) {
        let amount = BigDecimal::new(cents.into(), 2);
        let mut accounts = vec![
            BankAccount::standard("A", BigDecimal::from(50)).unwrap(),
            BankAccount::savings("B", BigDecimal::from(50), dec("0.1")).unwrap(),
            BankAccount::current("C", BigDecimal::from(50), BigDecimal::from(100)).unwrap(),
        ];
        for account in &mut accounts {
            let before = account.balance().clone();
            prop_assert!(matches!(account.deposit(&amount), Err(LedgerError::InvalidAmount(_))));
            prop_assert!(matches!(account.withdraw(&amount), Err(LedgerError::InvalidAmount(_))));
            prop_assert_eq!(account.balance(), &before);
        }
    }

    /// A transfer either moves exactly `amount` or changes nothing
    #[test]
    fn transfers_are_atomic_and_conserve_funds(
        source_balance in 0i64..1_000,
        limit in 0i64..300,
        amount in amount_strategy()
    ) {
        let mut source = BankAccount::current(
            "Jane",
            BigDecimal::from(source_balance),
            BigDecimal::from(limit),
        )
        .unwrap();
        let mut destination = BankAccount::standard("John", BigDecimal::from(25)).unwrap();
        let before_source = source.balance().clone();
        let before_destination = destination.balance().clone();

        match TransferService.transfer(&mut source, &mut destination, &amount) {
            Ok(receipt) => {
                let expected_source = &before_source - &amount;
                prop_assert_eq!(&receipt.amount, &amount);
                prop_assert_eq!(source.balance(), &expected_source);
                prop_assert_eq!(
                    source.balance() + destination.balance(),
                    &before_source + &before_destination
                );
            }
            Err(err) => {
                prop_assert!(matches!(err, LedgerError::TransferFailed(_)));
                prop_assert_eq!(source.balance(), &before_source);
                prop_assert_eq!(destination.balance(), &before_destination);
            }
        }
    }

    /// Interest lands exactly on b + b*r for cent-aligned inputs
    #[test]
    fn interest_accrues_exactly(balance in 0i64..100_000, rate_percent in 0i64..100) {
        let mut account = BankAccount::savings(
            "John",
            BigDecimal::from(balance),
            BigDecimal::new(rate_percent.into(), 2),
        )
        .unwrap();
        account.apply_interest().unwrap();
        let expected = BigDecimal::from(balance)
            + BigDecimal::from(balance) * BigDecimal::new(rate_percent.into(), 2);
        prop_assert_eq!(account.balance(), &expected);
    }
}
