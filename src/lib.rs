//! # Banking Core
//!
//! Account variants with distinct balance-floor policies and a transfer
//! service that never leaves funds half-moved.
//!
//! ## Features
//!
//! - **Standard accounts**: balance may never drop below zero
//! - **Savings accounts**: same floor, plus interest accrual as a derived deposit
//! - **Current accounts**: may overdraw down to a configured overdraft limit
//! - **Transfers**: withdraw-then-deposit with no partial effect on failure
//! - **Shared accounts**: per-account locking with deadlock-free, lock-ordered transfers
//! - **Configuration**: build accounts from JSON descriptions
//!
//! ## Quick Start
//!
//! ```rust
//! use banking_core::{Account, BankAccount, TransferService};
//! use bigdecimal::BigDecimal;
//! use std::str::FromStr;
//!
//! let mut savings = BankAccount::savings(
//!     "John Doe",
//!     BigDecimal::from(1000),
//!     BigDecimal::from_str("0.05").unwrap(),
//! )
//! .unwrap();
//! let mut current =
//!     BankAccount::current("Jane Smith", BigDecimal::from(500), BigDecimal::from(300)).unwrap();
//!
//! savings.apply_interest().unwrap();
//! TransferService::new()
//!     .transfer(&mut savings, &mut current, &BigDecimal::from(700))
//!     .unwrap();
//!
//! assert_eq!(savings.balance(), &BigDecimal::from(350));
//! assert_eq!(current.describe(), "Jane Smith's balance is: $1200.00");
//! ```

pub mod config;
pub mod ledger;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use ledger::*;
pub use traits::*;
pub use types::*;
