//! Core types and data structures for the banking system

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account variants, each carrying the parameter that shapes its balance floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccountKind {
    /// Plain account - balance may never drop below zero
    Standard,
    /// Savings account - same floor as standard, accrues interest on demand
    Savings {
        /// Non-negative fraction applied to the balance (0.05 for 5%)
        interest_rate: BigDecimal,
    },
    /// Current/checking account - may go below zero down to the overdraft limit
    Current {
        /// Non-negative ceiling on how far the balance may go below zero
        overdraft_limit: BigDecimal,
    },
}

impl AccountKind {
    /// Minimum balance allowed after any withdrawal
    ///
    /// Zero for standard and savings accounts, `-overdraft_limit` for current accounts.
    pub fn floor(&self) -> BigDecimal {
        match self {
            AccountKind::Standard | AccountKind::Savings { .. } => BigDecimal::from(0),
            AccountKind::Current { overdraft_limit } => -overdraft_limit.clone(),
        }
    }

    /// Whether withdrawals may take the balance below zero
    pub fn allows_overdraft(&self) -> bool {
        matches!(self, AccountKind::Current { .. })
    }

    /// Heading printed above the balance line, if the variant has one
    pub fn summary_label(&self) -> Option<&'static str> {
        match self {
            AccountKind::Savings { .. } => Some("Savings Account Summary:"),
            AccountKind::Standard | AccountKind::Current { .. } => None,
        }
    }
}

/// A single caller-owned account
///
/// Fields are only reachable through the [`crate::Account`] operations and the
/// accessors on this type, so the floor invariant cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankAccount {
    pub(crate) id: Uuid,
    pub(crate) owner: String,
    pub(crate) kind: AccountKind,
    pub(crate) balance: BigDecimal,
    pub(crate) created_at: NaiveDateTime,
    pub(crate) updated_at: NaiveDateTime,
}

/// Record of a completed transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferReceipt {
    /// Unique identifier for the transfer
    pub id: Uuid,
    /// Account the funds left
    pub source_id: Uuid,
    /// Account the funds reached
    pub destination_id: Uuid,
    /// Amount moved
    pub amount: BigDecimal,
    /// When the transfer completed
    pub executed_at: NaiveDateTime,
}

impl TransferReceipt {
    /// Create a receipt stamped with the current time
    pub fn new(source_id: Uuid, destination_id: Uuid, amount: BigDecimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_id,
            destination_id,
            amount,
            executed_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Errors that can occur in the banking system
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("Invalid amount: {0} (amount must be positive)")]
    InvalidAmount(BigDecimal),
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: BigDecimal,
        available: BigDecimal,
    },
    #[error("Overdraft limit exceeded: requested {requested}, available {available} including overdraft")]
    OverdraftExceeded {
        requested: BigDecimal,
        available: BigDecimal,
    },
    #[error("Transfer failed: {0}")]
    TransferFailed(#[source] Box<LedgerError>),
    #[error("Cannot transfer from account {0} to itself")]
    SameAccount(Uuid),
    #[error("Account {0} does not accrue interest")]
    NotSavingsAccount(Uuid),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Account lock poisoned: {0}")]
    LockPoisoned(Uuid),
}

impl LedgerError {
    /// The underlying failure of a `TransferFailed`, if this is one
    pub fn transfer_cause(&self) -> Option<&LedgerError> {
        match self {
            LedgerError::TransferFailed(cause) => Some(cause),
            _ => None,
        }
    }
}

/// Result type for banking operations
pub type LedgerResult<T> = Result<T, LedgerError>;
