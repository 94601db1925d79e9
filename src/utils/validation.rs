//! Validation utilities

use crate::types::*;
use bigdecimal::BigDecimal;

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: &BigDecimal) -> LedgerResult<()> {
    if *amount <= BigDecimal::from(0) {
        Err(LedgerError::InvalidAmount(amount.clone()))
    } else {
        Ok(())
    }
}

/// Validate that an owner label is usable
pub fn validate_owner(owner: &str) -> LedgerResult<()> {
    if owner.trim().is_empty() {
        return Err(LedgerError::Validation(
            "Account owner cannot be empty".to_string(),
        ));
    }

    if owner.chars().count() > 100 {
        return Err(LedgerError::Validation(
            "Account owner cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a variant parameter is zero or greater
pub fn validate_non_negative(field: &str, value: &BigDecimal) -> LedgerResult<()> {
    if *value < BigDecimal::from(0) {
        Err(LedgerError::Validation(format!(
            "{} cannot be negative: {}",
            field, value
        )))
    } else {
        Ok(())
    }
}

/// Validate the parameter carried by an account kind
pub fn validate_account_kind(kind: &AccountKind) -> LedgerResult<()> {
    match kind {
        AccountKind::Standard => Ok(()),
        AccountKind::Savings { interest_rate } => {
            validate_non_negative("Interest rate", interest_rate)
        }
        AccountKind::Current { overdraft_limit } => {
            validate_non_negative("Overdraft limit", overdraft_limit)
        }
    }
}

/// Validate that a balance respects the floor of its account kind
pub fn validate_within_floor(kind: &AccountKind, balance: &BigDecimal) -> LedgerResult<()> {
    let floor = kind.floor();
    if *balance < floor {
        Err(LedgerError::Validation(format!(
            "Balance {} is below the account floor {}",
            balance, floor
        )))
    } else {
        Ok(())
    }
}
