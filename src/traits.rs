//! Traits for account capabilities and construction rules

use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::types::*;
use crate::utils::validation::*;

/// Capability set shared by every account
///
/// [`crate::TransferService`] works purely in terms of this trait, so any
/// type that honours these contracts can take part in a transfer.
pub trait Account {
    /// Stable identity of the account
    fn id(&self) -> Uuid;

    /// Owner label, fixed at creation
    fn owner(&self) -> &str;

    /// Current balance
    fn balance(&self) -> &BigDecimal;

    /// Add a positive amount to the balance, returning the new balance
    ///
    /// Rejects non-positive amounts with `InvalidAmount` and leaves the
    /// balance untouched.
    fn deposit(&mut self, amount: &BigDecimal) -> LedgerResult<BigDecimal>;

    /// Remove a positive amount from the balance, returning the new balance
    ///
    /// Rejects non-positive amounts and any withdrawal that would break the
    /// account's floor; a rejected call has no effect.
    fn withdraw(&mut self, amount: &BigDecimal) -> LedgerResult<BigDecimal>;

    /// Human-readable owner and balance summary
    fn describe(&self) -> String;
}

/// Trait for implementing account construction rules
pub trait AccountValidator: Send + Sync {
    /// Validate the parameters of an account before it is created
    fn validate_account(
        &self,
        owner: &str,
        kind: &AccountKind,
        initial_balance: &BigDecimal,
    ) -> LedgerResult<()>;
}

/// Default validator: well-formed parameters and an initial balance that
/// already satisfies the account's floor
pub struct DefaultAccountValidator;

impl AccountValidator for DefaultAccountValidator {
    fn validate_account(
        &self,
        owner: &str,
        kind: &AccountKind,
        initial_balance: &BigDecimal,
    ) -> LedgerResult<()> {
        validate_owner(owner)?;
        validate_account_kind(kind)?;
        validate_within_floor(kind, initial_balance)
    }
}

/// Validator that leaves the initial balance unchecked
///
/// Only subsequent operations are held to the floor invariant.
pub struct PermissiveAccountValidator;

impl AccountValidator for PermissiveAccountValidator {
    fn validate_account(
        &self,
        owner: &str,
        kind: &AccountKind,
        _initial_balance: &BigDecimal,
    ) -> LedgerResult<()> {
        validate_owner(owner)?;
        validate_account_kind(kind)
    }
}
