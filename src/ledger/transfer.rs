//! Two-party fund transfers

use bigdecimal::BigDecimal;

use crate::ledger::SharedAccount;
use crate::traits::*;
use crate::types::*;

/// Stateless coordinator for moving funds between two accounts
///
/// A transfer withdraws from the source first and only deposits into the
/// destination once that withdrawal has succeeded. Either both balances
/// change or neither does.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferService;

impl TransferService {
    /// Create a new transfer service
    pub fn new() -> Self {
        Self
    }

    /// Move `amount` from `source` to `destination`
    ///
    /// A rejected withdrawal fails the transfer with `TransferFailed` and the
    /// destination is never touched. Should the deposit be rejected, the
    /// withdrawn amount is returned to the source before failing.
    pub fn transfer<S, D>(
        &self,
        source: &mut S,
        destination: &mut D,
        amount: &BigDecimal,
    ) -> LedgerResult<TransferReceipt>
    where
        S: Account + ?Sized,
        D: Account + ?Sized,
    {
        if source.id() == destination.id() {
            return Err(LedgerError::SameAccount(source.id()));
        }

        if let Err(cause) = source.withdraw(amount) {
            tracing::warn!(
                from = %source.owner(),
                to = %destination.owner(),
                amount = %amount,
                "transfer failed: {cause}"
            );
            return Err(LedgerError::TransferFailed(Box::new(cause)));
        }

        if let Err(cause) = destination.deposit(amount) {
            tracing::error!(
                from = %source.owner(),
                to = %destination.owner(),
                amount = %amount,
                "deposit rejected mid-transfer, restoring source: {cause}"
            );
            if let Err(restore) = source.deposit(amount) {
                tracing::error!(from = %source.owner(), amount = %amount, "could not restore source: {restore}");
            }
            return Err(LedgerError::TransferFailed(Box::new(cause)));
        }

        tracing::debug!(
            from = %source.owner(),
            to = %destination.owner(),
            amount = %amount,
            "transfer completed"
        );
        Ok(TransferReceipt::new(
            source.id(),
            destination.id(),
            amount.clone(),
        ))
    }

    /// Move `amount` between two shared accounts
    ///
    /// Both locks are held for the whole withdraw-then-deposit sequence and
    /// are always taken in ascending account-id order, so opposite-direction
    /// transfers cannot deadlock.
    pub fn transfer_shared(
        &self,
        source: &SharedAccount,
        destination: &SharedAccount,
        amount: &BigDecimal,
    ) -> LedgerResult<TransferReceipt> {
        if source.same_account(destination) {
            return Err(LedgerError::SameAccount(source.id()));
        }

        let (mut from, mut to) = if source.id() < destination.id() {
            let from = source.lock()?;
            let to = destination.lock()?;
            (from, to)
        } else {
            let to = destination.lock()?;
            let from = source.lock()?;
            (from, to)
        };

        self.transfer(&mut *from, &mut *to, amount)
    }
}
