//! Thread-safe account handles

use bigdecimal::BigDecimal;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::traits::*;
use crate::types::*;

/// Cloneable handle to an account guarded by its own lock
///
/// Every operation takes the account's lock for its whole duration, so
/// concurrent callers never observe a half-applied mutation. Use
/// [`crate::TransferService::transfer_shared`] to move funds between two
/// handles.
#[derive(Debug, Clone)]
pub struct SharedAccount {
    id: Uuid,
    inner: Arc<Mutex<BankAccount>>,
}

impl SharedAccount {
    /// Wrap an account for shared use
    pub fn new(account: BankAccount) -> Self {
        Self {
            id: account.id,
            inner: Arc::new(Mutex::new(account)),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Whether both handles refer to the same account
    pub fn same_account(&self, other: &SharedAccount) -> bool {
        self.id == other.id
    }

    pub(crate) fn lock(&self) -> LedgerResult<MutexGuard<'_, BankAccount>> {
        self.inner
            .lock()
            .map_err(|_| LedgerError::LockPoisoned(self.id))
    }

    pub fn deposit(&self, amount: &BigDecimal) -> LedgerResult<BigDecimal> {
        self.lock()?.deposit(amount)
    }

    pub fn withdraw(&self, amount: &BigDecimal) -> LedgerResult<BigDecimal> {
        self.lock()?.withdraw(amount)
    }

    pub fn apply_interest(&self) -> LedgerResult<BigDecimal> {
        self.lock()?.apply_interest()
    }

    pub fn balance(&self) -> LedgerResult<BigDecimal> {
        Ok(self.lock()?.balance().clone())
    }

    pub fn describe(&self) -> LedgerResult<String> {
        Ok(self.lock()?.describe())
    }

    /// Copy of the account as it is right now
    pub fn snapshot(&self) -> LedgerResult<BankAccount> {
        Ok(self.lock()?.clone())
    }
}

impl From<BankAccount> for SharedAccount {
    fn from(account: BankAccount) -> Self {
        Self::new(account)
    }
}
