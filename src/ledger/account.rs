//! Account construction and balance operations

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::traits::*;
use crate::types::*;
use crate::utils::validate_positive_amount;

/// Decimal places interest is rounded to before it is deposited
pub const INTEREST_SCALE: i64 = 2;

impl BankAccount {
    /// Create a new account, validating it with [`DefaultAccountValidator`]
    pub fn new(
        owner: impl Into<String>,
        kind: AccountKind,
        initial_balance: BigDecimal,
    ) -> LedgerResult<Self> {
        Self::with_validator(owner, kind, initial_balance, &DefaultAccountValidator)
    }

    /// Create a new account with a custom validator
    pub fn with_validator(
        owner: impl Into<String>,
        kind: AccountKind,
        initial_balance: BigDecimal,
        validator: &dyn AccountValidator,
    ) -> LedgerResult<Self> {
        let owner = owner.into();
        validator.validate_account(&owner, &kind, &initial_balance)?;

        let now = chrono::Utc::now().naive_utc();
        Ok(Self {
            id: Uuid::new_v4(),
            owner,
            kind,
            balance: initial_balance,
            created_at: now,
            updated_at: now,
        })
    }

    /// Create a standard account
    pub fn standard(owner: impl Into<String>, initial_balance: BigDecimal) -> LedgerResult<Self> {
        Self::new(owner, AccountKind::Standard, initial_balance)
    }

    /// Create a savings account
    pub fn savings(
        owner: impl Into<String>,
        initial_balance: BigDecimal,
        interest_rate: BigDecimal,
    ) -> LedgerResult<Self> {
        Self::new(owner, AccountKind::Savings { interest_rate }, initial_balance)
    }

    /// Create a current account
    pub fn current(
        owner: impl Into<String>,
        initial_balance: BigDecimal,
        overdraft_limit: BigDecimal,
    ) -> LedgerResult<Self> {
        Self::new(
            owner,
            AccountKind::Current { overdraft_limit },
            initial_balance,
        )
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// Minimum balance this account may reach
    pub fn floor(&self) -> BigDecimal {
        self.kind.floor()
    }

    /// Largest amount that can currently be withdrawn
    pub fn available_funds(&self) -> BigDecimal {
        &self.balance - self.floor()
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    /// Deposit `balance * interest_rate`, rounded to cents, into a savings account
    ///
    /// Returns the interest credited. A zero rate or zero balance credits
    /// nothing and is not an error.
    pub fn apply_interest(&mut self) -> LedgerResult<BigDecimal> {
        let interest = match &self.kind {
            AccountKind::Savings { interest_rate } => {
                (&self.balance * interest_rate).round(INTEREST_SCALE)
            }
            AccountKind::Standard | AccountKind::Current { .. } => {
                return Err(LedgerError::NotSavingsAccount(self.id));
            }
        };

        if interest <= BigDecimal::from(0) {
            tracing::debug!(owner = %self.owner, "no interest to apply");
            return Ok(BigDecimal::from(0));
        }

        self.deposit(&interest)?;
        tracing::debug!(owner = %self.owner, interest = %interest, "interest applied");
        Ok(interest)
    }

    fn balance_line(&self) -> String {
        format!("{}'s balance is: ${}", self.owner, format_cents(&self.balance))
    }

    fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().naive_utc();
    }
}

/// Render an amount rounded half-even to exactly two decimal places
pub fn format_cents(amount: &BigDecimal) -> String {
    let (cents, _) = amount.round(2).with_scale(2).into_bigint_and_exponent();
    let cents = cents.to_string();
    let (sign, digits) = match cents.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", cents.as_str()),
    };
    let digits = format!("{:0>3}", digits);
    let (units, fraction) = digits.split_at(digits.len() - 2);
    format!("{}{}.{}", sign, units, fraction)
}

impl Account for BankAccount {
    fn id(&self) -> Uuid {
        self.id
    }

    fn owner(&self) -> &str {
        &self.owner
    }

    fn balance(&self) -> &BigDecimal {
        &self.balance
    }

    fn deposit(&mut self, amount: &BigDecimal) -> LedgerResult<BigDecimal> {
        if let Err(err) = validate_positive_amount(amount) {
            tracing::warn!(owner = %self.owner, amount = %amount, "deposit rejected: {err}");
            return Err(err);
        }

        self.balance += amount;
        self.touch();
        tracing::debug!(owner = %self.owner, amount = %amount, balance = %self.balance, "deposit");
        Ok(self.balance.clone())
    }

    fn withdraw(&mut self, amount: &BigDecimal) -> LedgerResult<BigDecimal> {
        if let Err(err) = validate_positive_amount(amount) {
            tracing::warn!(owner = %self.owner, amount = %amount, "withdrawal rejected: {err}");
            return Err(err);
        }

        let remaining = &self.balance - amount;
        if remaining < self.floor() {
            let requested = amount.clone();
            let available = self.available_funds();
            let err = if self.kind.allows_overdraft() {
                LedgerError::OverdraftExceeded {
                    requested,
                    available,
                }
            } else {
                LedgerError::InsufficientFunds {
                    requested,
                    available,
                }
            };
            tracing::warn!(owner = %self.owner, amount = %amount, balance = %self.balance, "withdrawal rejected: {err}");
            return Err(err);
        }

        self.balance = remaining;
        self.touch();
        tracing::debug!(owner = %self.owner, amount = %amount, balance = %self.balance, "withdrawal");
        Ok(self.balance.clone())
    }

    fn describe(&self) -> String {
        match self.kind.summary_label() {
            Some(label) => format!("{}\n{}", label, self.balance_line()),
            None => self.balance_line(),
        }
    }
}
