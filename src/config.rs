//! Declarative account configuration
//!
//! Accounts can be described in JSON and built in one pass:
//!
//! ```json
//! {
//!   "accounts": [
//!     { "type": "savings", "owner": "John Doe", "balance": "1000", "interest_rate": "0.05" },
//!     { "type": "current", "owner": "Jane Smith", "balance": "500", "overdraft_limit": "300" }
//!   ]
//! }
//! ```
//!
//! Decimal values must be JSON strings or integers so they are parsed
//! exactly; fractional JSON numbers are rejected.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::traits::*;
use crate::types::*;

fn zero() -> BigDecimal {
    BigDecimal::from(0)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ExactDecimal {
    Text(String),
    Integer(i64),
}

fn exact_decimal<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    match ExactDecimal::deserialize(deserializer) {
        Ok(ExactDecimal::Text(text)) => {
            BigDecimal::from_str(text.trim()).map_err(serde::de::Error::custom)
        }
        Ok(ExactDecimal::Integer(value)) => Ok(BigDecimal::from(value)),
        Err(_) => Err(serde::de::Error::custom(
            "decimal values must be strings or integers",
        )),
    }
}

/// Interest rate used when a savings entry omits one (1%)
pub fn default_interest_rate() -> BigDecimal {
    BigDecimal::from(1) / BigDecimal::from(100)
}

/// Overdraft limit used when a current entry omits one
pub fn default_overdraft_limit() -> BigDecimal {
    BigDecimal::from(500)
}

/// Construction parameters for a single account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccountConfig {
    Standard {
        owner: String,
        #[serde(default = "zero", deserialize_with = "exact_decimal")]
        balance: BigDecimal,
    },
    Savings {
        owner: String,
        #[serde(default = "zero", deserialize_with = "exact_decimal")]
        balance: BigDecimal,
        #[serde(default = "default_interest_rate", deserialize_with = "exact_decimal")]
        interest_rate: BigDecimal,
    },
    Current {
        owner: String,
        #[serde(default = "zero", deserialize_with = "exact_decimal")]
        balance: BigDecimal,
        #[serde(default = "default_overdraft_limit", deserialize_with = "exact_decimal")]
        overdraft_limit: BigDecimal,
    },
}

impl AccountConfig {
    pub fn owner(&self) -> &str {
        match self {
            AccountConfig::Standard { owner, .. }
            | AccountConfig::Savings { owner, .. }
            | AccountConfig::Current { owner, .. } => owner,
        }
    }

    pub fn balance(&self) -> &BigDecimal {
        match self {
            AccountConfig::Standard { balance, .. }
            | AccountConfig::Savings { balance, .. }
            | AccountConfig::Current { balance, .. } => balance,
        }
    }

    pub fn kind(&self) -> AccountKind {
        match self {
            AccountConfig::Standard { .. } => AccountKind::Standard,
            AccountConfig::Savings { interest_rate, .. } => AccountKind::Savings {
                interest_rate: interest_rate.clone(),
            },
            AccountConfig::Current {
                overdraft_limit, ..
            } => AccountKind::Current {
                overdraft_limit: overdraft_limit.clone(),
            },
        }
    }

    /// Build the account with [`DefaultAccountValidator`]
    pub fn build(&self) -> LedgerResult<BankAccount> {
        self.build_with(&DefaultAccountValidator)
    }

    pub fn build_with(&self, validator: &dyn AccountValidator) -> LedgerResult<BankAccount> {
        BankAccount::with_validator(self.owner(), self.kind(), self.balance().clone(), validator)
    }
}

/// A set of accounts to create
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankConfig {
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
}

impl BankConfig {
    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> LedgerResult<Self> {
        serde_json::from_str(json).map_err(|e| LedgerError::Config(e.to_string()))
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> LedgerResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| LedgerError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), accounts = config.accounts.len(), "loaded account config");
        Ok(config)
    }

    /// Build every configured account, stopping at the first invalid entry
    pub fn build_accounts(&self) -> LedgerResult<Vec<BankAccount>> {
        self.build_accounts_with(&DefaultAccountValidator)
    }

    pub fn build_accounts_with(
        &self,
        validator: &dyn AccountValidator,
    ) -> LedgerResult<Vec<BankAccount>> {
        self.accounts
            .iter()
            .map(|account| account.build_with(validator))
            .collect()
    }
}
