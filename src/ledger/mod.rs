//! Ledger module containing account operations and transfers

pub mod account;
pub mod shared;
pub mod transfer;

pub use account::*;
pub use shared::*;
pub use transfer::*;
