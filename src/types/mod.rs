//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `mask`: tax identifier masking for display
//! - `history`: append-only transaction log
//! - `account`: the checking account and its rules
//! - `transaction`: ephemeral deposit/withdrawal requests
//! - `client`: clients and account ownership
//! - `error`: error types for the bank core

pub mod account;
pub mod client;
pub mod error;
pub mod history;
pub mod mask;
pub mod transaction;

pub use account::{AccountNumber, CheckingAccount, BRANCH};
pub use client::{Client, TaxId};
pub use error::BankError;
pub use history::{History, HistoryEntry, TransactionKind};
pub use mask::mask_tax_id;
pub use transaction::Transaction;
