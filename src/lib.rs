//! Teaching Bank Library
//! # Overview
//!
//! This library implements a small teaching bank: clients, checking
//! accounts with withdrawal rules, an append-only transaction history, and
//! a text-menu shell to drive it all. Everything is in memory and
//! single-threaded; state lives exactly as long as the process.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Client, CheckingAccount, Transaction,
//!   History) and the identifier-masking rule
//! - [`core`] - Business logic components:
//!   - [`core::bank`] - Client registry, account allocation, and the
//!     operations the shell calls
//!   - [`core::statement`] - Read-only statement view and rendering
//! - [`shell`] - The menu loop, generic over reader and writer
//! - [`cli`] - CLI argument parsing
//!
//! # Account Rules
//!
//! A checking account rejects non-positive amounts, withdrawals above the
//! balance, withdrawals above the per-withdrawal limit (default 500), and
//! withdrawals past the per-period quota (default 3). The quota counts
//! withdrawals over the account's entire history and never resets. History
//! records only successful operations, in order, with timestamps.

// Module declarations
pub mod cli;
pub mod core;
pub mod shell;
pub mod types;

pub use crate::core::{Bank, Statement};
pub use crate::shell::Session;
pub use crate::types::{
    mask_tax_id, AccountNumber, BankError, CheckingAccount, Client, History, HistoryEntry, TaxId,
    Transaction, TransactionKind, BRANCH,
};
