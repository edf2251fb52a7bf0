//! Transaction history for a single account
//!
//! The history is an append-only, insertion-ordered log of every transaction
//! that was successfully applied to an account. Entries are never edited or
//! removed; the log grows for the lifetime of the account.

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use std::fmt;

/// The kind of a recorded transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Funds credited to the account
    Deposit,
    /// Funds debited from the account
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// One applied transaction as recorded in an account's history
///
/// An entry is created only when the corresponding account operation
/// succeeded, stamped with the wall-clock time of the application.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Whether this was a deposit or a withdrawal
    pub kind: TransactionKind,

    /// The transaction amount
    pub amount: Decimal,

    /// When the transaction was applied
    pub timestamp: DateTime<Local>,
}

/// Append-only log of applied transactions for one account
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        History {
            entries: Vec::new(),
        }
    }

    /// Append one entry, stamped with the current time
    ///
    /// Called only after the matching account operation succeeded. There is
    /// no way to remove or reorder entries afterwards.
    pub fn record(&mut self, kind: TransactionKind, amount: Decimal) {
        self.entries.push(HistoryEntry {
            kind,
            amount,
            timestamp: Local::now(),
        });
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Whether any transaction has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count of recorded withdrawals
    ///
    /// Recomputed by scanning the full log on every call. The count covers
    /// the whole lifetime of the account and never resets; the withdrawal
    /// quota is therefore a quota over the entire (unbounded) statement
    /// period. Preserved observable behavior of the original rules.
    pub fn withdrawal_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.kind == TransactionKind::Withdrawal)
            .count()
    }
}
