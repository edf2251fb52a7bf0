//! Transactions
//!
//! A `Transaction` is ephemeral: the shell constructs one per operation,
//! applies it to an account, and discards it. The only durable trace of a
//! transaction is the history entry its successful application produces.

use crate::types::account::CheckingAccount;
use crate::types::error::BankError;
use crate::types::history::TransactionKind;
use rust_decimal::Decimal;

/// A deposit or withdrawal request carrying its amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    /// Credit the amount to an account
    Deposit {
        /// The amount to credit
        amount: Decimal,
    },

    /// Debit the amount from an account
    Withdrawal {
        /// The amount to debit
        amount: Decimal,
    },
}

impl Transaction {
    /// Create a deposit transaction
    pub fn deposit(amount: Decimal) -> Self {
        Transaction::Deposit { amount }
    }

    /// Create a withdrawal transaction
    pub fn withdrawal(amount: Decimal) -> Self {
        Transaction::Withdrawal { amount }
    }

    /// The transaction amount
    pub fn amount(&self) -> Decimal {
        match self {
            Transaction::Deposit { amount } | Transaction::Withdrawal { amount } => *amount,
        }
    }

    /// The kind recorded in history for this transaction
    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Deposit { .. } => TransactionKind::Deposit,
            Transaction::Withdrawal { .. } => TransactionKind::Withdrawal,
        }
    }

    /// Apply this transaction to an account
    ///
    /// Invokes the matching account operation and, only if it succeeds,
    /// appends one entry to the account's history. A failed operation
    /// leaves both balance and history untouched, so the application is
    /// atomic from the caller's perspective.
    ///
    /// # Errors
    ///
    /// Propagates the rejection from
    /// [`CheckingAccount::deposit`] or [`CheckingAccount::withdraw`].
    pub fn apply(&self, account: &mut CheckingAccount) -> Result<(), BankError> {
        match self {
            Transaction::Deposit { amount } => account.deposit(*amount)?,
            Transaction::Withdrawal { amount } => account.withdraw(*amount)?,
        }

        account.record(self.kind(), self.amount());
        Ok(())
    }
}
