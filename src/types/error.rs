//! Error types for the teaching bank
//!
//! Every rejected operation is reported as a value to the immediate caller;
//! nothing in the core panics. Failures never leave partial state behind:
//! balance and history are only modified together, on the success path.
//!
//! # Error Categories
//!
//! - **Validation errors**: invalid amount, malformed birth date
//! - **Account rule rejections**: insufficient funds, withdrawal limit,
//!   withdrawal quota
//! - **Lookup errors**: unknown client or account, duplicate registration
//! - **Arithmetic errors**: overflow in balance calculations
//!
//! Messages never contain a raw tax identifier, only the masked form.

use crate::types::account::AccountNumber;
use crate::types::mask::mask_tax_id;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank core
///
/// Each variant carries enough context for a one-line diagnostic. All
/// failures are permanent rejections of that specific request; none are
/// transient, so no retry logic exists anywhere.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// The amount is not strictly positive
    ///
    /// Applies to both deposits and withdrawals.
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// The withdrawal exceeds the current balance
    #[error("Insufficient funds on account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account number
        account: AccountNumber,
        /// Current balance
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// The withdrawal exceeds the per-withdrawal ceiling
    #[error("Withdrawal limit exceeded on account {account}: limit {limit}, requested {requested}")]
    LimitExceeded {
        /// Account number
        account: AccountNumber,
        /// Per-withdrawal ceiling
        limit: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// The account already reached its withdrawal-count quota
    ///
    /// The count is taken over the account's full history and never resets.
    #[error("Withdrawal quota exhausted on account {account}: {quota} withdrawals already made")]
    WithdrawalQuotaExceeded {
        /// Account number
        account: AccountNumber,
        /// Maximum number of withdrawals per statement period
        quota: u32,
    },

    /// No client registered under the given tax identifier
    #[error("No client with identifier {}", mask_tax_id(tax_id))]
    ClientNotFound {
        /// The tax identifier that was looked up
        tax_id: String,
    },

    /// The client owns no account with the given number
    #[error("Account {number} not found")]
    AccountNotFound {
        /// The account number that was looked up
        number: AccountNumber,
    },

    /// A client is already registered under the given tax identifier
    #[error("A client with identifier {} is already registered", mask_tax_id(tax_id))]
    DuplicateClient {
        /// The tax identifier that collided
        tax_id: String,
    },

    /// A birth date could not be parsed
    ///
    /// Dates are expected in `dd-mm-yyyy` form.
    #[error("Invalid date '{value}', expected dd-mm-yyyy")]
    InvalidDate {
        /// The rejected input
        value: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to keep the balance intact.
    #[error("Arithmetic overflow in {operation} on account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: AccountNumber,
    },
}

// Helper constructors for the variants built in more than one place

impl BankError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        BankError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(
        account: AccountNumber,
        balance: Decimal,
        requested: Decimal,
    ) -> Self {
        BankError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create a LimitExceeded error
    pub fn limit_exceeded(account: AccountNumber, limit: Decimal, requested: Decimal) -> Self {
        BankError::LimitExceeded {
            account,
            limit,
            requested,
        }
    }

    /// Create a WithdrawalQuotaExceeded error
    pub fn quota_exceeded(account: AccountNumber, quota: u32) -> Self {
        BankError::WithdrawalQuotaExceeded { account, quota }
    }

    /// Create a ClientNotFound error
    pub fn client_not_found(tax_id: &str) -> Self {
        BankError::ClientNotFound {
            tax_id: tax_id.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(number: AccountNumber) -> Self {
        BankError::AccountNotFound { number }
    }

    /// Create a DuplicateClient error
    pub fn duplicate_client(tax_id: &str) -> Self {
        BankError::DuplicateClient {
            tax_id: tax_id.to_string(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(value: &str) -> Self {
        BankError::InvalidDate {
            value: value.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }
}
