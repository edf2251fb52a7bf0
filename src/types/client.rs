//! Clients and account ownership
//!
//! A `Client` is the sole owner of its accounts. Accounts refer back to
//! their client through the tax identifier, an identity handle rather than
//! a second ownership edge, so there is no reference cycle to manage.

use crate::types::account::{AccountNumber, CheckingAccount};
use crate::types::error::BankError;
use crate::types::transaction::Transaction;
use chrono::NaiveDate;

/// Personal tax identifier
///
/// Stored raw, displayed only through
/// [`mask_tax_id`](crate::types::mask_tax_id).
pub type TaxId = String;

/// A registered client and the accounts they own
#[derive(Debug, Clone)]
pub struct Client {
    name: String,
    birth_date: NaiveDate,
    tax_id: TaxId,
    address: String,
    accounts: Vec<CheckingAccount>,
}

impl Client {
    /// Create a client with no accounts
    pub fn new(name: String, birth_date: NaiveDate, tax_id: TaxId, address: String) -> Self {
        Client {
            name,
            birth_date,
            tax_id,
            address,
            accounts: Vec::new(),
        }
    }

    /// Full name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Birth date
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Tax identifier (raw; mask before displaying)
    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    /// Registered address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The accounts this client owns, in opening order
    pub fn accounts(&self) -> &[CheckingAccount] {
        &self.accounts
    }

    /// Take ownership of an account
    ///
    /// Appends without checking for a duplicate number; uniqueness comes
    /// from the bank's sequential allocator, not from this list.
    pub fn add_account(&mut self, account: CheckingAccount) {
        self.accounts.push(account);
    }

    /// Look up one of this client's accounts by number
    pub fn account(&self, number: AccountNumber) -> Option<&CheckingAccount> {
        self.accounts.iter().find(|a| a.number() == number)
    }

    fn account_mut(&mut self, number: AccountNumber) -> Option<&mut CheckingAccount> {
        self.accounts.iter_mut().find(|a| a.number() == number)
    }

    /// Apply a transaction to one of this client's accounts
    ///
    /// The client holds no balance logic: it resolves the account and
    /// delegates to [`Transaction::apply`].
    ///
    /// # Errors
    ///
    /// - [`BankError::AccountNotFound`] if the client owns no account with
    ///   that number
    /// - any rejection from the account operation itself
    pub fn apply_transaction(
        &mut self,
        number: AccountNumber,
        transaction: &Transaction,
    ) -> Result<(), BankError> {
        let account = self
            .account_mut(number)
            .ok_or_else(|| BankError::account_not_found(number))?;

        transaction.apply(account)
    }
}
