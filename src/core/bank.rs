//! Bank orchestration
//!
//! The `Bank` owns the client registry and allocates account numbers. It is
//! the whole external interface of the core: the shell constructs one,
//! holds it for the session, and calls through it — there is no hidden
//! process-wide state.

use crate::core::statement::Statement;
use crate::types::{
    AccountNumber, BankError, CheckingAccount, Client, Transaction,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Input format for birth dates
const DATE_FORMAT: &str = "%d-%m-%Y";

/// Registry of clients and their accounts
///
/// Account numbers are allocated sequentially starting at 1 and are unique
/// for the lifetime of the process. Client tax identifiers are unique
/// within the registry; registration rejects duplicates.
#[derive(Debug, Default)]
pub struct Bank {
    clients: Vec<Client>,
    next_account_number: AccountNumber,
}

impl Bank {
    /// Create a bank with no clients
    pub fn new() -> Self {
        Bank {
            clients: Vec::new(),
            next_account_number: 1,
        }
    }

    /// Register a new client
    ///
    /// # Errors
    ///
    /// - [`BankError::InvalidDate`] if `birth_date` is not `dd-mm-yyyy`
    /// - [`BankError::DuplicateClient`] if the tax identifier is already
    ///   registered
    pub fn register_client(
        &mut self,
        name: &str,
        birth_date: &str,
        tax_id: &str,
        address: &str,
    ) -> Result<&Client, BankError> {
        let birth_date = NaiveDate::parse_from_str(birth_date, DATE_FORMAT)
            .map_err(|_| BankError::invalid_date(birth_date))?;

        if self.find_client(tax_id).is_some() {
            debug!(client = %crate::types::mask_tax_id(tax_id), "rejected duplicate registration");
            return Err(BankError::duplicate_client(tax_id));
        }

        self.clients.push(Client::new(
            name.to_string(),
            birth_date,
            tax_id.to_string(),
            address.to_string(),
        ));

        let client = self.clients.last().expect("client was just pushed");
        info!(client = %crate::types::mask_tax_id(tax_id), "client registered");
        Ok(client)
    }

    /// Open a checking account for an existing client
    ///
    /// Allocates the next sequential account number and appends the new
    /// account to the client's list.
    ///
    /// # Errors
    ///
    /// [`BankError::ClientNotFound`] if the tax identifier is unknown.
    pub fn open_account(&mut self, tax_id: &str) -> Result<AccountNumber, BankError> {
        let number = self.next_account_number;

        let client = self
            .find_client_mut(tax_id)
            .ok_or_else(|| BankError::client_not_found(tax_id))?;
        let owner = client.tax_id().to_string();

        client.add_account(CheckingAccount::new(number, owner));
        self.next_account_number += 1;

        info!(account = number, "account opened");
        Ok(number)
    }

    /// Deposit into a client's account
    ///
    /// # Errors
    ///
    /// [`BankError::ClientNotFound`], [`BankError::AccountNotFound`], or
    /// any rejection from the deposit rules.
    pub fn deposit(
        &mut self,
        tax_id: &str,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<(), BankError> {
        self.apply(tax_id, number, Transaction::deposit(amount))
    }

    /// Withdraw from a client's account
    ///
    /// # Errors
    ///
    /// [`BankError::ClientNotFound`], [`BankError::AccountNotFound`], or
    /// any rejection from the withdrawal rules.
    pub fn withdraw(
        &mut self,
        tax_id: &str,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<(), BankError> {
        self.apply(tax_id, number, Transaction::withdrawal(amount))
    }

    /// Produce a statement view for a client's account
    ///
    /// # Errors
    ///
    /// [`BankError::ClientNotFound`] or [`BankError::AccountNotFound`].
    pub fn statement(
        &self,
        tax_id: &str,
        number: AccountNumber,
    ) -> Result<Statement<'_>, BankError> {
        let client = self
            .find_client(tax_id)
            .ok_or_else(|| BankError::client_not_found(tax_id))?;
        let account = client
            .account(number)
            .ok_or_else(|| BankError::account_not_found(number))?;

        Ok(Statement::new(client, account))
    }

    /// Look up a client by tax identifier
    pub fn find_client(&self, tax_id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.tax_id() == tax_id)
    }

    fn find_client_mut(&mut self, tax_id: &str) -> Option<&mut Client> {
        self.clients.iter_mut().find(|c| c.tax_id() == tax_id)
    }

    /// All registered clients, in registration order
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Every account in the bank, paired with its owning client
    ///
    /// Iterates clients in registration order and each client's accounts in
    /// opening order.
    pub fn accounts(&self) -> impl Iterator<Item = (&Client, &CheckingAccount)> + '_ {
        self.clients
            .iter()
            .flat_map(|client| client.accounts().iter().map(move |account| (client, account)))
    }

    fn apply(
        &mut self,
        tax_id: &str,
        number: AccountNumber,
        transaction: Transaction,
    ) -> Result<(), BankError> {
        let client = self
            .find_client_mut(tax_id)
            .ok_or_else(|| BankError::client_not_found(tax_id))?;

        match client.apply_transaction(number, &transaction) {
            Ok(()) => {
                info!(
                    account = number,
                    kind = %transaction.kind(),
                    amount = %transaction.amount(),
                    "transaction applied"
                );
                Ok(())
            }
            Err(error) => {
                debug!(account = number, %error, "transaction rejected");
                Err(error)
            }
        }
    }
}
