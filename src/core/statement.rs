//! Account statements
//!
//! A `Statement` is a borrowing view over one account and its owner,
//! assembled by [`Bank::statement`](crate::core::Bank::statement). Its
//! `Display` impl renders the printed statement shown by the shell.

use crate::types::{mask_tax_id, AccountNumber, CheckingAccount, Client, HistoryEntry};
use rust_decimal::Decimal;
use std::fmt;

/// Timestamp format used for history entries in printed statements
const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Read-only view of one account for statement output
#[derive(Debug)]
pub struct Statement<'a> {
    /// Full name of the owning client
    pub owner_name: &'a str,

    /// Masked tax identifier of the owning client
    pub masked_tax_id: String,

    /// Branch code
    pub branch: &'static str,

    /// Account number
    pub number: AccountNumber,

    /// History entries in insertion order
    pub entries: &'a [HistoryEntry],

    /// Current balance
    pub balance: Decimal,
}

impl<'a> Statement<'a> {
    /// Assemble a statement from a client and one of their accounts
    pub fn new(client: &'a Client, account: &'a CheckingAccount) -> Self {
        Statement {
            owner_name: client.name(),
            masked_tax_id: mask_tax_id(client.tax_id()),
            branch: account.branch(),
            number: account.number(),
            entries: account.history().entries(),
            balance: account.balance(),
        }
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "================ STATEMENT ================")?;
        writeln!(f, "Holder: {} ({})", self.owner_name, self.masked_tax_id)?;
        writeln!(f, "Branch: {} | Account: {}", self.branch, self.number)?;

        if self.entries.is_empty() {
            writeln!(f, "No transactions recorded.")?;
        } else {
            for entry in self.entries {
                writeln!(
                    f,
                    "{}:\n\t$ {:.2} at {}",
                    entry.kind,
                    entry.amount,
                    entry.timestamp.format(TIMESTAMP_FORMAT)
                )?;
            }
        }

        writeln!(f, "\nBalance:\n\t$ {:.2}", self.balance)?;
        write!(f, "==========================================")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Transaction;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn client_with_account() -> Client {
        let mut client = Client::new(
            "Alice Souza".to_string(),
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            "12345678901".to_string(),
            "1 Main Street".to_string(),
        );
        client.add_account(CheckingAccount::new(1, client.tax_id().to_string()));
        client
    }

    #[test]
    fn test_empty_statement_rendering() {
        let client = client_with_account();
        let statement = Statement::new(&client, client.account(1).unwrap());

        let rendered = statement.to_string();

        assert!(rendered.contains("Holder: Alice Souza (123.***.789-**)"));
        assert!(rendered.contains("Branch: 0001 | Account: 1"));
        assert!(rendered.contains("No transactions recorded."));
        assert!(rendered.contains("$ 0.00"));
    }

    #[test]
    fn test_statement_lists_entries_in_order() {
        let mut client = client_with_account();
        client
            .apply_transaction(1, &Transaction::deposit(dec!(1000)))
            .unwrap();
        client
            .apply_transaction(1, &Transaction::withdrawal(dec!(150)))
            .unwrap();

        let statement = Statement::new(&client, client.account(1).unwrap());
        let rendered = statement.to_string();

        let deposit_at = rendered.find("Deposit:").unwrap();
        let withdrawal_at = rendered.find("Withdrawal:").unwrap();
        assert!(deposit_at < withdrawal_at);
        assert!(rendered.contains("$ 1000.00"));
        assert!(rendered.contains("$ 150.00"));
        assert!(rendered.contains("$ 850.00"));
        assert!(!rendered.contains("No transactions recorded."));
    }

    #[test]
    fn test_statement_never_shows_raw_tax_id() {
        let client = client_with_account();
        let statement = Statement::new(&client, client.account(1).unwrap());

        assert!(!statement.to_string().contains("12345678901"));
    }
}
