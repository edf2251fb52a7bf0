//! Interactive menu session
//!
//! The session owns the [`Bank`] for its lifetime and drives it from
//! operator input. It is generic over its reader and writer so tests and
//! the script-replay mode can run it over in-memory buffers and files
//! exactly as the interactive binary runs it over stdin/stdout.
//!
//! All user-facing text goes through the session writer; the `tracing`
//! events emitted by the core are a separate, operator-invisible channel.

use crate::core::Bank;
use crate::shell::menu::{MenuCommand, MENU};
use crate::types::{mask_tax_id, AccountNumber};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// One menu-driven session over a bank
pub struct Session<R, W> {
    bank: Bank,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over the given bank and I/O endpoints
    pub fn new(bank: Bank, input: R, output: W) -> Self {
        Session {
            bank,
            input,
            output,
        }
    }

    /// Run the menu loop until `q` or end of input
    ///
    /// Returns the final bank state so callers (tests, the replay mode)
    /// can inspect it.
    ///
    /// # Errors
    ///
    /// Only I/O errors from the reader or writer are fatal; every domain
    /// rejection is printed and the loop continues.
    pub fn run(mut self) -> io::Result<Bank> {
        loop {
            write!(self.output, "{}", MENU)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            match MenuCommand::parse(&line) {
                Some(MenuCommand::Deposit) => self.deposit()?,
                Some(MenuCommand::Withdraw) => self.withdraw()?,
                Some(MenuCommand::Statement) => self.statement()?,
                Some(MenuCommand::NewAccount) => self.new_account()?,
                Some(MenuCommand::ListAccounts) => self.list_accounts()?,
                Some(MenuCommand::NewClient) => self.new_client()?,
                Some(MenuCommand::Quit) => break,
                None => {
                    writeln!(self.output, "Unknown option '{}'.", line.trim())?;
                }
            }
        }

        Ok(self.bank)
    }

    fn deposit(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.prompt("Client tax id: ")? else {
            return Ok(());
        };
        let Some(amount) = self.read_amount()? else {
            return Ok(());
        };
        let Some(number) = self.choose_account(&tax_id)? else {
            return Ok(());
        };

        match self.bank.deposit(&tax_id, number, amount) {
            Ok(()) => writeln!(self.output, "Deposit completed."),
            Err(error) => writeln!(self.output, "Operation failed: {}", error),
        }
    }

    fn withdraw(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.prompt("Client tax id: ")? else {
            return Ok(());
        };
        let Some(amount) = self.read_amount()? else {
            return Ok(());
        };
        let Some(number) = self.choose_account(&tax_id)? else {
            return Ok(());
        };

        match self.bank.withdraw(&tax_id, number, amount) {
            Ok(()) => writeln!(self.output, "Withdrawal completed."),
            Err(error) => writeln!(self.output, "Operation failed: {}", error),
        }
    }

    fn statement(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.prompt("Client tax id: ")? else {
            return Ok(());
        };
        let Some(number) = self.choose_account(&tax_id)? else {
            return Ok(());
        };

        match self.bank.statement(&tax_id, number) {
            Ok(statement) => writeln!(self.output, "{}", statement),
            Err(error) => writeln!(self.output, "Operation failed: {}", error),
        }
    }

    fn new_account(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.prompt("Client tax id: ")? else {
            return Ok(());
        };

        match self.bank.open_account(&tax_id) {
            Ok(number) => writeln!(self.output, "Account {} opened.", number),
            Err(error) => writeln!(self.output, "Operation failed: {}", error),
        }
    }

    fn list_accounts(&mut self) -> io::Result<()> {
        let mut any = false;
        let mut listing = String::new();

        for (client, account) in self.bank.accounts() {
            any = true;
            listing.push_str("==========================================\n");
            listing.push_str(&format!(
                "Branch:\t\t{}\nAccount:\t{}\nHolder:\t\t{} ({})\n",
                account.branch(),
                account.number(),
                client.name(),
                mask_tax_id(client.tax_id())
            ));
        }

        if any {
            write!(self.output, "{}", listing)
        } else {
            writeln!(self.output, "No accounts opened yet.")
        }
    }

    fn new_client(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.prompt("Tax id (digits only): ")? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Full name: ")? else {
            return Ok(());
        };
        let Some(birth_date) = self.prompt("Birth date (dd-mm-yyyy): ")? else {
            return Ok(());
        };
        let Some(address) = self.prompt("Address: ")? else {
            return Ok(());
        };

        match self
            .bank
            .register_client(&name, &birth_date, &tax_id, &address)
        {
            Ok(_) => writeln!(self.output, "Client registered."),
            Err(error) => writeln!(self.output, "Operation failed: {}", error),
        }
    }

    /// Ask for an amount; reports and aborts the command on parse failure
    fn read_amount(&mut self) -> io::Result<Option<Decimal>> {
        let Some(raw) = self.prompt("Amount: ")? else {
            return Ok(None);
        };

        match Decimal::from_str(&raw) {
            Ok(amount) => Ok(Some(amount)),
            Err(_) => {
                writeln!(self.output, "'{}' is not a valid amount.", raw)?;
                Ok(None)
            }
        }
    }

    /// Let the operator pick one of the client's accounts
    ///
    /// Lists the accounts with 1-based indices and asks for a choice, as
    /// the menu has no other way to address an account. Reports and aborts
    /// on an unknown client, a client without accounts, or a bad choice.
    fn choose_account(&mut self, tax_id: &str) -> io::Result<Option<AccountNumber>> {
        let Some(client) = self.bank.find_client(tax_id) else {
            writeln!(
                self.output,
                "No client with identifier {}.",
                mask_tax_id(tax_id)
            )?;
            return Ok(None);
        };

        let accounts: Vec<(AccountNumber, &'static str)> = client
            .accounts()
            .iter()
            .map(|account| (account.number(), account.branch()))
            .collect();

        if accounts.is_empty() {
            writeln!(self.output, "Client has no accounts.")?;
            return Ok(None);
        }

        for (index, (number, branch)) in accounts.iter().enumerate() {
            writeln!(
                self.output,
                "[{}] Account {} - Branch {}",
                index + 1,
                number,
                branch
            )?;
        }

        let Some(raw) = self.prompt("Choose an account: ")? else {
            return Ok(None);
        };

        match raw.parse::<usize>() {
            Ok(choice) if (1..=accounts.len()).contains(&choice) => {
                Ok(Some(accounts[choice - 1].0))
            }
            _ => {
                writeln!(self.output, "'{}' is not a valid account choice.", raw)?;
                Ok(None)
            }
        }
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one trimmed line; `None` means end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
