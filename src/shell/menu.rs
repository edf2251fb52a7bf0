//! Menu commands
//!
//! The session loop accepts a fixed set of single- and double-letter
//! commands. Parsing is case-insensitive and tolerant of surrounding
//! whitespace; anything else is reported as unknown and the menu is shown
//! again.

/// The menu text printed before every command prompt
pub const MENU: &str = "\n================ MENU ================\n\
                        [d]\tDeposit\n\
                        [s]\tWithdraw\n\
                        [e]\tStatement\n\
                        [nc]\tNew account\n\
                        [lc]\tList accounts\n\
                        [nu]\tNew client\n\
                        [q]\tQuit\n\
                        => ";

/// One operator command from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// `d` - deposit into an account
    Deposit,
    /// `s` - withdraw from an account
    Withdraw,
    /// `e` - print an account statement
    Statement,
    /// `nc` - open an account for an existing client
    NewAccount,
    /// `lc` - list every account in the bank
    ListAccounts,
    /// `nu` - register a new client
    NewClient,
    /// `q` - end the session
    Quit,
}

impl MenuCommand {
    /// Parse one line of operator input
    ///
    /// Returns `None` for anything outside the fixed command set.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "d" => Some(MenuCommand::Deposit),
            "s" => Some(MenuCommand::Withdraw),
            "e" => Some(MenuCommand::Statement),
            "nc" => Some(MenuCommand::NewAccount),
            "lc" => Some(MenuCommand::ListAccounts),
            "nu" => Some(MenuCommand::NewClient),
            "q" => Some(MenuCommand::Quit),
            _ => None,
        }
    }
}
