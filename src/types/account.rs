//! Checking account state and rules
//!
//! A `CheckingAccount` holds the balance, the owner handle, the per-account
//! withdrawal limits, and the owned transaction history. The deposit and
//! withdrawal rules live here; recording to history is the caller's job
//! (see [`Transaction::apply`](crate::types::Transaction::apply)) so that a
//! rejected operation leaves no trace.

use crate::types::client::TaxId;
use crate::types::error::BankError;
use crate::types::history::{History, TransactionKind};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Account number, unique per process
///
/// Numbers are allocated sequentially by the [`Bank`](crate::core::Bank);
/// nothing else hands them out.
pub type AccountNumber = u32;

/// Fixed branch code, shared by every account in this model
pub const BRANCH: &str = "0001";

/// Default per-withdrawal ceiling
pub const DEFAULT_WITHDRAWAL_LIMIT: Decimal = dec!(500);

/// Default number of withdrawals allowed per statement period
pub const DEFAULT_WITHDRAWAL_QUOTA: u32 = 3;

/// A checking account
///
/// The balance only changes through [`deposit`](CheckingAccount::deposit)
/// and [`withdraw`](CheckingAccount::withdraw); withdrawals that would make
/// it negative are rejected, so it never goes below zero.
///
/// The `owner` field is an identity handle (the owner's tax identifier),
/// not an owning reference: the [`Client`](crate::types::Client) is the
/// sole owner of the account value itself.
#[derive(Debug, Clone)]
pub struct CheckingAccount {
    number: AccountNumber,
    balance: Decimal,
    withdrawal_limit: Decimal,
    withdrawal_quota: u32,
    owner: TaxId,
    history: History,
}

impl CheckingAccount {
    /// Create an account with zero balance and the default limits
    pub fn new(number: AccountNumber, owner: TaxId) -> Self {
        Self::with_limits(
            number,
            owner,
            DEFAULT_WITHDRAWAL_LIMIT,
            DEFAULT_WITHDRAWAL_QUOTA,
        )
    }

    /// Create an account with explicit withdrawal limits
    pub fn with_limits(
        number: AccountNumber,
        owner: TaxId,
        withdrawal_limit: Decimal,
        withdrawal_quota: u32,
    ) -> Self {
        CheckingAccount {
            number,
            balance: Decimal::ZERO,
            withdrawal_limit,
            withdrawal_quota,
            owner,
            history: History::new(),
        }
    }

    /// The account number
    pub fn number(&self) -> AccountNumber {
        self.number
    }

    /// The branch code
    pub fn branch(&self) -> &'static str {
        BRANCH
    }

    /// The current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// The per-withdrawal ceiling
    pub fn withdrawal_limit(&self) -> Decimal {
        self.withdrawal_limit
    }

    /// The withdrawal-count quota
    pub fn withdrawal_quota(&self) -> u32 {
        self.withdrawal_quota
    }

    /// Tax identifier of the owning client
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The account's transaction history
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Credit funds to the account
    ///
    /// # Errors
    ///
    /// - [`BankError::InvalidAmount`] if `amount <= 0`
    /// - [`BankError::ArithmeticOverflow`] if the balance would overflow
    ///
    /// On failure the balance is unchanged. History is not touched here;
    /// the caller records the entry after a successful application.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit", self.number))?;

        Ok(())
    }

    /// Debit funds from the account
    ///
    /// The checks run in the order the original rules apply them, so the
    /// reported rejection cause is stable:
    ///
    /// 1. amount above the per-withdrawal limit
    /// 2. withdrawal-count quota exhausted (counted over the full history,
    ///    which never resets)
    /// 3. non-positive amount
    /// 4. amount above the balance
    ///
    /// # Errors
    ///
    /// - [`BankError::LimitExceeded`]
    /// - [`BankError::WithdrawalQuotaExceeded`]
    /// - [`BankError::InvalidAmount`]
    /// - [`BankError::InsufficientFunds`]
    ///
    /// On failure the balance is unchanged. History is not touched here;
    /// the caller records the entry after a successful application.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount > self.withdrawal_limit {
            return Err(BankError::limit_exceeded(
                self.number,
                self.withdrawal_limit,
                amount,
            ));
        }

        if self.history.withdrawal_count() >= self.withdrawal_quota as usize {
            return Err(BankError::quota_exceeded(
                self.number,
                self.withdrawal_quota,
            ));
        }

        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        if amount > self.balance {
            return Err(BankError::insufficient_funds(
                self.number,
                self.balance,
                amount,
            ));
        }

        // Cannot underflow: amount <= balance was just checked
        self.balance -= amount;

        Ok(())
    }

    /// Append a history entry for a successfully applied transaction
    ///
    /// Only [`Transaction::apply`](crate::types::Transaction::apply) calls
    /// this, and only after the matching operation succeeded.
    pub(crate) fn record(&mut self, kind: TransactionKind, amount: Decimal) {
        self.history.record(kind, amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn account() -> CheckingAccount {
        CheckingAccount::new(1, "12345678901".to_string())
    }

    #[test]
    fn test_new_account_defaults() {
        let account = account();

        assert_eq!(account.number(), 1);
        assert_eq!(account.branch(), "0001");
        assert_eq!(account.balance(), Decimal::ZERO);
        assert_eq!(account.withdrawal_limit(), dec!(500));
        assert_eq!(account.withdrawal_quota(), 3);
        assert_eq!(account.owner(), "12345678901");
        assert!(account.history().is_empty());
    }

    #[rstest]
    #[case::zero(dec!(0))]
    #[case::negative(dec!(-10))]
    fn test_deposit_rejects_non_positive_amounts(#[case] amount: Decimal) {
        let mut account = account();

        let result = account.deposit(amount);

        assert_eq!(result, Err(BankError::invalid_amount(amount)));
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_deposit_increases_balance_by_exact_amount() {
        let mut account = account();

        account.deposit(dec!(100.50)).unwrap();
        account.deposit(dec!(0.01)).unwrap();

        assert_eq!(account.balance(), dec!(100.51));
    }

    #[test]
    fn test_deposit_does_not_record_history() {
        // Recording is the transaction's job, not the account's
        let mut account = account();

        account.deposit(dec!(100)).unwrap();

        assert!(account.history().is_empty());
    }

    #[rstest]
    #[case::zero(dec!(0))]
    #[case::negative(dec!(-10))]
    fn test_withdraw_rejects_non_positive_amounts(#[case] amount: Decimal) {
        let mut account = account();
        account.deposit(dec!(100)).unwrap();

        let result = account.withdraw(amount);

        assert_eq!(result, Err(BankError::invalid_amount(amount)));
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn test_withdraw_rejects_amount_above_balance() {
        let mut account = account();
        account.deposit(dec!(100)).unwrap();

        let result = account.withdraw(dec!(250));

        assert_eq!(
            result,
            Err(BankError::insufficient_funds(1, dec!(100), dec!(250)))
        );
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn test_withdraw_rejects_amount_above_limit() {
        let mut account = account();
        account.deposit(dec!(2000)).unwrap();

        let result = account.withdraw(dec!(600));

        assert_eq!(
            result,
            Err(BankError::limit_exceeded(1, dec!(500), dec!(600)))
        );
        assert_eq!(account.balance(), dec!(2000));
    }

    #[test]
    fn test_withdraw_limit_checked_before_balance() {
        // 600 exceeds both the limit (500) and the balance (100);
        // the limit check runs first
        let mut account = account();
        account.deposit(dec!(100)).unwrap();

        let result = account.withdraw(dec!(600));

        assert!(matches!(result, Err(BankError::LimitExceeded { .. })));
    }

    #[test]
    fn test_withdraw_decreases_balance_by_exact_amount() {
        let mut account = account();
        account.deposit(dec!(100)).unwrap();

        account.withdraw(dec!(40.25)).unwrap();

        assert_eq!(account.balance(), dec!(59.75));
    }

    #[test]
    fn test_withdraw_succeeds_when_amount_equals_balance() {
        let mut account = account();
        account.deposit(dec!(500)).unwrap();

        account.withdraw(dec!(500)).unwrap();

        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_withdraw_succeeds_when_amount_equals_limit() {
        let mut account = account();
        account.deposit(dec!(1000)).unwrap();

        account.withdraw(dec!(500)).unwrap();

        assert_eq!(account.balance(), dec!(500));
    }

    #[test]
    fn test_withdraw_quota_counts_recorded_withdrawals() {
        let mut account =
            CheckingAccount::with_limits(1, "12345678901".to_string(), dec!(500), 2);
        account.deposit(dec!(1000)).unwrap();

        // Quota counts history entries, which the account itself does not
        // write; simulate two applied withdrawals
        account.withdraw(dec!(10)).unwrap();
        account.record(TransactionKind::Withdrawal, dec!(10));
        account.withdraw(dec!(10)).unwrap();
        account.record(TransactionKind::Withdrawal, dec!(10));

        let result = account.withdraw(dec!(10));

        assert_eq!(result, Err(BankError::quota_exceeded(1, 2)));
        assert_eq!(account.balance(), dec!(980));
    }

    #[test]
    fn test_withdraw_quota_ignores_deposits() {
        let mut account =
            CheckingAccount::with_limits(1, "12345678901".to_string(), dec!(500), 1);
        account.deposit(dec!(100)).unwrap();
        account.record(TransactionKind::Deposit, dec!(100));
        account.record(TransactionKind::Deposit, dec!(100));

        assert!(account.withdraw(dec!(10)).is_ok());
    }

    #[test]
    fn test_overdraft_is_impossible() {
        let mut account = account();
        account.deposit(dec!(50)).unwrap();

        assert!(account.withdraw(dec!(50.01)).is_err());
        assert_eq!(account.balance(), dec!(50));
    }
}
