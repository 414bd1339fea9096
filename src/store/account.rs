//! The account slice: a single balance and the two commands that move it.
//!
//! Neither command validates its amount. Depositing a negative amount or
//! withdrawing past zero is allowed and the balance simply goes negative.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An abstract, unit-less amount of money.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(pub i64);

impl Balance {
    pub const ZERO: Balance = Balance(0);

    pub fn deposit(self, amount: i64) -> Balance {
        Balance(self.0.saturating_add(amount))
    }

    pub fn withdraw(self, amount: i64) -> Balance {
        Balance(self.0.saturating_sub(amount))
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    Deposit(i64),
    Withdraw(i64),
}

impl AccountAction {
    /// Past-tense description for the status bar, e.g. `Deposited 1000`.
    pub fn describe(&self) -> String {
        match self {
            AccountAction::Deposit(a) => format!("Deposited {}", a),
            AccountAction::Withdraw(a) => format!("Withdrew {}", a),
        }
    }
}

pub fn deposit_money(amount: i64) -> AccountAction {
    AccountAction::Deposit(amount)
}

pub fn withdraw_money(amount: i64) -> AccountAction {
    AccountAction::Withdraw(amount)
}

pub fn account_reducer(balance: Balance, action: &AccountAction) -> Balance {
    match *action {
        AccountAction::Deposit(amount) => balance.deposit(amount),
        AccountAction::Withdraw(amount) => balance.withdraw(amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_adds_amount() {
        for b in [-5000, -1, 0, 1, 1000, 123_456] {
            for a in [-1000, 0, 1, 1000, 99_999] {
                assert_eq!(
                    account_reducer(Balance(b), &deposit_money(a)),
                    Balance(b + a)
                );
            }
        }
    }

    #[test]
    fn test_withdraw_subtracts_amount() {
        for b in [-5000, -1, 0, 1, 1000, 123_456] {
            for a in [-1000, 0, 1, 1000, 99_999] {
                assert_eq!(
                    account_reducer(Balance(b), &withdraw_money(a)),
                    Balance(b - a)
                );
            }
        }
    }

    #[test]
    fn test_withdraw_from_zero_goes_negative() {
        let b = account_reducer(Balance::ZERO, &withdraw_money(1000));
        assert_eq!(b, Balance(-1000));
        assert!(b.is_negative());
    }

    #[test]
    fn test_withdraw_everything() {
        assert_eq!(
            account_reducer(Balance(1000), &withdraw_money(1000)),
            Balance::ZERO
        );
    }

    #[test]
    fn test_sequence() {
        let actions = [deposit_money(1000), deposit_money(1000), withdraw_money(1000)];
        let b = actions.iter().fold(Balance::ZERO, account_reducer);
        assert_eq!(b, Balance(1000));
    }

    #[test]
    fn test_overflow_saturates() {
        assert_eq!(Balance(i64::MAX).deposit(1), Balance(i64::MAX));
        assert_eq!(Balance(i64::MIN).withdraw(1), Balance(i64::MIN));
    }

    #[test]
    fn test_describe() {
        assert_eq!(deposit_money(1000).describe(), "Deposited 1000");
        assert_eq!(withdraw_money(250).describe(), "Withdrew 250");
    }
}
