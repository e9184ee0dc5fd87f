use crate::core::spec::Spec;
use crate::{ensure, ensure_eq};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => f.write_str("deposit"),
            Self::Withdraw => f.write_str("withdraw"),
        }
    }
}

/// What the account reports after each operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountNotice {
    LoggedIn { user: String },
    Deposited { amount: i64, balance: i64 },
    InvalidDeposit,
    Withdrew { amount: i64, balance: i64 },
    InvalidWithdraw,
    Balance { balance: i64 },
    HistoryHeader { user: Option<String> },
    HistoryEntry { kind: TransactionKind, amount: i64 },
}

impl fmt::Display for AccountNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoggedIn { user } => write!(f, "User logged in: {}", user),
            Self::Deposited { amount, balance } => {
                write!(f, "Deposited: {} New Balance: {}", amount, balance)
            }
            Self::InvalidDeposit => f.write_str("Invalid deposit amount"),
            Self::Withdrew { amount, balance } => {
                write!(f, "Withdrew: {} New Balance: {}", amount, balance)
            }
            Self::InvalidWithdraw => {
                f.write_str("Invalid withdraw amount or insufficient balance")
            }
            Self::Balance { balance } => write!(f, "Current Balance: {}", balance),
            Self::HistoryHeader { user } => match user {
                Some(user) => write!(f, "Transaction History for {}", user),
                None => f.write_str("Transaction History for nobody"),
            },
            Self::HistoryEntry { kind, amount } => write!(f, "{} {}", kind, amount),
        }
    }
}

pub trait BankSession {
    fn login_user(&mut self, username: &str) -> AccountNotice;
    fn deposit(&mut self, amount: i64) -> AccountNotice;
    fn withdraw(&mut self, amount: i64) -> AccountNotice;
    fn check_balance(&self) -> AccountNotice;
    /// Header first, then one entry per transaction.
    fn transaction_history(&self) -> Vec<AccountNotice>;
}

pub fn spec<A: BankSession + Default>() -> Spec<A> {
    Spec::<A>::new()
        .case("should log in a user and print transaction history", |api| {
            let notice = api.login_user("Alice");

            ensure_eq!(
                notice,
                AccountNotice::LoggedIn {
                    user: "Alice".to_string()
                }
            );
            ensure_eq!(notice.to_string(), "User logged in: Alice");
            Ok(())
        })
        .case("should deposit money and update balance", |api| {
            api.login_user("Alice");

            let notice = api.deposit(1000);

            ensure_eq!(
                notice,
                AccountNotice::Deposited {
                    amount: 1000,
                    balance: 1000
                }
            );
            ensure_eq!(notice.to_string(), "Deposited: 1000 New Balance: 1000");
            ensure_eq!(api.check_balance(), AccountNotice::Balance { balance: 1000 });
            Ok(())
        })
        .case("should handle invalid deposit amounts", |api| {
            api.login_user("Alice");

            ensure_eq!(api.deposit(-100), AccountNotice::InvalidDeposit);
            ensure_eq!(api.check_balance(), AccountNotice::Balance { balance: 0 });
            Ok(())
        })
        .case("should refuse to withdraw more than the balance", |api| {
            api.login_user("Alice");
            api.deposit(500);

            ensure_eq!(api.withdraw(501), AccountNotice::InvalidWithdraw);
            ensure_eq!(api.withdraw(0), AccountNotice::InvalidWithdraw);
            ensure_eq!(api.check_balance(), AccountNotice::Balance { balance: 500 });
            Ok(())
        })
        .case("should print transaction history", |api| {
            api.login_user("Alice");
            api.deposit(1000);
            ensure_eq!(
                api.withdraw(200),
                AccountNotice::Withdrew {
                    amount: 200,
                    balance: 800
                }
            );

            let history = api.transaction_history();

            ensure_eq!(
                history,
                vec![
                    AccountNotice::HistoryHeader {
                        user: Some("Alice".to_string())
                    },
                    AccountNotice::HistoryEntry {
                        kind: TransactionKind::Deposit,
                        amount: 1000
                    },
                    AccountNotice::HistoryEntry {
                        kind: TransactionKind::Withdraw,
                        amount: 200
                    },
                ]
            );
            ensure!(
                history.iter().any(|line| line.to_string() == "withdraw 200"),
                "no withdraw 200 line in {:?}",
                history
            );
            Ok(())
        })
}
