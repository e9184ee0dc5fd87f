use super::spec_2::{AccountNotice, BankSession, TransactionKind};

struct Transaction {
    kind: TransactionKind,
    amount: i64,
}

#[derive(Default)]
struct UserAccount {
    current_user: Option<String>,
    balance: i64,
    transaction_history: Vec<Transaction>,
}

impl UserAccount {
    fn login_user(&mut self, username: &str) -> AccountNotice {
        self.current_user = Some(username.to_string());
        AccountNotice::LoggedIn {
            user: username.to_string(),
        }
    }

    fn deposit(&mut self, amount: i64) -> AccountNotice {
        if amount <= 0 {
            return AccountNotice::InvalidDeposit;
        }

        self.balance += amount;
        self.transaction_history.push(Transaction {
            kind: TransactionKind::Deposit,
            amount,
        });
        AccountNotice::Deposited {
            amount,
            balance: self.balance,
        }
    }

    fn withdraw(&mut self, amount: i64) -> AccountNotice {
        if amount <= 0 || amount > self.balance {
            return AccountNotice::InvalidWithdraw;
        }

        self.balance -= amount;
        self.transaction_history.push(Transaction {
            kind: TransactionKind::Withdraw,
            amount,
        });
        AccountNotice::Withdrew {
            amount,
            balance: self.balance,
        }
    }

    fn print_transaction_history(&self) -> Vec<AccountNotice> {
        std::iter::once(AccountNotice::HistoryHeader {
            user: self.current_user.clone(),
        })
        .chain(self.transaction_history.iter().map(|t| AccountNotice::HistoryEntry {
            kind: t.kind,
            amount: t.amount,
        }))
        .collect()
    }
}

#[derive(Default)]
pub struct Api {
    user_account: UserAccount,
}

impl BankSession for Api {
    fn login_user(&mut self, username: &str) -> AccountNotice {
        self.user_account.login_user(username)
    }

    fn deposit(&mut self, amount: i64) -> AccountNotice {
        self.user_account.deposit(amount)
    }

    fn withdraw(&mut self, amount: i64) -> AccountNotice {
        self.user_account.withdraw(amount)
    }

    fn check_balance(&self) -> AccountNotice {
        AccountNotice::Balance {
            balance: self.user_account.balance,
        }
    }

    fn transaction_history(&self) -> Vec<AccountNotice> {
        self.user_account.print_transaction_history()
    }
}
