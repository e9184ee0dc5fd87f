use super::spec_2::{AccountNotice, BankSession, TransactionKind};

#[derive(Default)]
struct BankAccount {
    current_user: Option<String>,
    balance: i64,
    transaction_history: Vec<(TransactionKind, i64)>,
}

impl BankAccount {
    fn login_user(&mut self, username: &str) -> AccountNotice {
        self.current_user = Some(username.to_string());
        self.log_message(AccountNotice::LoggedIn {
            user: username.to_string(),
        })
    }

    fn deposit(&mut self, amount: i64) -> AccountNotice {
        if amount > 0 {
            self.balance += amount;
            self.add_transaction(TransactionKind::Deposit, amount);
            self.log_message(AccountNotice::Deposited {
                amount,
                balance: self.balance,
            })
        } else {
            self.log_message(AccountNotice::InvalidDeposit)
        }
    }

    fn withdraw(&mut self, amount: i64) -> AccountNotice {
        if amount > 0 && amount <= self.balance {
            self.balance -= amount;
            self.add_transaction(TransactionKind::Withdraw, amount);
            self.log_message(AccountNotice::Withdrew {
                amount,
                balance: self.balance,
            })
        } else {
            self.log_message(AccountNotice::InvalidWithdraw)
        }
    }

    fn add_transaction(&mut self, kind: TransactionKind, amount: i64) {
        self.transaction_history.push((kind, amount));
    }

    fn log_message(&self, notice: AccountNotice) -> AccountNotice {
        tracing::debug!("{}", notice);
        notice
    }
}

#[derive(Default)]
pub struct Api {
    bank_account: BankAccount,
}

impl BankSession for Api {
    fn login_user(&mut self, username: &str) -> AccountNotice {
        self.bank_account.login_user(username)
    }

    fn deposit(&mut self, amount: i64) -> AccountNotice {
        self.bank_account.deposit(amount)
    }

    fn withdraw(&mut self, amount: i64) -> AccountNotice {
        self.bank_account.withdraw(amount)
    }

    fn check_balance(&self) -> AccountNotice {
        AccountNotice::Balance {
            balance: self.bank_account.balance,
        }
    }

    fn transaction_history(&self) -> Vec<AccountNotice> {
        let account = &self.bank_account;
        let mut lines = vec![AccountNotice::HistoryHeader {
            user: account.current_user.clone(),
        }];
        for &(kind, amount) in &account.transaction_history {
            lines.push(AccountNotice::HistoryEntry { kind, amount });
        }
        lines
    }
}
