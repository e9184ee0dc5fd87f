use super::spec_2::{AccountNotice, BankSession, TransactionKind};
use std::cell::{Cell, RefCell};

thread_local! {
    static CURRENT_USER: RefCell<Option<String>> = const { RefCell::new(None) };
    static BALANCE: Cell<i64> = const { Cell::new(0) };
    static TRANSACTION_HISTORY: RefCell<Vec<(TransactionKind, i64)>> = const { RefCell::new(Vec::new()) };
}

fn reset() {
    CURRENT_USER.with(|user| *user.borrow_mut() = None);
    BALANCE.with(|balance| balance.set(0));
    TRANSACTION_HISTORY.with(|history| history.borrow_mut().clear());
}

fn login_user(username: &str) -> AccountNotice {
    CURRENT_USER.with(|user| *user.borrow_mut() = Some(username.to_string()));
    AccountNotice::LoggedIn {
        user: username.to_string(),
    }
}

fn deposit(amount: i64) -> AccountNotice {
    if amount > 0 {
        BALANCE.with(|balance| balance.set(balance.get() + amount));
        TRANSACTION_HISTORY
            .with(|history| history.borrow_mut().push((TransactionKind::Deposit, amount)));
        AccountNotice::Deposited {
            amount,
            balance: BALANCE.with(Cell::get),
        }
    } else {
        AccountNotice::InvalidDeposit
    }
}

fn withdraw(amount: i64) -> AccountNotice {
    if amount > 0 && amount <= BALANCE.with(Cell::get) {
        BALANCE.with(|balance| balance.set(balance.get() - amount));
        TRANSACTION_HISTORY
            .with(|history| history.borrow_mut().push((TransactionKind::Withdraw, amount)));
        AccountNotice::Withdrew {
            amount,
            balance: BALANCE.with(Cell::get),
        }
    } else {
        AccountNotice::InvalidWithdraw
    }
}

fn check_balance() -> AccountNotice {
    AccountNotice::Balance {
        balance: BALANCE.with(Cell::get),
    }
}

fn print_transaction_history() -> Vec<AccountNotice> {
    let mut lines = vec![AccountNotice::HistoryHeader {
        user: CURRENT_USER.with(|user| user.borrow().clone()),
    }];
    TRANSACTION_HISTORY.with(|history| {
        lines.extend(
            history
                .borrow()
                .iter()
                .map(|&(kind, amount)| AccountNotice::HistoryEntry { kind, amount }),
        );
    });
    lines
}

/// Every handle starts the globals over, so one session cannot see another's money.
pub struct Api;

impl Default for Api {
    fn default() -> Self {
        reset();
        Self
    }
}

impl BankSession for Api {
    fn login_user(&mut self, username: &str) -> AccountNotice {
        login_user(username)
    }

    fn deposit(&mut self, amount: i64) -> AccountNotice {
        deposit(amount)
    }

    fn withdraw(&mut self, amount: i64) -> AccountNotice {
        withdraw(amount)
    }

    fn check_balance(&self) -> AccountNotice {
        check_balance()
    }

    fn transaction_history(&self) -> Vec<AccountNotice> {
        print_transaction_history()
    }
}
