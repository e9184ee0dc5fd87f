use super::spec_2::{AccountDetails, BankApi, TransactionLog};
use chrono::Utc;
use thiserror::Error;

#[derive(Debug, Error)]
enum TransferError {
    #[error("Sender account not found.")]
    SenderNotFound,
    #[error("Receiver account not found.")]
    ReceiverNotFound,
    #[error("Insufficient balance")]
    InsufficientBalance,
}

struct Account {
    account_id: u32,
    owner: String,
    balance: i64,
}

impl Account {
    fn new(account_id: u32, owner: &str, balance: i64) -> Self {
        Self {
            account_id,
            owner: owner.to_string(),
            balance,
        }
    }

    fn withdraw(&mut self, amount: i64) -> Result<(), TransferError> {
        if self.balance < amount {
            return Err(TransferError::InsufficientBalance);
        }
        self.balance -= amount;
        Ok(())
    }

    fn deposit(&mut self, amount: i64) {
        self.balance += amount;
    }

    fn details(&self) -> AccountDetails {
        AccountDetails {
            account_id: self.account_id,
            owner: self.owner.clone(),
            balance: self.balance,
        }
    }
}

struct Bank {
    accounts: Vec<Account>,
    transaction_logs: Vec<TransactionLog>,
}

impl Default for Bank {
    fn default() -> Self {
        Self {
            accounts: vec![Account::new(1, "Alice", 1000), Account::new(2, "Bob", 500)],
            transaction_logs: Vec::new(),
        }
    }
}

impl Bank {
    fn find_account_index(&self, account_id: u32) -> Option<usize> {
        self.accounts
            .iter()
            .position(|acc| acc.account_id == account_id)
    }

    fn transfer(&mut self, sender_id: u32, receiver_id: u32, amount: i64) -> Result<(), TransferError> {
        let sender = self
            .find_account_index(sender_id)
            .ok_or(TransferError::SenderNotFound)?;
        let receiver = self
            .find_account_index(receiver_id)
            .ok_or(TransferError::ReceiverNotFound)?;

        self.accounts[sender].withdraw(amount)?;
        self.accounts[receiver].deposit(amount);

        self.log_transaction(sender_id, receiver_id, amount);
        tracing::debug!(
            "Transaction complete: {} to {}, Amount: ${}",
            self.accounts[sender].owner,
            self.accounts[receiver].owner,
            amount
        );
        Ok(())
    }

    fn perform_transaction(&mut self, sender_id: u32, receiver_id: u32, amount: i64) -> bool {
        match self.transfer(sender_id, receiver_id, amount) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("{}", e);
                false
            }
        }
    }

    fn log_transaction(&mut self, from: u32, to: u32, amount: i64) {
        self.transaction_logs.push(TransactionLog {
            from,
            to,
            amount,
            date: Utc::now(),
        });
    }

    fn account_details(&self, account_id: u32) -> Option<AccountDetails> {
        self.find_account_index(account_id)
            .map(|index| self.accounts[index].details())
    }
}

#[derive(Default)]
pub struct Api {
    bank: Bank,
}

impl BankApi for Api {
    fn perform_transaction(&mut self, sender_id: u32, receiver_id: u32, amount: i64) -> bool {
        self.bank.perform_transaction(sender_id, receiver_id, amount)
    }

    fn get_transaction_logs(&self) -> &[TransactionLog] {
        &self.bank.transaction_logs
    }

    fn get_account_details(&self, account_id: u32) -> Option<AccountDetails> {
        self.bank.account_details(account_id)
    }
}
