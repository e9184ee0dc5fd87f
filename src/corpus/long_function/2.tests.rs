use crate::core::spec::Spec;
use crate::{ensure, ensure_eq};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDetails {
    pub account_id: u32,
    pub owner: String,
    pub balance: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionLog {
    pub from: u32,
    pub to: u32,
    pub amount: i64,
    pub date: DateTime<Utc>,
}

/// A bank that opens with Alice (id 1, 1000) and Bob (id 2, 500).
pub trait BankApi {
    /// `false` when either account is missing or the sender cannot cover the amount.
    fn perform_transaction(&mut self, sender_id: u32, receiver_id: u32, amount: i64) -> bool;
    fn get_transaction_logs(&self) -> &[TransactionLog];
    fn get_account_details(&self, account_id: u32) -> Option<AccountDetails>;
}

fn balance_of<A: BankApi>(api: &A, account_id: u32) -> Option<i64> {
    api.get_account_details(account_id)
        .map(|details| details.balance)
}

pub fn spec<A: BankApi + Default>() -> Spec<A> {
    Spec::<A>::new()
        .case("should perform transaction successfully", |api| {
            let result = api.perform_transaction(1, 2, 300);

            ensure!(result);
            ensure_eq!(balance_of(api, 1), Some(700));
            ensure_eq!(balance_of(api, 2), Some(800));
            Ok(())
        })
        .case("should fail transaction due to insufficient balance", |api| {
            let result = api.perform_transaction(1, 2, 1200);

            ensure!(!result);
            ensure_eq!(balance_of(api, 1), Some(1000));
            ensure_eq!(balance_of(api, 2), Some(500));
            Ok(())
        })
        .case("should fail transaction due to non-existent sender account", |api| {
            ensure!(!api.perform_transaction(3, 2, 300));
            Ok(())
        })
        .case("should fail transaction due to non-existent receiver account", |api| {
            ensure!(!api.perform_transaction(1, 3, 300));
            ensure_eq!(balance_of(api, 1), Some(1000));
            Ok(())
        })
        .case("should return transaction logs", |api| {
            let before = Utc::now();
            api.perform_transaction(1, 2, 300);
            let logs = api.get_transaction_logs();

            ensure_eq!(logs.len(), 1);
            ensure_eq!((logs[0].from, logs[0].to, logs[0].amount), (1, 2, 300));
            ensure!(logs[0].date >= before, "log dated {} before the transfer", logs[0].date);
            Ok(())
        })
        .case("should return account details", |api| {
            ensure_eq!(
                api.get_account_details(1),
                Some(AccountDetails {
                    account_id: 1,
                    owner: "Alice".to_string(),
                    balance: 1000,
                })
            );
            Ok(())
        })
        .case("should return null for non-existent account details", |api| {
            ensure_eq!(api.get_account_details(3), None);
            Ok(())
        })
}
