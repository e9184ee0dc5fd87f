use crate::core::spec::Spec;
use crate::ensure_eq;

pub trait BankApi {
    fn add_bank_account(&mut self, account_number: u32, balance: i64);
    fn calculate_total_balance(&self) -> i64;
}

pub fn spec<A: BankApi + Default>() -> Spec<A> {
    Spec::<A>::new()
        .case("should add and calculate total balance for single account", |api| {
            api.add_bank_account(1, 1000);

            ensure_eq!(api.calculate_total_balance(), 1000);
            Ok(())
        })
        .case("should add and calculate total balance for multiple accounts", |api| {
            api.add_bank_account(1, 1000);
            api.add_bank_account(2, 2000);
            api.add_bank_account(3, 1500);

            ensure_eq!(api.calculate_total_balance(), 4500);
            Ok(())
        })
        .case("should handle no accounts gracefully", |api| {
            ensure_eq!(api.calculate_total_balance(), 0);
            Ok(())
        })
        .case("should handle adding accounts with zero balance", |api| {
            api.add_bank_account(1, 0);
            api.add_bank_account(2, 0);

            ensure_eq!(api.calculate_total_balance(), 0);
            Ok(())
        })
        .case("should correctly sum negative balances", |api| {
            api.add_bank_account(1, -500);
            api.add_bank_account(2, 2000);
            api.add_bank_account(3, -1500);

            ensure_eq!(api.calculate_total_balance(), 0);
            Ok(())
        })
}
