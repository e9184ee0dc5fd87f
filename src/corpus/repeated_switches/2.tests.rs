use crate::core::spec::Spec;
use crate::ensure_eq;

/// Accounts are keyed by number. Unknown account types get the basic feature set.
pub trait AccountsApi {
    fn create_account(&mut self, account_number: &str, account_type: &str, balance: i64);
    fn deposit(&mut self, account_number: &str, amount: i64);
    fn withdraw(&mut self, account_number: &str, amount: i64);
    fn get_account_features(&self, account_number: &str) -> Option<Vec<String>>;
    /// One line per account, in creation order.
    fn generate_report(&self) -> Vec<String>;
    fn get_balance(&self, account_number: &str) -> Option<i64>;
}

pub fn spec<A: AccountsApi + Default>() -> Spec<A> {
    Spec::<A>::new()
        .case("should create a savings account and get its features", |api| {
            api.create_account("123456", "savings", 1000);

            ensure_eq!(
                api.get_account_features("123456"),
                Some(vec![
                    "Interest Accumulation".to_string(),
                    "Limited Withdrawals".to_string()
                ])
            );
            Ok(())
        })
        .case("should deposit money into an account and get the correct balance", |api| {
            api.create_account("123456", "savings", 1000);
            api.deposit("123456", 500);

            ensure_eq!(api.get_balance("123456"), Some(1500));
            Ok(())
        })
        .case("should withdraw money from an account and get the correct balance", |api| {
            api.create_account("123456", "savings", 1000);
            api.withdraw("123456", 300);

            ensure_eq!(api.get_balance("123456"), Some(700));
            Ok(())
        })
        .case("should generate a report for all accounts", |api| {
            api.create_account("123456", "savings", 1000);
            api.create_account("234567", "checking", 2000);
            api.create_account("345678", "business", 3000);
            api.create_account("456789", "student", 50);

            ensure_eq!(
                api.generate_report(),
                vec![
                    "Savings Account Report for 123456: Balance is $1000",
                    "Checking Account Report for 234567: Balance is $2000",
                    "Business Account Report for 345678: Balance is $3000",
                    "General Account Report for 456789: Balance is $50",
                ]
            );
            ensure_eq!(
                api.get_account_features("456789"),
                Some(vec!["Basic Features".to_string()])
            );
            Ok(())
        })
        .case("should return null for non-existent account features", |api| {
            ensure_eq!(api.get_account_features("nonexistent"), None);
            Ok(())
        })
        .case("should return null for balance of non-existent account", |api| {
            api.deposit("nonexistent", 100);

            ensure_eq!(api.get_balance("nonexistent"), None);
            Ok(())
        })
}
