use crate::core::registry::Registry;
use crate::domain::model::SuiteId;
use crate::utils::error::Result;

pub const CATEGORY: &str = "global_data";

#[path = "2.tests.rs"]
pub mod spec_2;

#[path = "2.rs"]
pub mod sample_2;

#[path = "refactored/2_1.rs"]
pub mod sample_2_1;

#[path = "refactored/2_opt-2.rs"]
pub mod sample_2_opt_2;

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(SuiteId::original(CATEGORY, "2"), spec_2::spec::<sample_2::Api>)?;
    registry.register(SuiteId::refactored(CATEGORY, "2", "1"), spec_2::spec::<sample_2_1::Api>)?;
    registry.register(
        SuiteId::refactored(CATEGORY, "2", "opt-2"),
        spec_2::spec::<sample_2_opt_2::Api>,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::spec_2::{AccountNotice, BankSession};
    use super::*;
    use crate::domain::model::SuiteKind;

    /// Behaves like the others except that every account opens with 500 already in it.
    struct Seeded {
        inner: sample_2_1::Api,
    }

    impl Default for Seeded {
        fn default() -> Self {
            let mut inner = sample_2_1::Api::default();
            inner.deposit(500);
            Self { inner }
        }
    }

    impl BankSession for Seeded {
        fn login_user(&mut self, username: &str) -> AccountNotice {
            self.inner.login_user(username)
        }

        fn deposit(&mut self, amount: i64) -> AccountNotice {
            self.inner.deposit(amount)
        }

        fn withdraw(&mut self, amount: i64) -> AccountNotice {
            self.inner.withdraw(amount)
        }

        fn check_balance(&self) -> AccountNotice {
            self.inner.check_balance()
        }

        fn transaction_history(&self) -> Vec<AccountNotice> {
            self.inner.transaction_history()
        }
    }

    #[test]
    fn test_prefunded_account_fails_balance_cases() {
        let report = spec_2::spec::<Seeded>().run("global_data-2-seeded", SuiteKind::Variant);

        let failed: Vec<&str> = report
            .cases
            .iter()
            .filter(|case| !case.is_passed())
            .map(|case| case.name.as_str())
            .collect();
        assert_eq!(
            failed,
            vec![
                "should deposit money and update balance",
                "should handle invalid deposit amounts",
                "should refuse to withdraw more than the balance",
                "should print transaction history",
            ]
        );
    }

    #[test]
    fn test_globals_start_over_for_each_run() {
        for _ in 0..2 {
            let report = spec_2::spec::<sample_2::Api>()
                .run("global_data-2-original", SuiteKind::Original);
            assert!(report.is_success(), "{:?}", report);
        }
    }
}
