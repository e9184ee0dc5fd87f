//! Shared behavioural specs.
//!
//! A spec is written once per sample against that sample's contract trait and then run
//! against every implementation of it. Each case gets a fresh `A::default()`.

use crate::domain::model::{CaseReport, SuiteKind, SuiteReport};
use std::any::Any;
use std::fmt;
use std::panic;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailure {
    message: String,
}

impl CaseFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CaseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Lets a case use `?` on the implementation's own errors.
impl<E: std::error::Error> From<E> for CaseFailure {
    fn from(error: E) -> Self {
        Self::new(format!("unexpected error: {}", error))
    }
}

pub type CaseResult = std::result::Result<(), CaseFailure>;

pub struct Case<A> {
    pub name: &'static str,
    pub check: fn(&mut A) -> CaseResult,
}

pub struct Spec<A> {
    before_each: Option<fn(&mut A)>,
    cases: Vec<Case<A>>,
}

impl<A: Default> Default for Spec<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Default> Spec<A> {
    pub fn new() -> Self {
        Self {
            before_each: None,
            cases: Vec::new(),
        }
    }

    pub fn before_each(mut self, setup: fn(&mut A)) -> Self {
        self.before_each = Some(setup);
        self
    }

    pub fn case(mut self, name: &'static str, check: fn(&mut A) -> CaseResult) -> Self {
        self.cases.push(Case { name, check });
        self
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn case_names(&self) -> Vec<&'static str> {
        self.cases.iter().map(|case| case.name).collect()
    }

    pub fn run(&self, description: &str, kind: SuiteKind) -> SuiteReport {
        let cases = self.cases.iter().map(|case| self.run_case(case)).collect();
        SuiteReport::new(description, kind, cases)
    }

    fn run_case(&self, case: &Case<A>) -> CaseReport {
        let setup = self.before_each;
        let check = case.check;

        let outcome = panic::catch_unwind(move || {
            let mut api = A::default();
            if let Some(setup) = setup {
                setup(&mut api);
            }
            check(&mut api)
        });

        match outcome {
            Ok(Ok(())) => CaseReport::passed(case.name),
            Ok(Err(failure)) => CaseReport::failed(case.name, failure.message),
            Err(payload) => {
                CaseReport::failed(case.name, format!("panicked: {}", panic_message(&*payload)))
            }
        }
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Fails the current case unless the condition holds.
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        if !$cond {
            return Err($crate::core::spec::CaseFailure::new(concat!(
                "expected ",
                stringify!($cond)
            )));
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::core::spec::CaseFailure::new(format!($($arg)+)));
        }
    };
}

#[macro_export]
macro_rules! ensure_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if !(*left == *right) {
                    return Err($crate::core::spec::CaseFailure::new(format!(
                        "expected {} == {}\n  left: {:?}\n right: {:?}",
                        stringify!($left),
                        stringify!($right),
                        left,
                        right
                    )));
                }
            }
        }
    };
}

#[macro_export]
macro_rules! ensure_ne {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if *left == *right {
                    return Err($crate::core::spec::CaseFailure::new(format!(
                        "expected {} != {}\n  both: {:?}",
                        stringify!($left),
                        stringify!($right),
                        left
                    )));
                }
            }
        }
    };
}

/// Two decimal places, the usual "close to" tolerance for prices.
#[macro_export]
macro_rules! ensure_close {
    ($actual:expr, $expected:expr $(,)?) => {
        match (&$actual, &$expected) {
            (actual, expected) => {
                let actual: f64 = *actual;
                let expected: f64 = *expected;
                if (actual - expected).abs() >= 0.005 {
                    return Err($crate::core::spec::CaseFailure::new(format!(
                        "expected {} to be close to {}, got {}",
                        stringify!($actual),
                        expected,
                        actual
                    )));
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CaseOutcome;

    #[derive(Default)]
    struct Counter {
        value: i32,
    }

    fn spec() -> Spec<Counter> {
        Spec::<Counter>::new()
            .before_each(|counter| counter.value = 10)
            .case("starts from the setup value", |counter| {
                crate::ensure_eq!(counter.value, 10);
                Ok(())
            })
            .case("each case gets a fresh instance", |counter| {
                counter.value += 1;
                crate::ensure_eq!(counter.value, 11);
                Ok(())
            })
            .case("reports failures", |counter| {
                crate::ensure!(counter.value < 0, "value was {}", counter.value);
                Ok(())
            })
            .case("catches panics", |_| panic!("boom"))
    }

    #[test]
    fn test_run_reports_each_case() {
        let report = spec().run("counter-1-1", SuiteKind::Variant);

        assert_eq!(report.description, "counter-1-1");
        assert_eq!(report.cases.len(), 4);
        assert_eq!(report.passed(), 2);
        assert_eq!(
            report.cases[2].outcome,
            CaseOutcome::Failed {
                message: "value was 10".to_string()
            }
        );
        assert_eq!(
            report.cases[3].outcome,
            CaseOutcome::Failed {
                message: "panicked: boom".to_string()
            }
        );
    }

    #[test]
    fn test_ensure_close_tolerance() {
        fn close(value: f64) -> CaseResult {
            crate::ensure_close!(value, 1800.0);
            Ok(())
        }

        assert!(close(1800.004).is_ok());
        assert!(close(1800.2).is_err());
    }

    #[test]
    fn test_ensure_ne() {
        fn differs(a: i32, b: i32) -> CaseResult {
            crate::ensure_ne!(a, b);
            Ok(())
        }

        assert!(differs(1, 2).is_ok());
        assert_eq!(
            differs(3, 3).unwrap_err().message(),
            "expected a != b\n  both: 3"
        );
    }
}
