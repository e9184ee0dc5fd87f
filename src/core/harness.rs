use crate::core::discovery::Discovery;
use crate::core::registry::{Loader, Registry};
use crate::core::spec::panic_message;
use crate::core::{ConfigProvider, CorpusTree, DiscoveredSuite, PlanEntry, Reporter};
use crate::domain::model::{RunSummary, SuiteReport};
use crate::utils::error::Result;
use chrono::Utc;
use std::panic::{self, AssertUnwindSafe};

/// Runs a plan against the registry, one suite after another.
pub struct Harness<'r, R: Reporter> {
    registry: &'r Registry,
    reporter: R,
}

impl<'r, R: Reporter> Harness<'r, R> {
    pub fn new(registry: &'r Registry, reporter: R) -> Self {
        Self { registry, reporter }
    }

    pub fn discover_and_run<T: CorpusTree, C: ConfigProvider>(
        &mut self,
        discovery: &Discovery<T, C>,
    ) -> Result<RunSummary> {
        let plan = discovery.discover()?;
        Ok(self.run(&plan))
    }

    pub fn run(&mut self, plan: &[PlanEntry]) -> RunSummary {
        let started_at = Utc::now();
        self.reporter.plan_ready(plan);

        let mut loader = Loader::new(self.registry);
        let mut suites = Vec::with_capacity(plan.len());

        for entry in plan {
            let report = match entry {
                PlanEntry::Placeholder { label, reason } => SuiteReport::placeholder(label, reason),
                PlanEntry::Suite(suite) => Self::run_suite(&mut loader, suite),
            };
            self.reporter.suite_finished(&report);
            suites.push(report);
        }

        let summary = RunSummary {
            started_at,
            finished_at: Utc::now(),
            suites,
        };
        self.reporter.run_finished(&summary);
        summary
    }

    /// A failure here only ever affects this one suite.
    fn run_suite(loader: &mut Loader<'_>, suite: &DiscoveredSuite) -> SuiteReport {
        let description = suite.id.description();

        let binding = match loader.load(suite) {
            Ok(binding) => binding,
            Err(e) => {
                tracing::warn!("No tests run for {}: {}", description, e);
                return SuiteReport::unresolved(&description, &e.to_string());
            }
        };

        match panic::catch_unwind(AssertUnwindSafe(|| binding.run())) {
            Ok(report) => report,
            Err(payload) => {
                let reason = format!("binding panicked: {}", panic_message(&*payload));
                tracing::error!("{}: {}", description, reason);
                SuiteReport::unresolved(&description, &reason)
            }
        }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reporter::MemoryReporter;
    use crate::core::spec::Spec;
    use crate::domain::model::{SuiteId, SuiteKind};
    use crate::ensure_eq;
    use std::path::PathBuf;

    #[derive(Default)]
    struct Greeter;

    impl Greeter {
        fn greet(&self) -> &'static str {
            "hello"
        }
    }

    fn greeter_spec() -> Spec<Greeter> {
        Spec::<Greeter>::new().case("should greet", |greeter| {
            ensure_eq!(greeter.greet(), "hello");
            Ok(())
        })
    }

    fn suite(tag: &str) -> PlanEntry {
        PlanEntry::Suite(DiscoveredSuite {
            id: SuiteId::refactored("greetings", "1", tag),
            path: PathBuf::from(format!("/corpus/greetings/refactored/1_{}.rs", tag)),
            spec_path: PathBuf::from("/corpus/greetings/1.tests.rs"),
        })
    }

    #[test]
    fn test_run_reports_every_entry_in_order() {
        let mut registry = Registry::new();
        registry
            .register(SuiteId::refactored("greetings", "1", "1"), greeter_spec)
            .unwrap();

        let plan = vec![
            PlanEntry::Placeholder {
                label: "comments".to_string(),
                reason: "No test specification found in category 'comments'".to_string(),
            },
            suite("1"),
            suite("2"),
        ];

        let mut harness = Harness::new(&registry, MemoryReporter::default());
        let summary = harness.run(&plan);

        let kinds: Vec<SuiteKind> = summary.suites.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SuiteKind::Placeholder, SuiteKind::Variant, SuiteKind::Unresolved]
        );
        assert_eq!(summary.passed_cases(), 1);
        assert_eq!(summary.failed_suites().len(), 2);

        let reporter = harness.into_reporter();
        assert_eq!(reporter.planned, vec!["comments", "greetings-1-1", "greetings-1-2"]);
        assert_eq!(reporter.finished.len(), 3);
        assert_eq!(reporter.runs, 1);
    }

    #[test]
    fn test_empty_plan_is_success() {
        let registry = Registry::new();
        let mut harness = Harness::new(&registry, MemoryReporter::default());

        let summary = harness.run(&[]);

        assert!(summary.is_success());
        assert_eq!(harness.reporter().runs, 1);
    }
}
