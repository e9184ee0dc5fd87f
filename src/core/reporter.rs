use crate::core::{PlanEntry, Reporter};
use crate::domain::model::{CaseOutcome, RunSummary, SuiteReport};

/// Logs progress through `tracing`.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn plan_ready(&mut self, plan: &[PlanEntry]) {
        let placeholders = plan.iter().filter(|entry| entry.is_placeholder()).count();
        tracing::info!(
            "📋 {} suite(s) planned, {} placeholder(s)",
            plan.len() - placeholders,
            placeholders
        );
    }

    fn suite_finished(&mut self, report: &SuiteReport) {
        if report.is_success() {
            tracing::info!("✅ {} ({} passed)", report.description, report.passed());
            return;
        }

        tracing::error!(
            "❌ {} [{}] ({} passed, {} failed)",
            report.description,
            report.kind,
            report.passed(),
            report.failed()
        );
        for case in &report.cases {
            if let CaseOutcome::Failed { message } = &case.outcome {
                tracing::error!("   ✗ {}: {}", case.name, message);
            }
        }
    }

    fn run_finished(&mut self, summary: &RunSummary) {
        let elapsed = summary.finished_at - summary.started_at;
        tracing::info!(
            "📊 Suites: {} ({} failed), Cases: {} passed, {} failed, Time: {}ms",
            summary.suites.len(),
            summary.failed_suites().len(),
            summary.passed_cases(),
            summary.failed_cases(),
            elapsed.num_milliseconds()
        );
    }
}

/// Keeps everything in memory for assertions.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub planned: Vec<String>,
    pub finished: Vec<SuiteReport>,
    pub runs: usize,
}

impl Reporter for MemoryReporter {
    fn plan_ready(&mut self, plan: &[PlanEntry]) {
        self.planned = plan.iter().map(PlanEntry::label).collect();
    }

    fn suite_finished(&mut self, report: &SuiteReport) {
        self.finished.push(report.clone());
    }

    fn run_finished(&mut self, _summary: &RunSummary) {
        self.runs += 1;
    }
}
