pub mod config;
pub mod core;
pub mod corpus;
pub mod domain;
pub mod refactor;
pub mod utils;

pub use config::cli::LocalTree;
pub use config::toml_config::TomlConfig;
pub use config::{CorpusSettings, ReportSettings};

#[cfg(feature = "cli")]
pub use config::args::Cli;

pub use core::discovery::Discovery;
pub use core::harness::Harness;
pub use core::registry::{Binding, Loader, Registry};
pub use core::report::ReportWriter;
pub use core::reporter::{MemoryReporter, TracingReporter};
pub use core::spec::{CaseFailure, CaseResult, Spec};
pub use domain::model::{
    CaseOutcome, CaseReport, DiscoveredSuite, PlanEntry, RunSummary, SuiteId, SuiteKind,
    SuiteReport, VariantTag,
};
pub use utils::error::{HarnessError, Result};
