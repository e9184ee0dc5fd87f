pub mod discovery;
pub mod harness;
pub mod naming;
pub mod registry;
pub mod report;
pub mod reporter;
pub mod spec;

pub use crate::domain::model::{DiscoveredSuite, PlanEntry, SuiteId};
pub use crate::domain::ports::{ConfigProvider, CorpusTree, Reporter, TreeEntry};
pub use crate::utils::error::Result;
