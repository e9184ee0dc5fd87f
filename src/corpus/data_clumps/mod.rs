use crate::core::registry::Registry;
use crate::domain::model::SuiteId;
use crate::utils::error::Result;

pub const CATEGORY: &str = "data_clumps";

#[path = "1.tests.rs"]
pub mod spec_1;

#[path = "1.rs"]
pub mod sample_1;

#[path = "refactored/1_opt-4.rs"]
pub mod sample_1_opt_4;

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(SuiteId::original(CATEGORY, "1"), spec_1::spec::<sample_1::Api>)?;
    registry.register(
        SuiteId::refactored(CATEGORY, "1", "opt-4"),
        spec_1::spec::<sample_1_opt_4::Api>,
    )?;
    Ok(())
}
