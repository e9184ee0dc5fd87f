use crate::core::registry::Registry;
use crate::domain::model::SuiteId;
use crate::utils::error::Result;

pub const CATEGORY: &str = "long_function";

#[path = "2.tests.rs"]
pub mod spec_2;

#[path = "2.rs"]
pub mod sample_2;

#[path = "refactored/2_1.rs"]
pub mod sample_2_1;

#[path = "refactored/2_opt-1-1.rs"]
pub mod sample_2_opt_1_1;

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(SuiteId::original(CATEGORY, "2"), spec_2::spec::<sample_2::Api>)?;
    registry.register(SuiteId::refactored(CATEGORY, "2", "1"), spec_2::spec::<sample_2_1::Api>)?;
    registry.register(
        SuiteId::refactored(CATEGORY, "2", "opt-1-1"),
        spec_2::spec::<sample_2_opt_1_1::Api>,
    )?;
    Ok(())
}
