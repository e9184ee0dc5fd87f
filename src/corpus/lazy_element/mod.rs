use crate::core::registry::Registry;
use crate::domain::model::SuiteId;
use crate::utils::error::Result;

pub const CATEGORY: &str = "lazy_element";

#[path = "1.tests.rs"]
pub mod spec_1;

#[path = "1.rs"]
pub mod sample_1;

#[path = "refactored/1_1.rs"]
pub mod sample_1_1;

#[path = "refactored/1_opt-2.rs"]
pub mod sample_1_opt_2;

#[path = "refactored/1_opt-3.rs"]
pub mod sample_1_opt_3;

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(SuiteId::original(CATEGORY, "1"), spec_1::spec::<sample_1::Api>)?;
    registry.register(SuiteId::refactored(CATEGORY, "1", "1"), spec_1::spec::<sample_1_1::Api>)?;
    registry.register(
        SuiteId::refactored(CATEGORY, "1", "opt-2"),
        spec_1::spec::<sample_1_opt_2::Api>,
    )?;
    registry.register(
        SuiteId::refactored(CATEGORY, "1", "opt-3"),
        spec_1::spec::<sample_1_opt_3::Api>,
    )?;
    Ok(())
}
