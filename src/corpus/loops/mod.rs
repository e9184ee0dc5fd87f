use crate::core::registry::Registry;
use crate::domain::model::SuiteId;
use crate::utils::error::Result;

pub const CATEGORY: &str = "loops";

#[path = "1.tests.rs"]
pub mod spec_1;

#[path = "1.rs"]
pub mod sample_1;

#[path = "refactored/1_1.rs"]
pub mod sample_1_1;

#[path = "2.tests.rs"]
pub mod spec_2;

#[path = "2.rs"]
pub mod sample_2;

#[path = "refactored/2_opt-4.rs"]
pub mod sample_2_opt_4;

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(SuiteId::original(CATEGORY, "1"), spec_1::spec::<sample_1::Api>)?;
    registry.register(SuiteId::refactored(CATEGORY, "1", "1"), spec_1::spec::<sample_1_1::Api>)?;
    registry.register(SuiteId::original(CATEGORY, "2"), spec_2::spec::<sample_2::Api>)?;
    registry.register(
        SuiteId::refactored(CATEGORY, "2", "opt-4"),
        spec_2::spec::<sample_2_opt_4::Api>,
    )?;
    Ok(())
}
