use crate::core::registry::Registry;
use crate::domain::model::SuiteId;
use crate::utils::error::Result;

pub const CATEGORY: &str = "feature_envy";

#[path = "1.tests.rs"]
pub mod spec_1;

// Sample 1 has only its refactored variant.
#[path = "refactored/1_1.rs"]
pub mod sample_1_1;

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(SuiteId::refactored(CATEGORY, "1", "1"), spec_1::spec::<sample_1_1::Api>)?;
    Ok(())
}
