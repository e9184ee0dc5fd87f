//! The built-in corpus.
//!
//! Every category directory holds numbered samples (`1.rs`), the shared spec for each sample
//! (`1.tests.rs`) and a `refactored/` folder of variants (`1_opt-4.rs`). The files are
//! compiled into this module tree, and the same directory is what discovery walks.

use crate::core::registry::Registry;
use crate::utils::error::Result;

pub mod data_clumps;
pub mod feature_envy;
pub mod global_data;
pub mod lazy_element;
pub mod long_function;
pub mod loops;
pub mod refused_bequest;
pub mod repeated_switches;

pub const DEFAULT_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/corpus");

/// A registry holding every compiled implementation of the built-in corpus.
pub fn registry() -> Result<Registry> {
    let mut registry = Registry::new();

    data_clumps::register(&mut registry)?;
    feature_envy::register(&mut registry)?;
    global_data::register(&mut registry)?;
    lazy_element::register(&mut registry)?;
    long_function::register(&mut registry)?;
    loops::register(&mut registry)?;
    refused_bequest::register(&mut registry)?;
    repeated_switches::register(&mut registry)?;

    tracing::debug!("Registered {} corpus bindings", registry.len());
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SuiteId;

    #[test]
    fn test_registry_holds_every_implementation() {
        let registry = registry().unwrap();

        assert_eq!(registry.len(), 24);
        assert!(registry
            .get(&SuiteId::refactored("data_clumps", "1", "opt-4"))
            .is_some());
        assert!(registry
            .get(&SuiteId::original("feature_envy", "1"))
            .is_none());
    }

    #[test]
    fn test_every_binding_passes_its_spec() {
        let registry = registry().unwrap();

        for id in registry.ids() {
            let report = registry.get(id).unwrap().run();
            assert!(report.is_success(), "{:?}", report);
        }
    }
}
