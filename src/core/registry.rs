use crate::core::spec::Spec;
use crate::domain::model::{DiscoveredSuite, SuiteId, SuiteKind, SuiteReport, VariantTag};
use crate::utils::error::{HarnessError, Result};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::rc::Rc;

/// One implementation type bound to the spec of its sample, with the type erased.
pub struct Binding {
    id: SuiteId,
    case_count: usize,
    runner: Box<dyn Fn(&str, SuiteKind) -> SuiteReport>,
}

impl Binding {
    pub fn new<A: Default + 'static>(id: SuiteId, spec: fn() -> Spec<A>) -> Self {
        Self {
            id,
            case_count: spec().len(),
            runner: Box::new(move |description: &str, kind: SuiteKind| spec().run(description, kind)),
        }
    }

    pub fn id(&self) -> &SuiteId {
        &self.id
    }

    pub fn case_count(&self) -> usize {
        self.case_count
    }

    pub fn kind(&self) -> SuiteKind {
        match self.id.variant {
            VariantTag::Original => SuiteKind::Original,
            VariantTag::Refactored(_) => SuiteKind::Variant,
        }
    }

    pub fn run(&self) -> SuiteReport {
        (self.runner)(&self.id.description(), self.kind())
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("id", &self.id)
            .field("case_count", &self.case_count)
            .finish()
    }
}

/// Explicit map from suite ids to bindings, filled by the corpus modules' `register` calls.
#[derive(Default)]
pub struct Registry {
    bindings: BTreeMap<SuiteId, Rc<Binding>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<A: Default + 'static>(&mut self, id: SuiteId, spec: fn() -> Spec<A>) -> Result<()> {
        if self.bindings.contains_key(&id) {
            return Err(HarnessError::DuplicateBinding {
                id: id.description(),
            });
        }

        tracing::trace!("Registering {}", id);
        self.bindings.insert(id.clone(), Rc::new(Binding::new(id, spec)));
        Ok(())
    }

    pub fn get(&self, id: &SuiteId) -> Option<Rc<Binding>> {
        self.bindings.get(id).cloned()
    }

    pub fn ids(&self) -> impl Iterator<Item = &SuiteId> {
        self.bindings.keys()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Resolves discovered files to bindings. Repeat loads of a path hit the cache.
pub struct Loader<'r> {
    registry: &'r Registry,
    loaded: HashMap<PathBuf, Rc<Binding>>,
}

impl<'r> Loader<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            loaded: HashMap::new(),
        }
    }

    pub fn load(&mut self, suite: &DiscoveredSuite) -> Result<Rc<Binding>> {
        if let Some(binding) = self.loaded.get(&suite.path) {
            tracing::trace!("{} already loaded", suite.path.display());
            return Ok(Rc::clone(binding));
        }

        let binding =
            self.registry
                .get(&suite.id)
                .ok_or_else(|| HarnessError::UnresolvedImplementation {
                    id: suite.id.description(),
                    path: suite.path.clone(),
                })?;

        tracing::debug!("Loaded {} from {}", suite.id, suite.path.display());
        self.loaded.insert(suite.path.clone(), Rc::clone(&binding));
        Ok(binding)
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Doubler;

    impl Doubler {
        fn double(&self, x: i32) -> i32 {
            x * 2
        }
    }

    fn spec() -> Spec<Doubler> {
        Spec::<Doubler>::new().case("doubles", |api| {
            crate::ensure_eq!(api.double(21), 42);
            Ok(())
        })
    }

    fn suite(id: SuiteId, path: &str) -> DiscoveredSuite {
        DiscoveredSuite {
            id,
            path: PathBuf::from(path),
            spec_path: PathBuf::from("math/1.tests.rs"),
        }
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = Registry::new();
        registry.register(SuiteId::refactored("math", "1", "1"), spec).unwrap();

        let second = registry.register(SuiteId::refactored("math", "1", "1"), spec);

        assert!(matches!(second, Err(HarnessError::DuplicateBinding { .. })));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_loader_is_idempotent() {
        let mut registry = Registry::new();
        registry.register(SuiteId::refactored("math", "1", "1"), spec).unwrap();
        let mut loader = Loader::new(&registry);
        let discovered = suite(SuiteId::refactored("math", "1", "1"), "math/refactored/1_1.rs");

        let first = loader.load(&discovered).unwrap();
        let second = loader.load(&discovered).unwrap();

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(loader.loaded_count(), 1);
        assert_eq!(first.run(), second.run());
    }

    #[test]
    fn test_unregistered_suite_is_unresolved() {
        let registry = Registry::new();
        let mut loader = Loader::new(&registry);

        let result = loader.load(&suite(SuiteId::refactored("math", "1", "2"), "math/refactored/1_2.rs"));

        assert!(matches!(
            result,
            Err(HarnessError::UnresolvedImplementation { ref id, .. }) if id == "math-1-2"
        ));
        assert_eq!(loader.loaded_count(), 0);
    }

    #[test]
    fn test_binding_kind_follows_variant() {
        let original = Binding::new(SuiteId::original("math", "1"), spec);
        let variant = Binding::new(SuiteId::refactored("math", "1", "1"), spec);

        assert_eq!(original.run().kind, SuiteKind::Original);
        assert_eq!(variant.run().kind, SuiteKind::Variant);
        assert_eq!(variant.case_count(), 1);
    }
}
