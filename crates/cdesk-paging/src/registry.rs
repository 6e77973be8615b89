//! Section registry: the single source of truth for paging state.

use std::collections::BTreeMap;

use tracing::{debug, error, warn};

use crate::error::{PagingError, Result};
use crate::section::SectionKind;
use crate::state::{PageDefaults, PageState};

/// Map from section to its live [`PageState`].
///
/// Constructed once at startup and handed to the components that need it.
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: BTreeMap<SectionKind, PageState>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a section with its defaults.
    ///
    /// Returns `true` when the section was created. Registering an existing
    /// section is a no-op, even with different defaults.
    pub fn register(&mut self, section: SectionKind, defaults: PageDefaults) -> bool {
        if let Some(existing) = self.sections.get(&section) {
            if existing.defaults() != defaults {
                warn!(
                    section = %section,
                    kept = existing.defaults().items_per_page(),
                    ignored = defaults.items_per_page(),
                    "section already registered with different defaults"
                );
            }
            return false;
        }
        debug!(section = %section, items_per_page = defaults.items_per_page(), "section registered");
        self.sections
            .insert(section, PageState::new(section, defaults));
        true
    }

    /// Look up a section's state.
    pub fn get(&self, section: SectionKind) -> Result<&PageState> {
        self.sections.get(&section).ok_or_else(|| unknown(section))
    }

    /// Look up a section's state for mutation.
    pub fn get_mut(&mut self, section: SectionKind) -> Result<&mut PageState> {
        self.sections.get_mut(&section).ok_or_else(|| unknown(section))
    }

    /// Restore a section's defaults and clear its ownership.
    pub fn reset(&mut self, section: SectionKind) -> Result<()> {
        self.get_mut(section)?.reset();
        debug!(section = %section, "section reset");
        Ok(())
    }

    /// Reset every registered section.
    pub fn reset_all(&mut self) {
        for state in self.sections.values_mut() {
            state.reset();
        }
        debug!(count = self.sections.len(), "all sections reset");
    }

    pub fn contains(&self, section: SectionKind) -> bool {
        self.sections.contains_key(&section)
    }

    /// Registered sections in order.
    pub fn sections(&self) -> impl Iterator<Item = SectionKind> + '_ {
        self.sections.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

fn unknown(section: SectionKind) -> PagingError {
    error!(section = %section, "section used before registration");
    PagingError::unknown_section(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Ownership;

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = SectionRegistry::new();
        assert!(registry.register(SectionKind::Users, PageDefaults::default()));
        assert!(!registry.register(SectionKind::Users, PageDefaults::new(50).unwrap()));
        assert_eq!(
            registry.get(SectionKind::Users).unwrap().items_per_page(),
            10
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_section() {
        let mut registry = SectionRegistry::new();
        assert_eq!(
            registry.get(SectionKind::Faqs).unwrap_err(),
            PagingError::unknown_section("faqs")
        );
        assert!(registry.reset(SectionKind::Faqs).is_err());
    }

    #[test]
    fn test_reset_clears_ownership() {
        let mut registry = SectionRegistry::new();
        registry.register(SectionKind::Invoices, PageDefaults::default());
        registry
            .get_mut(SectionKind::Invoices)
            .unwrap()
            .replace_dataset(vec![serde_json::json!({"id": 1})], Ownership::Real);
        registry.reset(SectionKind::Invoices).unwrap();
        let state = registry.get(SectionKind::Invoices).unwrap();
        assert_eq!(state.ownership(), Ownership::Unset);
        assert_eq!(state.total_items(), 0);
    }

    #[test]
    fn test_sections_are_ordered() {
        let mut registry = SectionRegistry::new();
        registry.register(SectionKind::Suppliers, PageDefaults::default());
        registry.register(SectionKind::Users, PageDefaults::default());
        assert_eq!(
            registry.sections().collect::<Vec<_>>(),
            vec![SectionKind::Users, SectionKind::Suppliers]
        );
    }
}
