//! Load coordination: who owns a section's dataset.
//!
//! Two paths can populate a section: its real loader and a generic
//! auto-initializer that fills empty sections with sample data. They race,
//! and either may finish first. The rules:
//!
//! | From       | Real claim | Fallback claim                  |
//! |------------|------------|---------------------------------|
//! | `Unset`    | applied    | applied if the dataset is empty |
//! | `Fallback` | applied    | applied if the dataset is empty |
//! | `Real`     | applied    | skipped                         |
//!
//! Only [`SectionRegistry::reset`] returns a section to `Unset`. The ownership
//! check and the write happen inside one synchronous call, so no other
//! callback can interleave between them.

use tracing::{debug, info};

use crate::error::Result;
use crate::record::{LoadPayload, Record};
use crate::registry::SectionRegistry;
use crate::section::SectionKind;
use crate::state::Ownership;

/// Result of a claim attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// The dataset was written.
    Applied {
        /// Ownership before the claim.
        previous: Ownership,
    },
    /// The claim was refused and the section is unchanged.
    Skipped(SkipReason),
}

impl ClaimOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Why a fallback claim was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Live data already owns the section.
    OwnedByReal,
    /// The section already holds sample data.
    AlreadyPopulated,
}

/// Install live data. Always wins, including over sample data.
pub fn claim_real(
    registry: &mut SectionRegistry,
    section: SectionKind,
    payload: impl Into<LoadPayload>,
) -> Result<ClaimOutcome> {
    let state = registry.get_mut(section)?;
    let previous = state.ownership();
    let items = payload.into().into_items();
    let count = items.len();
    state.replace_dataset(items, Ownership::Real);
    info!(
        section = %section,
        items = count,
        previous = ?previous,
        "real data claimed section"
    );
    Ok(ClaimOutcome::Applied { previous })
}

/// Install sample data, unless live data owns the section or it is already
/// populated. `factory` only runs when the claim is applied.
pub fn claim_fallback<F>(
    registry: &mut SectionRegistry,
    section: SectionKind,
    factory: F,
) -> Result<ClaimOutcome>
where
    F: FnOnce() -> Vec<Record>,
{
    let state = registry.get_mut(section)?;
    let previous = state.ownership();
    if previous == Ownership::Real {
        debug!(section = %section, "fallback skipped: section owns real data");
        return Ok(ClaimOutcome::Skipped(SkipReason::OwnedByReal));
    }
    if state.total_items() > 0 {
        debug!(
            section = %section,
            items = state.total_items(),
            "fallback skipped: section already populated"
        );
        return Ok(ClaimOutcome::Skipped(SkipReason::AlreadyPopulated));
    }
    let items = factory();
    let count = items.len();
    state.replace_dataset(items, Ownership::Fallback);
    info!(section = %section, items = count, "sample data claimed section");
    Ok(ClaimOutcome::Applied { previous })
}
