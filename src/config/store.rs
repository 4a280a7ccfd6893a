use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use super::{Criterion, ScoringConfig, ValidationReport};
use crate::error::ScoringError;

/// Read-mostly holder of the active rubric.
///
/// Readers clone the current `Arc` and keep it for the whole scoring call.
/// Writers build a modified copy and swap it in, so no reader ever observes a
/// partially applied change.
#[derive(Debug)]
pub struct ConfigStore {
    current: RwLock<Arc<ScoringConfig>>,
}

impl ConfigStore {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            current: RwLock::new(Arc::new(config)),
        }
    }

    /// The rubric in force right now.
    pub fn snapshot(&self) -> Arc<ScoringConfig> {
        // A poisoned lock still guards a fully swapped-in Arc.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn validate(&self) -> ValidationReport {
        self.snapshot().validate()
    }

    /// Enable or disable a criterion by copy-on-write. Returns whether the
    /// flag changed; an unchanged flag keeps the current revision.
    pub fn toggle_criterion(&self, id: &str, enabled: bool) -> Result<bool, ScoringError> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = ScoringConfig::clone(&guard);
        let changed = next.toggle_criterion(id, enabled)?;
        if changed {
            next.revision += 1;
            info!(
                criterion = id,
                enabled,
                revision = next.revision,
                "criterion toggled"
            );
            *guard = Arc::new(next);
        }
        Ok(changed)
    }

    /// Criteria of the current snapshot, in catalog order.
    pub fn criteria(&self) -> Vec<Criterion> {
        self.snapshot().criteria.clone()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
