//! Pluggable storage for feature states.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::error::ToggleError;
use crate::feature::{Feature, FeatureState};

/// Backing storage for feature states.
///
/// Implementations are shared across request-handling threads, so reads and
/// writes must be safe under concurrent invocation; a reader observes either
/// the pre- or post-update state of a toggle, never a torn value. Stores
/// backed by network or disk own their timeout and retry policy; this core
/// never retries on their behalf.
pub trait StateStore: Send + Sync {
    /// Returns the stored state for `feature`, or `None` when the store
    /// holds no entry yet.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Store`] when the backend fails to read.
    fn state_of(&self, feature: Feature) -> Result<Option<FeatureState>, ToggleError>;

    /// Writes `state`, replacing any previous entry for its feature.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Store`] when the backend fails to write.
    fn set_state(&self, state: FeatureState) -> Result<(), ToggleError>;
}

/// The default store: a process-lifetime map behind a read/write lock.
///
/// State lives exactly as long as the process; restarts come up with every
/// feature back at its declared default.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    states: RwLock<BTreeMap<&'static str, FeatureState>>,
}

impl InMemoryStateStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for InMemoryStateStore {
    fn state_of(&self, feature: Feature) -> Result<Option<FeatureState>, ToggleError> {
        Ok(self.states.read().get(feature.name()).copied())
    }

    fn set_state(&self, state: FeatureState) -> Result<(), ToggleError> {
        self.states.write().insert(state.feature().name(), state);
        Ok(())
    }
}

#[cfg(test)]
mod tests;
