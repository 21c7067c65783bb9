//! Startup application of explicit feature-state overrides.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::ToggleError;
use crate::feature::FeatureState;
use crate::manager::FeatureManager;

/// Writes each `name → enabled` pair literally into the manager's store,
/// short-circuiting any dynamic activation strategy for those features.
///
/// Keys are independent and the application is idempotent: running the same
/// map twice leaves the same end state. Names the catalog does not declare
/// are skipped with a warning rather than failing startup; operators fix
/// them without an outage, and hosts wanting strict behaviour can pre-check
/// the map with [`FeatureCatalog::require`].
///
/// [`FeatureCatalog::require`]: crate::FeatureCatalog::require
///
/// # Errors
///
/// Returns [`ToggleError::Store`] when the backing store rejects a write.
pub fn apply_overrides(
    manager: &FeatureManager,
    overrides: &BTreeMap<String, bool>,
) -> Result<(), ToggleError> {
    for (name, &enabled) in overrides {
        match manager.catalog().lookup(name) {
            Some(feature) => {
                manager.set_state(FeatureState::new(feature, enabled))?;
                debug!(feature = feature.name(), enabled, "applied feature override");
            }
            None => {
                warn!(name = name.as_str(), "ignoring override for unknown feature");
            }
        }
    }
    Ok(())
}
