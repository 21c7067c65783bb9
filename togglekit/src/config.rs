//! The bundle configuration section consumed from the host configuration
//! layer.

use std::collections::BTreeMap;

use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::ToggleError;

/// Configuration of one feature-toggle bundle.
///
/// Hosts embed this section in their own configuration type and hand it to
/// the bundle at startup. `feature_spec` is required and validated when the
/// manager is built, not at deserialisation time, so a host can surface all
/// configuration errors through one channel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BundleConfig {
    /// Identifier of the feature catalog to build against. Required and
    /// non-empty; an empty value fails the manager build.
    pub feature_spec: String,
    /// Whether the diagnostics console lands on the admin surface (the
    /// default) or on the general application surface.
    pub servlet_context_admin: bool,
    /// Explicit `name → enabled` overrides applied once at startup,
    /// before the manager is published.
    pub feature_states_override: BTreeMap<String, bool>,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            feature_spec: String::new(),
            servlet_context_admin: true,
            feature_states_override: BTreeMap::new(),
        }
    }
}

impl BundleConfig {
    /// Extracts the bundle section from any figment provider.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use figment::providers::Serialized;
    /// use togglekit::BundleConfig;
    ///
    /// # fn main() -> Result<(), togglekit::ToggleError> {
    /// let config = BundleConfig::from_provider(Serialized::defaults(
    ///     BundleConfig {
    ///         feature_spec: "demo".to_owned(),
    ///         ..BundleConfig::default()
    ///     },
    /// ))?;
    /// assert!(config.servlet_context_admin);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Config`] when the provider's data does not
    /// deserialise into a bundle section.
    pub fn from_provider(provider: impl figment::Provider) -> Result<Self, ToggleError> {
        Figment::from(provider)
            .extract()
            .map_err(ToggleError::config)
    }
}
