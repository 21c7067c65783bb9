//! Catalogs of declared features and the registry that resolves them.

use std::sync::Arc;

use crate::error::ToggleError;
use crate::feature::{Feature, FeatureSpec};

/// The runtime view of one feature spec: an ordered feature list with
/// name lookup.
///
/// Catalogs are fixed once built; nothing can be added to a running one.
#[derive(Debug, Clone)]
pub struct FeatureCatalog {
    identifier: &'static str,
    features: Vec<Feature>,
}

impl FeatureCatalog {
    /// Builds the catalog declared by the spec enum `S`.
    #[must_use]
    pub fn from_spec<S: FeatureSpec>() -> Self {
        Self::new(
            S::SPEC_NAME,
            S::variants().iter().map(|variant| variant.feature()).collect(),
        )
    }

    /// Builds a catalog from an explicit feature list.
    ///
    /// Mostly useful in tests; production catalogs come from
    /// [`FeatureCatalog::from_spec`].
    #[must_use]
    pub const fn new(identifier: &'static str, features: Vec<Feature>) -> Self {
        Self {
            identifier,
            features,
        }
    }

    /// Identifier the registry resolves this catalog by.
    #[must_use]
    pub const fn identifier(&self) -> &'static str {
        self.identifier
    }

    /// The declared features, in declaration order.
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Finds a feature by name, or `None` when the catalog declares no
    /// such feature.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Feature> {
        self.features
            .iter()
            .copied()
            .find(|feature| feature.name() == name)
    }

    /// Finds a feature by name, failing cleanly on unknown names.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::UnknownFeature`] when the catalog declares no
    /// feature called `name`.
    pub fn require(&self, name: &str) -> Result<Feature, ToggleError> {
        self.lookup(name)
            .ok_or_else(|| ToggleError::unknown_feature(name))
    }
}

/// The catalogs a bundle knows about, keyed by identifier.
///
/// Bundles construct the registry explicitly and hand it to the manager
/// builder; there is no ambient global registry. `BundleConfig.feature_spec`
/// selects one of the registered catalogs at startup.
///
/// # Examples
///
/// ```rust
/// use togglekit::{CatalogRegistry, feature_spec};
///
/// feature_spec! {
///     /// Demo catalog.
///     enum DemoFeature: "demo" {
///         /// Example toggle.
///         Sandbox,
///     }
/// }
///
/// let registry = CatalogRegistry::new().with_spec::<DemoFeature>();
/// assert!(registry.resolve("demo").is_ok());
/// assert!(registry.resolve("other").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogRegistry {
    catalogs: Vec<Arc<FeatureCatalog>>,
}

impl CatalogRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            catalogs: Vec::new(),
        }
    }

    /// Registers the catalog declared by the spec enum `S`.
    #[must_use]
    pub fn with_spec<S: FeatureSpec>(self) -> Self {
        self.with_catalog(FeatureCatalog::from_spec::<S>())
    }

    /// Registers an explicitly built catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: FeatureCatalog) -> Self {
        self.catalogs.push(Arc::new(catalog));
        self
    }

    /// Resolves `identifier` to a registered catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::UnknownCatalog`] when no registered catalog
    /// carries the identifier.
    pub fn resolve(&self, identifier: &str) -> Result<Arc<FeatureCatalog>, ToggleError> {
        self.catalogs
            .iter()
            .find(|catalog| catalog.identifier() == identifier)
            .cloned()
            .ok_or_else(|| ToggleError::unknown_catalog(identifier))
    }
}

#[cfg(test)]
mod tests;
