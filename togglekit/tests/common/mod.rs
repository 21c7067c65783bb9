//! Shared fixtures for the integration suites.
//!
//! Provides the catalog the suites evaluate against, a bundle wired to it,
//! and a helper building the matching bundle configuration.

use std::sync::Arc;

use togglekit::{
    BundleConfig, CatalogRegistry, FeatureToggleBundle, InMemoryStateStore, StateStore,
    feature_spec,
};

feature_spec! {
    /// Catalog the integration suites evaluate against.
    pub enum ShopFeature: "shop" {
        /// One-page checkout experiment, off by default.
        FastCheckout,
        /// Gift wrapping at checkout, live from first boot.
        GiftWrapping (enabled),
    }
}

/// Bundle under test: projects the host configuration straight through and
/// registers the shop catalog. A custom store can be injected the same way
/// the host would swap in a persistent one.
pub struct TestBundle {
    /// Store handed to the manager builder; `None` keeps the default.
    pub store: Option<Arc<dyn StateStore>>,
}

impl TestBundle {
    /// A bundle with the default in-memory store.
    pub fn new() -> Self {
        Self { store: None }
    }

    /// A bundle backed by `store`.
    pub fn with_store(store: Arc<dyn StateStore>) -> Self {
        Self { store: Some(store) }
    }
}

impl FeatureToggleBundle for TestBundle {
    type HostConfig = BundleConfig;

    fn bundle_config(&self, config: &BundleConfig) -> BundleConfig {
        config.clone()
    }

    fn catalog_registry(&self) -> CatalogRegistry {
        CatalogRegistry::new().with_spec::<ShopFeature>()
    }

    fn state_store(&self) -> Arc<dyn StateStore> {
        self.store
            .clone()
            .unwrap_or_else(|| Arc::new(InMemoryStateStore::new()))
    }
}

/// Bundle configuration selecting the shop catalog with defaults elsewhere.
pub fn shop_config() -> BundleConfig {
    BundleConfig {
        feature_spec: "shop".to_owned(),
        ..BundleConfig::default()
    }
}
