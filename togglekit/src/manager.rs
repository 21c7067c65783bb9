//! The feature manager: evaluation entry point and its builder.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::catalog::{CatalogRegistry, FeatureCatalog};
use crate::error::ToggleError;
use crate::feature::{Feature, FeatureState, FeatureUser};
use crate::store::{InMemoryStateStore, StateStore};

/// Supplies the caller context for the current evaluation.
///
/// Hosts wire this to their request-scoped authentication; the default
/// provider hands back the built-in admin user.
pub trait UserProvider: Send + Sync {
    /// The user on whose behalf the current evaluation runs.
    fn current_user(&self) -> FeatureUser;
}

/// A provider that always answers with the same user.
#[derive(Debug, Clone)]
pub struct StaticUserProvider {
    user: FeatureUser,
}

impl StaticUserProvider {
    /// Creates a provider pinned to `user`.
    #[must_use]
    pub const fn new(user: FeatureUser) -> Self {
        Self { user }
    }

    /// Creates the default provider answering with the built-in admin user.
    #[must_use]
    pub fn system_admin() -> Self {
        Self::new(FeatureUser::system_admin())
    }
}

impl UserProvider for StaticUserProvider {
    fn current_user(&self) -> FeatureUser {
        self.user.clone()
    }
}

/// Long-lived evaluation front for one catalog and one state store.
///
/// Built once during startup and shared as `Arc<FeatureManager>` through
/// explicit dependency injection; many request-handling threads read it
/// concurrently while the diagnostics console occasionally mutates it.
pub struct FeatureManager {
    catalog: Arc<FeatureCatalog>,
    store: Arc<dyn StateStore>,
    user_provider: Arc<dyn UserProvider>,
}

impl std::fmt::Debug for FeatureManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureManager")
            .field("catalog", &self.catalog.identifier())
            .finish_non_exhaustive()
    }
}

impl FeatureManager {
    /// Starts building a manager.
    #[must_use]
    pub fn builder() -> FeatureManagerBuilder {
        FeatureManagerBuilder::default()
    }

    /// The catalog this manager evaluates.
    #[must_use]
    pub fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    /// Every feature the catalog declares, in declaration order.
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        self.catalog.features()
    }

    /// The state of `feature`, falling back to its declared default when the
    /// store holds no entry yet.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Store`] when the backing store fails to read.
    pub fn state_of(&self, feature: Feature) -> Result<FeatureState, ToggleError> {
        Ok(self
            .store
            .state_of(feature)?
            .unwrap_or_else(|| FeatureState::new(feature, feature.default_enabled())))
    }

    /// Whether `feature` is enabled for the current user.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Store`] when the backing store fails to read.
    pub fn is_active(&self, feature: Feature) -> Result<bool, ToggleError> {
        let user = self.current_user();
        self.is_active_for(feature, &user)
    }

    /// Whether `feature` is enabled for an explicit caller context.
    ///
    /// The boolean state applies uniformly today; the caller context keeps a
    /// stable call site for hosts carrying per-user activation strategies.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Store`] when the backing store fails to read.
    pub fn is_active_for(&self, feature: Feature, user: &FeatureUser) -> Result<bool, ToggleError> {
        let enabled = self.state_of(feature)?.is_enabled();
        trace!(feature = feature.name(), user = user.name(), enabled, "evaluated feature");
        Ok(enabled)
    }

    /// Writes `state` to the backing store.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Store`] when the backing store fails to write.
    pub fn set_state(&self, state: FeatureState) -> Result<(), ToggleError> {
        debug!(
            feature = state.feature().name(),
            enabled = state.is_enabled(),
            "setting feature state"
        );
        self.store.set_state(state)
    }

    /// The user the installed provider reports for the current evaluation.
    #[must_use]
    pub fn current_user(&self) -> FeatureUser {
        self.user_provider.current_user()
    }
}

/// Builder assembling a [`FeatureManager`] from its collaborators.
///
/// The catalog identifier is validated before anything else; an unset or
/// empty identifier fails without touching the state store.
///
/// # Examples
///
/// ```rust
/// use togglekit::{CatalogRegistry, FeatureManager, feature_spec};
///
/// feature_spec! {
///     /// Demo catalog.
///     enum DemoFeature: "demo" {
///         /// Example toggle.
///         Sandbox,
///     }
/// }
///
/// # fn main() -> Result<(), togglekit::ToggleError> {
/// let manager = FeatureManager::builder()
///     .catalog_identifier("demo")
///     .registry(CatalogRegistry::new().with_spec::<DemoFeature>())
///     .build()?;
/// assert_eq!(manager.features().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct FeatureManagerBuilder {
    identifier: Option<String>,
    registry: CatalogRegistry,
    store: Option<Arc<dyn StateStore>>,
    user_provider: Option<Arc<dyn UserProvider>>,
}

impl FeatureManagerBuilder {
    /// Selects the catalog to build against, normally taken from
    /// `BundleConfig.feature_spec`.
    #[must_use]
    pub fn catalog_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Supplies the catalogs the identifier may resolve to.
    #[must_use]
    pub fn registry(mut self, registry: CatalogRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replaces the default in-memory store.
    #[must_use]
    pub fn state_store(mut self, store: Arc<dyn StateStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replaces the default static admin user provider.
    #[must_use]
    pub fn user_provider(mut self, provider: Arc<dyn UserProvider>) -> Self {
        self.user_provider = Some(provider);
        self
    }

    /// Builds the manager.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::MissingCatalogIdentifier`] when no identifier
    /// was supplied or it is empty, and [`ToggleError::UnknownCatalog`] when
    /// the identifier resolves to no registered catalog. Both checks run
    /// before any state store access.
    pub fn build(self) -> Result<FeatureManager, ToggleError> {
        let identifier = self
            .identifier
            .filter(|id| !id.trim().is_empty())
            .ok_or(ToggleError::MissingCatalogIdentifier)?;
        let catalog = self.registry.resolve(&identifier)?;
        debug!(
            catalog = catalog.identifier(),
            features = catalog.features().len(),
            "building feature manager"
        );
        Ok(FeatureManager {
            catalog,
            store: self
                .store
                .unwrap_or_else(|| Arc::new(InMemoryStateStore::new())),
            user_provider: self
                .user_provider
                .unwrap_or_else(|| Arc::new(StaticUserProvider::system_admin())),
        })
    }
}
