//! The bundle: lifecycle glue between the toggle subsystem and a host
//! framework.

use std::sync::Arc;

use crate::catalog::CatalogRegistry;
use crate::config::BundleConfig;
use crate::console::{HostEnvironment, register_console};
use crate::error::ToggleError;
use crate::manager::{FeatureManager, StaticUserProvider, UserProvider};
use crate::overrides::apply_overrides;
use crate::store::{InMemoryStateStore, StateStore};

/// Host-side bootstrap collaborator offered to [`FeatureToggleBundle::initialize`].
///
/// The bundle needs nothing at bootstrap time; the trait exists so hosts
/// with an early initialisation phase have a seam to offer.
pub trait HostBootstrap {
    /// Registers a named task to run during host startup.
    fn add_startup_task(&mut self, name: &str);
}

/// A feature-toggle bundle wired into a host application's lifecycle.
///
/// Implementors supply the catalog registry and the projection from the
/// host configuration to the bundle section; the provided [`run`] performs
/// the whole startup sequence: build the manager, apply configured
/// overrides, register the console. Overrides are fully applied before the
/// manager is handed back, so the host publishes a settled manager to its
/// request handlers.
///
/// [`run`]: FeatureToggleBundle::run
pub trait FeatureToggleBundle {
    /// The host framework's configuration type.
    type HostConfig;

    /// Projects the bundle section out of the host configuration.
    fn bundle_config(&self, config: &Self::HostConfig) -> BundleConfig;

    /// The catalogs `BundleConfig.feature_spec` may select from.
    fn catalog_registry(&self) -> CatalogRegistry;

    /// The state store backing the manager. Defaults to a fresh in-memory
    /// store with process lifetime.
    fn state_store(&self) -> Arc<dyn StateStore> {
        Arc::new(InMemoryStateStore::new())
    }

    /// The user provider backing admin-gated decisions. Defaults to the
    /// built-in static admin user.
    fn user_provider(&self) -> Arc<dyn UserProvider> {
        Arc::new(StaticUserProvider::system_admin())
    }

    /// Host bootstrap hook. Deliberately a no-op: the bundle touches no
    /// collaborator before [`run`].
    ///
    /// [`run`]: FeatureToggleBundle::run
    fn initialize(&self, _bootstrap: &mut dyn HostBootstrap) {}

    /// Builds the feature manager for `bundle_config`.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::MissingCatalogIdentifier`] on an empty
    /// `feature_spec`, [`ToggleError::UnknownCatalog`] when it matches no
    /// registered catalog, and [`ToggleError::Store`] when a non-default
    /// store fails.
    fn build_feature_manager(
        &self,
        bundle_config: &BundleConfig,
    ) -> Result<FeatureManager, ToggleError> {
        FeatureManager::builder()
            .catalog_identifier(bundle_config.feature_spec.as_str())
            .registry(self.catalog_registry())
            .state_store(self.state_store())
            .user_provider(self.user_provider())
            .build()
    }

    /// Runs the startup sequence: build, apply overrides, register the
    /// console on the surface `servlet_context_admin` selects.
    ///
    /// # Errors
    ///
    /// Propagates every [`ToggleError`] of the build and override phases,
    /// and [`ToggleError::Registration`] when the chosen surface rejects
    /// the console.
    fn run(
        &self,
        config: &Self::HostConfig,
        env: &mut dyn HostEnvironment,
    ) -> Result<Arc<FeatureManager>, ToggleError> {
        let bundle_config = self.bundle_config(config);
        let manager = self.build_feature_manager(&bundle_config)?;
        apply_overrides(&manager, &bundle_config.feature_states_override)?;
        let shared = Arc::new(manager);
        register_console(
            Arc::clone(&shared),
            bundle_config.servlet_context_admin,
            env,
        )?;
        Ok(shared)
    }
}
