//! Feature-toggle bundle for host application lifecycles.
//!
//! This crate wires a feature-flag evaluation and override subsystem into a
//! host web framework: a closed catalog of features declared as an enum, a
//! pluggable [`StateStore`] (in-memory by default), a long-lived
//! [`FeatureManager`] answering activation queries, startup overrides from
//! host configuration, and a diagnostics console registered on either the
//! admin or the application HTTP surface.
//!
//! HTTP routing, servlet lifecycle, and dependency-injection wiring stay
//! with the host; it talks to this crate through the narrow
//! [`HostEnvironment`] and [`HostBootstrap`] seams.
//!
//! # Examples
//!
//! ```rust
//! use togglekit::{
//!     BundleConfig, CatalogRegistry, FeatureSpec, FeatureToggleBundle, feature_spec,
//! };
//!
//! feature_spec! {
//!     /// Features of the demo application.
//!     pub enum DemoFeature: "demo" {
//!         /// Serve the rewritten landing page.
//!         NewLanding,
//!     }
//! }
//!
//! struct DemoBundle;
//!
//! impl FeatureToggleBundle for DemoBundle {
//!     type HostConfig = BundleConfig;
//!
//!     fn bundle_config(&self, config: &BundleConfig) -> BundleConfig {
//!         config.clone()
//!     }
//!
//!     fn catalog_registry(&self) -> CatalogRegistry {
//!         CatalogRegistry::new().with_spec::<DemoFeature>()
//!     }
//! }
//!
//! # fn main() -> Result<(), togglekit::ToggleError> {
//! let bundle = DemoBundle;
//! let manager = bundle.build_feature_manager(&BundleConfig {
//!     feature_spec: "demo".to_owned(),
//!     ..BundleConfig::default()
//! })?;
//! assert!(!manager.is_active(DemoFeature::NewLanding.feature())?);
//! # Ok(())
//! # }
//! ```

mod bundle;
mod catalog;
mod config;
mod console;
mod error;
mod feature;
mod manager;
mod overrides;
mod store;

pub use bundle::{FeatureToggleBundle, HostBootstrap};
pub use catalog::{CatalogRegistry, FeatureCatalog};
pub use config::BundleConfig;
pub use console::{
    AdminSurface, ApplicationSurface, CONSOLE_PATH, ConsoleEndpoint, HostEnvironment,
    register_console,
};
pub use error::{RegistrationError, ToggleError};
pub use feature::{Feature, FeatureSpec, FeatureState, FeatureUser};
pub use manager::{FeatureManager, FeatureManagerBuilder, StaticUserProvider, UserProvider};
pub use overrides::apply_overrides;
pub use store::{InMemoryStateStore, StateStore};
