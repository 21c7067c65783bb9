//! The diagnostics console endpoint and its placement on a host surface.

use std::sync::Arc;

use tracing::debug;

use crate::error::{RegistrationError, ToggleError};
use crate::feature::FeatureState;
use crate::manager::FeatureManager;

/// Path segment the console is registered under on whichever surface is
/// chosen.
pub const CONSOLE_PATH: &str = "togglz";

/// The read/write diagnostics handler handed to a host surface.
///
/// The HTTP request/response schema around it stays host-owned; this type
/// only exposes the operations a console page needs: read every feature
/// state and toggle one feature by name.
#[derive(Debug, Clone)]
pub struct ConsoleEndpoint {
    manager: Arc<FeatureManager>,
}

impl ConsoleEndpoint {
    /// Wraps `manager` for hand-over to a host surface.
    #[must_use]
    pub const fn new(manager: Arc<FeatureManager>) -> Self {
        Self { manager }
    }

    /// The manager this endpoint administers.
    #[must_use]
    pub fn manager(&self) -> &FeatureManager {
        &self.manager
    }

    /// Current state of every declared feature, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Store`] when the backing store fails to read.
    pub fn feature_states(&self) -> Result<Vec<FeatureState>, ToggleError> {
        self.manager
            .features()
            .iter()
            .map(|&feature| self.manager.state_of(feature))
            .collect()
    }

    /// Sets the named feature to `enabled` on behalf of the current user.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::AdminRequired`] when the current user is not a
    /// feature admin, [`ToggleError::UnknownFeature`] when the catalog
    /// declares no such feature, and [`ToggleError::Store`] when the write
    /// fails.
    pub fn toggle(&self, name: &str, enabled: bool) -> Result<FeatureState, ToggleError> {
        let user = self.manager.current_user();
        if !user.is_admin() {
            return Err(ToggleError::AdminRequired {
                user: user.name().to_owned(),
            });
        }
        let feature = self.manager.catalog().require(name)?;
        let state = FeatureState::new(feature, enabled);
        self.manager.set_state(state)?;
        Ok(state)
    }
}

/// Admin-only HTTP surface of the host.
pub trait AdminSurface {
    /// Attaches `endpoint` under `path` on the admin surface.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistrationError`] when the surface rejects the
    /// registration, for example because the path is already mapped.
    fn add_endpoint(&mut self, path: &str, endpoint: ConsoleEndpoint)
    -> Result<(), RegistrationError>;
}

/// General application HTTP surface of the host.
pub trait ApplicationSurface {
    /// Attaches `endpoint` under `path` on the application surface.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistrationError`] when the surface rejects the
    /// registration, for example because the path is already mapped.
    fn add_endpoint(&mut self, path: &str, endpoint: ConsoleEndpoint)
    -> Result<(), RegistrationError>;
}

/// The two HTTP surfaces a host exposes for endpoint registration.
pub trait HostEnvironment {
    /// The admin-only surface.
    fn admin(&mut self) -> &mut dyn AdminSurface;

    /// The general application surface.
    fn application(&mut self) -> &mut dyn ApplicationSurface;
}

/// Registers the console on exactly one surface of `env`.
///
/// A pure placement decision: `on_admin_context` selects the admin surface,
/// otherwise the application surface receives the endpoint. The console is
/// never registered on both.
///
/// # Errors
///
/// Propagates the [`RegistrationError`] of the chosen surface as
/// [`ToggleError::Registration`].
pub fn register_console(
    manager: Arc<FeatureManager>,
    on_admin_context: bool,
    env: &mut dyn HostEnvironment,
) -> Result<(), ToggleError> {
    let endpoint = ConsoleEndpoint::new(manager);
    let surface = if on_admin_context { "admin" } else { "application" };
    debug!(path = CONSOLE_PATH, surface, "registering feature console");
    if on_admin_context {
        env.admin().add_endpoint(CONSOLE_PATH, endpoint)?;
    } else {
        env.application().add_endpoint(CONSOLE_PATH, endpoint)?;
    }
    Ok(())
}
