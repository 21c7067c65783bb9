//! Test helpers shared across crates in the togglekit workspace.
//!
//! Provides in-memory fakes for the host collaborators (HTTP surfaces and
//! the bootstrap hook), a deliberately failing state store, and a
//! `figment::Jail` wrapper for configuration tests.

pub mod host {
    //! Recording fakes for the host environment.
    //!
    //! The surfaces record every registration so tests can assert on
    //! placement without a real server; a path can be pre-claimed to make
    //! the next registration fail like a duplicate servlet mapping would.

    use togglekit::{
        AdminSurface, ApplicationSurface, ConsoleEndpoint, HostBootstrap, HostEnvironment,
        RegistrationError,
    };

    /// One recorded endpoint registration.
    #[derive(Debug, Clone)]
    pub struct Registration {
        /// Path segment the endpoint was attached under.
        pub path: String,
        /// The endpoint handed over by the registrar.
        pub endpoint: ConsoleEndpoint,
    }

    /// A host surface that records registrations instead of serving them.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        claimed: Vec<String>,
        registrations: Vec<Registration>,
    }

    impl RecordingSurface {
        /// Creates an empty surface.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Marks `path` as already mapped so the next registration for it
        /// fails.
        pub fn claim_path(&mut self, path: &str) {
            self.claimed.push(path.to_owned());
        }

        /// Number of registrations this surface accepted.
        #[must_use]
        pub fn registration_count(&self) -> usize {
            self.registrations.len()
        }

        /// Every accepted registration, in order.
        #[must_use]
        pub fn registrations(&self) -> &[Registration] {
            &self.registrations
        }

        /// The endpoint registered under `path`, if any.
        #[must_use]
        pub fn endpoint_at(&self, path: &str) -> Option<&ConsoleEndpoint> {
            self.registrations
                .iter()
                .find(|registration| registration.path == path)
                .map(|registration| &registration.endpoint)
        }

        fn register(
            &mut self,
            path: &str,
            endpoint: ConsoleEndpoint,
        ) -> Result<(), RegistrationError> {
            let taken = self.claimed.iter().any(|claimed| claimed == path)
                || self.registrations.iter().any(|r| r.path == path);
            if taken {
                return Err(RegistrationError::new(path, "path already mapped"));
            }
            self.registrations.push(Registration {
                path: path.to_owned(),
                endpoint,
            });
            Ok(())
        }
    }

    impl AdminSurface for RecordingSurface {
        fn add_endpoint(
            &mut self,
            path: &str,
            endpoint: ConsoleEndpoint,
        ) -> Result<(), RegistrationError> {
            self.register(path, endpoint)
        }
    }

    impl ApplicationSurface for RecordingSurface {
        fn add_endpoint(
            &mut self,
            path: &str,
            endpoint: ConsoleEndpoint,
        ) -> Result<(), RegistrationError> {
            self.register(path, endpoint)
        }
    }

    /// A host environment backed by two recording surfaces.
    #[derive(Debug, Default)]
    pub struct RecordingEnvironment {
        /// The admin-only surface.
        pub admin: RecordingSurface,
        /// The general application surface.
        pub application: RecordingSurface,
    }

    impl RecordingEnvironment {
        /// Creates an environment with two empty surfaces.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl HostEnvironment for RecordingEnvironment {
        fn admin(&mut self) -> &mut dyn AdminSurface {
            &mut self.admin
        }

        fn application(&mut self) -> &mut dyn ApplicationSurface {
            &mut self.application
        }
    }

    /// A bootstrap fake counting every interaction.
    #[derive(Debug, Default)]
    pub struct CountingBootstrap {
        tasks: Vec<String>,
    }

    impl CountingBootstrap {
        /// Creates a bootstrap fake with no recorded interactions.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of interactions the bundle performed against this fake.
        #[must_use]
        pub fn interactions(&self) -> usize {
            self.tasks.len()
        }
    }

    impl HostBootstrap for CountingBootstrap {
        fn add_startup_task(&mut self, name: &str) {
            self.tasks.push(name.to_owned());
        }
    }
}

pub mod store {
    //! State-store fakes for error-path tests.

    use togglekit::{Feature, FeatureState, StateStore, ToggleError};

    /// A store whose every operation fails, for exercising error
    /// propagation out of the manager.
    #[derive(Debug, Default)]
    pub struct FailingStore;

    impl FailingStore {
        /// Creates the failing store.
        #[must_use]
        pub const fn new() -> Self {
            Self
        }
    }

    impl StateStore for FailingStore {
        fn state_of(&self, _feature: Feature) -> Result<Option<FeatureState>, ToggleError> {
            Err(ToggleError::store(std::io::Error::other("backend offline")))
        }

        fn set_state(&self, _state: FeatureState) -> Result<(), ToggleError> {
            Err(ToggleError::store(std::io::Error::other("backend offline")))
        }
    }
}

pub mod figment {
    //! Shared helpers for working with `figment::Jail` in tests.

    use anyhow::{Result, anyhow};

    /// Executes `f` inside a [`figment::Jail`], returning the closure's
    /// output.
    ///
    /// The jail is torn down automatically once the closure completes, even
    /// when the closure returns an error. Failures are converted into
    /// `anyhow::Error` values so callers can use the `?` operator without
    /// extra boilerplate.
    ///
    /// # Errors
    ///
    /// Returns an error if the jail initialisation fails or the closure
    /// returns a [`figment::error::Error`].
    pub fn with_jail<F, T>(f: F) -> Result<T>
    where
        F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
    {
        let mut output = None;
        figment::Jail::try_with(|j| {
            output = Some(f(j)?);
            Ok(())
        })
        .map_err(|err| anyhow!(err.to_string()))?;
        output.ok_or_else(|| anyhow!("jail closure did not return a value"))
    }
}
