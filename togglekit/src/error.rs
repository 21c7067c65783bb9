//! Error types produced by the feature-toggle bundle.

use thiserror::Error;

/// Failure reported by a host surface when an endpoint cannot be attached.
///
/// Raised, for example, when the console path segment is already taken on
/// the chosen surface. The bundle propagates it synchronously; there is no
/// in-core recovery.
#[derive(Debug, Error)]
#[error("failed to register endpoint '{path}': {message}")]
pub struct RegistrationError {
    /// Path segment the registration attempted to claim.
    pub path: String,
    /// Host-supplied explanation of the failure.
    pub message: String,
}

impl RegistrationError {
    /// Creates a registration failure for `path` with a host-supplied message.
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Errors that can occur while building, overriding, or registering the
/// feature-toggle subsystem.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ToggleError {
    /// The bundle configuration carries no catalog identifier.
    #[error("feature catalog identifier is missing or empty")]
    MissingCatalogIdentifier,

    /// The catalog identifier resolves to no registered catalog.
    #[error("unknown feature catalog '{identifier}'")]
    UnknownCatalog {
        /// Identifier that failed to resolve.
        identifier: String,
    },

    /// A feature name matched nothing in the active catalog.
    #[error("unknown feature '{name}'")]
    UnknownFeature {
        /// Name that failed to resolve.
        name: String,
    },

    /// The current user may not administer feature states.
    #[error("user '{user}' is not a feature admin")]
    AdminRequired {
        /// Name of the rejected user.
        user: String,
    },

    /// Error surfaced by a state store backend.
    #[error("state store error: {source}")]
    Store {
        /// Underlying error reported by the store implementation.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A host surface rejected the console registration.
    #[error("console registration failed: {0}")]
    Registration(#[from] RegistrationError),

    /// Error while extracting the bundle configuration from a provider.
    #[error("failed to read bundle configuration: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl ToggleError {
    /// Wraps a store backend failure.
    #[must_use]
    pub fn store<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Store {
            source: source.into(),
        }
    }

    /// Builds the [`ToggleError::UnknownFeature`] variant for `name`.
    #[must_use]
    pub fn unknown_feature(name: impl Into<String>) -> Self {
        Self::UnknownFeature { name: name.into() }
    }

    /// Builds the [`ToggleError::UnknownCatalog`] variant for `identifier`.
    #[must_use]
    pub fn unknown_catalog(identifier: impl Into<String>) -> Self {
        Self::UnknownCatalog {
            identifier: identifier.into(),
        }
    }

    /// Wraps a [`figment::Error`] raised while reading the bundle section.
    #[must_use]
    pub fn config(source: figment::Error) -> Self {
        Self::Config(Box::new(source))
    }
}
