//! Feature descriptors, per-feature state, and caller context.

/// A single feature declared by a catalog.
///
/// Features are identity-by-name: two descriptors with the same name refer
/// to the same toggle. Descriptors are immutable once declared and cheap to
/// copy, so APIs pass them by value.
///
/// # Examples
///
/// ```rust
/// use togglekit::Feature;
/// let feature = Feature::new("FastCheckout", false);
/// assert_eq!(feature.name(), "FastCheckout");
/// assert!(!feature.default_enabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feature {
    name: &'static str,
    default_enabled: bool,
}

impl Feature {
    /// Declares a feature with its name and the state it takes when the
    /// store holds no entry for it yet.
    #[must_use]
    pub const fn new(name: &'static str, default_enabled: bool) -> Self {
        Self {
            name,
            default_enabled,
        }
    }

    /// Unique name of the feature within its catalog.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// State the feature falls back to before any override or toggle.
    #[must_use]
    pub const fn default_enabled(self) -> bool {
        self.default_enabled
    }
}

/// The enabled/disabled state of a single feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureState {
    feature: Feature,
    enabled: bool,
}

impl FeatureState {
    /// Pairs a feature with an explicit enabled flag.
    #[must_use]
    pub const fn new(feature: Feature, enabled: bool) -> Self {
        Self { feature, enabled }
    }

    /// The feature this state belongs to.
    #[must_use]
    pub const fn feature(self) -> Feature {
        self.feature
    }

    /// Whether the feature is currently enabled.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.enabled
    }
}

/// Caller context used for admin-gated decisions.
///
/// Supplied per evaluation; the bundle never persists it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureUser {
    name: String,
    admin: bool,
}

impl FeatureUser {
    /// Creates a caller context with the given name and admin capability.
    #[must_use]
    pub const fn new(name: String, admin: bool) -> Self {
        Self { name, admin }
    }

    /// The built-in administrative user handed out when a bundle installs
    /// no user provider of its own.
    #[must_use]
    pub fn system_admin() -> Self {
        Self::new("admin".to_owned(), true)
    }

    /// Name of the caller.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the caller may administer feature states.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.admin
    }
}

/// A closed, compile-time set of features.
///
/// Implemented by catalog enums, normally through the [`feature_spec!`]
/// macro. The associated constant names the catalog for registry lookups;
/// the variant list fixes the feature set.
///
/// [`feature_spec!`]: crate::feature_spec
pub trait FeatureSpec: Copy + Eq + std::hash::Hash + 'static {
    /// Identifier the catalog registry resolves this spec by.
    const SPEC_NAME: &'static str;

    /// All declared variants, in declaration order.
    fn variants() -> &'static [Self];

    /// The feature descriptor for this variant.
    fn feature(self) -> Feature;
}

/// Declares a feature catalog as an enum implementing [`FeatureSpec`].
///
/// Each variant becomes one feature whose wire name is the variant
/// identifier. A variant marked `(enabled)` starts enabled; all others
/// start disabled.
///
/// # Examples
///
/// ```rust
/// use togglekit::{FeatureSpec, feature_spec};
///
/// feature_spec! {
///     /// Features gating the demo checkout flow.
///     pub enum CheckoutFeature: "checkout" {
///         /// Rewritten checkout funnel.
///         NewFunnel,
///         /// Wallet payments, live for everyone.
///         WalletPay (enabled),
///     }
/// }
///
/// assert_eq!(CheckoutFeature::SPEC_NAME, "checkout");
/// assert_eq!(CheckoutFeature::NewFunnel.feature().name(), "NewFunnel");
/// assert!(CheckoutFeature::WalletPay.feature().default_enabled());
/// ```
#[macro_export]
macro_rules! feature_spec {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $spec:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident $( ( $default:ident ) )?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::FeatureSpec for $name {
            const SPEC_NAME: &'static str = $spec;

            fn variants() -> &'static [Self] {
                &[$(Self::$variant,)+]
            }

            fn feature(self) -> $crate::Feature {
                match self {
                    $(
                        Self::$variant => $crate::Feature::new(
                            stringify!($variant),
                            $crate::__feature_default!($(($default))?),
                        ),
                    )+
                }
            }
        }
    };
}

/// Expands the optional per-variant default marker of [`feature_spec!`].
#[doc(hidden)]
#[macro_export]
macro_rules! __feature_default {
    () => {
        false
    };
    ((enabled)) => {
        true
    };
}

#[cfg(test)]
mod tests;
