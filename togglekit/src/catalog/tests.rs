//! Unit tests for catalog lookup and registry resolution.

use rstest::rstest;

use crate::{CatalogRegistry, Feature, FeatureCatalog, ToggleError, feature_spec};

feature_spec! {
    /// Catalog used by the lookup tests.
    enum SearchFeature: "search" {
        /// Vector-based ranking.
        SemanticRanking,
        /// Query spelling suggestions.
        DidYouMean (enabled),
    }
}

#[rstest]
fn from_spec_declares_every_variant() {
    let catalog = FeatureCatalog::from_spec::<SearchFeature>();
    assert_eq!(catalog.identifier(), "search");
    let names: Vec<&str> = catalog.features().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["SemanticRanking", "DidYouMean"]);
}

#[rstest]
#[case("SemanticRanking", true)]
#[case("DidYouMean", true)]
#[case("semanticranking", false)]
#[case("Unrelated", false)]
fn lookup_is_exact_and_case_sensitive(#[case] name: &str, #[case] found: bool) {
    let catalog = FeatureCatalog::from_spec::<SearchFeature>();
    assert_eq!(catalog.lookup(name).is_some(), found);
}

#[rstest]
fn require_reports_the_missing_name() {
    let catalog = FeatureCatalog::new("adhoc", vec![Feature::new("feature", false)]);
    let err = catalog.require("absent").err();
    assert!(matches!(
        err,
        Some(ToggleError::UnknownFeature { name }) if name == "absent"
    ));
}

#[rstest]
fn registry_resolves_registered_identifiers_only() {
    let registry = CatalogRegistry::new().with_spec::<SearchFeature>();
    let catalog = registry.resolve("search").ok();
    assert!(catalog.is_some_and(|c| c.features().len() == 2));
    assert!(matches!(
        registry.resolve("payments"),
        Err(ToggleError::UnknownCatalog { identifier }) if identifier == "payments"
    ));
}
