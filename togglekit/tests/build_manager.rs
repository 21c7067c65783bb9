//! Integration tests for building the feature manager from bundle
//! configuration.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface configuration mistakes"
)]

mod common;

use std::sync::Arc;

use rstest::rstest;
use test_helpers::store::FailingStore;
use togglekit::{FeatureSpec, FeatureToggleBundle, ToggleError};

use common::{ShopFeature, TestBundle, shop_config};

#[rstest]
fn build_exposes_the_declared_feature_set_and_admin_user() {
    let bundle = TestBundle::new();

    let manager = bundle
        .build_feature_manager(&shop_config())
        .expect("build manager");

    let declared = [
        ShopFeature::FastCheckout.feature(),
        ShopFeature::GiftWrapping.feature(),
    ];
    assert_eq!(manager.features(), &declared);
    let user = manager.current_user();
    assert_eq!(user.name(), "admin");
    assert!(user.is_admin());
}

#[rstest]
#[case("")]
#[case("   ")]
fn build_rejects_missing_or_blank_catalog_identifiers(#[case] identifier: &str) {
    let bundle = TestBundle::new();
    let mut config = shop_config();
    config.feature_spec = identifier.to_owned();

    let err = bundle.build_feature_manager(&config).err();

    assert!(matches!(err, Some(ToggleError::MissingCatalogIdentifier)));
}

#[rstest]
fn build_rejects_identifiers_matching_no_registered_catalog() {
    let bundle = TestBundle::new();
    let mut config = shop_config();
    config.feature_spec = "warehouse".to_owned();

    let err = bundle.build_feature_manager(&config).err();

    assert!(matches!(
        err,
        Some(ToggleError::UnknownCatalog { identifier }) if identifier == "warehouse"
    ));
}

#[rstest]
fn identifier_validation_runs_before_any_store_access() {
    // A failing store would surface as ToggleError::Store if it were touched.
    let bundle = TestBundle::with_store(Arc::new(FailingStore::new()));
    let mut config = shop_config();
    config.feature_spec = String::new();

    let err = bundle.build_feature_manager(&config).err();

    assert!(matches!(err, Some(ToggleError::MissingCatalogIdentifier)));
}

#[rstest]
fn store_failures_propagate_from_evaluation() {
    let bundle = TestBundle::with_store(Arc::new(FailingStore::new()));

    let manager = bundle
        .build_feature_manager(&shop_config())
        .expect("build manager");
    let err = manager.is_active(ShopFeature::FastCheckout.feature()).err();

    assert!(matches!(err, Some(ToggleError::Store { .. })));
}

#[rstest]
fn default_store_state_does_not_survive_a_rebuild() -> anyhow::Result<()> {
    let feature = ShopFeature::FastCheckout.feature();
    let bundle = TestBundle::new();

    let first = bundle.build_feature_manager(&shop_config())?;
    first.set_state(togglekit::FeatureState::new(feature, true))?;
    assert!(first.is_active(feature)?);

    // A rebuild gets a fresh in-memory store, like a process restart would.
    let second = bundle.build_feature_manager(&shop_config())?;
    assert!(!second.is_active(feature)?);
    Ok(())
}
