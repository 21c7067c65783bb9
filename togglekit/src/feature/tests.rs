//! Unit tests for feature descriptors and the catalog macro.

use rstest::rstest;

use crate::{FeatureSpec, FeatureUser, feature_spec};

feature_spec! {
    /// Toy catalog exercised by the descriptor tests.
    enum SampleFeature: "sample" {
        /// Disabled unless toggled.
        DarkLaunch,
        /// Live from the first boot.
        Telemetry (enabled),
    }
}

#[rstest]
fn variants_preserve_declaration_order() {
    assert_eq!(
        SampleFeature::variants(),
        &[SampleFeature::DarkLaunch, SampleFeature::Telemetry]
    );
}

#[rstest]
#[case(SampleFeature::DarkLaunch, "DarkLaunch", false)]
#[case(SampleFeature::Telemetry, "Telemetry", true)]
fn descriptors_carry_name_and_default(
    #[case] variant: SampleFeature,
    #[case] name: &str,
    #[case] default_enabled: bool,
) {
    let feature = variant.feature();
    assert_eq!(feature.name(), name);
    assert_eq!(feature.default_enabled(), default_enabled);
}

#[rstest]
fn spec_name_identifies_the_catalog() {
    assert_eq!(SampleFeature::SPEC_NAME, "sample");
}

#[rstest]
fn system_admin_matches_the_bundled_default_user() {
    let user = FeatureUser::system_admin();
    assert_eq!(user.name(), "admin");
    assert!(user.is_admin());
}
