//! Unit tests for the in-memory state store.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface store failures"
)]

use rstest::rstest;

use super::{InMemoryStateStore, StateStore};
use crate::feature::{Feature, FeatureState};

const FEATURE: Feature = Feature::new("feature", false);

#[rstest]
fn empty_store_holds_no_state() {
    let store = InMemoryStateStore::new();
    assert_eq!(store.state_of(FEATURE).expect("read"), None);
}

#[rstest]
fn set_then_read_round_trips_the_latest_write() {
    let store = InMemoryStateStore::new();
    store
        .set_state(FeatureState::new(FEATURE, true))
        .expect("write");
    store
        .set_state(FeatureState::new(FEATURE, false))
        .expect("write");
    let state = store.state_of(FEATURE).expect("read").expect("entry");
    assert!(!state.is_enabled());
}

#[rstest]
fn entries_are_keyed_by_feature_name() {
    let store = InMemoryStateStore::new();
    let other = Feature::new("other", false);
    store
        .set_state(FeatureState::new(FEATURE, true))
        .expect("write");
    assert_eq!(store.state_of(other).expect("read"), None);
}
