use crate::modules::attendance::adapters::outbound::record_store_in_memory::InMemoryRecordStore;
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::clock::fixed::FixedClock;
use crate::shared::infrastructure::identity::in_memory::InMemoryAuthenticator;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::{CALLER, NOW};
use std::sync::Arc;

pub const TOKEN: &str = "token-fixed-0001";
pub const OTHER_TOKEN: &str = "token-fixed-0002";
pub const OTHER_CALLER: &str = "user-fixed-0002";

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn authenticator() -> Arc<InMemoryAuthenticator> {
    Arc::new(InMemoryAuthenticator::with_tokens([
        (TOKEN.to_string(), UserId::new(CALLER)),
        (OTHER_TOKEN.to_string(), UserId::new(OTHER_CALLER)),
    ]))
}

/// State over an empty store with the clock parked at `NOW`.
pub fn make_test_state() -> (AppState, Arc<FixedClock>) {
    make_state_with_store(Arc::new(InMemoryRecordStore::new()))
}

/// State over a prepared store, for tests that seed records first.
pub fn make_state_with_store(store: Arc<InMemoryRecordStore>) -> (AppState, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(NOW));
    let state = AppState::new(store, authenticator(), clock.clone());
    (state, clock)
}

pub fn make_offline_store_state() -> AppState {
    let mut store = InMemoryRecordStore::new();
    store.toggle_offline();
    AppState::new(
        Arc::new(store),
        authenticator(),
        Arc::new(FixedClock::new(NOW)),
    )
}
