//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::FilterCriteria;
use crate::models::{PantryItem, Session};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current auth session, `None` while signed out
    pub session: Option<Session>,
    /// Last loaded snapshot of the user's inventory
    pub items: Vec<PantryItem>,
    /// Standing filter over the loaded snapshot, `None` when cleared
    pub filter: Option<FilterCriteria>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the loaded snapshot only when it actually changed, so a poll
/// refresh does not tear down row state mid-edit
pub fn store_replace_items(store: &AppStore, items: Vec<PantryItem>) {
    if store.items().get_untracked() != items {
        store.items().set(items);
    }
}

/// Open a session after sign-in
pub fn store_set_session(store: &AppStore, session: Session) {
    store.session().set(Some(session));
}

/// Drop the session and everything scoped to it
pub fn store_sign_out(store: &AppStore) {
    store.session().set(None);
    store.items().set(Vec::new());
    store.filter().set(None);
}
