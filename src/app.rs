//! Pantry Tracker App
//!
//! Root component: global store, Firebase config, and screen routing.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use reactive_stores::Store;

use crate::firebase::FirebaseConfig;
use crate::pages::{CreateAccountPage, HomePage, LoginPage, PantryPage};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Provide global state and backend config to all screens
    provide_context(Store::new(AppState::new()));
    provide_context(FirebaseConfig::default());

    view! {
        <Router>
            <main class="app-root">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/create-account") view=CreateAccountPage />
                    <Route path=path!("/pantry") view=PantryPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 fallback
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="screen centered">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Go Home"</a>
        </div>
    }
}
