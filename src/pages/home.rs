//! Home Screen
//!
//! Landing page with a call-to-action into the login flow.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="screen centered home">
            <h1>"WELCOME to PantryPRO"</h1>
            <p>
                "Your very own pantry customization website where you can track all your items."
            </p>
            <a class="primary-btn cta" href="/login">"Begin your Journey"</a>
        </div>
    }
}
