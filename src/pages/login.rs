//! Login Screen
//!
//! Email/password form. No local validation; the auth provider is the
//! judge of credentials. Success opens a session and moves to the pantry.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::{input_value, MessageBanner};
use crate::firebase::{self, FirebaseConfig};
use crate::store::{store_set_session, use_app_store};

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_app_store();
    let config = StoredValue::new(expect_context::<FirebaseConfig>());
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (success, set_success) = signal(String::new());

    let log_in = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let config = config.get_value();
        let navigate = navigate.clone();

        spawn_local(async move {
            match firebase::sign_in(&config, &email_value, &password_value).await {
                Ok(session) => {
                    web_sys::console::log_1(
                        &format!("[AUTH] User logged in: {}", session.email).into(),
                    );
                    set_success.set("Login successful!".to_string());
                    set_error.set(String::new());
                    store_set_session(&store, session);
                    set_email.set(String::new());
                    set_password.set(String::new());
                    navigate("/pantry", Default::default());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[AUTH] Error logging in: {e}").into());
                    set_error.set(format!("Failed to log in. {}", e.user_message()));
                    set_success.set(String::new());
                }
            }
        });
    };

    view! {
        <div class="screen centered">
            <div class="card">
                <h1 class="card-title">"Log In"</h1>
                <form on:submit=log_in>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(input_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(input_value(&ev))
                    />
                    <button type="submit" class="primary-btn">"Log In"</button>
                </form>
                <MessageBanner error=error success=success />
                <p>
                    "Don't have an account? "
                    <a href="/create-account">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
