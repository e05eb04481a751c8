//! Create Account Screen
//!
//! Name/email/password form. All checks run locally first, in display
//! order, and the provider is only called once they pass. The name is a
//! form-level courtesy; the provider keys accounts by email.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{input_value, MessageBanner};
use crate::firebase::{self, FirebaseConfig};
use crate::validate;

#[component]
pub fn CreateAccountPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<FirebaseConfig>());

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (success, set_success) = signal(String::new());

    let create_account = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();

        if let Err(message) =
            validate::validate_account(&name_value, &email_value, &password_value, &confirm_value)
        {
            set_error.set(message);
            set_success.set(String::new());
            return;
        }

        let config = config.get_value();
        spawn_local(async move {
            match firebase::sign_up(&config, &email_value, &password_value).await {
                Ok(session) => {
                    web_sys::console::log_1(
                        &format!("[AUTH] Account created for {name_value} ({})", session.email)
                            .into(),
                    );
                    set_success
                        .set("Account created successfully! You can now log in.".to_string());
                    set_error.set(String::new());
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_password.set(String::new());
                    set_confirm_password.set(String::new());
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[AUTH] Error creating account: {e}").into(),
                    );
                    set_error.set(format!("Failed to create account. {}", e.user_message()));
                    set_success.set(String::new());
                }
            }
        });
    };

    view! {
        <div class="screen centered">
            <div class="card">
                <h1 class="card-title">"Create Account"</h1>
                <form on:submit=create_account>
                    <label for="name">"Name"</label>
                    <input
                        id="name"
                        type="text"
                        required=true
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(input_value(&ev))
                    />
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
                    <label for="confirm-password">"Confirm Password"</label>
                    <input
                        id="confirm-password"
                        type="password"
                        required=true
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| set_confirm_password.set(input_value(&ev))
                    />
                    <button type="submit" class="primary-btn">"Create Account"</button>
                </form>
                <MessageBanner error=error success=success />
                <p>
                    "Already have an account? "
                    <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
