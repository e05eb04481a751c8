//! Message Banner Component
//!
//! Error/success banners shared by every screen. Validation failures and
//! provider failures land in the same place and differ only by text.

use leptos::prelude::*;

/// Red error banner and green success banner; each renders only when its
/// signal is non-empty, error winning when both are set.
#[component]
pub fn MessageBanner(
    error: ReadSignal<String>,
    success: ReadSignal<String>,
) -> impl IntoView {
    view! {
        <Show when=move || !error.get().is_empty()>
            <div class="banner banner-error">
                <b>{move || error.get()}</b>
            </div>
        </Show>
        <Show when=move || error.get().is_empty() && !success.get().is_empty()>
            <div class="banner banner-success">{move || success.get()}</div>
        </Show>
    }
}
