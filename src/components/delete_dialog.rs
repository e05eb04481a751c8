//! Delete Confirm Dialog Component
//!
//! Modal confirmation before a delete request is issued. Cancelling issues
//! nothing.

use leptos::prelude::*;

use crate::models::{capitalize_first, PantryItem};

/// Confirmation dialog, shown while `item` is `Some`
#[component]
pub fn DeleteDialog(
    item: ReadSignal<Option<PantryItem>>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || item.get().is_some()>
            <div class="dialog-backdrop">
                <div class="dialog">
                    <h3>"Delete Items"</h3>
                    <p>
                        "Are you sure you want to delete "
                        {move || {
                            item.get()
                                .map(|i| capitalize_first(&i.name))
                                .unwrap_or_default()
                        }}
                        "?"
                    </p>
                    <div class="dialog-actions">
                        <button class="danger-btn" on:click=move |_| on_confirm.run(())>
                            "Delete"
                        </button>
                        <button on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
