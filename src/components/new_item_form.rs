//! New Item Form Component
//!
//! The "ADD ITEMS" form: name, category, expiration date, quantity. Validates
//! against the loaded snapshot before issuing a single create request.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::PantryContext;
use crate::firebase::{self, FirebaseConfig};
use crate::models::{capitalize_first, ItemFields};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::validate;

use super::{input_value, CategorySelect, MessageBanner};

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_context::<PantryContext>().expect("PantryContext should be provided");
    let store = use_app_store();
    let config = expect_context::<FirebaseConfig>();

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (date, set_date) = signal(validate::today_string());
    let (qty, set_qty) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(session) = store.session().get_untracked() else {
            ctx.show_error("User not logged in. Please log in to add items.");
            return;
        };
        let fields = ItemFields {
            name: name.get().trim().to_string(),
            category: category.get(),
            date: date.get(),
            qty: qty.get(),
        };
        let items = store.items().get_untracked();
        if let Err(message) = validate::validate_item_fields(&fields, &items, None, validate::today()) {
            ctx.show_error(message);
            return;
        }

        let config = config.clone();
        spawn_local(async move {
            match firebase::create_item(&config, &session, &fields).await {
                Ok(()) => {
                    ctx.show_success(format!(
                        "{} has been successfully added.",
                        capitalize_first(&fields.name)
                    ));
                    set_name.set(String::new());
                    set_category.set(String::new());
                    set_date.set(validate::today_string());
                    set_qty.set(String::new());
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[PANTRY] Add failed: {e}").into());
                    ctx.show_error("An error occurred while adding the item. Please try again.");
                }
            }
        });
    };

    view! {
        <div class="adding-container">
            <h2 class="panel-title">"ADD ITEMS"</h2>
            <form class="new-item-form" on:submit=add_item>
                <input
                    type="text"
                    placeholder="Item Name"
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        set_name.set(input_value(&ev));
                        ctx.clear_messages();
                    }
                />
                <CategorySelect
                    value=category
                    on_change=move |selected| {
                        set_category.set(selected);
                        ctx.clear_messages();
                    }
                />
                <input
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| {
                        set_date.set(input_value(&ev));
                        ctx.clear_messages();
                    }
                />
                <input
                    type="number"
                    placeholder="Quantity"
                    prop:value=move || qty.get()
                    on:input=move |ev| {
                        set_qty.set(input_value(&ev));
                        ctx.clear_messages();
                    }
                />
                <button type="submit" class="primary-btn">"Add Item"</button>
            </form>
            <MessageBanner error=ctx.error success=ctx.success />
        </div>
    }
}
