//! Filter Dialog Component
//!
//! Collects filter criteria and applies them to the loaded snapshot. Purely
//! client-side; the backend is never involved.

use leptos::prelude::*;

use crate::filter::FilterCriteria;
use crate::store::{use_app_store, AppStateStoreFields};

use super::{input_value, CategorySelect};

/// Modal filter form over name/category/date/quantity
#[component]
pub fn FilterDialog(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
) -> impl IntoView {
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (date, set_date) = signal(String::new());
    let (qty, set_qty) = signal(String::new());

    let apply = move |_| {
        store.filter().set(Some(FilterCriteria {
            name: name.get(),
            category: category.get(),
            date: date.get(),
            qty: qty.get(),
        }));
        set_open.set(false);
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop">
                <div class="dialog">
                    <h3>"Filter Items"</h3>
                    <input
                        type="text"
                        placeholder="Item Name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(input_value(&ev))
                    />
                    <CategorySelect
                        value=category
                        on_change=move |selected| set_category.set(selected)
                    />
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(input_value(&ev))
                    />
                    <input
                        type="number"
                        placeholder="Quantity"
                        prop:value=move || qty.get()
                        on:input=move |ev| set_qty.set(input_value(&ev))
                    />
                    <div class="dialog-actions">
                        <button class="primary-btn" on:click=apply>"Apply Filter"</button>
                        <button on:click=move |_| set_open.set(false)>"Cancel"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
