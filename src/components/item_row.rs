//! Item Row Component
//!
//! One inventory row, either viewing or editing. Editing is entered by the
//! edit action and left by save or cancel; save runs the same validation as
//! the add form, minus the collision with the row's own name.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::PantryContext;
use crate::firebase::{self, FirebaseConfig};
use crate::models::{capitalize_first, ItemFields, PantryItem};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::validate;

use super::{input_value, CategorySelect};

#[component]
pub fn ItemRow(
    item: PantryItem,
    #[prop(into)] on_delete: Callback<PantryItem>,
) -> impl IntoView {
    let ctx = use_context::<PantryContext>().expect("PantryContext should be provided");
    let store = use_app_store();
    let config = StoredValue::new(expect_context::<FirebaseConfig>());
    let item = StoredValue::new(item);

    let (editing, set_editing) = signal(false);
    let (edit_name, set_edit_name) = signal(String::new());
    let (edit_category, set_edit_category) = signal(String::new());
    let (edit_date, set_edit_date) = signal(String::new());
    let (edit_qty, set_edit_qty) = signal(String::new());

    let enter_edit = move |_| {
        let fields = item.with_value(PantryItem::fields);
        set_edit_name.set(fields.name);
        set_edit_category.set(fields.category);
        set_edit_date.set(fields.date);
        set_edit_qty.set(fields.qty);
        set_editing.set(true);
    };

    let cancel_edit = move |_| set_editing.set(false);

    let save_edit = move |_| {
        let fields = ItemFields {
            name: edit_name.get().trim().to_string(),
            category: edit_category.get(),
            date: edit_date.get(),
            qty: edit_qty.get(),
        };
        let doc_id = item.with_value(|i| i.id.clone());
        let items = store.items().get_untracked();
        if let Err(message) =
            validate::validate_item_fields(&fields, &items, Some(&doc_id), validate::today())
        {
            ctx.show_error(message);
            return;
        }

        let config = config.get_value();
        spawn_local(async move {
            let Some(session) = store.session().get_untracked() else {
                return;
            };
            match firebase::update_item(&config, &session, &doc_id, &fields).await {
                Ok(()) => {
                    set_editing.set(false);
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[PANTRY] Update failed: {e}").into());
                    ctx.show_error(
                        "An error occurred while updating the item. Please try again.",
                    );
                }
            }
        });
    };

    view! {
        <div class="item-row">
            <Show when=move || !editing.get()>
                <span class="item-cell">
                    {move || item.with_value(|i| capitalize_first(&i.name))}
                </span>
                <span class="item-cell">{move || item.with_value(|i| i.category.clone())}</span>
                <span class="item-cell">{move || item.with_value(|i| i.date.clone())}</span>
                <span class="item-cell">{move || item.with_value(|i| i.qty.clone())}</span>
                <span class="item-actions">
                    <button class="row-btn" on:click=enter_edit>"Edit"</button>
                    <button
                        class="row-btn"
                        on:click=move |_| on_delete.run(item.get_value())
                    >
                        "Delete"
                    </button>
                </span>
            </Show>
            <Show when=move || editing.get()>
                <input
                    type="text"
                    class="item-cell"
                    prop:value=move || edit_name.get()
                    on:input=move |ev| set_edit_name.set(input_value(&ev))
                />
                <CategorySelect
                    value=edit_category
                    on_change=move |selected| set_edit_category.set(selected)
                />
                <input
                    type="date"
                    class="item-cell"
                    prop:value=move || edit_date.get()
                    on:input=move |ev| set_edit_date.set(input_value(&ev))
                />
                <input
                    type="number"
                    class="item-cell"
                    prop:value=move || edit_qty.get()
                    on:input=move |ev| set_edit_qty.set(input_value(&ev))
                />
                <span class="item-actions">
                    <button class="row-btn" on:click=save_edit>"Save"</button>
                    <button class="row-btn" on:click=cancel_edit>"Cancel"</button>
                </span>
            </Show>
        </div>
    }
}
