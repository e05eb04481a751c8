//! Pantry Screen
//!
//! The signed-in screen: a live view over the user's inventory plus the add
//! form, per-row edit/delete, and the filter and delete dialogs. The live
//! view is a poll-paced snapshot refresh, re-armed by a reload trigger after
//! every local mutation and torn down with the session.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::{DeleteDialog, FilterDialog, ItemRow, NewItemForm};
use crate::context::PantryContext;
use crate::filter::apply_filter;
use crate::firebase::{self, FirebaseConfig};
use crate::models::PantryItem;
use crate::store::{store_replace_items, store_sign_out, use_app_store, AppStateStoreFields};

/// Snapshot refresh cadence while the screen is mounted
const POLL_INTERVAL_MS: u32 = 5_000;

#[component]
pub fn PantryPage() -> impl IntoView {
    let store = use_app_store();
    let config = StoredValue::new(expect_context::<FirebaseConfig>());
    let navigate = use_navigate();

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (error, set_error) = signal(String::new());
    let (success, set_success) = signal(String::new());
    let ctx = PantryContext::new(
        (reload_trigger, set_reload_trigger),
        (error, set_error),
        (success, set_success),
    );
    provide_context(ctx);

    let (filter_open, set_filter_open) = signal(false);
    let (item_to_delete, set_item_to_delete) = signal::<Option<PantryItem>>(None);

    // Fetch a snapshot whenever the trigger fires; unauthenticated visitors
    // are sent back to the landing page instead.
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let Some(session) = store.session().get() else {
            navigate("/", Default::default());
            return;
        };
        let config = config.get_value();
        spawn_local(async move {
            match firebase::list_items(&config, &session).await {
                Ok(items) => {
                    web_sys::console::log_1(
                        &format!("[PANTRY] Loaded {} items, trigger={trigger}", items.len())
                            .into(),
                    );
                    store_replace_items(&store, items);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[PANTRY] Load failed: {e}").into());
                }
            }
        });
    });

    // Poll loop driving the live view; stops once the screen's signals are
    // disposed on unmount.
    spawn_local(async move {
        loop {
            TimeoutFuture::new(POLL_INTERVAL_MS).await;
            if !ctx.try_reload() {
                break;
            }
        }
    });

    let filtered = Memo::new(move |_| {
        let items = store.items().get();
        match store.filter().get() {
            Some(criteria) => apply_filter(&items, &criteria),
            None => items,
        }
    });

    let on_delete = Callback::new(move |item: PantryItem| set_item_to_delete.set(Some(item)));

    let cancel_delete = Callback::new(move |_: ()| set_item_to_delete.set(None));

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(item) = item_to_delete.get_untracked() else {
            return;
        };
        set_item_to_delete.set(None);
        let config = config.get_value();
        spawn_local(async move {
            let Some(session) = store.session().get_untracked() else {
                return;
            };
            match firebase::delete_item(&config, &session, &item.id).await {
                Ok(()) => ctx.reload(),
                Err(e) => {
                    web_sys::console::error_1(&format!("[PANTRY] Delete failed: {e}").into());
                    ctx.show_error(
                        "An error occurred while deleting the item. Please try again.",
                    );
                }
            }
        });
    });

    let logout_nav = use_navigate();
    let log_out = move |_| {
        store_sign_out(&store);
        logout_nav("/", Default::default());
    };

    view! {
        <div class="screen pantry">
            <header class="top-bar">
                <h1>"Pantry Tracker"</h1>
                <button class="logout-btn" on:click=log_out>"Logout"</button>
            </header>

            <div class="pantry-layout">
                <NewItemForm />

                <div class="pantry-container">
                    <h2 class="panel-title">"YOUR PANTRY"</h2>

                    <div class="list-header">
                        <span class="item-cell"><b>"Item Name"</b></span>
                        <span class="item-cell"><b>"Category"</b></span>
                        <span class="item-cell"><b>"Expiration Date"</b></span>
                        <span class="item-cell"><b>"Quantity"</b></span>
                        <span class="item-actions">
                            <button class="row-btn" on:click=move |_| set_filter_open.set(true)>
                                "Filter"
                            </button>
                            <button class="row-btn" on:click=move |_| store.filter().set(None)>
                                "Clear"
                            </button>
                        </span>
                    </div>

                    <div class="item-list">
                        {move || {
                            filtered
                                .get()
                                .into_iter()
                                .map(|item| view! { <ItemRow item=item on_delete=on_delete /> })
                                .collect_view()
                        }}
                    </div>

                    <p class="item-count">
                        {move || format!("{} items", filtered.get().len())}
                    </p>
                </div>
            </div>

            <FilterDialog open=filter_open set_open=set_filter_open />
            <DeleteDialog
                item=item_to_delete
                on_confirm=confirm_delete
                on_cancel=cancel_delete
            />
        </div>
    }
}
