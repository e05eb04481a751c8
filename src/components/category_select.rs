//! Category Select Component
//!
//! Dropdown over the fixed category set, reused by the add form, the edit
//! row, and the filter dialog.

use leptos::prelude::*;

use crate::models::CATEGORIES;

use super::select_value;

/// Category dropdown with an empty "not selected" option
#[component]
pub fn CategorySelect(
    value: ReadSignal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="category-select"
            prop:value=move || value.get()
            on:change=move |ev| on_change(select_value(&ev))
        >
            <option value="">"Select category"</option>
            {CATEGORIES.iter().map(|category| {
                view! {
                    <option
                        value=*category
                        selected=move || value.get() == *category
                    >
                        {*category}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
