//! UI Components
//!
//! Reusable Leptos components for the pantry screens.

mod category_select;
mod delete_dialog;
mod filter_dialog;
mod item_row;
mod message_banner;
mod new_item_form;

pub use category_select::CategorySelect;
pub use delete_dialog::DeleteDialog;
pub use filter_dialog::FilterDialog;
pub use item_row::ItemRow;
pub use message_banner::MessageBanner;
pub use new_item_form::NewItemForm;

use wasm_bindgen::JsCast;

/// Current value of the `<input>` an event fired on
pub(crate) fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Current value of the `<select>` an event fired on
pub(crate) fn select_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        .map(|select| select.value())
        .unwrap_or_default()
}
