//! Pantry Screen Context
//!
//! Shared signals for the pantry screen, provided via Leptos Context API.
//! One error banner and one success banner serve the whole screen, so any
//! handler can report without threading signals through props.

use leptos::prelude::*;

/// Pantry-screen signals provided via context
#[derive(Clone, Copy)]
pub struct PantryContext {
    /// Trigger to re-fetch the inventory snapshot - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to re-fetch the inventory snapshot - write
    set_reload_trigger: WriteSignal<u32>,
    /// Screen-wide error banner - read
    pub error: ReadSignal<String>,
    set_error: WriteSignal<String>,
    /// Screen-wide success banner - read
    pub success: ReadSignal<String>,
    set_success: WriteSignal<String>,
}

impl PantryContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        error: (ReadSignal<String>, WriteSignal<String>),
        success: (ReadSignal<String>, WriteSignal<String>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            error: error.0,
            set_error: error.1,
            success: success.0,
            set_success: success.1,
        }
    }

    /// Trigger a re-fetch of the inventory
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Same as `reload`, safe to call after the screen may have unmounted
    pub fn try_reload(&self) -> bool {
        self.set_reload_trigger.try_update(|v| *v += 1).is_some()
    }

    /// Show an error banner, clearing any success banner
    pub fn show_error(&self, message: impl Into<String>) {
        self.set_error.set(message.into());
        self.set_success.set(String::new());
    }

    /// Show a success banner, clearing any error banner
    pub fn show_success(&self, message: impl Into<String>) {
        self.set_success.set(message.into());
        self.set_error.set(String::new());
    }

    /// Clear both banners, as typing in the add form does
    pub fn clear_messages(&self) {
        self.set_error.set(String::new());
        self.set_success.set(String::new());
    }
}
