//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload boards from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload boards from the backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// User-visible error banner - read
    pub error: ReadSignal<Option<String>>,
    /// User-visible error banner - write
    set_error: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        error: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            error: error.0,
            set_error: error.1,
        }
    }

    /// Trigger a reload of the board list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show an error banner
    pub fn set_error(&self, message: impl Into<String>) {
        self.set_error.set(Some(message.into()));
    }

    /// Dismiss the error banner
    pub fn clear_error(&self) {
        self.set_error.set(None);
    }
}
