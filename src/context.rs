//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to re-fetch the movie list - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to re-fetch the movie list - write
    set_reload_trigger: WriteSignal<u32>,
    /// Current user-facing failure notice - read
    pub notice: ReadSignal<Option<String>>,
    /// Current user-facing failure notice - write
    set_notice: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        notice: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Trigger a re-fetch of the movie list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Surface a failure to the user. Replaces any earlier notice.
    pub fn notify(&self, message: impl Into<String>) {
        self.set_notice.set(Some(message.into()));
    }

    /// Drop the current notice
    pub fn dismiss(&self) {
        self.set_notice.set(None);
    }
}
