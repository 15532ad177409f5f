//! Status Banner Component
//!
//! Renders the current failure notice from the app context. Stays visible
//! until the user dismisses it or a newer notice replaces it.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn StatusBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.notice.get().map(|message| view! {
            <div class="status-banner" role="alert">
                <span class="status-message">{message}</span>
                <button class="dismiss-btn" on:click=move |_| ctx.dismiss()>"×"</button>
            </div>
        })}
    }
}
