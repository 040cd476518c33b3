//! Error Banner Component
//!
//! Dismissible message for failed backend calls.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::MenuStateStoreFields;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.store.banner().get().map(|message| view! {
            <div class="error-banner" role="alert">
                <span class="error-text">{message}</span>
                <button class="banner-close" on:click=move |_| ctx.dismiss_banner()>"×"</button>
            </div>
        })}
    }
}
