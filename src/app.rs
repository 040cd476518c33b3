//! Menu Admin App
//!
//! Root component: builds the store and controller, loads every category
//! on mount and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpBackend;
use crate::category::Container;
use crate::components::{CardContainer, CategoryTabs, ErrorBanner, ItemFormPanel, NavBar};
use crate::config::MenuConfig;
use crate::context::{current_hash, AppContext};
use crate::controller::MenuController;
use crate::store::MenuState;

#[component]
pub fn App(config: MenuConfig) -> impl IntoView {
    // State
    let store = Store::new(MenuState::default());
    let ctx = AppContext::new(store, MenuController::new(HttpBackend::new(config)));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load everything once on mount
    Effect::new(move |_| {
        ctx.load_all();
        ctx.load_nav_links();
    });

    // Nav links and bookmarks select a view through the URL hash
    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        let hash = current_hash();
        if !hash.is_empty() {
            ctx.show_named(&hash);
        }
    });

    view! {
        <header class="menu-header">
            <NavBar />
        </header>

        <main class="menu-admin">
            <ErrorBanner />

            <ItemFormPanel />

            <CategoryTabs />

            <button id="add-new-item" on:click=move |_| ctx.open_new()>
                "Create New Item"
            </button>

            {Container::ALL
                .into_iter()
                .map(|container| view! { <CardContainer container=container /> })
                .collect_view()}
        </main>
    }
}
