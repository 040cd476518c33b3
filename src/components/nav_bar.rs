//! Navigation Bar Component
//!
//! Anchor links loaded from the backend's category list.

use leptos::prelude::*;

use crate::store::{use_app_store, MenuStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav id="nav_bar_items">
            <For
                each=move || store.nav_links().get()
                key=|link| link.slug.clone()
                children=move |link| {
                    view! { <a href=format!("#{}", link.slug)>{link.category}</a> }
                }
            />
        </nav>
    }
}
