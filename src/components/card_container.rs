//! Card Container Component
//!
//! One physical card list. Hidden unless the active view shows it; its
//! cards are rebuilt from the store whenever the view or data changes.

use leptos::prelude::*;

use crate::category::Container;
use crate::components::MenuCard;
use crate::context::use_app_context;
use crate::store::MenuStateStoreFields;

#[component]
pub fn CardContainer(container: Container) -> impl IntoView {
    let store = use_app_context().store;

    let style = move || {
        if store.ui().read().active_view.shows(container) {
            "display: flex;"
        } else {
            "display: none;"
        }
    };

    // Clear and repopulate: one card per item, pizza before papadias
    let cards = move || {
        let active = store.ui().read().active_view;
        store
            .catalog()
            .read()
            .container_items(active, container)
            .into_iter()
            .map(|(category, item)| view! { <MenuCard item=item category=category /> })
            .collect_view()
    };

    view! {
        <div id=container.dom_id() class="card-list" style=style>
            {cards}
        </div>
    }
}
