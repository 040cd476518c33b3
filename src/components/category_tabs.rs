//! Category Tabs Component
//!
//! Selector row for `all` and each category. Exactly one tab is active.

use leptos::prelude::*;

use crate::category::View;
use crate::context::use_app_context;
use crate::store::MenuStateStoreFields;

/// Category selector tabs
#[component]
pub fn CategoryTabs() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <div class="categories">
            {View::selectors().map(|selector| {
                let is_active = move || store.ui().read().is_active(selector);
                let tab_class = move || {
                    if is_active() {
                        format!("{} active", selector.name())
                    } else {
                        selector.name().to_string()
                    }
                };
                view! {
                    <div class=tab_class on:click=move |_| ctx.show(selector)>
                        {selector.label()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
