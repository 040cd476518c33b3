//! Menu Card Component
//!
//! A single item card. Delete and Edit are bound to this card's item id
//! and category.

use leptos::prelude::*;

use crate::category::Category;
use crate::context::use_app_context;
use crate::models::Item;

#[component]
pub fn MenuCard(item: Item, category: Category) -> impl IntoView {
    let ctx = use_app_context();

    let title = item.display_title().to_string();
    let description = item.display_description().to_string();
    let img = item.img.clone().unwrap_or_default();
    let price = item.price.as_ref().map(|p| p.to_string());
    let delete_id = item.id.clone();
    let edit_id = item.id;

    view! {
        <div class="card" data-category=category.key()>
            <img class="card-img-top" src=img alt=title.clone() />
            <div class="card-body">
                <h5 class="card-title">{title}</h5>
                <p class="card-text">{description}</p>
                {price.map(|p| view! { <p class="card-price">{p}</p> })}
                <div class="card-actions">
                    <button
                        class="btn delete-btn"
                        on:click=move |_| ctx.delete(delete_id.clone(), category)
                    >
                        "Delete"
                    </button>
                    <button
                        class="btn edit-btn"
                        on:click=move |_| ctx.begin_edit(edit_id.clone(), category)
                    >
                        "Edit"
                    </button>
                </div>
            </div>
        </div>
    }
}
