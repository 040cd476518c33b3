//! Item Form Component
//!
//! The five-field create/edit form. Submits as an update while an item
//! is being edited, otherwise as a new item.

use leptos::prelude::*;

use crate::category::Category;
use crate::context::use_app_context;
use crate::models::ItemForm;
use crate::store::{use_app_store, MenuStateStoreFields};

/// Text input bound to one form field
#[component]
fn FormInput(
    placeholder: &'static str,
    value: fn(&ItemForm) -> &str,
    on_change: fn(&mut ItemForm, String),
    #[prop(optional)] list: Option<&'static str>,
) -> impl IntoView {
    let store = use_app_store();

    view! {
        <input
            type="text"
            placeholder=placeholder
            list=list
            prop:value=move || value(&store.form().read()).to_string()
            on:input=move |ev| on_change(&mut store.form().write(), event_target_value(&ev))
        />
    }
}

/// Create/edit form, hidden until opened
#[component]
pub fn ItemFormPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let is_editing = move || store.ui().read().editing.is_some();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store.ui().read_untracked().editing.is_some() {
            ctx.update();
        } else {
            ctx.create();
        }
    };

    view! {
        <section
            id="section-inps"
            style=move || if store.ui().read().form_open { "display: block;" } else { "display: none;" }
        >
            <form id="inps" on:submit=on_submit>
                <FormInput placeholder="Name" value={|f| f.name.as_str()} on_change={|f, v| f.name = v} />
                <FormInput placeholder="Image URL" value={|f| f.img.as_str()} on_change={|f, v| f.img = v} />
                <FormInput
                    placeholder="Category"
                    value={|f| f.category.as_str()}
                    on_change={|f, v| f.category = v}
                    list="category-options"
                />
                <FormInput placeholder="Composition" value={|f| f.composition.as_str()} on_change={|f, v| f.composition = v} />
                <FormInput placeholder="Price" value={|f| f.price.as_str()} on_change={|f, v| f.price = v} />

                <datalist id="category-options">
                    {Category::ALL.iter().map(|c| view! { <option value=c.key()>{c.label()}</option> }).collect_view()}
                </datalist>

                <div class="form-actions">
                    <button type="submit">
                        {move || if is_editing() { "Update" } else { "Create" }}
                    </button>
                    <button type="button" class="cancel-btn" on:click=move |_| ctx.cancel_edit()>
                        "Cancel"
                    </button>
                </div>
            </form>
        </section>
    }
}
