//! Application Context
//!
//! Shared state and user actions provided via Leptos Context API.
//! Every action follows the same shape: backend round-trip through the
//! [`MenuController`], then a wholesale store update and a re-render of
//! the active view.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpBackend;
use crate::category::{Category, View};
use crate::controller::{resolve_category, settle, Action, MenuController, Mutation};
use crate::error::{ApiError, ApiResult};
use crate::models::{ItemForm, ItemId};
use crate::store::{
    store_apply_refresh, store_begin_refresh, store_report, AppStore, EditTarget,
    MenuStateStoreFields, RefreshTicket,
};

const BANNER_MS: u32 = 5_000;

/// App-wide store and controller provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive menu state
    pub store: AppStore,
    controller: StoredValue<MenuController<HttpBackend>>,
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Current URL hash, `#` included
pub fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

fn scroll_to_top() {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

impl AppContext {
    pub fn new(store: AppStore, controller: MenuController<HttpBackend>) -> Self {
        Self {
            store,
            controller: StoredValue::new(controller),
        }
    }

    fn controller(&self) -> MenuController<HttpBackend> {
        self.controller.get_value()
    }

    /// Show an error in the banner, cleared again after a few seconds
    pub fn report(&self, message: String) {
        store_report(&self.store, message.clone());
        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(BANNER_MS).await;
            if store.banner().get_untracked().as_deref() == Some(message.as_str()) {
                store.banner().set(None);
            }
        });
    }

    pub fn dismiss_banner(&self) {
        self.store.banner().set(None);
    }

    /// Fetch every category concurrently, then show the view named by the
    /// URL hash (`all` when there is none)
    pub fn load_all(&self) {
        let store = self.store;
        let ctx = *self;
        let controller = self.controller();
        let tickets: Vec<_> = Category::ALL
            .into_iter()
            .map(|category| store_begin_refresh(&store, category))
            .collect();
        spawn_local(async move {
            let report = controller.load_all().await;
            for (ticket, (category, items)) in tickets.into_iter().zip(report.lists) {
                debug_assert_eq!(ticket.category, category);
                store_apply_refresh(&store, ticket, items);
            }
            if !report.failures.is_empty() {
                let names: Vec<&str> = report.failures.iter().map(|(c, _)| c.label()).collect();
                ctx.report(format!("Could not load: {}", names.join(", ")));
            }
            ctx.show(View::from_hash(&current_hash()));
        });
    }

    pub fn load_nav_links(&self) {
        let store = self.store;
        let controller = self.controller();
        spawn_local(async move {
            // Already logged by the backend; the nav bar just stays empty
            if let Ok(links) = controller.nav_links().await {
                store.nav_links().set(links);
            }
        });
    }

    /// Hide every container, then show the requested view's containers
    pub fn show(&self, view: View) {
        log::debug!("[MENU] Showing view {}", view.name());
        self.store.ui().write().show(view);
    }

    /// Show a view by selector name or URL hash
    pub fn show_named(&self, name: &str) {
        match View::parse(name) {
            Some(view) => self.show(view),
            None => log::warn!("[MENU] No container for view {:?}, render skipped", name),
        }
    }

    /// Apply a finished write: store the reloaded list, re-render, close
    /// the form after an accepted submit and report any failure.
    /// The ticket is taken before the request so a later refresh wins.
    fn finish(&self, ticket: RefreshTicket, action: Action, result: ApiResult<Mutation>) {
        let settled = settle(action, result);
        if let Some((category, items)) = settled.refreshed {
            store_apply_refresh(&self.store, ticket, items);
            let view = self.store.ui().read_untracked().view_after_change(category);
            self.show(view);
        }
        if settled.close_form {
            self.store.form().write().clear();
            self.store.ui().write().close_form();
        }
        if let Some(message) = settled.message {
            log::error!("[MENU] {}", message);
            self.report(message);
        }
    }

    pub fn delete(&self, id: ItemId, category: Category) {
        let ctx = *self;
        let controller = self.controller();
        let ticket = store_begin_refresh(&self.store, category);
        spawn_local(async move {
            let result = controller.delete(&id, category).await;
            ctx.finish(ticket, Action::Delete, result);
        });
    }

    /// Submit the form as a new item
    pub fn create(&self) {
        let form = self.store.form().get_untracked();
        let current = self.store.ui().read_untracked().current;
        let (category, form) = match resolve_category(form, current) {
            Ok(resolved) => resolved,
            Err(e) => {
                log::error!("[FORM] Create rejected: {}", e);
                self.report(e.to_string());
                return;
            }
        };
        let ctx = *self;
        let controller = self.controller();
        let ticket = store_begin_refresh(&self.store, category);
        spawn_local(async move {
            let result = controller.create(form, category).await;
            ctx.finish(ticket, Action::Create, result);
        });
    }

    /// Open the form pre-filled with a stored item
    pub fn begin_edit(&self, id: ItemId, category: Category) {
        let found = self
            .store
            .catalog()
            .read_untracked()
            .find(category, &id)
            .map(|item| ItemForm::from_item(item, category));
        self.store.ui().write().begin_edit(EditTarget { id: id.clone(), category });
        match found {
            Some(form) => {
                log::debug!("[FORM] Editing {} in {}", id, category.key());
                self.store.form().set(form);
                scroll_to_top();
            }
            None => {
                let e = ApiError::NotFound {
                    id: id.to_string(),
                    category: category.key().to_string(),
                };
                log::error!("[FORM] {}", e);
                self.store.form().write().clear();
                self.report(e.to_string());
            }
        }
    }

    /// Submit the form as an update of the item being edited
    pub fn update(&self) {
        let Some(target) = self.store.ui().read_untracked().editing.clone() else {
            log::warn!("[FORM] Update requested with no item being edited");
            return;
        };
        let ctx = *self;
        let controller = self.controller();
        let form = self.store.form().get_untracked();
        let ticket = store_begin_refresh(&self.store, target.category);
        spawn_local(async move {
            let result = controller.update(&target, form).await;
            ctx.finish(ticket, Action::Update, result);
        });
    }

    pub fn cancel_edit(&self) {
        self.store.form().write().clear();
        self.store.ui().write().close_form();
    }

    /// Blank form for a new item
    pub fn open_new(&self) {
        self.store.form().write().clear();
        self.store.ui().write().open_new();
        scroll_to_top();
    }
}
