//! Menu Controller
//!
//! Backend round-trips behind every user action: mutate, then re-fetch
//! the affected category. Generic over [`MenuBackend`] so the same flow
//! runs against the HTTP client in the browser and a mock in tests.

use futures_util::future::join_all;

use crate::api::MenuBackend;
use crate::category::Category;
use crate::error::{ApiError, ApiResult};
use crate::models::{Item, ItemForm, ItemId, NavLink};
use crate::store::EditTarget;

/// Outcome of the start-up fetch
#[derive(Debug, Default)]
pub struct LoadReport {
    /// One list per category; failed categories are empty
    pub lists: Vec<(Category, Vec<Item>)>,
    pub failures: Vec<(Category, ApiError)>,
}

/// Kind of write, for messages and form handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Delete,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Create => "Create",
            Action::Update => "Update",
            Action::Delete => "Delete",
        }
    }

    fn submits_form(&self) -> bool {
        matches!(self, Action::Create | Action::Update)
    }
}

/// A write the backend accepted, followed by a reload of its category
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    pub category: Category,
    /// The reload may fail even though the write went through
    pub refreshed: ApiResult<Vec<Item>>,
}

/// Page changes once a write has finished
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    /// List to store for the written category; empty if its reload failed
    pub refreshed: Option<(Category, Vec<Item>)>,
    pub close_form: bool,
    pub message: Option<String>,
}

/// Decide what the page does with a write result. An accepted write
/// always closes the form, even when the reload after it failed.
pub fn settle(action: Action, result: ApiResult<Mutation>) -> Settlement {
    match result {
        Ok(Mutation { category, refreshed: Ok(items) }) => Settlement {
            refreshed: Some((category, items)),
            close_form: action.submits_form(),
            message: None,
        },
        Ok(Mutation { category, refreshed: Err(e) }) => Settlement {
            refreshed: Some((category, Vec::new())),
            close_form: action.submits_form(),
            message: Some(format!(
                "{} succeeded, but reloading {} failed: {}",
                action.label(),
                category.label(),
                e
            )),
        },
        Err(e) => Settlement {
            refreshed: None,
            close_form: false,
            message: Some(format!("{} failed: {}", action.label(), e)),
        },
    }
}

/// Fill a blank category from `current` and parse it.
/// The body keeps the category text as typed.
pub fn resolve_category(form: ItemForm, current: Category) -> ApiResult<(Category, ItemForm)> {
    let form = form.with_category_fallback(current);
    match Category::parse(&form.category.to_lowercase()) {
        Some(category) => Ok((category, form)),
        None => Err(ApiError::UnknownCategory(form.category)),
    }
}

#[derive(Debug, Clone)]
pub struct MenuController<B> {
    backend: B,
}

impl<B: MenuBackend> MenuController<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Fetch every category concurrently
    pub async fn load_all(&self) -> LoadReport {
        let fetches = Category::ALL
            .into_iter()
            .map(|category| async move { (category, self.backend.list_all(category.resource()).await) });

        let mut report = LoadReport::default();
        for (category, result) in join_all(fetches).await {
            match result {
                Ok(items) => report.lists.push((category, items)),
                Err(e) => {
                    log::warn!("[MENU] {} unavailable, showing it empty: {}", category.key(), e);
                    report.lists.push((category, Vec::new()));
                    report.failures.push((category, e));
                }
            }
        }
        log::info!(
            "[MENU] Loaded {} items across {} categories",
            report.lists.iter().map(|(_, items)| items.len()).sum::<usize>(),
            report.lists.len()
        );
        report
    }

    /// Re-fetch a category after a write
    async fn reload(&self, category: Category) -> Mutation {
        let refreshed = self.backend.list_all(category.resource()).await;
        if let Err(e) = &refreshed {
            log::warn!("[MENU] Reload of {} after write failed: {}", category.key(), e);
        }
        Mutation { category, refreshed }
    }

    pub async fn delete(&self, id: &ItemId, category: Category) -> ApiResult<Mutation> {
        self.backend.delete_by_id(category.resource(), id).await?;
        log::info!("[MENU] Deleted {} from {}", id, category.key());
        Ok(self.reload(category).await)
    }

    /// Resolve the form's category, POST it, then re-fetch that category.
    /// `current` fills a blank category field.
    pub async fn create(&self, form: ItemForm, current: Category) -> ApiResult<Mutation> {
        let (category, form) = resolve_category(form, current)?;
        self.backend.create(category.resource(), &form).await?;
        log::info!("[MENU] Created {:?} in {}", form.name, category.key());
        Ok(self.reload(category).await)
    }

    /// PUT the form to the item captured by `begin_edit`
    pub async fn update(&self, target: &EditTarget, form: ItemForm) -> ApiResult<Mutation> {
        let form = form.with_category_fallback(target.category);
        self.backend
            .update(target.category.resource(), &target.id, &form)
            .await?;
        log::info!("[MENU] Updated {} in {}", target.id, target.category.key());
        Ok(self.reload(target.category).await)
    }

    pub async fn get(&self, id: &ItemId, category: Category) -> ApiResult<Item> {
        self.backend
            .get_by_id(category.resource(), id)
            .await?
            .ok_or_else(|| ApiError::NotFound {
                id: id.to_string(),
                category: category.key().to_string(),
            })
    }

    pub async fn nav_links(&self) -> ApiResult<Vec<NavLink>> {
        self.backend.list_nav_links().await
    }
}
