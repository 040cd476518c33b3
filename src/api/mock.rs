//! In-memory backend for tests
//!
//! Behaves like a json-server: numeric ids, resources keyed by path
//! segment, every call recorded for assertions.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;

use super::MenuBackend;
use crate::error::{ApiError, ApiResult};
use crate::models::{Item, ItemForm, ItemId, NavLink, Price};

/// One recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub resource: String,
    pub id: Option<ItemId>,
    pub body: Option<serde_json::Value>,
}

#[derive(Default)]
pub struct MockBackend {
    resources: RefCell<BTreeMap<String, Vec<Item>>>,
    nav: RefCell<Vec<NavLink>>,
    failing: RefCell<HashSet<String>>,
    failing_lists: RefCell<HashSet<String>>,
    next_id: Cell<u64>,
    calls: RefCell<Vec<Call>>,
}

pub fn item(id: u64, name: &str) -> Item {
    Item {
        id: ItemId::from(id),
        title: None,
        name: Some(name.to_string()),
        img: None,
        composition: None,
        description: None,
        price: None,
        category: None,
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(100),
            ..Default::default()
        }
    }

    pub fn with(self, resource: &str, items: Vec<Item>) -> Self {
        self.resources.borrow_mut().insert(resource.to_string(), items);
        self
    }

    pub fn with_nav(self, links: Vec<NavLink>) -> Self {
        *self.nav.borrow_mut() = links;
        self
    }

    /// Every call against the resource fails with a 500
    pub fn failing(self, resource: &str) -> Self {
        self.failing.borrow_mut().insert(resource.to_string());
        self
    }

    /// Listing the resource fails with a 500; writes still succeed
    pub fn failing_list(self, resource: &str) -> Self {
        self.failing_lists.borrow_mut().insert(resource.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn items(&self, resource: &str) -> Vec<Item> {
        self.resources.borrow().get(resource).cloned().unwrap_or_default()
    }

    fn record(&self, method: &'static str, resource: &str, id: Option<&ItemId>, body: Option<&ItemForm>) -> ApiResult<()> {
        self.calls.borrow_mut().push(Call {
            method,
            resource: resource.to_string(),
            id: id.cloned(),
            body: body.map(|b| serde_json::to_value(b).expect("form serializes")),
        });
        if self.failing.borrow().contains(resource) {
            return Err(ApiError::Status {
                status: 500,
                url: format!("mock://{}", resource),
            });
        }
        Ok(())
    }

    fn to_item(id: ItemId, data: &ItemForm) -> Item {
        Item {
            id,
            title: None,
            name: Some(data.name.clone()),
            img: Some(data.img.clone()),
            composition: Some(data.composition.clone()),
            description: None,
            price: Some(Price::parse(&data.price)),
            category: Some(data.category.clone()),
        }
    }
}

#[async_trait(?Send)]
impl MenuBackend for MockBackend {
    async fn list_all(&self, resource: &str) -> ApiResult<Vec<Item>> {
        self.record("GET", resource, None, None)?;
        if self.failing_lists.borrow().contains(resource) {
            return Err(ApiError::Status {
                status: 500,
                url: format!("mock://{}", resource),
            });
        }
        Ok(self.items(resource))
    }

    async fn get_by_id(&self, resource: &str, id: &ItemId) -> ApiResult<Option<Item>> {
        self.record("GET", resource, Some(id), None)?;
        Ok(self.items(resource).into_iter().find(|i| &i.id == id))
    }

    async fn delete_by_id(&self, resource: &str, id: &ItemId) -> ApiResult<()> {
        self.record("DELETE", resource, Some(id), None)?;
        let mut resources = self.resources.borrow_mut();
        let items = resources.entry(resource.to_string()).or_default();
        let before = items.len();
        items.retain(|i| &i.id != id);
        if items.len() == before {
            return Err(ApiError::Status { status: 404, url: format!("mock://{}/{}", resource, id) });
        }
        Ok(())
    }

    async fn create(&self, resource: &str, data: &ItemForm) -> ApiResult<Option<Item>> {
        self.record("POST", resource, None, Some(data))?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let created = Self::to_item(ItemId::from(id), data);
        self.resources
            .borrow_mut()
            .entry(resource.to_string())
            .or_default()
            .push(created.clone());
        Ok(Some(created))
    }

    async fn update(&self, resource: &str, id: &ItemId, data: &ItemForm) -> ApiResult<Option<Item>> {
        self.record("PUT", resource, Some(id), Some(data))?;
        let mut resources = self.resources.borrow_mut();
        let items = resources.entry(resource.to_string()).or_default();
        match items.iter_mut().find(|i| &i.id == id) {
            Some(existing) => {
                *existing = Self::to_item(id.clone(), data);
                Ok(Some(existing.clone()))
            }
            None => Err(ApiError::Status { status: 404, url: format!("mock://{}/{}", resource, id) }),
        }
    }

    async fn list_nav_links(&self) -> ApiResult<Vec<NavLink>> {
        self.record("GET", "category", None, None)?;
        Ok(self.nav.borrow().clone())
    }
}
