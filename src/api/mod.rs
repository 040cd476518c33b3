//! Data Access Layer
//!
//! Maps a resource name to REST calls. Callers receive an [`ApiResult`];
//! implementations log every failure at this boundary before returning it.

mod http;
#[cfg(test)]
pub mod mock;
#[cfg(test)]
mod tests;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Item, ItemForm, ItemId, NavLink};

pub use http::HttpBackend;

/// Menu REST backend
///
/// Single-threaded (browser event loop), so futures are not `Send`.
#[async_trait(?Send)]
pub trait MenuBackend {
    /// `GET {base}/{resource}`
    async fn list_all(&self, resource: &str) -> ApiResult<Vec<Item>>;

    /// `GET {base}/{resource}/{id}`, `None` on 404
    async fn get_by_id(&self, resource: &str, id: &ItemId) -> ApiResult<Option<Item>>;

    /// `DELETE {base}/{resource}/{id}`
    async fn delete_by_id(&self, resource: &str, id: &ItemId) -> ApiResult<()>;

    /// `POST {base}/{resource}`, returns the echoed item when the body parses
    async fn create(&self, resource: &str, data: &ItemForm) -> ApiResult<Option<Item>>;

    /// `PUT {base}/{resource}/{id}`
    async fn update(&self, resource: &str, id: &ItemId, data: &ItemForm) -> ApiResult<Option<Item>>;

    /// `GET {base}/category`
    async fn list_nav_links(&self) -> ApiResult<Vec<NavLink>>;
}
