//! HTTP Backend
//!
//! `reqwest` implementation of [`MenuBackend`]. On wasm32 reqwest
//! drives the browser's `fetch`.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::MenuBackend;
use crate::config::{MenuConfig, Method};
use crate::error::{ApiError, ApiResult};
use crate::models::{Item, ItemForm, ItemId, NavLink};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const NAV_RESOURCE: &str = "category";

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: MenuConfig,
}

impl HttpBackend {
    pub fn new(config: MenuConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// `{base}/{resource}[/{id}]` for the given method
    pub fn url(&self, method: Method, resource: &str, id: Option<&ItemId>) -> String {
        let mut url = format!(
            "{}/{}",
            self.config.base_for(method),
            utf8_percent_encode(resource, SEGMENT)
        );
        if let Some(id) = id {
            url.push('/');
            url.push_str(&utf8_percent_encode(&id.to_string(), SEGMENT).to_string());
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = check(self.client.get(url).send().await?, url)?;
        Ok(response.json::<T>().await?)
    }
}

/// Non-2xx responses become [`ApiError::Status`]
fn check(response: Response, url: &str) -> ApiResult<Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status().as_u16(),
            url: url.to_string(),
        })
    }
}

/// Item echoed by POST/PUT; an empty or foreign body is not an error
async fn echoed_item(response: Response) -> ApiResult<Option<Item>> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body).ok())
}

fn logged<T>(op: &str, url: &str, result: ApiResult<T>) -> ApiResult<T> {
    if let Err(e) = &result {
        log::error!("[API] {} {} failed: {}", op, url, e);
    }
    result
}

#[async_trait(?Send)]
impl MenuBackend for HttpBackend {
    async fn list_all(&self, resource: &str) -> ApiResult<Vec<Item>> {
        let url = self.url(Method::Get, resource, None);
        let result = self.get_json(&url).await;
        logged("list_all", &url, result)
    }

    async fn get_by_id(&self, resource: &str, id: &ItemId) -> ApiResult<Option<Item>> {
        let url = self.url(Method::Get, resource, Some(id));
        let result: ApiResult<Option<Item>> = async {
            let response = self.client.get(&url).send().await?;
            if response.status() == StatusCode::NOT_FOUND {
                return Ok(None);
            }
            let response = check(response, &url)?;
            Ok(Some(response.json::<Item>().await?))
        }
        .await;
        logged("get_by_id", &url, result)
    }

    async fn delete_by_id(&self, resource: &str, id: &ItemId) -> ApiResult<()> {
        let url = self.url(Method::Delete, resource, Some(id));
        let result: ApiResult<()> = async {
            check(self.client.delete(&url).send().await?, &url)?;
            Ok(())
        }
        .await;
        logged("delete_by_id", &url, result)
    }

    async fn create(&self, resource: &str, data: &ItemForm) -> ApiResult<Option<Item>> {
        let url = self.url(Method::Post, resource, None);
        let result: ApiResult<Option<Item>> = async {
            let response = check(self.client.post(&url).json(data).send().await?, &url)?;
            echoed_item(response).await
        }
        .await;
        logged("create", &url, result)
    }

    async fn update(&self, resource: &str, id: &ItemId, data: &ItemForm) -> ApiResult<Option<Item>> {
        let url = self.url(Method::Put, resource, Some(id));
        let result: ApiResult<Option<Item>> = async {
            let response = check(self.client.put(&url).json(data).send().await?, &url)?;
            echoed_item(response).await
        }
        .await;
        logged("update", &url, result)
    }

    async fn list_nav_links(&self) -> ApiResult<Vec<NavLink>> {
        let url = self.url(Method::Get, NAV_RESOURCE, None);
        let result = self.get_json(&url).await;
        logged("list_nav_links", &url, result)
    }
}
