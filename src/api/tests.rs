//! Data Access Layer Tests

#[cfg(test)]
mod tests {
    use crate::api::mock::{item, MockBackend};
    use crate::api::{HttpBackend, MenuBackend};
    use crate::config::{MenuConfig, Method};
    use crate::error::ApiError;
    use crate::models::{ItemForm, ItemId};

    fn backend(base: &str) -> HttpBackend {
        HttpBackend::new(MenuConfig {
            base_url: base.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_urls_per_method() {
        let api = HttpBackend::new(MenuConfig {
            base_url: "http://localhost:3000/".into(),
            put_url: Some("http://writer:4000".into()),
            ..Default::default()
        });
        let id = ItemId::from(5);
        assert_eq!(api.url(Method::Get, "icki", None), "http://localhost:3000/icki");
        assert_eq!(api.url(Method::Delete, "pizza", Some(&id)), "http://localhost:3000/pizza/5");
        assert_eq!(api.url(Method::Put, "pizza", Some(&id)), "http://writer:4000/pizza/5");
    }

    #[test]
    fn test_id_is_escaped_as_one_segment() {
        let api = backend("http://localhost:3000");
        let id = ItemId::from("a/b c");
        assert_eq!(api.url(Method::Get, "pasta", Some(&id)), "http://localhost:3000/pasta/a%2Fb%20c");
    }

    #[tokio::test]
    async fn test_unreachable_backend_returns_error_value() {
        let api = backend("http://127.0.0.1:1");
        let result = api.list_all("pizza").await;
        assert!(matches!(result, Err(ApiError::Network(_))));
    }

    #[tokio::test]
    async fn test_mock_create_then_get() {
        let mock = MockBackend::new().with("pizza", vec![item(1, "Margherita")]);
        let form = ItemForm { name: "Diavola".into(), price: "11".into(), ..Default::default() };

        let created = mock.create("pizza", &form).await.unwrap().unwrap();
        let fetched = mock.get_by_id("pizza", &created.id).await.unwrap();

        assert_eq!(fetched, Some(created));
        assert_eq!(mock.list_all("pizza").await.unwrap().len(), 2);
        assert_eq!(mock.get_by_id("pizza", &ItemId::from(999)).await.unwrap(), None);
    }
}
