//! Requests the console sends to the REST backend, described as data.
//!
//! Controllers only ever produce an `ApiRequest`; the frontend's `api` module
//! is the single place that turns one into a `fetch`. That keeps every
//! "which call does this action issue" decision testable without a browser.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ConsoleError;
use crate::listing::paging::PageCursor;
use crate::model::record::RecordId;
use crate::model::resource::ResourceKind;
use crate::model::session::LoginRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute path on the API origin, starting with `/`.
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, path: String, body: Option<Value>) -> Self {
        Self { method, path, body }
    }

    /// `GET {resource}/?skip=..&limit=..` for the page under `cursor`.
    pub fn list(kind: ResourceKind, cursor: PageCursor) -> Self {
        Self::window(kind, cursor.offset(), cursor.page_size())
    }

    /// Options for a dropdown fed by `kind`.
    pub fn lookup(kind: ResourceKind, limit: u32) -> Self {
        Self::window(kind, 0, limit)
    }

    /// Unpaged `GET {resource}/`, used to count records for total-based paging.
    pub fn list_all(kind: ResourceKind) -> Self {
        Self::new(Method::Get, format!("/{}/", kind.endpoint()), None)
    }

    pub fn fetch(kind: ResourceKind, id: &RecordId) -> Self {
        Self::new(Method::Get, item_path(kind, id), None)
    }

    pub fn create(kind: ResourceKind, payload: Map<String, Value>) -> Self {
        let path = kind.create_path(&payload);
        Self::new(Method::Post, path, Some(Value::Object(payload)))
    }

    pub fn update(kind: ResourceKind, id: &RecordId, payload: Map<String, Value>) -> Self {
        Self::new(Method::Put, item_path(kind, id), Some(Value::Object(payload)))
    }

    /// The delete call, only once the user has confirmed it.
    pub fn delete(kind: ResourceKind, id: &RecordId, confirmed: bool) -> Option<Self> {
        confirmed.then(|| Self::new(Method::Delete, item_path(kind, id), None))
    }

    pub fn login(credentials: &LoginRequest) -> Self {
        let body = serde_json::to_value(credentials).ok();
        Self::new(Method::Post, "/admin/login/".to_string(), body)
    }

    pub fn logout() -> Self {
        Self::new(Method::Post, "/admin/logout/".to_string(), None)
    }

    /// Full URL under the configured API base.
    pub fn url(&self, api_base: &str) -> String {
        format!("{}{}", api_base.trim_end_matches('/'), self.path)
    }

    fn window(kind: ResourceKind, skip: u64, limit: u32) -> Self {
        Self::new(
            Method::Get,
            format!("/{}/?skip={}&limit={}", kind.endpoint(), skip, limit),
            None,
        )
    }
}

fn item_path(kind: ResourceKind, id: &RecordId) -> String {
    format!("/{}/{}", kind.endpoint(), id)
}

/// Decodes a success body, mapping failures into the console's taxonomy.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ConsoleError> {
    serde_json::from_str(body).map_err(|e| ConsoleError::MalformedBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::Record;
    use serde_json::json;

    #[test]
    fn list_requests_offset_from_page() {
        let cursor = PageCursor::new(10);
        for page in 1..=50u32 {
            let req = ApiRequest::list(ResourceKind::Laborers, cursor.at(page));
            assert_eq!(req.method, Method::Get);
            assert_eq!(
                req.path,
                format!("/labours/?skip={}&limit=10", (page - 1) * 10)
            );
        }
    }

    #[test]
    fn item_paths_use_the_record_id() {
        let id = RecordId::new("9");
        assert_eq!(ApiRequest::fetch(ResourceKind::Sites, &id).path, "/sites/9");
        let update = ApiRequest::update(ResourceKind::Payments, &id, Map::new());
        assert_eq!(update.method, Method::Put);
        assert_eq!(update.path, "/payments/9");
    }

    #[test]
    fn declined_delete_issues_nothing() {
        let id = RecordId::new("3");
        assert_eq!(ApiRequest::delete(ResourceKind::Materials, &id, false), None);
        let req = ApiRequest::delete(ResourceKind::Materials, &id, true).unwrap();
        assert_eq!(req.method, Method::Delete);
        assert_eq!(req.path, "/materials/3");
    }

    #[test]
    fn urls_join_the_api_base() {
        let req = ApiRequest::logout();
        assert_eq!(req.url(""), "/admin/logout/");
        assert_eq!(
            req.url("http://localhost:8000/"),
            "http://localhost:8000/admin/logout/"
        );
    }

    #[test]
    fn login_carries_credentials() {
        let req = ApiRequest::login(&LoginRequest {
            username: "admin".to_string(),
            password: "secret".to_string(),
        });
        assert_eq!(
            req.body,
            Some(json!({"username": "admin", "password": "secret"}))
        );
    }

    #[test]
    fn decode_reports_malformed_bodies() {
        let record: Record = decode(r#"{"id": 1, "name": "North yard"}"#).unwrap();
        assert_eq!(record.id(), Some(RecordId::new("1")));
        assert!(matches!(
            decode::<Record>("not json"),
            Err(ConsoleError::MalformedBody(_))
        ));
    }
}
