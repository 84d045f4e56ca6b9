//! Stateless HTTP request builder and response parser for the item collection.
//!
//! # Design
//! `ItemClient` holds only the base URL and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`. The
//! round-trip itself happens elsewhere (see `Inventory` and `Transport`).

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Item, NewItem};

/// Characters escaped when an item id is used as a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
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

/// Synchronous, stateless client for the `/items` collection.
#[derive(Debug, Clone)]
pub struct ItemClient {
    base_url: String,
}

impl ItemClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        // `.` and `..` would be resolved as dot-segments by the HTTP client.
        if !id.is_empty() && id.bytes().all(|b| b == b'.') {
            return format!("{}/items/{}", self.base_url, "%2E".repeat(id.len()));
        }
        format!(
            "{}/items/{}",
            self.base_url,
            utf8_percent_encode(id, PATH_SEGMENT)
        )
    }

    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_item(&self, input: &NewItem) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.collection_url(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_item(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Any 2xx counts; the body is not inspected.
    pub fn parse_create_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)?;
        Ok(())
    }

    /// Parse a list body in three steps: JSON syntax, then "is it a
    /// sequence", then the shape of each element.
    ///
    /// A single element that is not an item rejects the whole list with
    /// `Schema`; no partial list is ever returned.
    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response)?;
        let value: serde_json::Value =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))?;
        if !value.is_array() {
            return Err(ApiError::Schema);
        }
        serde_json::from_value(value).map_err(|_| ApiError::Schema)
    }

    /// Any 2xx counts; the body is not inspected.
    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)?;
        Ok(())
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
