//! Stateless request builder and response parser for the library API.
//!
//! `LibraryClient` holds only a base URL. Every operation is split into a
//! `build_*` method producing an [`HttpRequest`] and a `parse_*` method
//! consuming an [`HttpResponse`]; the caller runs the round-trip in between.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{Author, Book, Collection, Draft, Record};

use super::http::{HttpMethod, HttpRequest, HttpResponse};

#[derive(Debug, Clone)]
pub struct LibraryClient {
    base_url: String,
}

impl LibraryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list(&self, collection: Collection) -> HttpRequest {
        self.bodiless(HttpMethod::Get, self.collection_url(collection))
    }

    pub fn build_get(&self, collection: Collection, id: &str) -> HttpRequest {
        self.bodiless(HttpMethod::Get, self.record_url(collection, id))
    }

    pub fn build_create(&self, draft: &Draft) -> Result<HttpRequest, ApiError> {
        let url = self.collection_url(draft.collection());
        json_request(HttpMethod::Post, url, draft)
    }

    pub fn build_update(&self, id: &str, draft: &Draft) -> Result<HttpRequest, ApiError> {
        let url = self.record_url(draft.collection(), id);
        json_request(HttpMethod::Put, url, draft)
    }

    pub fn build_delete(&self, collection: Collection, id: &str) -> HttpRequest {
        self.bodiless(HttpMethod::Delete, self.record_url(collection, id))
    }

    /// Parse a list response into typed rows.
    pub fn parse_list<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<Vec<T>, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// Parse a single-record response (get, create, update) for `collection`.
    pub fn parse_record(&self, collection: Collection, response: HttpResponse) -> Result<Record, ApiError> {
        check_status(&response)?;
        match collection {
            Collection::Books => decode::<Book>(&response.body).map(Record::Book),
            Collection::Author => decode::<Author>(&response.body).map(Record::Author),
        }
    }

    /// The mock API echoes the removed record; only the status matters here.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn collection_url(&self, collection: Collection) -> String {
        format!("{}/{}", self.base_url, collection.path())
    }

    fn record_url(&self, collection: Collection, id: &str) -> String {
        format!("{}/{}/{id}", self.base_url, collection.path())
    }

    fn bodiless(&self, method: HttpMethod, url: String) -> HttpRequest {
        HttpRequest {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }
}

fn json_request(method: HttpMethod, url: String, draft: &Draft) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(draft).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(HttpRequest {
        method,
        url,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Map non-success status codes to the matching `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
