//! In-memory stand-in for the remote API, used by unit tests.
//!
//! Behaves like the mock REST backend: server-assigned string ids, 201 on
//! create, 404 for unknown records. Failures can be injected per method and
//! path so error branches can be driven deterministically.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::error::ApiError;
use crate::models::Collection;

use super::http::{HttpMethod, HttpRequest, HttpResponse};
use super::transport::Transport;

pub(crate) const MEMORY_BASE: &str = "http://memory.test/api";

#[derive(Default)]
struct MemoryState {
    records: BTreeMap<Collection, BTreeMap<u64, Value>>,
    next_id: u64,
    requests: Vec<HttpRequest>,
    failures: Vec<Failure>,
}

struct Failure {
    method: HttpMethod,
    path: String,
    status: Option<u16>,
}

/// Cloning shares the underlying state, so a test can keep one handle while
/// the API owns another.
#[derive(Clone, Default)]
pub(crate) struct MemoryTransport {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert a record directly, bypassing the request log. Returns its id.
    pub(crate) fn seed(&self, collection: Collection, mut record: Value) -> String {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        record["id"] = json!(id.to_string());
        state.records.entry(collection).or_default().insert(id, record);
        id.to_string()
    }

    /// Remove a record behind the client's back, as another client would.
    pub(crate) fn remove(&self, collection: Collection, id: &str) {
        let mut state = self.state.lock().unwrap();
        if let (Some(rows), Ok(id)) = (state.records.get_mut(&collection), id.parse::<u64>()) {
            rows.remove(&id);
        }
    }

    /// Answer `method path` with `status` until cleared.
    pub(crate) fn fail_with_status(&self, method: HttpMethod, path: &str, status: u16) {
        self.push_failure(method, path, Some(status));
    }

    /// Fail `method path` without producing a response.
    pub(crate) fn fail_with_network_error(&self, method: HttpMethod, path: &str) {
        self.push_failure(method, path, None);
    }

    pub(crate) fn clear_failures(&self) {
        self.state.lock().unwrap().failures.clear();
    }

    pub(crate) fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub(crate) fn len(&self, collection: Collection) -> usize {
        self.state
            .lock()
            .unwrap()
            .records
            .get(&collection)
            .map_or(0, BTreeMap::len)
    }

    fn push_failure(&self, method: HttpMethod, path: &str, status: Option<u16>) {
        self.state.lock().unwrap().failures.push(Failure {
            method,
            path: path.to_string(),
            status,
        });
    }
}

impl Transport for MemoryTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request.clone());

        let path = request.url.strip_prefix(MEMORY_BASE).unwrap_or(&request.url).to_string();
        if let Some(failure) = state
            .failures
            .iter()
            .find(|f| f.method == request.method && f.path == path)
        {
            return match failure.status {
                Some(status) => Ok(respond(status, json!("injected failure"))),
                None => Err(ApiError::Network("connection refused".to_string())),
            };
        }

        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        let (collection, id) = match segments.as_slice() {
            [collection] => (Collection::from_path(collection), None),
            [collection, id] => (Collection::from_path(collection), id.parse::<u64>().ok()),
            _ => (None, None),
        };
        let Some(collection) = collection else {
            return Ok(respond(404, json!("Not found")));
        };
        let has_id = segments.len() == 2;

        let response = match (request.method, has_id, id) {
            (HttpMethod::Get, false, _) => {
                let rows: Vec<Value> = state
                    .records
                    .get(&collection)
                    .map(|rows| rows.values().cloned().collect())
                    .unwrap_or_default();
                respond(200, Value::Array(rows))
            }
            (HttpMethod::Post, false, _) => {
                let mut record = parse_body(&request);
                state.next_id += 1;
                let id = state.next_id;
                record["id"] = json!(id.to_string());
                state.records.entry(collection).or_default().insert(id, record.clone());
                respond(201, record)
            }
            (HttpMethod::Get, true, Some(id)) => match lookup(&state, collection, id) {
                Some(record) => respond(200, record.clone()),
                None => respond(404, json!("Not found")),
            },
            (HttpMethod::Put, true, Some(id)) => {
                let changes = parse_body(&request);
                match state.records.get_mut(&collection).and_then(|rows| rows.get_mut(&id)) {
                    Some(record) => {
                        if let (Some(target), Value::Object(fields)) = (record.as_object_mut(), changes) {
                            for (key, value) in fields {
                                if key != "id" {
                                    target.insert(key, value);
                                }
                            }
                        }
                        respond(200, record.clone())
                    }
                    None => respond(404, json!("Not found")),
                }
            }
            (HttpMethod::Delete, true, Some(id)) => {
                match state.records.get_mut(&collection).and_then(|rows| rows.remove(&id)) {
                    Some(record) => respond(200, record),
                    None => respond(404, json!("Not found")),
                }
            }
            _ => respond(404, json!("Not found")),
        };
        Ok(response)
    }
}

fn lookup(state: &MemoryState, collection: Collection, id: u64) -> Option<&Value> {
    state.records.get(&collection)?.get(&id)
}

fn parse_body(request: &HttpRequest) -> Value {
    request
        .body
        .as_deref()
        .and_then(|body| serde_json::from_str(body).ok())
        .unwrap_or_else(|| json!({}))
}

fn respond(status: u16, body: Value) -> HttpResponse {
    HttpResponse {
        status,
        body: body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::api::LibraryApi;
    use crate::models::{BookInput, Draft, Record};

    fn api() -> (LibraryApi, MemoryTransport) {
        let memory = MemoryTransport::new();
        (LibraryApi::new(MEMORY_BASE, Box::new(memory.clone())), memory)
    }

    fn book_input() -> BookInput {
        BookInput {
            title: "Kindred".to_string(),
            author: "Octavia E. Butler".to_string(),
            isbn: "9780807083697".to_string(),
            publication_date: NaiveDate::from_ymd_opt(1979, 6, 1).unwrap(),
        }
    }

    #[test]
    fn create_then_get_round_trips_the_payload() {
        let (api, _) = api();
        let created = api.create(&Draft::Book(book_input())).unwrap();
        let fetched = api.get(Collection::Books, created.id()).unwrap();
        match fetched {
            Record::Book(book) => assert_eq!(BookInput::from(&book), book_input()),
            other => panic!("expected a book, got {other:?}"),
        }
    }

    #[test]
    fn second_delete_is_not_found() {
        let (api, memory) = api();
        let created = api.create(&Draft::Book(book_input())).unwrap();
        api.delete(Collection::Books, created.id()).unwrap();
        let err = api.delete(Collection::Books, created.id()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(memory.len(Collection::Books), 0);
    }

    #[test]
    fn update_replaces_fields() {
        let (api, _) = api();
        let created = api.create(&Draft::Book(book_input())).unwrap();
        let mut changed = book_input();
        changed.title = "Kindred (Anniversary Edition)".to_string();
        let updated = api.update(created.id(), &Draft::Book(changed)).unwrap();
        assert_eq!(updated.display_name(), "Kindred (Anniversary Edition)");
        assert_eq!(updated.id(), created.id());
    }

    #[test]
    fn list_returns_records_of_the_requested_collection() {
        let (api, _) = api();
        api.create(&Draft::Book(book_input())).unwrap();
        let records = api.list(Collection::Books).unwrap();
        assert_eq!(records.len(), 1);
        assert!(api.list(Collection::Author).unwrap().is_empty());
    }

    #[test]
    fn catalog_fetch_is_all_or_nothing() {
        let (api, memory) = api();
        api.create(&Draft::Book(book_input())).unwrap();

        let catalog = api.fetch_catalog().unwrap();
        assert_eq!(catalog.books.len(), 1);
        assert!(catalog.authors.is_empty());

        memory.fail_with_status(HttpMethod::Get, "/author", 500);
        let err = api.fetch_catalog().unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn network_failures_carry_the_transport_message() {
        let (api, memory) = api();
        memory.fail_with_network_error(HttpMethod::Get, "/books");
        let err = api.list_books().unwrap_err();
        assert_eq!(err.to_string(), "network error: connection refused");
        memory.clear_failures();
        assert!(api.list_books().unwrap().is_empty());
    }
}
