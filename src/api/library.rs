use std::sync::{mpsc, Arc};
use std::thread;

use tracing::warn;

use crate::error::ApiError;
use crate::models::{Author, Book, Collection, Draft, Record};

use super::client::LibraryClient;
use super::transport::Transport;

/// Both collections as fetched together by the library screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub books: Vec<Book>,
    pub authors: Vec<Author>,
}

/// One call per (collection, verb) pair against the remote API. Each method
/// performs exactly one HTTP round-trip; nothing is retried or cached.
/// Clones share the transport.
#[derive(Clone)]
pub struct LibraryApi {
    client: LibraryClient,
    transport: Arc<dyn Transport>,
}

impl LibraryApi {
    pub fn new(base_url: &str, transport: Box<dyn Transport>) -> Self {
        Self {
            client: LibraryClient::new(base_url),
            transport: Arc::from(transport),
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let response = self.transport.execute(self.client.build_list(Collection::Books))?;
        self.client.parse_list(response)
    }

    pub fn list_authors(&self) -> Result<Vec<Author>, ApiError> {
        let response = self.transport.execute(self.client.build_list(Collection::Author))?;
        self.client.parse_list(response)
    }

    /// Untyped listing, for callers that handle both collections alike.
    pub fn list(&self, collection: Collection) -> Result<Vec<Record>, ApiError> {
        Ok(match collection {
            Collection::Books => self.list_books()?.into_iter().map(Record::Book).collect(),
            Collection::Author => self.list_authors()?.into_iter().map(Record::Author).collect(),
        })
    }

    pub fn get(&self, collection: Collection, id: &str) -> Result<Record, ApiError> {
        let response = self.transport.execute(self.client.build_get(collection, id))?;
        self.client.parse_record(collection, response)
    }

    pub fn create(&self, draft: &Draft) -> Result<Record, ApiError> {
        let request = self.client.build_create(draft)?;
        let response = self.transport.execute(request)?;
        self.client.parse_record(draft.collection(), response)
    }

    pub fn update(&self, id: &str, draft: &Draft) -> Result<Record, ApiError> {
        let request = self.client.build_update(id, draft)?;
        let response = self.transport.execute(request)?;
        self.client.parse_record(draft.collection(), response)
    }

    pub fn delete(&self, collection: Collection, id: &str) -> Result<(), ApiError> {
        let response = self.transport.execute(self.client.build_delete(collection, id))?;
        self.client.parse_delete(response)
    }

    /// Fetch both collections concurrently and join on both. The first failure
    /// to arrive becomes the result right away; the other worker is left
    /// detached and its answer is dropped.
    pub fn fetch_catalog(&self) -> Result<Catalog, ApiError> {
        enum Half {
            Books(Result<Vec<Book>, ApiError>),
            Authors(Result<Vec<Author>, ApiError>),
        }

        let (tx, rx) = mpsc::channel();
        let books_api = self.clone();
        let books_tx = tx.clone();
        thread::spawn(move || {
            let _ = books_tx.send(Half::Books(books_api.list_books()));
        });
        let authors_api = self.clone();
        thread::spawn(move || {
            let _ = tx.send(Half::Authors(authors_api.list_authors()));
        });

        let mut books = None;
        let mut authors = None;
        for half in rx {
            match half {
                Half::Books(result) => books = Some(result?),
                Half::Authors(result) => authors = Some(result?),
            }
        }

        match (books, authors) {
            (Some(books), Some(authors)) => Ok(Catalog { books, authors }),
            _ => {
                warn!("catalog fetch worker exited without a result");
                Err(ApiError::Network("catalog fetch was interrupted".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::api::http::{HttpRequest, HttpResponse};

    /// Books fail at once; authors answer only after `delay`.
    struct SplitTransport {
        delay: Duration,
    }

    impl Transport for SplitTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            if request.url.ends_with("/books") {
                return Err(ApiError::Network("books down".to_string()));
            }
            thread::sleep(self.delay);
            Ok(HttpResponse {
                status: 200,
                body: "[]".to_string(),
            })
        }
    }

    #[test]
    fn first_catalog_failure_returns_without_waiting_for_the_other_half() {
        let api = LibraryApi::new(
            "http://split.test/api",
            Box::new(SplitTransport {
                delay: Duration::from_secs(3),
            }),
        );

        let started = Instant::now();
        let err = api.fetch_catalog().unwrap_err();
        let elapsed = started.elapsed();

        assert_eq!(err.to_string(), "network error: books down");
        assert!(elapsed < Duration::from_secs(1), "took {elapsed:?}");
    }

    #[test]
    fn catalog_success_waits_for_both_halves() {
        struct Slow;
        impl Transport for Slow {
            fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
                thread::sleep(Duration::from_millis(50));
                Ok(HttpResponse {
                    status: 200,
                    body: "[]".to_string(),
                })
            }
        }

        let api = LibraryApi::new("http://slow.test/api", Box::new(Slow));
        assert_eq!(api.fetch_catalog().unwrap(), Catalog::default());
    }
}
