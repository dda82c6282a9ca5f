//! Remote API access split across logical submodules.

mod client;
mod http;
mod library;
#[cfg(test)]
pub(crate) mod memory;
mod transport;

pub use client::LibraryClient;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use library::{Catalog, LibraryApi};
pub use transport::{Transport, UreqTransport};
