//! Core library surface for the Library Admin terminal dashboard.
//!
//! The binary wires these pieces together: settings and logging come up first,
//! then a [`LibraryApi`] over the real HTTP transport, then the TUI.
pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod schema;
pub mod ui;

/// Remote collection access and the transport seam behind it.
pub use api::{LibraryApi, Transport, UreqTransport};

/// Errors surfaced by API calls.
pub use error::ApiError;

/// The domain records and the payloads sent when creating or updating them.
pub use models::{Author, AuthorInput, Book, BookInput, Collection, Draft, Record};

/// Layered application settings.
pub use crate::config::Settings;

/// The interactive application entry point and state container.
pub use ui::{run_app, App, Route};
