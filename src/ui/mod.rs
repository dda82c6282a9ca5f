//! Ratatui front-end for the library admin dashboard: a collapsible sidebar,
//! a library page listing books and authors, and create/edit forms driven by
//! the validation schema.

mod app;
mod forms;
mod helpers;
mod nav;
mod screens;
mod tasks;
mod terminal;

pub use app::App;
pub use nav::{Route, RouteError};
pub use terminal::run_app;
