//! Binary entry point: load settings, start file logging, point the API
//! client at the configured backend and drive the Ratatui event loop until the
//! user exits.
use library_admin::config::{log_path, Settings};
use library_admin::{logging, run_app, App, LibraryApi, UreqTransport};
use tracing::info;

/// Returning a `Result` bubbles fatal start-up problems (an unreadable config
/// file, an unknown start route) to the terminal instead of crashing silently.
fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    logging::init(&settings, &log_path()?)?;
    info!(api_base_url = %settings.api_base_url, "starting library admin");

    let api = LibraryApi::new(&settings.api_base_url, Box::new(UreqTransport::new()));
    let mut app = App::new(api, settings.start_route()?);
    run_app(&mut app)
}
