use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::models::Collection;

/// Sidebar width in columns while collapsed (icons only).
pub(crate) const SIDEBAR_COLLAPSED_WIDTH: u16 = 6;
/// Sidebar width in columns while expanded (title and labels).
pub(crate) const SIDEBAR_EXPANDED_WIDTH: u16 = 22;

/// Application-level destinations, addressed by path so they can be
/// configured as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Library,
    /// `/create`
    Create,
    /// `/edit/:type/:id`
    Edit { collection: Collection, id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown route '{0}'")]
    Unknown(String),
    #[error("unknown record type '{0}', expected 'books' or 'author'")]
    UnknownType(String),
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let segments: Vec<&str> = trimmed
            .trim_matches('/')
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Ok(Route::Library),
            ["create"] => Ok(Route::Create),
            ["edit", kind, id] => {
                let collection = Collection::from_path(kind)
                    .ok_or_else(|| RouteError::UnknownType(kind.to_string()))?;
                Ok(Route::Edit {
                    collection,
                    id: id.to_string(),
                })
            }
            _ => Err(RouteError::Unknown(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Library => f.write_str("/"),
            Route::Create => f.write_str("/create"),
            Route::Edit { collection, id } => write!(f, "/edit/{}/{id}", collection.path()),
        }
    }
}

/// Collapsible side panel. Its only state is whether it is collapsed, and that
/// only changes the layout width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Sidebar {
    pub(crate) collapsed: bool,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self { collapsed: true }
    }
}

impl Sidebar {
    pub(crate) fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub(crate) fn width(&self) -> u16 {
        if self.collapsed {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            SIDEBAR_EXPANDED_WIDTH
        }
    }

    /// Links shown in the panel as `(icon, label, shortcut, destination)`.
    pub(crate) fn links() -> [(&'static str, &'static str, &'static str, Route); 2] {
        [
            ("≡", "Library", "^L", Route::Library),
            ("+", "Create", "^N", Route::Create),
        ]
    }
}
