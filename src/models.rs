//! Domain models that mirror the JSON records served by the remote library API
//! and get passed throughout the TUI. These stay light-weight data holders so
//! the other layers can focus on presentation and transport. The remote API
//! owns and versions every record; whatever we hold here is a transient copy.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One of the two remote resource groups.
///
/// The path segments are part of the existing external contract: books live
/// under the plural `books`, authors under the singular `author`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Books,
    Author,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Books, Collection::Author];

    /// URL path segment used by the remote API and by `/edit/:type/:id`.
    pub fn path(self) -> &'static str {
        match self {
            Collection::Books => "books",
            Collection::Author => "author",
        }
    }

    /// Inverse of [`Collection::path`].
    pub fn from_path(segment: &str) -> Option<Self> {
        match segment {
            "books" => Some(Collection::Books),
            "author" => Some(Collection::Author),
            _ => None,
        }
    }

    /// Lower-case singular noun used in messages ("Failed to create book").
    pub fn noun(self) -> &'static str {
        match self {
            Collection::Books => "book",
            Collection::Author => "author",
        }
    }

    /// Capitalized singular noun used in titles and buttons.
    pub fn title(self) -> &'static str {
        match self {
            Collection::Books => "Book",
            Collection::Author => "Author",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A book as returned by the API. `author` is free text and deliberately not a
/// reference to an [`Author`] record; the two collections are independent.
pub struct Book {
    /// Server-assigned identifier. Opaque to us.
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(with = "iso_date")]
    pub publication_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// An author as returned by the API.
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(with = "iso_date")]
    pub birth_date: NaiveDate,
    pub biography: String,
}

/// Request payload for creating or replacing a book. Identical to [`Book`]
/// minus the server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(with = "iso_date")]
    pub publication_date: NaiveDate,
}

/// Request payload for creating or replacing an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorInput {
    pub name: String,
    #[serde(with = "iso_date")]
    pub birth_date: NaiveDate,
    pub biography: String,
}

impl From<&Book> for BookInput {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            publication_date: book.publication_date,
        }
    }
}

impl From<&Author> for AuthorInput {
    fn from(author: &Author) -> Self {
        Self {
            name: author.name.clone(),
            birth_date: author.birth_date,
            biography: author.biography.clone(),
        }
    }
}

/// A fetched record of either type. Edit flows and the API facade work with
/// this so they do not need a separate code path per collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Book(Book),
    Author(Author),
}

impl Record {
    pub fn id(&self) -> &str {
        match self {
            Record::Book(book) => &book.id,
            Record::Author(author) => &author.id,
        }
    }

    pub fn collection(&self) -> Collection {
        match self {
            Record::Book(_) => Collection::Books,
            Record::Author(_) => Collection::Author,
        }
    }

    /// Short label used in status messages.
    pub fn display_name(&self) -> &str {
        match self {
            Record::Book(book) => &book.title,
            Record::Author(author) => &author.name,
        }
    }
}

/// A validated payload ready to be sent, tagged with its collection. On the
/// wire it is just the inner payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Draft {
    Book(BookInput),
    Author(AuthorInput),
}

impl Draft {
    pub fn collection(&self) -> Collection {
        match self {
            Draft::Book(_) => Collection::Books,
            Draft::Author(_) => Collection::Author,
        }
    }
}

/// Calendar dates travel as `YYYY-MM-DD`. The mock API turns date inputs into
/// full RFC 3339 timestamps, so reading also accepts those and keeps only the
/// date part.
pub(crate) mod iso_date {
    use chrono::{DateTime, NaiveDate};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) const DATE_FMT: &str = "%Y-%m-%d";

    pub(crate) fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DATE_FMT).to_string())
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw: String = Deserialize::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid date '{raw}'")))
    }

    /// Parse either accepted date shape.
    pub(crate) fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, DATE_FMT)
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    }
}
