//! Field descriptors and validation rules for the two record types.
//!
//! Both the create and the edit flow validate through [`validate`], so the
//! rules live in one table per collection instead of being repeated per form.
//! Values are raw text exactly as typed; [`parse`] turns a clean set of values
//! into a typed [`Draft`].

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{iso_date, AuthorInput, BookInput, Collection, Draft, Record};

/// How a field is edited and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    LongText,
}

/// Extra check applied once a required value is present.
#[derive(Debug, Clone, Copy)]
enum Rule {
    Any,
    Isbn,
    Date { message: &'static str },
    MinChars { min: usize, message: &'static str },
}

/// Static description of one form field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// JSON / form key, e.g. `publicationDate`.
    pub name: &'static str,
    /// Label shown next to the input.
    pub label: &'static str,
    pub kind: FieldKind,
    required_message: &'static str,
    rule: Rule,
}

pub const ISBN_MESSAGE: &str = "ISBN must be 10 or 13 digits";

const BOOK_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "title",
        label: "Title",
        kind: FieldKind::Text,
        required_message: "Title is required",
        rule: Rule::Any,
    },
    FieldSpec {
        name: "author",
        label: "Author",
        kind: FieldKind::Text,
        required_message: "Author is required",
        rule: Rule::Any,
    },
    FieldSpec {
        name: "isbn",
        label: "ISBN",
        kind: FieldKind::Text,
        required_message: "ISBN is required",
        rule: Rule::Isbn,
    },
    FieldSpec {
        name: "publicationDate",
        label: "Publication Date",
        kind: FieldKind::Date,
        required_message: "Publication date is required",
        rule: Rule::Date {
            message: "Publication date must be a valid date",
        },
    },
];

const AUTHOR_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label: "Name",
        kind: FieldKind::Text,
        required_message: "Name is required",
        rule: Rule::Any,
    },
    FieldSpec {
        name: "birthDate",
        label: "Birth Date",
        kind: FieldKind::Date,
        required_message: "Birth date is required",
        rule: Rule::Date {
            message: "Birth date must be a valid date",
        },
    },
    FieldSpec {
        name: "biography",
        label: "Biography",
        kind: FieldKind::LongText,
        required_message: "Biography is required",
        rule: Rule::MinChars {
            min: 10,
            message: "Biography must be at least 10 characters",
        },
    },
];

/// Ordered field list for a collection.
pub fn fields(collection: Collection) -> &'static [FieldSpec] {
    match collection {
        Collection::Books => BOOK_FIELDS,
        Collection::Author => AUTHOR_FIELDS,
    }
}

/// A validation failure attached to a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Raw text of every field in a form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<&'static str, String>);

impl FormValues {
    /// Empty defaults used by the create flow.
    pub fn blank(collection: Collection) -> Self {
        Self(
            fields(collection)
                .iter()
                .map(|field| (field.name, String::new()))
                .collect(),
        )
    }

    /// Seed the edit flow from a fetched record.
    pub fn from_record(record: &Record) -> Self {
        let mut values = Self::blank(record.collection());
        match record {
            Record::Book(book) => {
                values.set("title", book.title.clone());
                values.set("author", book.author.clone());
                values.set("isbn", book.isbn.clone());
                values.set(
                    "publicationDate",
                    book.publication_date.format(iso_date::DATE_FMT).to_string(),
                );
            }
            Record::Author(author) => {
                values.set("name", author.name.clone());
                values.set(
                    "birthDate",
                    author.birth_date.format(iso_date::DATE_FMT).to_string(),
                );
                values.set("biography", author.biography.clone());
            }
        }
        values
    }

    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        self.0.insert(name, value.into());
    }

    /// Builder-style [`FormValues::set`].
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub(crate) fn value_mut(&mut self, name: &'static str) -> &mut String {
        self.0.entry(name).or_default()
    }
}

/// Validate every field of `collection`, returning errors in field order.
/// At most one error is reported per field.
pub fn validate(collection: Collection, values: &FormValues) -> Vec<FieldError> {
    fields(collection)
        .iter()
        .filter_map(|field| check_field(field, values.get(field.name)))
        .collect()
}

/// Validate and convert the values into a typed payload.
pub fn parse(collection: Collection, values: &FormValues) -> Result<Draft, Vec<FieldError>> {
    let errors = validate(collection, values);
    if !errors.is_empty() {
        return Err(errors);
    }

    let text = |name: &str| values.get(name).trim().to_string();
    let date = |name: &'static str| {
        iso_date::parse(values.get(name)).ok_or_else(|| {
            vec![FieldError {
                field: name,
                message: "Invalid date",
            }]
        })
    };

    let draft = match collection {
        Collection::Books => Draft::Book(BookInput {
            title: text("title"),
            author: text("author"),
            isbn: text("isbn"),
            publication_date: date("publicationDate")?,
        }),
        Collection::Author => Draft::Author(AuthorInput {
            name: text("name"),
            birth_date: date("birthDate")?,
            biography: text("biography"),
        }),
    };
    Ok(draft)
}

fn check_field(field: &FieldSpec, raw: &str) -> Option<FieldError> {
    let value = raw.trim();
    let fail = |message| {
        Some(FieldError {
            field: field.name,
            message,
        })
    };

    if value.is_empty() {
        return fail(field.required_message);
    }

    // Presence is judged on the trimmed text; pattern and length see what was typed.
    match field.rule {
        Rule::Any => None,
        Rule::Isbn if !isbn_matches(raw) => fail(ISBN_MESSAGE),
        Rule::Isbn => None,
        Rule::Date { message } if iso_date::parse(value).is_none() => fail(message),
        Rule::Date { .. } => None,
        Rule::MinChars { min, message } if raw.chars().count() < min => fail(message),
        Rule::MinChars { .. } => None,
    }
}

/// Mirrors the historical `^\d{10}|\d{13}$` pattern, alternation precedence
/// included: the value passes when it starts with ten digits or ends with
/// thirteen. Longer digit runs and trailing junk after ten leading digits are
/// accepted.
fn isbn_matches(value: &str) -> bool {
    let bytes = value.as_bytes();
    let leading_ten = bytes.len() >= 10 && bytes[..10].iter().all(u8::is_ascii_digit);
    let trailing_thirteen =
        bytes.len() >= 13 && bytes[bytes.len() - 13..].iter().all(u8::is_ascii_digit);
    leading_ten || trailing_thirteen
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::Author;

    fn valid_book() -> FormValues {
        FormValues::blank(Collection::Books)
            .with("title", "The Dispossessed")
            .with("author", "Ursula K. Le Guin")
            .with("isbn", "9780060512750")
            .with("publicationDate", "1974-05-01")
    }

    fn valid_author() -> FormValues {
        FormValues::blank(Collection::Author)
            .with("name", "Italo Calvino")
            .with("birthDate", "1923-10-15")
            .with("biography", "Italian journalist and writer.")
    }

    #[test]
    fn valid_book_has_no_errors() {
        assert!(validate(Collection::Books, &valid_book()).is_empty());
        let ten = valid_book().with("isbn", "0441172717");
        assert!(validate(Collection::Books, &ten).is_empty());
    }

    #[test]
    fn blank_book_reports_every_required_field_in_order() {
        let errors = validate(Collection::Books, &FormValues::blank(Collection::Books));
        let messages: Vec<_> = errors.iter().map(|e| e.message).collect();
        assert_eq!(
            messages,
            vec![
                "Title is required",
                "Author is required",
                "ISBN is required",
                "Publication date is required",
            ]
        );
    }

    #[test]
    fn short_isbn_is_rejected() {
        let errors = validate(Collection::Books, &valid_book().with("isbn", "12345"));
        assert_eq!(
            errors,
            vec![FieldError {
                field: "isbn",
                message: ISBN_MESSAGE,
            }]
        );
    }

    #[test]
    fn isbn_pattern_keeps_its_historical_laxity() {
        assert!(isbn_matches("1234567890"));
        assert!(isbn_matches("123456789012"));
        assert!(isbn_matches("1234567890-extra"));
        assert!(isbn_matches("ISBN 9780060512750"));
        assert!(!isbn_matches("123456789"));
        assert!(!isbn_matches("978-0-06-051275-0"));
    }

    #[test]
    fn unparseable_date_is_rejected() {
        let errors = validate(
            Collection::Books,
            &valid_book().with("publicationDate", "someday"),
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "publicationDate");
        assert_eq!(errors[0].message, "Publication date must be a valid date");
    }

    #[test]
    fn short_biography_yields_exactly_one_error() {
        for bio in ["", "Too short", "123456789"] {
            let values = valid_author().with("biography", bio);
            let errors = validate(Collection::Author, &values);
            assert_eq!(errors.len(), 1, "biography {bio:?}");
            assert_eq!(errors[0].field, "biography");
        }
        let values = valid_author().with("biography", "Too short");
        assert_eq!(
            validate(Collection::Author, &values)[0].message,
            "Biography must be at least 10 characters"
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let errors = validate(Collection::Author, &valid_author().with("name", "   "));
        assert_eq!(errors[0].message, "Name is required");
    }

    #[test]
    fn pattern_and_length_checks_see_the_untrimmed_value() {
        let leading_space = valid_book().with("isbn", " 1234567890");
        assert_eq!(
            validate(Collection::Books, &leading_space)[0].message,
            ISBN_MESSAGE
        );

        let padded_bio = valid_author().with("biography", "123456789 ");
        assert!(validate(Collection::Author, &padded_bio).is_empty());

        let trailing = valid_book().with("isbn", "9780060512750 ");
        assert!(validate(Collection::Books, &trailing).is_empty());
    }

    #[test]
    fn parse_trims_and_types_the_payload() {
        let values = valid_author().with("name", "  Italo Calvino ");
        let draft = parse(Collection::Author, &values).unwrap();
        match draft {
            Draft::Author(input) => {
                assert_eq!(input.name, "Italo Calvino");
                assert_eq!(input.birth_date, NaiveDate::from_ymd_opt(1923, 10, 15).unwrap());
            }
            other => panic!("unexpected draft {other:?}"),
        }
    }

    #[test]
    fn parse_returns_field_errors_for_bad_input() {
        let errors = parse(Collection::Books, &valid_book().with("title", "")).unwrap_err();
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn from_record_round_trips_through_validation() {
        let record = Record::Author(Author {
            id: "4".to_string(),
            name: "Octavia Butler".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1947, 6, 22).unwrap(),
            biography: "American science fiction author.".to_string(),
        });
        let values = FormValues::from_record(&record);
        assert_eq!(values.get("birthDate"), "1947-06-22");
        assert!(validate(Collection::Author, &values).is_empty());
    }
}
