use crate::api::Catalog;
use crate::error::ApiError;
use crate::models::{Author, Book, Collection, Record};

use super::forms::RecordForm;

/// Lifecycle of the library screen's initial fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// Both collections side by side with row selection, plus the bookkeeping for
/// deletes. Everything here is a local, possibly stale copy; it is refreshed
/// by remounting the screen.
pub(crate) struct LibraryScreen {
    pub(crate) load: LoadState,
    pub(crate) books: Vec<Book>,
    pub(crate) authors: Vec<Author>,
    pub(crate) focus: Collection,
    pub(crate) book_selected: usize,
    pub(crate) author_selected: usize,
    /// Page-level error shown above the tables (failed delete).
    pub(crate) banner: Option<String>,
    /// Delete currently in flight, if any. Further deletes are refused.
    pub(crate) deleting: Option<(Collection, String)>,
}

impl LibraryScreen {
    pub(crate) fn new() -> Self {
        Self {
            load: LoadState::Loading,
            books: Vec::new(),
            authors: Vec::new(),
            focus: Collection::Books,
            book_selected: 0,
            author_selected: 0,
            banner: None,
            deleting: None,
        }
    }

    /// Apply the joined result of both list calls. A failure replaces the page
    /// with a single error; nothing from a successful half is kept.
    pub(crate) fn finish_load(&mut self, result: Result<Catalog, ApiError>) {
        match result {
            Ok(catalog) => {
                self.books = catalog.books;
                self.authors = catalog.authors;
                self.load = LoadState::Loaded;
            }
            Err(err) => {
                self.books.clear();
                self.authors.clear();
                self.load = LoadState::Failed(err.to_string());
            }
        }
        self.ensure_in_bounds();
    }

    pub(crate) fn is_loaded(&self) -> bool {
        self.load == LoadState::Loaded
    }

    pub(crate) fn row_count(&self, collection: Collection) -> usize {
        match collection {
            Collection::Books => self.books.len(),
            Collection::Author => self.authors.len(),
        }
    }

    /// Move the cursor of the focused table.
    pub(crate) fn move_selection(&mut self, offset: isize) {
        let len = self.row_count(self.focus) as isize;
        if len == 0 {
            return;
        }
        let selected = match self.focus {
            Collection::Books => &mut self.book_selected,
            Collection::Author => &mut self.author_selected,
        };
        *selected = (*selected as isize + offset).clamp(0, len - 1) as usize;
    }

    pub(crate) fn select_first(&mut self) {
        match self.focus {
            Collection::Books => self.book_selected = 0,
            Collection::Author => self.author_selected = 0,
        }
    }

    pub(crate) fn select_last(&mut self) {
        let last = self.row_count(self.focus).saturating_sub(1);
        match self.focus {
            Collection::Books => self.book_selected = last,
            Collection::Author => self.author_selected = last,
        }
    }

    /// Swap focus between the books and authors tables.
    pub(crate) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Collection::Books => Collection::Author,
            Collection::Author => Collection::Books,
        };
    }

    /// Record under the cursor of the focused table.
    pub(crate) fn selected_record(&self) -> Option<Record> {
        match self.focus {
            Collection::Books => self.books.get(self.book_selected).cloned().map(Record::Book),
            Collection::Author => self
                .authors
                .get(self.author_selected)
                .cloned()
                .map(Record::Author),
        }
    }

    /// Mark a delete as in flight. Returns `false` when another delete is
    /// still pending.
    pub(crate) fn begin_delete(&mut self, collection: Collection, id: &str) -> bool {
        if self.deleting.is_some() {
            return false;
        }
        self.banner = None;
        self.deleting = Some((collection, id.to_string()));
        true
    }

    /// Apply the outcome of a delete. Only success touches the local rows.
    pub(crate) fn finish_delete(
        &mut self,
        collection: Collection,
        id: &str,
        result: &Result<(), ApiError>,
    ) {
        self.deleting = None;
        match result {
            Ok(()) => self.remove(collection, id),
            Err(err) => self.banner = Some(err.to_string()),
        }
    }

    /// Drop the row with `id` from local state.
    pub(crate) fn remove(&mut self, collection: Collection, id: &str) {
        match collection {
            Collection::Books => self.books.retain(|book| book.id != id),
            Collection::Author => self.authors.retain(|author| author.id != id),
        }
        self.ensure_in_bounds();
    }

    pub(crate) fn ensure_in_bounds(&mut self) {
        self.book_selected = self.book_selected.min(self.books.len().saturating_sub(1));
        self.author_selected = self.author_selected.min(self.authors.len().saturating_sub(1));
    }
}

/// Create flow: a type switch over a blank form.
pub(crate) struct CreateScreen {
    pub(crate) form: RecordForm,
}

impl CreateScreen {
    pub(crate) fn new() -> Self {
        Self {
            form: RecordForm::create(Collection::Books),
        }
    }

    /// Switch between "Add Book" and "Add Author", resetting the form to blank
    /// defaults. Ignored while a submit is in flight.
    pub(crate) fn switch_type(&mut self, collection: Collection) -> bool {
        if self.form.is_submitting() || self.form.collection == collection {
            return false;
        }
        self.form = RecordForm::create(collection);
        true
    }

    pub(crate) fn toggle_type(&mut self) -> bool {
        let next = match self.form.collection {
            Collection::Books => Collection::Author,
            Collection::Author => Collection::Books,
        };
        self.switch_type(next)
    }
}

/// Edit flow. The form only exists once the record has been fetched; a failed
/// fetch is terminal for this screen.
pub(crate) enum EditScreen {
    Loading { collection: Collection },
    Failed { collection: Collection, message: String },
    Ready(RecordForm),
}

impl EditScreen {
    pub(crate) fn new(collection: Collection) -> Self {
        EditScreen::Loading { collection }
    }

    pub(crate) fn collection(&self) -> Collection {
        match self {
            EditScreen::Loading { collection } | EditScreen::Failed { collection, .. } => {
                *collection
            }
            EditScreen::Ready(form) => form.collection,
        }
    }

    /// Apply the outcome of the initial fetch. Only meaningful while loading.
    pub(crate) fn finish_fetch(&mut self, result: Result<Record, ApiError>) {
        let EditScreen::Loading { collection } = self else {
            return;
        };
        let collection = *collection;
        *self = match result {
            Ok(record) if record.collection() == collection => EditScreen::Ready(RecordForm::edit(&record)),
            Ok(_) => EditScreen::Failed {
                collection,
                message: format!("Failed to fetch {}: unexpected record type", collection.noun()),
            },
            Err(err) => EditScreen::Failed {
                collection,
                message: format!("Failed to fetch {}: {err}", collection.noun()),
            },
        };
    }

    pub(crate) fn form_mut(&mut self) -> Option<&mut RecordForm> {
        match self {
            EditScreen::Ready(form) => Some(form),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::ui::forms::FormMode;

    fn book(id: &str, title: &str) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: "Anon".to_string(),
            isbn: "1234567890".to_string(),
            publication_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        }
    }

    fn author(id: &str) -> Author {
        Author {
            id: id.to_string(),
            name: "Anon".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(),
            biography: "Somebody who writes.".to_string(),
        }
    }

    fn loaded() -> LibraryScreen {
        let mut screen = LibraryScreen::new();
        screen.finish_load(Ok(Catalog {
            books: vec![book("1", "One"), book("2", "Two"), book("3", "Three")],
            authors: vec![author("10")],
        }));
        screen
    }

    #[test]
    fn load_failure_discards_everything() {
        let mut screen = loaded();
        screen.finish_load(Err(ApiError::Http {
            status: 503,
            body: "down".to_string(),
        }));
        assert_eq!(screen.load, LoadState::Failed("HTTP 503: down".to_string()));
        assert!(screen.books.is_empty());
        assert!(screen.authors.is_empty());
    }

    #[test]
    fn successful_delete_filters_the_row_by_id() {
        let mut screen = loaded();
        screen.book_selected = 2;
        assert!(screen.begin_delete(Collection::Books, "3"));
        screen.finish_delete(Collection::Books, "3", &Ok(()));

        let ids: Vec<_> = screen.books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(screen.book_selected, 1);
        assert!(screen.deleting.is_none());
    }

    #[test]
    fn failed_delete_keeps_rows_and_raises_a_banner() {
        let mut screen = loaded();
        screen.begin_delete(Collection::Author, "10");
        screen.finish_delete(Collection::Author, "10", &Err(ApiError::NotFound));
        assert_eq!(screen.authors.len(), 1);
        assert_eq!(screen.banner.as_deref(), Some("resource not found"));
    }

    #[test]
    fn only_one_delete_at_a_time() {
        let mut screen = loaded();
        assert!(screen.begin_delete(Collection::Books, "1"));
        assert!(!screen.begin_delete(Collection::Books, "2"));
    }

    #[test]
    fn selection_follows_the_focused_table() {
        let mut screen = loaded();
        screen.move_selection(5);
        assert_eq!(screen.book_selected, 2);
        screen.toggle_focus();
        screen.move_selection(3);
        assert_eq!(screen.author_selected, 0);
        assert_eq!(screen.selected_record().unwrap().id(), "10");
        screen.toggle_focus();
        screen.select_first();
        assert_eq!(screen.selected_record().unwrap().id(), "1");
        screen.select_last();
        assert_eq!(screen.selected_record().unwrap().id(), "3");
    }

    #[test]
    fn switching_create_type_resets_the_form() {
        let mut screen = CreateScreen::new();
        screen.form.push_char('x');
        assert!(screen.switch_type(Collection::Author));
        assert_eq!(screen.form.collection, Collection::Author);
        assert_eq!(screen.form.values.get("name"), "");
        assert!(!screen.switch_type(Collection::Author));
        assert!(screen.toggle_type());
        assert_eq!(screen.form.collection, Collection::Books);
    }

    #[test]
    fn edit_fetch_failure_is_terminal() {
        let mut screen = EditScreen::new(Collection::Author);
        screen.finish_fetch(Err(ApiError::NotFound));
        match &screen {
            EditScreen::Failed { message, .. } => {
                assert_eq!(message, "Failed to fetch author: resource not found")
            }
            _ => panic!("expected the failed state"),
        }
        assert!(screen.form_mut().is_none());

        screen.finish_fetch(Ok(Record::Author(author("9"))));
        assert!(matches!(screen, EditScreen::Failed { .. }));
    }

    #[test]
    fn edit_fetch_success_builds_an_edit_form() {
        let mut screen = EditScreen::new(Collection::Books);
        screen.finish_fetch(Ok(Record::Book(book("2", "Two"))));
        let form = screen.form_mut().unwrap();
        assert_eq!(form.mode, FormMode::Edit { id: "2".to_string() });
        assert_eq!(form.values.get("title"), "Two");
    }
}
