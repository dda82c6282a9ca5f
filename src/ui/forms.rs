use std::collections::{BTreeMap, BTreeSet};

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::error::ApiError;
use crate::models::{Collection, Draft, Record};
use crate::schema::{self, FieldKind, FieldSpec, FormValues};

/// Whether the form creates a new record or replaces an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FormMode {
    Create,
    Edit { id: String },
}

/// Observable lifecycle of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormPhase {
    Editing,
    Submitting,
    Submitted,
}

/// A single editable form bound to the schema of one collection.
///
/// Field errors are recomputed on every change. They are only shown for
/// fields the user has touched, and for every field once a submit has been
/// attempted, so a fresh create form does not open covered in red.
#[derive(Debug, Clone)]
pub(crate) struct RecordForm {
    pub(crate) collection: Collection,
    pub(crate) mode: FormMode,
    pub(crate) values: FormValues,
    pub(crate) active: usize,
    pub(crate) errors: BTreeMap<&'static str, &'static str>,
    pub(crate) submit_error: Option<String>,
    pub(crate) phase: FormPhase,
    touched: BTreeSet<&'static str>,
    attempted: bool,
}

impl RecordForm {
    /// Blank form for the create flow.
    pub(crate) fn create(collection: Collection) -> Self {
        Self::new(collection, FormMode::Create, FormValues::blank(collection))
    }

    /// Form seeded from a fetched record for the edit flow.
    pub(crate) fn edit(record: &Record) -> Self {
        Self::new(
            record.collection(),
            FormMode::Edit {
                id: record.id().to_string(),
            },
            FormValues::from_record(record),
        )
    }

    fn new(collection: Collection, mode: FormMode, values: FormValues) -> Self {
        let mut form = Self {
            collection,
            mode,
            values,
            active: 0,
            errors: BTreeMap::new(),
            submit_error: None,
            phase: FormPhase::Editing,
            touched: BTreeSet::new(),
            attempted: false,
        };
        form.revalidate();
        form
    }

    pub(crate) fn fields(&self) -> &'static [FieldSpec] {
        schema::fields(self.collection)
    }

    pub(crate) fn active_field(&self) -> &'static FieldSpec {
        &self.fields()[self.active]
    }

    pub(crate) fn is_editing(&self) -> bool {
        self.phase == FormPhase::Editing
    }

    pub(crate) fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Move focus forward, marking the field being left as touched.
    pub(crate) fn next_field(&mut self) {
        self.touch_active();
        self.active = (self.active + 1) % self.fields().len();
    }

    /// Move focus backward, marking the field being left as touched.
    pub(crate) fn previous_field(&mut self) {
        self.touch_active();
        let len = self.fields().len();
        self.active = (self.active + len - 1) % len;
    }

    /// Append a character to the active field. Date fields only take the
    /// characters of a `YYYY-MM-DD` value. Input is ignored while submitting.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if !self.is_editing() || ch.is_control() {
            return false;
        }
        let field = self.active_field();
        if field.kind == FieldKind::Date && !(ch.is_ascii_digit() || ch == '-') {
            return false;
        }
        self.values.value_mut(field.name).push(ch);
        self.changed();
        true
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        if !self.is_editing() {
            return;
        }
        let name = self.active_field().name;
        if self.values.value_mut(name).pop().is_some() {
            self.changed();
        }
    }

    /// Error to show under `field`, if any.
    pub(crate) fn visible_error(&self, field: &str) -> Option<&'static str> {
        if self.attempted || self.touched.contains(field) {
            self.errors.get(field).copied()
        } else {
            None
        }
    }

    /// Editing → Submitting. Returns the payload to send only when the schema
    /// reports no field errors; otherwise the form stays in Editing with every
    /// error revealed and nothing should be sent.
    pub(crate) fn begin_submit(&mut self) -> Option<Draft> {
        if !self.is_editing() {
            return None;
        }
        self.attempted = true;
        self.revalidate();
        if !self.errors.is_empty() {
            return None;
        }
        match schema::parse(self.collection, &self.values) {
            Ok(draft) => {
                self.phase = FormPhase::Submitting;
                self.submit_error = None;
                Some(draft)
            }
            Err(errors) => {
                self.errors = errors.into_iter().map(|e| (e.field, e.message)).collect();
                None
            }
        }
    }

    /// Submitting → Editing after a transport failure.
    pub(crate) fn submit_failed(&mut self, err: &ApiError) {
        self.phase = FormPhase::Editing;
        self.submit_error = Some(format!(
            "Failed to {} {}: {err}",
            self.verb(),
            self.collection.noun()
        ));
    }

    /// Submitting → Submitted.
    pub(crate) fn submit_succeeded(&mut self) {
        self.phase = FormPhase::Submitted;
    }

    pub(crate) fn submit_label(&self) -> String {
        match (&self.mode, self.is_submitting()) {
            (FormMode::Create, true) => "Adding...".to_string(),
            (FormMode::Create, false) => format!("Add {}", self.collection.title()),
            (FormMode::Edit { .. }, true) => "Updating...".to_string(),
            (FormMode::Edit { .. }, false) => format!("Update {}", self.collection.title()),
        }
    }

    /// Render the label/value line for the field at `index`.
    pub(crate) fn build_line(&self, index: usize) -> Line<'static> {
        let field = &self.fields()[index];
        let value = self.values.get(field.name);
        let is_active = index == self.active && self.is_editing();

        let placeholder = match field.kind {
            FieldKind::Date => "<YYYY-MM-DD>",
            FieldKind::Text | FieldKind::LongText => "<required>",
        };
        let display = if value.is_empty() {
            placeholder.to_string()
        } else {
            value.to_string()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{}: ", field.label)),
            Span::styled(display, style),
        ])
    }

    /// Character count of the field at `index`, for cursor placement.
    pub(crate) fn value_len(&self, index: usize) -> usize {
        self.values.get(self.fields()[index].name).chars().count()
    }

    fn verb(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "create",
            FormMode::Edit { .. } => "update",
        }
    }

    fn touch_active(&mut self) {
        let name = self.active_field().name;
        self.touched.insert(name);
    }

    fn changed(&mut self) {
        self.touch_active();
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.errors = schema::validate(self.collection, &self.values)
            .into_iter()
            .map(|e| (e.field, e.message))
            .collect();
    }
}

/// State for confirming a record deletion from the library screen.
#[derive(Debug, Clone)]
pub(crate) struct ConfirmDelete {
    pub(crate) collection: Collection,
    pub(crate) id: String,
    pub(crate) label: String,
}

impl ConfirmDelete {
    /// Build the confirmation state from the record being considered.
    pub(crate) fn from_record(record: &Record) -> Self {
        Self {
            collection: record.collection(),
            id: record.id().to_string(),
            label: record.display_name().to_string(),
        }
    }
}
