use std::mem;
use std::sync::Arc;

use chrono::{Datelike, Local};
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;
use tracing::{debug, info, warn};

use crate::api::LibraryApi;
use crate::error::ApiError;
use crate::models::{Collection, Record};

use super::forms::{ConfirmDelete, FormMode, RecordForm};
use super::helpers::{centered_rect, key_hint, truncate};
use super::nav::{Route, Sidebar};
use super::screens::{CreateScreen, EditScreen, LibraryScreen, LoadState};
use super::tasks::{Completion, Job, Outcome, Worker};

/// Footer space reserved for the status line, instructions and copyright.
const FOOTER_HEIGHT: u16 = 4;
/// Characters of an author's biography shown in the library table.
const BIOGRAPHY_PREVIEW: usize = 60;

/// The page currently mounted in the content area.
enum Screen {
    Library(LibraryScreen),
    Create(CreateScreen),
    Edit(EditScreen),
}

/// Overlays that capture keys on top of the current screen.
enum Mode {
    Normal,
    ConfirmDelete(ConfirmDelete),
}

struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
///
/// Every navigation bumps `view`. Background jobs are tagged with the view
/// they were dispatched under and their completions are ignored once the user
/// has moved on, so a late response never lands on the wrong page.
pub struct App {
    worker: Worker,
    route: Route,
    screen: Screen,
    mode: Mode,
    sidebar: Sidebar,
    status: Option<StatusMessage>,
    view: u64,
}

impl App {
    /// Build the app and mount `start`, dispatching whatever it needs to load.
    pub fn new(api: LibraryApi, start: Route) -> Self {
        let mut app = Self {
            worker: Worker::new(Arc::new(api)),
            route: Route::Library,
            screen: Screen::Library(LibraryScreen::new()),
            mode: Mode::Normal,
            sidebar: Sidebar::default(),
            status: None,
            view: 0,
        };
        app.navigate(start);
        app
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Mount the page for `route`. The previous page and any overlay are
    /// dropped along with their in-flight work.
    pub fn navigate(&mut self, route: Route) {
        self.view += 1;
        self.mode = Mode::Normal;
        info!(route = %route, view = self.view, "navigating");

        self.screen = match &route {
            Route::Library => {
                self.worker.submit(self.view, Job::LoadCatalog);
                Screen::Library(LibraryScreen::new())
            }
            Route::Create => Screen::Create(CreateScreen::new()),
            Route::Edit { collection, id } => {
                self.worker.submit(
                    self.view,
                    Job::FetchRecord {
                        collection: *collection,
                        id: id.clone(),
                    },
                );
                Screen::Edit(EditScreen::new(*collection))
            }
        };
        self.route = route;
    }

    /// Apply every finished background job. Returns whether anything arrived.
    pub fn poll_jobs(&mut self) -> bool {
        let mut applied = false;
        while let Some(completion) = self.worker.try_next() {
            self.apply(completion);
            applied = true;
        }
        applied
    }

    /// Handle a plain key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);
        let next = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit),
            Mode::ConfirmDelete(confirm) => self.handle_confirm_delete(code, confirm),
        };
        self.mode = next;
        exit
    }

    /// Handle a Ctrl combination. Returns `true` when the app should exit.
    pub fn handle_ctrl(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('b') => self.sidebar.toggle(),
            KeyCode::Char('l') => self.navigate(Route::Library),
            KeyCode::Char('n') => self.navigate(Route::Create),
            KeyCode::Char('t') => {
                if let (Mode::Normal, Screen::Create(create)) = (&self.mode, &mut self.screen) {
                    create.toggle_type();
                }
            }
            _ => {}
        }
        false
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        if matches!(self.screen, Screen::Library(_)) {
            return self.handle_library_key(code, exit);
        }
        if self.active_form().is_some() {
            self.handle_form_key(code);
            return Mode::Normal;
        }

        // Edit page that is still loading or failed to load.
        match code {
            KeyCode::Esc => self.navigate(Route::Library),
            KeyCode::Char('q') => *exit = true,
            _ => {}
        }
        Mode::Normal
    }

    fn handle_library_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        let Screen::Library(library) = &mut self.screen else {
            return Mode::Normal;
        };

        let mut status_to_set: Option<(String, StatusKind)> = None;
        let mut route_to_open: Option<Route> = None;

        match code {
            KeyCode::Char('q') | KeyCode::Esc => *exit = true,
            KeyCode::Char('r') | KeyCode::Char('R') => route_to_open = Some(Route::Library),
            KeyCode::Char('c') | KeyCode::Char('+') => route_to_open = Some(Route::Create),
            _ if !library.is_loaded() => {}
            KeyCode::Up => library.move_selection(-1),
            KeyCode::Down => library.move_selection(1),
            KeyCode::PageUp => library.move_selection(-5),
            KeyCode::PageDown => library.move_selection(5),
            KeyCode::Home => library.select_first(),
            KeyCode::End => library.select_last(),
            KeyCode::Tab | KeyCode::BackTab => library.toggle_focus(),
            KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('E') => {
                match library.selected_record() {
                    Some(record) => {
                        route_to_open = Some(Route::Edit {
                            collection: record.collection(),
                            id: record.id().to_string(),
                        })
                    }
                    None => {
                        status_to_set =
                            Some(("No record selected to edit.".to_string(), StatusKind::Error))
                    }
                }
            }
            KeyCode::Char('d') | KeyCode::Char('-') | KeyCode::Delete => {
                if library.deleting.is_some() {
                    status_to_set = Some((
                        "A delete is already in progress.".to_string(),
                        StatusKind::Error,
                    ));
                } else if let Some(record) = library.selected_record() {
                    return Mode::ConfirmDelete(ConfirmDelete::from_record(&record));
                } else {
                    status_to_set = Some((
                        "No record selected to delete.".to_string(),
                        StatusKind::Error,
                    ));
                }
            }
            _ => {}
        }

        if let Some(route) = route_to_open {
            self.clear_status();
            self.navigate(route);
        }
        if let Some((text, kind)) = status_to_set {
            self.set_status(text, kind);
        }
        Mode::Normal
    }

    fn handle_confirm_delete(&mut self, code: KeyCode, confirm: ConfirmDelete) -> Mode {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Mode::Normal
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.start_delete(confirm);
                Mode::Normal
            }
            _ => Mode::ConfirmDelete(confirm),
        }
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        let Some(form) = self.active_form() else {
            return;
        };
        match code {
            KeyCode::Esc => {
                self.set_status("Changes discarded.", StatusKind::Info);
                self.navigate(Route::Library);
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => self.submit_form(),
            KeyCode::Char(ch) => {
                form.push_char(ch);
            }
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        let view = self.view;
        let Some(form) = self.active_form() else {
            return;
        };
        if !form.is_editing() {
            return;
        }
        let Some(draft) = form.begin_submit() else {
            let count = form.errors.len();
            self.set_status(
                format!("Fix {count} field error(s) before submitting."),
                StatusKind::Error,
            );
            return;
        };
        let job = match &form.mode {
            FormMode::Create => Job::Create(draft),
            FormMode::Edit { id } => Job::Update {
                id: id.clone(),
                draft,
            },
        };
        self.clear_status();
        self.worker.submit(view, job);
    }

    fn start_delete(&mut self, confirm: ConfirmDelete) {
        let Screen::Library(library) = &mut self.screen else {
            return;
        };
        if !library.begin_delete(confirm.collection, &confirm.id) {
            self.set_status("A delete is already in progress.", StatusKind::Error);
            return;
        }
        self.set_status(
            format!("Deleting {} \"{}\"...", confirm.collection.noun(), confirm.label),
            StatusKind::Info,
        );
        self.worker.submit(
            self.view,
            Job::Delete {
                collection: confirm.collection,
                id: confirm.id,
            },
        );
    }

    fn apply(&mut self, completion: Completion) {
        if completion.view != self.view {
            debug!(
                view = completion.view,
                current = self.view,
                "discarding completion for a page that is gone"
            );
            return;
        }

        match completion.outcome {
            Outcome::Catalog(result) => {
                if let Err(err) = &result {
                    warn!(%err, "failed to load the library");
                }
                if let Screen::Library(library) = &mut self.screen {
                    library.finish_load(result);
                }
            }
            Outcome::Fetched(result) => {
                if let Err(err) = &result {
                    warn!(%err, "failed to fetch record for editing");
                }
                if let Screen::Edit(edit) = &mut self.screen {
                    edit.finish_fetch(result);
                }
            }
            Outcome::Saved(result) => self.finish_save(result),
            Outcome::Deleted {
                collection,
                id,
                result,
            } => {
                let Screen::Library(library) = &mut self.screen else {
                    return;
                };
                library.finish_delete(collection, &id, &result);
                match result {
                    Ok(()) => {
                        info!(%collection, %id, "record deleted");
                        self.set_status(
                            format!("Deleted {} {id}.", collection.noun()),
                            StatusKind::Info,
                        );
                    }
                    Err(err) => {
                        warn!(%collection, %id, %err, "delete failed");
                        self.set_status(
                            format!("Failed to delete {}: {err}", collection.noun()),
                            StatusKind::Error,
                        );
                    }
                }
            }
        }
    }

    fn finish_save(&mut self, result: Result<Record, ApiError>) {
        let Some(form) = self.active_form() else {
            return;
        };
        match result {
            Ok(record) => {
                let verb = match form.mode {
                    FormMode::Create => "Added",
                    FormMode::Edit { .. } => "Updated",
                };
                form.submit_succeeded();
                info!(collection = %record.collection(), id = record.id(), "record saved");
                self.navigate(Route::Library);
                self.set_status(
                    format!(
                        "{verb} {} \"{}\".",
                        record.collection().noun(),
                        record.display_name()
                    ),
                    StatusKind::Info,
                );
            }
            Err(err) => {
                form.submit_failed(&err);
                warn!(%err, "submit failed");
                let text = form.submit_error.clone().unwrap_or_else(|| err.to_string());
                self.set_status(text, StatusKind::Error);
            }
        }
    }

    fn active_form(&mut self) -> Option<&mut RecordForm> {
        match &mut self.screen {
            Screen::Create(create) => Some(&mut create.form),
            Screen::Edit(edit) => edit.form_mut(),
            Screen::Library(_) => None,
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let sidebar_width = self.sidebar.width().min(area.width);
        let [sidebar_area, main_area] =
            Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)])
                .areas(area);
        let footer_height = FOOTER_HEIGHT.min(main_area.height);
        let [content_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(footer_height)])
                .areas(main_area);

        self.draw_sidebar(frame, sidebar_area);
        match &self.screen {
            Screen::Library(library) => self.draw_library(frame, content_area, library),
            Screen::Create(create) => self.draw_create(frame, content_area, create),
            Screen::Edit(edit) => self.draw_edit(frame, content_area, edit),
        }
        self.draw_footer(frame, footer_area);

        if let Mode::ConfirmDelete(confirm) = &self.mode {
            self.draw_confirm_delete(frame, area, confirm);
        }
    }

    fn draw_sidebar(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .style(Style::default().bg(Color::Blue).fg(Color::White));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = if self.sidebar.collapsed {
            vec![Line::from(Span::styled(" »", bold))]
        } else {
            vec![Line::from(vec![
                Span::styled(" Library Admin", bold),
                Span::raw(" «"),
            ])]
        };
        lines.push(Line::from(""));

        for (icon, label, shortcut, route) in Sidebar::links() {
            let text = if self.sidebar.collapsed {
                format!(" {icon}")
            } else {
                format!(" {icon} {label:<10}{shortcut}")
            };
            let style = if self.route == route {
                bold.add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(text, style)));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn draw_library(&self, frame: &mut Frame, area: Rect, library: &LibraryScreen) {
        match &library.load {
            LoadState::Loading => {
                return self.draw_placeholder(frame, area, "Loading...", Style::default())
            }
            LoadState::Failed(message) => {
                return self.draw_placeholder(
                    frame,
                    area,
                    &format!("Error: {message}"),
                    StatusKind::Error.style(),
                )
            }
            LoadState::Loaded => {}
        }

        let banner_height = u16::from(library.banner.is_some());
        let [header_area, banner_area, books_area, authors_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(banner_height),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                " Library Management",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(
                std::iter::once(Span::raw(" "))
                    .chain(key_hint("c", "Create New Item"))
                    .collect::<Vec<_>>(),
            ),
        ]);
        frame.render_widget(header, header_area);

        if let Some(banner) = &library.banner {
            let line = Line::from(Span::styled(
                format!(" Error: {banner}"),
                StatusKind::Error.style(),
            ));
            frame.render_widget(Paragraph::new(line), banner_area);
        }

        self.draw_books_table(frame, books_area, library);
        self.draw_authors_table(frame, authors_area, library);
    }

    fn draw_books_table(&self, frame: &mut Frame, area: Rect, library: &LibraryScreen) {
        let focused = library.focus == Collection::Books;
        let rows = library.books.iter().map(|book| {
            Row::new(vec![
                Cell::from(book.title.clone()),
                Cell::from(book.author.clone()),
                Cell::from(book.isbn.clone()),
                Cell::from(book.publication_date.to_string()),
            ])
        });
        let widths = [
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ];
        let table = Table::new(rows, widths)
            .header(table_header(["Title", "Author", "ISBN", "Publication Date"]))
            .block(table_block("Books", focused, library.books.len()))
            .row_highlight_style(highlight_style(focused))
            .highlight_symbol("> ");

        let mut state = TableState::default();
        if !library.books.is_empty() {
            state.select(Some(library.book_selected));
        }
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn draw_authors_table(&self, frame: &mut Frame, area: Rect, library: &LibraryScreen) {
        let focused = library.focus == Collection::Author;
        let rows = library.authors.iter().map(|author| {
            Row::new(vec![
                Cell::from(author.name.clone()),
                Cell::from(author.birth_date.to_string()),
                Cell::from(truncate(&author.biography, BIOGRAPHY_PREVIEW)),
            ])
        });
        let widths = [
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(50),
        ];
        let table = Table::new(rows, widths)
            .header(table_header(["Name", "Birth Date", "Biography"]))
            .block(table_block("Authors", focused, library.authors.len()))
            .row_highlight_style(highlight_style(focused))
            .highlight_symbol("> ");

        let mut state = TableState::default();
        if !library.authors.is_empty() {
            state.select(Some(library.author_selected));
        }
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn draw_create(&self, frame: &mut Frame, area: Rect, create: &CreateScreen) {
        let [switch_area, form_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let active = create.form.collection;
        let mut spans = Vec::new();
        for collection in Collection::ALL {
            let style = if collection == active {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Cyan)
            };
            spans.push(Span::styled(format!(" Add {} ", collection.title()), style));
            spans.push(Span::raw(" "));
        }
        let switch = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Add New Item (^T to switch)"),
        );
        frame.render_widget(switch, switch_area);

        self.draw_form(frame, form_area, &format!("New {}", active.title()), &create.form);
    }

    fn draw_edit(&self, frame: &mut Frame, area: Rect, edit: &EditScreen) {
        match edit {
            EditScreen::Loading { .. } => {
                self.draw_placeholder(frame, area, "Loading...", Style::default())
            }
            EditScreen::Failed { message, .. } => self.draw_placeholder(
                frame,
                area,
                &format!("Error: {message}"),
                StatusKind::Error.style(),
            ),
            EditScreen::Ready(form) => {
                let title = format!("Edit {}", edit.collection().title());
                self.draw_form(frame, area, &title, form)
            }
        }
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &RecordForm) {
        let block = Block::default()
            .title(title.to_string())
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = Vec::new();
        let mut cursor = None;
        for (index, field) in form.fields().iter().enumerate() {
            if index == form.active && form.is_editing() {
                let prefix = format!("{}: ", field.label).chars().count() + form.value_len(index);
                let x = inner.x + prefix as u16;
                let y = inner.y + lines.len() as u16;
                cursor = Some((x.min(inner.right().saturating_sub(1)), y));
            }
            lines.push(form.build_line(index));
            if let Some(error) = form.visible_error(field.name) {
                lines.push(Line::from(Span::styled(
                    format!("  {error}"),
                    StatusKind::Error.style(),
                )));
            }
        }

        lines.push(Line::from(""));
        if let Some(error) = &form.submit_error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                StatusKind::Error.style(),
            )));
        }
        let button_style = if form.is_submitting() {
            Style::default().fg(Color::Black).bg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(
            format!(" {} ", form.submit_label()),
            button_style,
        )));

        frame.render_widget(Paragraph::new(lines), inner);
        if let Some(position) = cursor {
            if position.1 < inner.bottom() {
                frame.set_cursor_position(position);
            }
        }
    }

    fn draw_placeholder(&self, frame: &mut Frame, area: Rect, text: &str, style: Style) {
        let [line_area] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        let paragraph = Paragraph::new(Span::styled(text.to_string(), style))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, line_area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = match &self.status {
            Some(status) => Line::from(vec![Span::styled(status.text.clone(), status.kind.style())]),
            None if self.worker.in_flight() > 0 => Line::from(Span::styled(
                "Working...",
                Style::default().fg(Color::Gray),
            )),
            None => Line::from(""),
        };

        let copyright = Line::from(Span::styled(
            format!("© {}. Library Admin Dashboard.", Local::now().year()),
            Style::default().fg(Color::DarkGray),
        ))
        .centered();

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions(), copyright]);
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let hints: &[(&'static str, &'static str)] = match (&self.mode, &self.screen) {
            (Mode::ConfirmDelete(_), _) => &[("Y", "Confirm"), ("N", "Cancel")],
            (Mode::Normal, Screen::Library(_)) => &[
                ("↑↓", "Select"),
                ("Tab", "Switch table"),
                ("Enter", "Edit"),
                ("d", "Delete"),
                ("c", "Create"),
                ("r", "Reload"),
                ("^B", "Sidebar"),
                ("q", "Quit"),
            ],
            (Mode::Normal, Screen::Create(_)) => &[
                ("Tab", "Next field"),
                ("Enter", "Submit"),
                ("^T", "Book/Author"),
                ("^B", "Sidebar"),
                ("Esc", "Back"),
            ],
            (Mode::Normal, Screen::Edit(EditScreen::Ready(_))) => &[
                ("Tab", "Next field"),
                ("Enter", "Submit"),
                ("^B", "Sidebar"),
                ("Esc", "Back"),
            ],
            (Mode::Normal, Screen::Edit(_)) => &[("Esc", "Back"), ("q", "Quit")],
        };

        Line::from(
            hints
                .iter()
                .flat_map(|&(key, label)| key_hint(key, label))
                .collect::<Vec<_>>(),
        )
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!("Delete {}", confirm.collection.title()))
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!(
                "Delete {} \"{}\" (id {})?",
                confirm.collection.noun(),
                confirm.label,
                confirm.id
            )),
            Line::from("This cannot be undone."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}

fn table_header<const N: usize>(titles: [&'static str; N]) -> Row<'static> {
    Row::new(titles).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn table_block(title: &str, focused: bool, count: usize) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!("{title} ({count})"))
}

fn highlight_style(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    }
}
