use crate::app::AppState;
use crate::domain::Mode;
use crate::ui::wrap::wrap;

/// Column width for the notes view (header rule and body wrap)
pub const NOTES_WIDTH: usize = 80;

/// How a projected row should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Placeholder,
    Item { selected: bool, done: bool },
    Editor,
    Separator,
    NotesBody,
    Error,
}

/// One row of the projected display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    pub text: String,
    pub kind: LineKind,
}

impl ViewLine {
    fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Project the application state into display rows. Pure: the only
/// input is the state, and nothing here touches the terminal.
pub fn view_lines(app: &AppState) -> Vec<ViewLine> {
    if let Some(err) = &app.last_error {
        return vec![ViewLine::new(
            format!("An error occurred: {err}"),
            LineKind::Error,
        )];
    }
    match app.mode {
        Mode::Notes => notes_lines(app),
        Mode::Normal | Mode::Add | Mode::Edit => list_lines(app),
    }
}

fn list_lines(app: &AppState) -> Vec<ViewLine> {
    let mut lines = vec![ViewLine::new("Todos:", LineKind::Header)];
    if app.todos.is_empty() {
        lines.push(ViewLine::new("  No todos!", LineKind::Placeholder));
    }

    let editor_line = || ViewLine::new(app.editor.view(), LineKind::Editor);

    for (i, todo) in app.todos.iter().enumerate() {
        if app.mode == Mode::Add && app.insert_pos == i {
            lines.push(editor_line());
        }
        if app.mode == Mode::Edit && app.cursor == i {
            lines.push(editor_line());
        } else {
            let marker = if app.cursor == i { "*" } else { " " };
            lines.push(ViewLine::new(
                format!("  {} {}", marker, todo),
                LineKind::Item {
                    selected: app.cursor == i,
                    done: todo.done,
                },
            ));
        }
    }
    if app.mode == Mode::Add && app.insert_pos == app.todos.len() {
        lines.push(editor_line());
    }
    lines
}

fn notes_lines(app: &AppState) -> Vec<ViewLine> {
    // Notes mode is only entered with a selection; fall back to the
    // list view otherwise
    let Some(todo) = app.selected() else {
        return list_lines(app);
    };

    let mut lines = vec![
        ViewLine::new(
            format!("{} {}", todo.text, todo.status_tag()),
            LineKind::Header,
        ),
        ViewLine::new("=".repeat(NOTES_WIDTH), LineKind::Separator),
        ViewLine::new("Notes:", LineKind::Header),
    ];
    for row in wrap(&app.editor.view(), NOTES_WIDTH) {
        lines.push(ViewLine::new(row, LineKind::NotesBody));
    }
    lines
}
