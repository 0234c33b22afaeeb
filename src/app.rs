use crate::domain::{Mode, Todo};
use crate::editor::Editor;
use crate::events::{AppEvent, Effect};
use crate::input;
use crate::persistence::StoreError;

/// Length cap for task text entry; notes are unbounded
const TEXT_MAX_LEN: usize = 100;

/// Main application state
pub struct AppState {
    pub mode: Mode,
    pub todos: Vec<Todo>,
    /// Selected index; meaningful only while `todos` is non-empty
    pub cursor: usize,
    /// Insertion index for the pending add; consulted only in Add mode
    pub insert_pos: usize,
    pub editor: Editor,
    /// Set once by a failed effect; the session ends after one more render
    pub last_error: Option<StoreError>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Normal,
            todos: Vec::new(),
            cursor: 0,
            insert_pos: 0,
            editor: Editor::new(),
            last_error: None,
            should_quit: false,
        }
    }

    /// Advance the state machine by one event. Deferred I/O the
    /// transition asks for is handed back to the caller to schedule.
    pub fn update(&mut self, event: AppEvent) -> Option<Effect> {
        match event {
            AppEvent::Key(key) => input::handle_key(self, key),
            AppEvent::Loaded(todos) => {
                self.todos = todos;
                None
            }
            AppEvent::Saved => {
                self.should_quit = true;
                None
            }
            AppEvent::TicketOpened => None,
            AppEvent::Error(err) => {
                self.last_error = Some(err);
                self.should_quit = true;
                None
            }
        }
    }

    /// Currently selected item, if any
    pub fn selected(&self) -> Option<&Todo> {
        self.todos.get(self.cursor)
    }

    // --- Normal-mode mutations -------------------------------------

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.todos.len() {
            self.cursor += 1;
        }
    }

    /// Swap the selected item with its predecessor, cursor follows it
    pub fn swap_above(&mut self) {
        if self.cursor > 0 {
            self.todos.swap(self.cursor, self.cursor - 1);
            self.cursor -= 1;
        }
    }

    /// Swap the selected item with its successor, cursor follows it
    pub fn swap_below(&mut self) {
        if self.cursor + 1 < self.todos.len() {
            self.todos.swap(self.cursor, self.cursor + 1);
            self.cursor += 1;
        }
    }

    pub fn toggle(&mut self) {
        if let Some(todo) = self.todos.get_mut(self.cursor) {
            todo.toggle();
        }
    }

    /// Remove the selected item and clamp the cursor into range
    pub fn remove_todo(&mut self) {
        if self.todos.is_empty() {
            return;
        }
        self.todos.remove(self.cursor);
        if self.cursor >= self.todos.len() {
            self.cursor = self.todos.len().saturating_sub(1);
        }
    }

    // --- Mode transitions ------------------------------------------

    pub fn goto_add(&mut self, insert_pos: usize) {
        self.insert_pos = insert_pos.min(self.todos.len());
        self.mode = Mode::Add;
        self.editor.reset();
        self.editor.set_prompt("> ");
        self.editor.set_max_len(Some(TEXT_MAX_LEN));
        self.editor.focus();
    }

    pub fn goto_edit(&mut self) {
        let Some(todo) = self.todos.get(self.cursor) else {
            return;
        };
        let text = todo.text.clone();
        self.mode = Mode::Edit;
        self.editor.set_prompt("> ");
        self.editor.set_max_len(Some(TEXT_MAX_LEN));
        self.editor.set_value(&text);
        self.editor.focus();
    }

    pub fn goto_notes(&mut self) {
        let Some(todo) = self.todos.get(self.cursor) else {
            return;
        };
        let notes = todo.notes.clone();
        self.mode = Mode::Notes;
        self.editor.set_prompt("");
        self.editor.set_max_len(None);
        self.editor.set_value(&notes);
        self.editor.focus();
    }

    pub fn goto_normal(&mut self) {
        self.mode = Mode::Normal;
        self.editor.set_prompt("> ");
        self.editor.blur();
        self.editor.reset();
    }

    /// Commit the editor buffer: insert at `insert_pos` in Add mode,
    /// overwrite the selected text in Edit mode
    pub fn commit_text(&mut self) {
        let text = self.editor.value().to_string();
        match self.mode {
            Mode::Add => {
                let pos = self.insert_pos.min(self.todos.len());
                self.todos.insert(pos, Todo::new(text));
            }
            Mode::Edit => {
                if let Some(todo) = self.todos.get_mut(self.cursor) {
                    todo.text = text;
                }
            }
            Mode::Normal | Mode::Notes => {}
        }
    }

    /// Store the notes buffer back on the selected item
    pub fn commit_notes(&mut self) {
        let notes = self.editor.value().to_string();
        if let Some(todo) = self.todos.get_mut(self.cursor) {
            todo.notes = notes;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(texts: &[&str]) -> AppState {
        let mut app = AppState::new();
        app.todos = texts.iter().map(|t| Todo::new(t.to_string())).collect();
        app
    }

    #[test]
    fn test_loaded_event_installs_list() {
        let mut app = AppState::new();
        let effect = app.update(AppEvent::Loaded(vec![Todo::new("a".to_string())]));
        assert!(effect.is_none());
        assert_eq!(app.todos.len(), 1);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_saved_event_quits() {
        let mut app = AppState::new();
        app.update(AppEvent::Saved);
        assert!(app.should_quit);
    }

    #[test]
    fn test_error_event_is_terminal() {
        let mut app = AppState::new();
        app.update(AppEvent::Error(StoreError::DataDir));
        assert!(app.last_error.is_some());
        assert!(app.should_quit);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = app_with(&["a", "b", "c"]);
        app.move_up();
        assert_eq!(app.cursor, 0);
        app.move_down();
        app.move_down();
        app.move_down();
        assert_eq!(app.cursor, 2);
        app.remove_todo();
        assert_eq!(app.cursor, 1);
        app.remove_todo();
        assert_eq!(app.cursor, 0);
        app.remove_todo();
        assert_eq!(app.cursor, 0);
        assert!(app.todos.is_empty());
        // Further mutations on the empty list are no-ops
        app.remove_todo();
        app.toggle();
        assert!(app.todos.is_empty());
    }

    #[test]
    fn test_swap_moves_cursor_with_item() {
        let mut app = app_with(&["a", "b"]);
        app.swap_below();
        assert_eq!(app.todos[0].text, "b");
        assert_eq!(app.todos[1].text, "a");
        assert_eq!(app.cursor, 1);
        app.swap_above();
        assert_eq!(app.todos[0].text, "a");
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_swap_at_boundary_is_noop() {
        let mut app = app_with(&["a", "b"]);
        app.swap_above();
        assert_eq!(app.todos[0].text, "a");
        assert_eq!(app.cursor, 0);
        app.cursor = 1;
        app.swap_below();
        assert_eq!(app.todos[1].text, "b");
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_add_inserts_at_recorded_position() {
        let mut app = app_with(&["a", "c"]);
        app.goto_add(1);
        app.editor.set_value("b");
        app.commit_text();
        let texts: Vec<_> = app.todos.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[test]
    fn test_edit_overwrites_selected_text() {
        let mut app = app_with(&["a", "b"]);
        app.cursor = 1;
        app.goto_edit();
        assert_eq!(app.editor.value(), "b");
        app.editor.set_value("b2");
        app.commit_text();
        assert_eq!(app.todos[1].text, "b2");
        assert_eq!(app.todos.len(), 2);
    }

    #[test]
    fn test_goto_edit_on_empty_list_is_noop() {
        let mut app = AppState::new();
        app.goto_edit();
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_goto_notes_prefills_editor() {
        let mut app = app_with(&["a"]);
        app.todos[0].notes = "remember".to_string();
        app.goto_notes();
        assert_eq!(app.mode, Mode::Notes);
        assert_eq!(app.editor.value(), "remember");
        assert_eq!(app.editor.view(), "remember█");
    }

    #[test]
    fn test_commit_notes_writes_back() {
        let mut app = app_with(&["a"]);
        app.goto_notes();
        app.editor.set_value("line1\nline2");
        app.commit_notes();
        app.goto_normal();
        assert_eq!(app.todos[0].notes, "line1\nline2");
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_goto_normal_clears_editor() {
        let mut app = app_with(&["a"]);
        app.goto_add(0);
        app.editor.set_value("half-typed");
        app.goto_normal();
        assert!(app.editor.is_empty());
        assert!(!app.editor.is_focused());
    }
}
