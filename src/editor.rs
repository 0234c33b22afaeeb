use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Block glyph marking the insertion point while focused
const CURSOR_GLYPH: char = '█';

/// Single-line text entry widget with a byte-offset cursor, a focus
/// flag, and an optional length cap. The buffer may hold embedded
/// newlines (notes editing), but the widget never inserts one on its
/// own: Enter routing is mode policy and stays with the caller.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    value: String,
    /// Byte offset into `value`, always on a char boundary
    cursor: usize,
    focused: bool,
    /// Maximum buffer length in chars
    max_len: Option<usize>,
    prompt: &'static str,
}

impl Editor {
    pub fn new() -> Self {
        Self {
            prompt: "> ",
            ..Self::default()
        }
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_prompt(&mut self, prompt: &'static str) {
        self.prompt = prompt;
    }

    pub fn set_max_len(&mut self, max_len: Option<usize>) {
        self.max_len = max_len;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the buffer, cursor moved to the end
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.len();
    }

    /// Clear the buffer
    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Insert a line break at the cursor (notes entry)
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    fn insert_char(&mut self, c: char) {
        if let Some(limit) = self.max_len {
            if self.value.chars().count() >= limit {
                return;
            }
        }
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Byte offset of the char preceding the cursor
    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Byte offset just past the char under the cursor
    fn next_boundary(&self) -> usize {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.cursor)
    }

    /// Handle a key event, returning whether it was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.focused {
            return false;
        }
        match key.code {
            // Plain characters only; Ctrl combinations stay global
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_boundary();
                    self.value.drain(prev..self.cursor);
                    self.cursor = prev;
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.value.len() {
                    let next = self.next_boundary();
                    self.value.drain(self.cursor..next);
                }
                true
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor = self.prev_boundary();
                }
                true
            }
            KeyCode::Right => {
                if self.cursor < self.value.len() {
                    self.cursor = self.next_boundary();
                }
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                true
            }
            _ => false,
        }
    }

    /// Render the buffer as display text: prompt, content, and a block
    /// cursor at the insertion point while focused
    pub fn view(&self) -> String {
        let mut out = String::with_capacity(self.prompt.len() + self.value.len() + 4);
        out.push_str(self.prompt);
        if self.focused {
            out.push_str(&self.value[..self.cursor]);
            out.push(CURSOR_GLYPH);
            out.push_str(&self.value[self.cursor..]);
        } else {
            out.push_str(&self.value);
        }
        out
    }
}
