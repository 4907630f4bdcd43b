use crate::config::AppConfig;
use crate::quiz::{Question, QuizSession};
use chrono::Local;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Message {
    pub timestamp: String,
    pub text: String,
    pub kind: MessageKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MessageKind {
    System,
    Success,
    Error,
}

/// Multi-line editable buffer for pasted question sets. The cursor is a byte
/// offset and always sits on a char boundary.
#[derive(Debug, Default)]
pub struct PasteState {
    pub text: String,
    pub cursor: usize,
}

impl PasteState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        // Terminals deliver bracketed pastes with \r line endings in raw mode.
        let s = s.replace("\r\n", "\n").replace('\r', "\n");
        self.text.insert_str(self.cursor, &s);
        self.cursor += s.len();
    }

    pub fn newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing separators
        while pos > 0 && matches!(self.text.as_bytes().get(pos - 1), Some(&b' ') | Some(&b'\n')) {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && !matches!(self.text.as_bytes().get(pos - 1), Some(&b' ') | Some(&b'\n')) {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    /// Start of the current line.
    pub fn move_home(&mut self) {
        self.cursor = self.line_start(self.cursor);
    }

    /// End of the current line.
    pub fn move_end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.text.len());
    }

    /// Up one line, keeping the column where possible.
    pub fn move_up(&mut self) {
        let start = self.line_start(self.cursor);
        if start == 0 {
            self.cursor = 0;
            return;
        }
        let col = self.text[start..self.cursor].chars().count();
        let prev_start = self.line_start(start - 1);
        self.cursor = prev_start + nth_char_offset(&self.text[prev_start..start - 1], col);
    }

    /// Down one line, keeping the column where possible.
    pub fn move_down(&mut self) {
        let Some(rel) = self.text[self.cursor..].find('\n') else {
            self.cursor = self.text.len();
            return;
        };
        let start = self.line_start(self.cursor);
        let col = self.text[start..self.cursor].chars().count();
        let next_start = self.cursor + rel + 1;
        let next_end = self.text[next_start..]
            .find('\n')
            .map(|i| next_start + i)
            .unwrap_or(self.text.len());
        self.cursor = next_start + nth_char_offset(&self.text[next_start..next_end], col);
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Cursor location as (line, column), both zero-based, column in chars.
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let col = before
            .rfind('\n')
            .map(|i| &before[i + 1..])
            .unwrap_or(before)
            .chars()
            .count();
        (line, col)
    }

    pub fn line_count(&self) -> usize {
        self.text.matches('\n').count() + 1
    }

    fn line_start(&self, at: usize) -> usize {
        self.text[..at].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }
}

/// Byte offset of the `col`-th char in `line`, clamped to the line end.
fn nth_char_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Paste,
    Questions,
    Sidebar,
}

pub struct AppState {
    pub config: AppConfig,
    pub session: QuizSession,
    pub paste: PasteState,
    pub focus: FocusPanel,
    pub activity: Vec<Message>,
    /// Messages not yet handed to the result logger. Drained each loop turn.
    pub new_messages: Vec<Message>,
    /// Flattened (question index, option index) rows the cursor walks over.
    /// Rebuilt whenever a set is loaded.
    pub option_rows: Vec<(usize, usize)>,
    pub cursor: usize,
    pub sidebar_index: usize,
    pub show_prompt_overlay: bool,
    pub status_message: Option<String>,
    pub status_expires_at: Option<Instant>,
    /// Text waiting to be pushed to the terminal clipboard after the next
    /// dispatch turn.
    pub pending_clipboard: Option<String>,
    pub should_quit: bool,
    pub dirty: bool,
    pub tick_count: u64,
    pub timestamp_format: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let timestamp_format = config.ui.timestamp_format.clone();
        Self {
            config,
            session: QuizSession::default(),
            paste: PasteState::new(),
            focus: FocusPanel::Paste,
            activity: Vec::new(),
            new_messages: Vec::new(),
            option_rows: Vec::new(),
            cursor: 0,
            sidebar_index: 0,
            show_prompt_overlay: false,
            status_message: None,
            status_expires_at: None,
            pending_clipboard: None,
            should_quit: false,
            dirty: true,
            tick_count: 0,
            timestamp_format,
        }
    }

    fn push_activity(&mut self, text: String, kind: MessageKind) {
        let msg = Message {
            timestamp: Local::now().format(&self.timestamp_format).to_string(),
            text,
            kind,
        };
        self.new_messages.push(msg.clone());
        self.activity.push(msg);
        if self.activity.len() > self.config.ui.max_activity {
            self.activity.remove(0);
        }
        self.dirty = true;
    }

    pub fn system_message(&mut self, text: String) {
        self.push_activity(text, MessageKind::System);
    }

    pub fn success_message(&mut self, text: String) {
        self.push_activity(text, MessageKind::Success);
    }

    pub fn error_message(&mut self, text: String) {
        self.push_activity(text, MessageKind::Error);
    }

    pub fn set_status(&mut self, text: String) {
        let secs = self.config.behavior.status_secs;
        self.status_message = Some(text);
        self.status_expires_at = Some(Instant::now() + Duration::from_secs(secs));
        self.dirty = true;
    }

    pub fn clear_expired_status(&mut self) {
        if let Some(at) = self.status_expires_at {
            if Instant::now() >= at {
                self.status_message = None;
                self.status_expires_at = None;
                self.dirty = true;
            }
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Paste => FocusPanel::Questions,
            FocusPanel::Questions => FocusPanel::Sidebar,
            FocusPanel::Sidebar => FocusPanel::Paste,
        };
        self.dirty = true;
    }

    /// Install a freshly parsed set and reset everything that pointed into
    /// the old one.
    pub fn load_questions(&mut self, questions: Vec<Question>) {
        self.session.load(questions);
        self.option_rows = self
            .session
            .questions()
            .iter()
            .enumerate()
            .flat_map(|(qi, q)| (0..q.options.len()).map(move |oi| (qi, oi)))
            .collect();
        self.cursor = 0;
        self.sidebar_index = 0;
        self.dirty = true;
    }

    pub fn current_row(&self) -> Option<(usize, usize)> {
        self.option_rows.get(self.cursor).copied()
    }

    pub fn current_question_index(&self) -> Option<usize> {
        self.current_row().map(|(qi, _)| qi)
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.dirty = true;
        }
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.option_rows.len() {
            self.cursor += 1;
            self.dirty = true;
        }
    }

    pub fn jump_to_question(&mut self, target: usize) {
        if let Some(pos) = self.option_rows.iter().position(|(qi, _)| *qi == target) {
            self.cursor = pos;
            self.dirty = true;
        }
    }

    pub fn jump_next_question(&mut self) {
        if let Some(qi) = self.current_question_index() {
            self.jump_to_question(qi + 1);
        }
    }

    pub fn jump_prev_question(&mut self) {
        if let Some(qi) = self.current_question_index() {
            if qi > 0 {
                self.jump_to_question(qi - 1);
            }
        }
    }

    /// Record the option under the cursor as the pick for its question.
    pub fn select_at_cursor(&mut self) {
        let Some((qi, oi)) = self.current_row() else {
            return;
        };
        let q = &self.session.questions()[qi];
        let (id, option) = (q.id, q.options[oi].clone());
        self.session.select(id, option);
        self.dirty = true;
    }

    pub fn sidebar_up(&mut self) {
        if self.sidebar_index > 0 {
            self.sidebar_index -= 1;
            self.dirty = true;
        }
    }

    pub fn sidebar_down(&mut self) {
        if self.sidebar_index + 1 < self.session.len() {
            self.sidebar_index += 1;
            self.dirty = true;
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        if self.session.is_empty() {
            return "Paste a question set, then press F5 to load it".to_string();
        }
        let mut s = format!(
            "{}/{} answered",
            self.session.answered_count(),
            self.session.len()
        );
        if self.session.is_graded() {
            s.push_str(&format!(
                " | Score: {}/{}",
                self.session.score(),
                self.session.len()
            ));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn question(id: u64, options: &[&str]) -> Question {
        Question {
            id,
            qtype: "mcq".into(),
            question: format!("question {id}?"),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: options[0].to_string(),
            extra: Map::new(),
        }
    }

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn test_paste_insert_and_newline() {
        let mut paste = PasteState::new();
        for c in "ab".chars() {
            paste.insert_char(c);
        }
        paste.newline();
        paste.insert_char('c');
        assert_eq!(paste.text, "ab\nc");
        assert_eq!(paste.cursor_position(), (1, 1));
    }

    #[test]
    fn test_paste_normalizes_carriage_returns() {
        let mut paste = PasteState::new();
        paste.insert_str("one\r\ntwo\rthree");
        assert_eq!(paste.text, "one\ntwo\nthree");
        assert_eq!(paste.cursor, paste.text.len());
    }

    #[test]
    fn test_paste_vertical_movement_clamps_column() {
        let mut paste = PasteState::new();
        paste.insert_str("longest line\nab\ntail");
        // Cursor at end of "tail"; up lands at end of "ab", not past it.
        paste.move_up();
        assert_eq!(paste.cursor_position(), (1, 2));
        paste.move_up();
        assert_eq!(paste.cursor_position(), (0, 2));
        paste.move_down();
        assert_eq!(paste.cursor_position(), (1, 2));
    }

    #[test]
    fn test_paste_home_end_work_per_line() {
        let mut paste = PasteState::new();
        paste.insert_str("first\nsecond");
        paste.move_home();
        assert_eq!(paste.cursor_position(), (1, 0));
        paste.move_end();
        assert_eq!(paste.cursor_position(), (1, 6));
    }

    #[test]
    fn test_paste_delete_word_back_stops_at_newline() {
        let mut paste = PasteState::new();
        paste.insert_str("line one\nword");
        paste.delete_word_back();
        assert_eq!(paste.text, "line one\n");
        paste.delete_word_back();
        assert_eq!(paste.text, "line ");
    }

    #[test]
    fn test_option_rows_follow_loaded_questions() {
        let mut st = state();
        st.load_questions(vec![question(1, &["a", "b"]), question(2, &["x", "y", "z"])]);
        assert_eq!(st.option_rows, vec![(0, 0), (0, 1), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(st.current_row(), Some((0, 0)));

        st.load_questions(Vec::new());
        assert!(st.option_rows.is_empty());
        assert_eq!(st.current_row(), None);
    }

    #[test]
    fn test_cursor_walks_rows_and_jumps_questions() {
        let mut st = state();
        st.load_questions(vec![question(1, &["a", "b"]), question(2, &["x", "y"])]);
        st.move_cursor_down();
        assert_eq!(st.current_row(), Some((0, 1)));
        st.jump_next_question();
        assert_eq!(st.current_row(), Some((1, 0)));
        st.jump_next_question();
        assert_eq!(st.current_row(), Some((1, 0)));
        st.jump_prev_question();
        assert_eq!(st.current_row(), Some((0, 0)));
        st.move_cursor_up();
        assert_eq!(st.current_row(), Some((0, 0)));
    }

    #[test]
    fn test_select_at_cursor_records_pick() {
        let mut st = state();
        st.load_questions(vec![question(4, &["left", "right"])]);
        st.move_cursor_down();
        st.select_at_cursor();
        assert_eq!(st.session.pick(4), Some("right"));
    }

    #[test]
    fn test_activity_log_is_capped() {
        let mut st = state();
        st.config.ui.max_activity = 3;
        for i in 0..5 {
            st.system_message(format!("line {i}"));
        }
        assert_eq!(st.activity.len(), 3);
        assert_eq!(st.activity[0].text, "line 2");
        assert_eq!(st.new_messages.len(), 5);
    }

    #[test]
    fn test_status_line_reflects_progress() {
        let mut st = state();
        assert!(st.status_line().contains("F5"));

        st.load_questions(vec![question(1, &["a", "b"]), question(2, &["x", "y"])]);
        st.select_at_cursor();
        assert_eq!(st.status_line(), "1/2 answered");

        st.session.grade();
        assert_eq!(st.status_line(), "1/2 answered | Score: 1/2");

        st.set_status("Copied".to_string());
        assert_eq!(st.status_line(), "Copied");
    }
}
