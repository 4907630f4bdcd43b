use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    state.clear_expired_status();
    // The welcome logo animates while no quiz is loaded.
    if state.session.is_empty() {
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Paste(text) => {
            // Bracketed paste goes to the paste box no matter what has focus.
            state.paste.insert_str(&text);
            state.focus = FocusPanel::Paste;
            vec![]
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Prompt overlay captures all input when visible
    if state.show_prompt_overlay {
        return handle_overlay_key(state, key);
    }

    // F2 to show the assistant prompt
    if key.code == KeyCode::F(2) {
        state.show_prompt_overlay = true;
        return vec![];
    }

    // F5 to (re)load the paste buffer as a quiz
    if key.code == KeyCode::F(5) {
        return request_load(state);
    }

    // Tab to cycle focus
    if key.code == KeyCode::Tab {
        state.cycle_focus();
        return vec![];
    }

    match state.focus {
        FocusPanel::Paste => handle_paste_key(state, key),
        FocusPanel::Questions => handle_questions_key(state, key),
        FocusPanel::Sidebar => handle_sidebar_key(state, key),
    }
}

fn handle_overlay_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::F(2) => {
            state.show_prompt_overlay = false;
            vec![]
        }
        KeyCode::Char('c') | KeyCode::Char('y') | KeyCode::Enter => {
            state.show_prompt_overlay = false;
            vec![Action::CopyPrompt]
        }
        _ => vec![],
    }
}

fn request_load(state: &mut AppState) -> Vec<Action> {
    if state.paste.is_blank() {
        state.set_status("Nothing to load. Paste a question set first".to_string());
        return vec![];
    }
    vec![Action::LoadQuiz {
        raw: state.paste.text.clone(),
    }]
}

fn request_grade(state: &mut AppState) -> Vec<Action> {
    if state.session.is_empty() {
        state.set_status("Load a quiz before grading".to_string());
        return vec![];
    }
    vec![Action::GradeQuiz]
}

fn handle_paste_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            state.paste.newline();
            vec![]
        }
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                state.paste.delete_word_back();
            } else {
                state.paste.delete_back();
            }
            vec![]
        }
        KeyCode::Delete => {
            state.paste.delete_forward();
            vec![]
        }
        KeyCode::Left => {
            state.paste.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.paste.move_right();
            vec![]
        }
        KeyCode::Up => {
            state.paste.move_up();
            vec![]
        }
        KeyCode::Down => {
            state.paste.move_down();
            vec![]
        }
        KeyCode::Home => {
            state.paste.move_home();
            vec![]
        }
        KeyCode::End => {
            state.paste.move_end();
            vec![]
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => state.paste.move_home(),
                    'e' => state.paste.move_end(),
                    'w' => state.paste.delete_word_back(),
                    'u' => state.paste.clear(),
                    's' => return request_load(state),
                    _ => {}
                }
                vec![]
            } else {
                state.paste.insert_char(c);
                vec![]
            }
        }
        _ => vec![],
    }
}

fn handle_questions_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => {
            state.move_cursor_up();
            vec![]
        }
        KeyCode::Down => {
            state.move_cursor_down();
            vec![]
        }
        KeyCode::PageUp => {
            for _ in 0..5 {
                state.move_cursor_up();
            }
            vec![]
        }
        KeyCode::PageDown => {
            for _ in 0..5 {
                state.move_cursor_down();
            }
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.select_at_cursor();
            vec![]
        }
        KeyCode::Right | KeyCode::Char('n') => {
            state.jump_next_question();
            vec![]
        }
        KeyCode::Left | KeyCode::Char('p') => {
            state.jump_prev_question();
            vec![]
        }
        KeyCode::Home => {
            state.jump_to_question(0);
            vec![]
        }
        KeyCode::End => {
            if let Some(last) = state.session.len().checked_sub(1) {
                state.jump_to_question(last);
            }
            vec![]
        }
        KeyCode::Char('g') => request_grade(state),
        _ => vec![],
    }
}

fn handle_sidebar_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => {
            state.sidebar_up();
            vec![]
        }
        KeyCode::Down => {
            state.sidebar_down();
            vec![]
        }
        KeyCode::Enter => {
            state.jump_to_question(state.sidebar_index);
            state.focus = FocusPanel::Questions;
            vec![]
        }
        KeyCode::Char('g') => request_grade(state),
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::quiz::Question;
    use serde_json::Map;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn loaded_state() -> AppState {
        let mut st = state();
        let questions = (1..=2)
            .map(|id| Question {
                id,
                qtype: "mcq".into(),
                question: format!("question {id}?"),
                options: vec!["first".into(), "second".into()],
                answer: "first".into(),
                extra: Map::new(),
            })
            .collect();
        st.load_questions(questions);
        st.focus = FocusPanel::Questions;
        st
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        press_with(state, code, KeyModifiers::NONE)
    }

    fn press_with(state: &mut AppState, code: KeyCode, mods: KeyModifiers) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, mods))),
        )
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut st = state();
        let actions = press_with(&mut st, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(actions, vec![Action::Quit]);

        st.show_prompt_overlay = true;
        let actions = press_with(&mut st, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn test_f5_requests_load_with_paste_contents() {
        let mut st = state();
        st.paste.insert_str("[{}]");
        let actions = press(&mut st, KeyCode::F(5));
        assert_eq!(
            actions,
            vec![Action::LoadQuiz {
                raw: "[{}]".to_string()
            }]
        );
    }

    #[test]
    fn test_f5_with_blank_paste_only_sets_status() {
        let mut st = state();
        st.paste.insert_str("   \n  ");
        let actions = press(&mut st, KeyCode::F(5));
        assert!(actions.is_empty());
        assert!(st.status_message.is_some());
    }

    #[test]
    fn test_bracketed_paste_lands_in_paste_box() {
        let mut st = state();
        st.focus = FocusPanel::Sidebar;
        let actions = handle_event(
            &mut st,
            AppEvent::Terminal(CEvent::Paste("[{\"id\": 1}]".to_string())),
        );
        assert!(actions.is_empty());
        assert_eq!(st.paste.text, "[{\"id\": 1}]");
        assert_eq!(st.focus, FocusPanel::Paste);
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut st = state();
        assert_eq!(st.focus, FocusPanel::Paste);
        press(&mut st, KeyCode::Tab);
        assert_eq!(st.focus, FocusPanel::Questions);
        press(&mut st, KeyCode::Tab);
        assert_eq!(st.focus, FocusPanel::Sidebar);
        press(&mut st, KeyCode::Tab);
        assert_eq!(st.focus, FocusPanel::Paste);
    }

    #[test]
    fn test_enter_selects_option_under_cursor() {
        let mut st = loaded_state();
        press(&mut st, KeyCode::Down);
        press(&mut st, KeyCode::Enter);
        assert_eq!(st.session.pick(1), Some("second"));
    }

    #[test]
    fn test_grade_key_requests_grading() {
        let mut st = loaded_state();
        let actions = press(&mut st, KeyCode::Char('g'));
        assert_eq!(actions, vec![Action::GradeQuiz]);
    }

    #[test]
    fn test_grade_key_without_quiz_only_sets_status() {
        let mut st = state();
        st.focus = FocusPanel::Questions;
        let actions = press(&mut st, KeyCode::Char('g'));
        assert!(actions.is_empty());
        assert!(st.status_message.is_some());
    }

    #[test]
    fn test_overlay_captures_keys() {
        let mut st = state();
        press(&mut st, KeyCode::F(2));
        assert!(st.show_prompt_overlay);

        // Keys that would otherwise edit the paste box are swallowed.
        let actions = press(&mut st, KeyCode::Char('x'));
        assert!(actions.is_empty());
        assert!(st.paste.text.is_empty());

        let actions = press(&mut st, KeyCode::Char('c'));
        assert_eq!(actions, vec![Action::CopyPrompt]);
        assert!(!st.show_prompt_overlay);

        press(&mut st, KeyCode::F(2));
        press(&mut st, KeyCode::Esc);
        assert!(!st.show_prompt_overlay);
    }

    #[test]
    fn test_sidebar_enter_jumps_to_question() {
        let mut st = loaded_state();
        st.focus = FocusPanel::Sidebar;
        press(&mut st, KeyCode::Down);
        press(&mut st, KeyCode::Enter);
        assert_eq!(st.focus, FocusPanel::Questions);
        assert_eq!(st.current_question_index(), Some(1));
    }

    #[test]
    fn test_tick_expires_status() {
        let mut st = state();
        st.status_message = Some("old".to_string());
        st.status_expires_at = Some(std::time::Instant::now());
        handle_event(&mut st, AppEvent::Tick);
        assert!(st.status_message.is_none());
    }
}
