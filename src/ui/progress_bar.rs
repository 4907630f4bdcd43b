use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let bg = Theme::BG_ELEVATED;

    let line = if state.session.is_empty() {
        Line::from(vec![
            Span::styled(
                " ◆ ",
                Style::default()
                    .fg(Theme::ACCENT_TEAL)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "QuizDeck",
                Style::default()
                    .fg(Theme::TEXT_PRIMARY)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ ", Style::default().fg(Theme::BORDER_DIM).bg(bg)),
            Span::styled(
                "F2 opens the prompt helper",
                Style::default()
                    .fg(Theme::TEXT_SECONDARY)
                    .bg(bg)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])
    } else if state.session.is_graded() {
        let score = state.session.score();
        let total = state.session.len();
        let perfect = score == total;
        Line::from(vec![
            Span::styled(
                " ✔ ",
                Style::default()
                    .fg(if perfect {
                        Theme::ACCENT_GREEN
                    } else {
                        Theme::ACCENT_AMBER
                    })
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("Score {}/{}", score, total),
                Style::default()
                    .fg(Theme::TEXT_PRIMARY)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ ", Style::default().fg(Theme::BORDER_DIM).bg(bg)),
            Span::styled(
                if perfect {
                    "Perfect run".to_string()
                } else {
                    format!("{} to review", total - score)
                },
                Style::default()
                    .fg(Theme::TEXT_SECONDARY)
                    .bg(bg)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])
    } else {
        let answered = state.session.answered_count();
        let total = state.session.len();
        let hint = if answered == total {
            "press g to grade"
        } else {
            "pick an answer for every question"
        };
        Line::from(vec![
            Span::styled(
                " # ",
                Style::default()
                    .fg(Theme::ACCENT_TEAL)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} questions", total),
                Style::default()
                    .fg(Theme::ACCENT_TEAL)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ ", Style::default().fg(Theme::BORDER_DIM).bg(bg)),
            Span::styled(
                format!("{}/{} answered, {}", answered, total, hint),
                Style::default().fg(Theme::TEXT_PRIMARY).bg(bg),
            ),
        ])
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
