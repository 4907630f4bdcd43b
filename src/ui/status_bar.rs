use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Answered counter once a set is loaded
    if !state.session.is_empty() {
        parts.push(Span::styled(
            format!(
                " [{}/{}] ",
                state.session.answered_count(),
                state.session.len()
            ),
            Style::default().fg(Theme::ACCENT_GREEN).bg(Theme::BG_ELEVATED),
        ));
    }

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Focus indicator
    let focus_name = match state.focus {
        FocusPanel::Paste => "PASTE",
        FocusPanel::Questions => "QUESTIONS",
        FocusPanel::Sidebar => "SIDEBAR",
    };
    let tag = format!(" [{}] ", focus_name);

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + tag.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        tag,
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
