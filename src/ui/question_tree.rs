use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Sidebar;
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    let block = Block::default()
        .title(" Questions ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg);

    let mut items: Vec<ListItem> = Vec::new();

    if state.session.is_empty() {
        items.push(ListItem::new(Span::styled(
            " No questions loaded",
            Style::default().fg(Theme::TEXT_MUTED),
        )));
    } else {
        // Progress entry at the top
        let answered = state.session.answered_count();
        let total = state.session.len();
        let mut spans = vec![
            Span::styled(
                " ★ ",
                Style::default()
                    .fg(Theme::ACCENT_AMBER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("Progress", Style::default().fg(Theme::TEXT_SECONDARY)),
            Span::styled(
                format!(" {}/{}", answered, total),
                Style::default()
                    .fg(Theme::BG_DARK)
                    .bg(Theme::ACCENT_AMBER)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if state.session.is_graded() {
            spans.push(Span::styled(
                format!(" ✔{}", state.session.score()),
                Style::default()
                    .fg(Theme::BG_DARK)
                    .bg(Theme::ACCENT_GREEN)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        items.push(ListItem::new(Line::from(spans)));

        let label_width = (area.width as usize).saturating_sub(10).max(4);
        let current = state.current_question_index();
        let last = state.session.len().saturating_sub(1);

        for (i, question) in state.session.questions().iter().enumerate() {
            let (icon, icon_style) = match (
                state.session.verdict(question.id),
                state.session.pick(question.id),
            ) {
                (Some(true), _) => ("✔", Theme::verdict_pass()),
                (Some(false), _) => ("✘", Theme::verdict_miss()),
                (None, Some(_)) => ("●", Style::default().fg(Theme::ACCENT_TEAL)),
                (None, None) => ("○", Style::default().fg(Theme::TEXT_MUTED)),
            };

            let tree_prefix = if i == last { " └─" } else { " ├─" };

            let text_style = if focused && i == state.sidebar_index {
                Style::default()
                    .fg(Theme::TEXT_PRIMARY)
                    .bg(Theme::BG_ELEVATED)
                    .add_modifier(Modifier::BOLD)
            } else if current == Some(i) {
                Style::default()
                    .fg(Theme::ACCENT_TEAL)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::TEXT_SECONDARY)
            };

            items.push(ListItem::new(Line::from(vec![
                Span::styled(tree_prefix, Style::default().fg(Theme::BORDER_DIM)),
                Span::styled(format!("{} ", icon), icon_style),
                Span::styled(
                    format!("{}. {}", i + 1, truncate(&question.question, label_width)),
                    text_style,
                ),
            ])));
        }
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
