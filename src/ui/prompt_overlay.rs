use crate::app::prompt::PROMPT_SUFFIX;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, state: &AppState) {
    if !state.show_prompt_overlay {
        return;
    }

    let area = frame.area();

    // Center the popup: 70% width, 60% height, min 56x14
    let popup_w = (area.width * 70 / 100)
        .max(56)
        .min(area.width.saturating_sub(4));
    let popup_h = (area.height * 60 / 100)
        .max(14)
        .min(area.height.saturating_sub(2));
    let popup_x = (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Prompt Helper ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 6 || inner.width < 20 {
        return;
    }

    let body_area = Rect::new(inner.x, inner.y, inner.width, inner.height - 1);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "Ask your chat assistant for a question set:",
        Style::default()
            .fg(Theme::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            "1. ",
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Type your request (e.g., \"Generate 5 MCQs about Python\").",
            Style::default().fg(Theme::TEXT_SECONDARY),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled(
            "2. ",
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Add this to the end of your request:",
            Style::default().fg(Theme::TEXT_SECONDARY),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        PROMPT_SUFFIX,
        Style::default().fg(Theme::ACCENT_AMBER),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            "3. ",
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Paste the reply into the paste box and press F5 to load it.",
            Style::default().fg(Theme::TEXT_SECONDARY),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body_area);

    // Keybinding help
    let help_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    let help = Line::from(vec![
        Span::styled(
            "c",
            Style::default()
                .fg(Theme::ACCENT_AMBER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " Copy to clipboard  ",
            Style::default().fg(Theme::TEXT_SECONDARY),
        ),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Theme::ACCENT_AMBER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Close", Style::default().fg(Theme::TEXT_SECONDARY)),
    ]);
    frame.render_widget(Paragraph::new(help), help_area);
}
