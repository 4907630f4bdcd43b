use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Paste;
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
        .title(" Paste ")
        .title_style(if focused {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
        .style(bg);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.paste.text.is_empty() {
        let placeholder = Paragraph::new("Paste the complete JSON array from the assistant here...")
            .style(
                Style::default()
                    .fg(Theme::TEXT_MUTED)
                    .add_modifier(Modifier::ITALIC),
            );
        frame.render_widget(placeholder, inner);
        if focused {
            frame.set_cursor_position((inner.x, inner.y));
        }
        return;
    }

    let (cursor_line, cursor_col) = state.paste.cursor_position();
    let height = (inner.height as usize).max(1);

    // Scroll so the cursor line stays visible while editing
    let top = if focused {
        cursor_line.saturating_sub(height - 1)
    } else {
        0
    };

    let lines: Vec<Line> = state
        .paste
        .text
        .split('\n')
        .skip(top)
        .take(height)
        .map(|l| Line::from(Span::styled(l.to_string(), Theme::input_text())))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);

    if focused {
        let cursor_x_off: usize = state
            .paste
            .text
            .split('\n')
            .nth(cursor_line)
            .map(|line| {
                line.chars()
                    .take(cursor_col)
                    .map(|c| c.width().unwrap_or(0))
                    .sum()
            })
            .unwrap_or(cursor_col);

        let cursor_x = inner.x + cursor_x_off as u16;
        let cursor_y = inner.y + (cursor_line - top) as u16;
        frame.set_cursor_position((
            cursor_x.min(inner.right().saturating_sub(1)),
            cursor_y.min(inner.bottom().saturating_sub(1)),
        ));
    }
}
