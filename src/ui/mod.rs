mod layout;
mod paste_box;
mod progress_bar;
mod prompt_overlay;
mod question_area;
mod question_tree;
mod status_bar;
mod theme;

use crate::app::state::{AppState, MessageKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    question_tree::render(frame, app_layout.question_tree, state);
    render_activity_panel(frame, app_layout.activity, state);
    progress_bar::render(frame, app_layout.progress_bar, state);
    question_area::render(frame, app_layout.question_area, state);
    paste_box::render(frame, app_layout.paste_box, state);
    status_bar::render(frame, app_layout.status_bar, state);
    prompt_overlay::render(frame, state);
}

fn render_activity_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Activity ")
        .title_style(theme::Theme::title())
        .borders(Borders::ALL)
        .border_type(theme::Theme::border_type())
        .border_style(theme::Theme::border())
        .style(theme::Theme::panel_bg());

    let visible = block.inner(area).height as usize;

    let mut items: Vec<ListItem> = Vec::new();

    if state.activity.is_empty() {
        items.push(ListItem::new(Span::styled(
            " No activity yet",
            Style::default().fg(theme::Theme::TEXT_MUTED),
        )));
    } else {
        // Show the tail that fits
        let skip = state.activity.len().saturating_sub(visible);
        for msg in state.activity.iter().skip(skip) {
            let (marker, style) = match msg.kind {
                MessageKind::System => ("• ", theme::Theme::system_message()),
                MessageKind::Success => ("✔ ", theme::Theme::success_message()),
                MessageKind::Error => ("✘ ", theme::Theme::error_message()),
            };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(format!(" [{}] ", msg.timestamp), theme::Theme::timestamp()),
                Span::styled(marker, style),
                Span::styled(msg.text.clone(), style),
            ])));
        }
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
