use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub question_tree: Rect,
    pub activity: Rect,
    pub progress_bar: Rect,
    pub question_area: Rect,
    pub paste_box: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: question list | gap | quiz column
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(26), // Question list
            Constraint::Min(30),    // Quiz column
        ])
        .split(content);

    let left_panel = h_chunks[0];
    let right_panel = h_chunks[1];

    // Left panel: question tree | activity log
    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Question tree
            Constraint::Min(4),         // Activity log
        ])
        .split(left_panel);

    let question_tree = left_chunks[0];
    let activity = left_chunks[1];

    // Quiz column: progress strip | questions | paste box
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Progress strip
            Constraint::Min(5),    // Question view
            Constraint::Length(8), // Paste box
        ])
        .split(right_panel);

    let progress_bar = right_chunks[0];
    let question_area = right_chunks[1];
    let paste_box = right_chunks[2];

    AppLayout {
        question_tree,
        activity,
        progress_bar,
        question_area,
        paste_box,
        status_bar,
    }
}
