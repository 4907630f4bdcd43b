use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LOGO: [&str; 5] = [
    r"  ___          _       ____               _    ",
    r" / _ \  _   _ (_) ____|  _ \   ___   ___ | | __",
    r"| | | || | | || ||_  /| | | | / _ \ / __|| |/ /",
    r"| |_| || |_| || | / / | |_| ||  __/| (__ |   < ",
    r" \__\_\ \__,_||_|/___||____/  \___| \___||_|\_\",
];

fn wave_color(col: u16, tick: u64) -> Color {
    let gradient: [(f64, f64, f64); 6] = [
        (96.0, 205.0, 200.0),  // teal
        (120.0, 160.0, 235.0), // sky
        (185.0, 135.0, 225.0), // violet
        (235.0, 140.0, 160.0), // rose
        (240.0, 190.0, 95.0),  // gold
        (110.0, 215.0, 140.0), // mint
    ];
    let len = gradient.len() as f64;
    let phase = (col as f64 * 0.18 - tick as f64 * 0.1).rem_euclid(len);
    let idx = phase.floor() as usize;
    let frac = phase - phase.floor();
    let (r1, g1, b1) = gradient[idx % gradient.len()];
    let (r2, g2, b2) = gradient[(idx + 1) % gradient.len()];
    Color::Rgb(
        (r1 + (r2 - r1) * frac) as u8,
        (g1 + (g2 - g1) * frac) as u8,
        (b1 + (b2 - b1) * frac) as u8,
    )
}

fn render_welcome(frame: &mut Frame, area: Rect, state: &AppState) {
    let tick = state.tick_count;
    let logo_h = LOGO.len() as u16;
    let logo_w = LOGO.iter().map(|l| l.len()).max().unwrap_or(0) as u16;

    // Build help lines
    let mut help_lines: Vec<Line> = Vec::new();
    help_lines.push(Line::from(Span::styled(
        "Getting started:",
        Style::default()
            .fg(Theme::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )));
    for (key, hint) in [
        ("  F2 ", "Prompt helper for your chat assistant"),
        ("  F5 ", "Load the pasted question set"),
        ("  Tab ", "Cycle panel focus"),
        ("  Enter ", "Pick the highlighted option"),
        ("  g ", "Grade your answers"),
        ("  Ctrl+C ", "Quit"),
    ] {
        help_lines.push(Line::from(vec![
            Span::styled(
                key,
                Style::default()
                    .fg(Theme::ACCENT_TEAL)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(hint, Style::default().fg(Theme::TEXT_SECONDARY)),
        ]));
    }

    // subtitle + gap + help
    let total_h = logo_h + 2 + 1 + help_lines.len() as u16;
    let start_y = area.y + area.height.saturating_sub(total_h) / 3;

    // Render animated logo
    for (i, line) in LOGO.iter().enumerate() {
        let y = start_y + i as u16;
        if y >= area.y + area.height {
            return;
        }

        let line_w = line.len() as u16;
        let x = area.x + area.width.saturating_sub(line_w) / 2;

        let spans: Vec<Span> = line
            .chars()
            .enumerate()
            .map(|(c, ch)| {
                if ch == ' ' {
                    Span::raw(" ")
                } else {
                    Span::styled(
                        ch.to_string(),
                        Style::default()
                            .fg(wave_color(c as u16, tick))
                            .add_modifier(Modifier::BOLD),
                    )
                }
            })
            .collect();

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x, y, line_w.min(area.width), 1),
        );
    }

    // Subtitle
    let sub_y = start_y + logo_h + 1;
    if sub_y < area.y + area.height {
        let sub_text = "Paste \u{2022} Answer \u{2022} Grade";
        let sub_w = sub_text.width() as u16;
        let sub_x = area.x + area.width.saturating_sub(sub_w) / 2;
        frame.render_widget(
            Paragraph::new(Span::styled(
                sub_text,
                Style::default().fg(Theme::ACCENT_LAVENDER),
            )),
            Rect::new(sub_x, sub_y, sub_w.min(area.width), 1),
        );
    }

    // Help block (centered as a unit, left-aligned within)
    let help_y = sub_y + 2;
    if help_y < area.y + area.height {
        let max_w = help_lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
        let max_w = max_w.max(logo_w); // at least as wide as the logo
        let help_x = area.x + area.width.saturating_sub(max_w) / 2;
        let remaining_h = (area.y + area.height).saturating_sub(help_y);
        let help_area = Rect::new(help_x, help_y, max_w.min(area.width), remaining_h);
        frame.render_widget(Paragraph::new(help_lines), help_area);
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Questions;
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
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Animated welcome screen until a question set is loaded
    if state.session.is_empty() {
        render_welcome(frame, inner, state);
        return;
    }

    let graded = state.session.is_graded();
    let reveal = state.config.ui.reveal_answers;
    let current = state.current_row();
    let wrap_width = (inner.width as usize).saturating_sub(8).max(10);

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_row = 0usize;

    for (qi, question) in state.session.questions().iter().enumerate() {
        let verdict = state.session.verdict(question.id);
        let pick = state.session.pick(question.id);

        let mark = match verdict {
            Some(true) => Span::styled("✔ ", Theme::verdict_pass()),
            Some(false) => Span::styled("✘ ", Theme::verdict_miss()),
            None => Span::raw("  "),
        };

        for (pi, piece) in wrap_text(&question.question, wrap_width).into_iter().enumerate() {
            if pi == 0 {
                lines.push(Line::from(vec![
                    mark.clone(),
                    Span::styled(
                        format!("{:>2}. ", qi + 1),
                        Style::default()
                            .fg(Theme::ACCENT_TEAL)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(piece, Theme::question_text().add_modifier(Modifier::BOLD)),
                ]));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("      "),
                    Span::styled(piece, Theme::question_text().add_modifier(Modifier::BOLD)),
                ]));
            }
        }

        for (oi, option) in question.options.iter().enumerate() {
            let picked = pick == Some(option.as_str());
            let marker = if picked { "(•)" } else { "( )" };

            let style = if graded && *option == question.answer && (reveal || picked) {
                Theme::option_correct()
            } else if graded && picked {
                Theme::option_wrong()
            } else if picked {
                Theme::option_picked()
            } else {
                Theme::option_normal()
            };

            let mut line = Line::from(vec![
                Span::raw("      "),
                Span::styled(format!("{} ", marker), style),
                Span::styled(option.clone(), style),
            ]);

            if current == Some((qi, oi)) {
                cursor_row = lines.len();
                if focused {
                    line = line.style(Theme::cursor_row());
                }
            }
            lines.push(line);
        }

        if verdict == Some(false) && reveal {
            lines.push(Line::from(vec![
                Span::raw("      "),
                Span::styled(
                    format!("Actually the correct answer is: {}", question.answer),
                    Theme::system_message().add_modifier(Modifier::ITALIC),
                ),
            ]));
        }

        lines.push(Line::from(""));
    }

    // Keep the cursor row centered where possible
    let height = (inner.height as usize).max(1);
    let total = lines.len();
    let max_start = total.saturating_sub(height);
    let start = cursor_row.saturating_sub(height / 2).min(max_start);

    let visible: Vec<Line> = lines.into_iter().skip(start).take(height).collect();
    frame.render_widget(Paragraph::new(visible), inner);

    // Scrollbar
    if total > height {
        let mut scrollbar_state = ScrollbarState::new(max_start).position(start);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_symbol("┃")
            .track_symbol(Some("│"))
            .thumb_style(Theme::scrollbar_thumb())
            .track_style(Theme::scrollbar_track());

        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_w = 0usize;

    for word in text.split_whitespace() {
        let word_w = word.width();
        if current_w > 0 {
            if current_w + 1 + word_w <= width {
                current.push(' ');
                current_w += 1;
            } else {
                lines.push(std::mem::take(&mut current));
                current_w = 0;
            }
        }
        if word_w <= width {
            current.push_str(word);
            current_w += word_w;
        } else {
            // Hard-split a word wider than the panel
            for ch in word.chars() {
                let ch_w = ch.width().unwrap_or(0);
                if current_w + ch_w > width && current_w > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_w = 0;
                }
                current.push(ch);
                current_w += ch_w;
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_text_hard_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_text_empty_input_yields_one_blank_line() {
        assert_eq!(wrap_text("", 12), vec![""]);
    }
}
