use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(16, 18, 24);
    pub const BG_SURFACE: Color = Color::Rgb(24, 27, 34);
    pub const BG_ELEVATED: Color = Color::Rgb(34, 38, 48);
    pub const BORDER_DIM: Color = Color::Rgb(58, 63, 76);

    pub const TEXT_PRIMARY: Color = Color::Rgb(224, 228, 235);
    pub const TEXT_SECONDARY: Color = Color::Rgb(150, 158, 172);
    pub const TEXT_MUTED: Color = Color::Rgb(100, 106, 118);

    pub const ACCENT_TEAL: Color = Color::Rgb(86, 200, 195);
    pub const ACCENT_AMBER: Color = Color::Rgb(229, 181, 103);
    pub const ACCENT_GREEN: Color = Color::Rgb(118, 202, 142);
    pub const ACCENT_ROSE: Color = Color::Rgb(224, 108, 128);
    pub const ACCENT_LAVENDER: Color = Color::Rgb(170, 150, 222);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_DARK)
    }

    pub fn panel_bg_focused() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn system_message() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn success_message() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Self::ACCENT_ROSE)
    }

    pub fn question_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn option_normal() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn option_picked() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn option_correct() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn option_wrong() -> Style {
        Style::default().fg(Self::ACCENT_ROSE)
    }

    pub fn verdict_pass() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn verdict_miss() -> Style {
        Style::default().fg(Self::ACCENT_ROSE)
    }

    pub fn cursor_row() -> Style {
        Style::default().bg(Self::BG_ELEVATED)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }
}
