use super::Theme;
use ratatui::style::{Color, Modifier, Style};

pub const DARK: Theme = Theme {
    base: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .bg(Color::Rgb(15, 23, 42)),
    header: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .bg(Color::Rgb(30, 41, 59))
        .add_modifier(Modifier::BOLD),
    row: Style::new().fg(Color::Rgb(226, 232, 240)),
    row_alt: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .bg(Color::Rgb(22, 32, 51)),
    highlight: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(250, 204, 21))
        .add_modifier(Modifier::BOLD),
    prompt: Style::new().fg(Color::LightCyan),
    muted: Style::new().fg(Color::Rgb(148, 163, 184)),
    empty: Style::new().fg(Color::DarkGray),
    danger: Style::new()
        .fg(Color::Rgb(248, 113, 113))
        .add_modifier(Modifier::BOLD),
};
