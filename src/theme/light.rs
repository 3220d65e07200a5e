use super::Theme;
use ratatui::style::{Color, Modifier, Style};

pub const LIGHT: Theme = Theme {
    base: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(248, 250, 252)),
    header: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(226, 232, 240))
        .add_modifier(Modifier::BOLD),
    row: Style::new().fg(Color::Rgb(15, 23, 42)),
    row_alt: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(241, 245, 249)),
    highlight: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(253, 224, 71))
        .add_modifier(Modifier::BOLD),
    prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
    muted: Style::new().fg(Color::Rgb(100, 116, 139)),
    empty: Style::new().fg(Color::Rgb(100, 100, 100)),
    danger: Style::new()
        .fg(Color::Rgb(185, 28, 28))
        .add_modifier(Modifier::BOLD),
};
