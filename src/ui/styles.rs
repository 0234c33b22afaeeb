use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Completed item style
pub fn done_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Header style ("Todos:" and the notes header)
pub fn header_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Placeholder and separator style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Active editor line style
pub fn editor_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}
