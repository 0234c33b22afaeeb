pub mod styles;
pub mod view;
pub mod wrap;

use crate::app::AppState;
use ratatui::{
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use styles::{
    default_style, done_style, editor_style, error_style, header_style, hint_style,
    selected_style,
};
use view::{view_lines, LineKind};

/// Main render function - maps the view projection onto styled lines
/// and draws them full-screen
pub fn render(f: &mut Frame, app: &AppState) {
    let lines: Vec<Line> = view_lines(app)
        .into_iter()
        .map(|row| {
            let style = match row.kind {
                LineKind::Header => header_style(),
                LineKind::Placeholder | LineKind::Separator => hint_style(),
                LineKind::Editor => editor_style(),
                LineKind::Item { selected: true, .. } => selected_style(),
                LineKind::Item { done: true, .. } => done_style(),
                LineKind::Item { .. } | LineKind::NotesBody => default_style(),
                LineKind::Error => error_style(),
            };
            Line::from(Span::styled(row.text, style))
        })
        .collect();

    f.render_widget(Paragraph::new(lines), f.size());
}
