//! Command buffer pane.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::editor::ScriptEditor;
use crate::tui::theme::*;

/// Render the editor's command buffer with scroll support.
pub fn render_command_log(frame: &mut Frame, area: Rect, app: &App, editor: &ScriptEditor) {
    let title = match editor.script() {
        Some(script) => format!(" Command Buffer ({}) ", script),
        None => " Command Buffer ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::new().fg(TEXT_DIM))
        .borders(Borders::ALL)
        .border_style(Style::new().fg(TEXT_DIM));

    let viewport = area.height.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = vec![];

    if editor.commands().is_empty() {
        lines.push(Line::styled(
            "  (no commands yet — pick a cluster)",
            Style::new().fg(TEXT_DIM),
        ));
    }

    for record in editor
        .commands()
        .iter()
        .skip(app.log_scroll.offset())
        .take(viewport)
    {
        lines.push(Line::from(vec![
            Span::styled(
                record.at.format("%H:%M:%S ").to_string(),
                Style::new().fg(TEXT_DIM),
            ),
            Span::styled(editor.resolve(&record.command), Style::new().fg(COMMAND_GREEN)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
