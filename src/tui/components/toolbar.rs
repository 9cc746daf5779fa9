//! Toolbar row: the two dropdowns and the command line input.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, InputMode, ToolbarFocus};
use crate::tui::theme::*;

/// Render the toolbar row.
pub fn render_toolbar(frame: &mut Frame, area: Rect, app: &App) {
    let layout = Layout::horizontal([
        Constraint::Length(24), // Kernel dropdown
        Constraint::Length(24), // Cluster dropdown
        Constraint::Min(0),     // Command line
    ])
    .split(area);

    render_dropdown(
        frame,
        layout[0],
        " Kernel ",
        app.kernel.selection_label(),
        app.focus == ToolbarFocus::Kernel,
    );

    render_dropdown(
        frame,
        layout[1],
        " Cluster ",
        app.cluster.selection_label(),
        app.focus == ToolbarFocus::Cluster,
    );

    render_command_line(frame, layout[2], app);
}

fn render_dropdown(frame: &mut Frame, area: Rect, title: &str, label: &str, focused: bool) {
    let border_style = if focused {
        Style::new().fg(LOGO_MINT)
    } else {
        Style::new().fg(TEXT_DIM)
    };

    let label_style = if focused {
        Style::new().fg(TEXT_WHITE).bold()
    } else {
        Style::new().fg(TEXT_WHITE)
    };

    let block = Block::default()
        .title(title)
        .title_style(border_style)
        .borders(Borders::ALL)
        .border_style(border_style);

    let content = Line::from(vec![
        Span::styled(label, label_style),
        Span::raw(" "),
        Span::styled("▾", Style::new().fg(TEXT_DIM)),
    ]);

    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn render_command_line(frame: &mut Frame, area: Rect, app: &App) {
    let is_insert = app.input_mode == InputMode::Insert;
    let focused = app.focus == ToolbarFocus::CommandLine;

    let border_style = if is_insert {
        Style::new().fg(LOGO_GOLD)
    } else if focused {
        Style::new().fg(LOGO_MINT)
    } else {
        Style::new().fg(TEXT_DIM)
    };

    let prompt_style = if is_insert {
        Style::new().fg(LOGO_MINT)
    } else {
        Style::new().fg(TEXT_DIM)
    };

    let text_style = if is_insert {
        Style::new().fg(TEXT_WHITE)
    } else {
        Style::new().fg(TEXT_DIM)
    };

    let block = Block::default()
        .title(" Command ")
        .title_style(border_style)
        .borders(Borders::ALL)
        .border_style(border_style);

    let content = Line::from(vec![
        Span::styled("> ", prompt_style),
        Span::styled(app.command_line.text(), text_style),
    ]);

    frame.render_widget(Paragraph::new(content).block(block), area);

    // Place the terminal cursor inside the input while typing
    if is_insert {
        let x = area.x + 1 + 2 + app.command_line.cursor_chars() as u16;
        let y = area.y + 1;
        frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), y));
    }
}
