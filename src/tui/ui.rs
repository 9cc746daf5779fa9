use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, InputMode};
use crate::editor::ScriptEditor;

use super::components::{render_command_log, render_help_popup, render_option_picker, render_toolbar};
use super::theme::*;

pub fn render(frame: &mut Frame, app: &App, editor: &ScriptEditor) {
    let area = frame.area();

    // Main vertical layout: logo, toolbar, command log, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2), // Logo + spacing
        Constraint::Length(3), // Toolbar row
        Constraint::Min(0),    // Command log
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_logo(frame, main_layout[0]);
    render_toolbar(frame, main_layout[1], app);
    render_command_log(frame, main_layout[2], app, editor);
    render_hotkeys(frame, main_layout[3], app, editor);

    // Overlays
    match app.input_mode {
        InputMode::Picker => render_option_picker(frame, area, app),
        InputMode::Help => render_help_popup(frame, area),
        _ => {}
    }
}

fn render_logo(frame: &mut Frame, area: Rect) {
    // Center the colorful "runbar" logo
    let padding = (area.width.saturating_sub(6)) / 2;
    let centered = Line::from(vec![
        Span::raw(" ".repeat(padding as usize)),
        Span::styled("r", Style::new().fg(LOGO_CORAL).bold()),
        Span::styled("u", Style::new().fg(LOGO_GOLD).bold()),
        Span::styled("n", Style::new().fg(LOGO_LIGHT_BLUE).bold()),
        Span::styled("b", Style::new().fg(LOGO_MINT).bold()),
        Span::styled("a", Style::new().fg(LOGO_GOLD).bold()),
        Span::styled("r", Style::new().fg(LOGO_CORAL).bold()),
    ]);

    frame.render_widget(Paragraph::new(centered), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App, editor: &ScriptEditor) {
    let hints: &[(&str, &str)] = match app.input_mode {
        InputMode::Normal => &[
            ("[tab]", " focus · "),
            ("[j/k]", " cycle · "),
            ("[enter]", " open · "),
            ("[i]", " type · "),
            ("[?]", " help · "),
            ("[q]", " quit"),
        ],
        InputMode::Insert => &[("[esc]", " done · "), ("[ctrl+c]", " clear")],
        InputMode::Picker => &[
            ("[j/k]", " navigate · "),
            ("[enter]", " select · "),
            ("[esc]", " cancel"),
        ],
        InputMode::Help => &[("[esc]", " close")],
    };

    let mut spans: Vec<Span> = vec![];
    for (key, description) in hints {
        spans.push(Span::styled(*key, Style::new().fg(TEXT_WHITE)));
        spans.push(Span::styled(*description, Style::new().fg(TEXT_DIM)));
    }

    // Current selections on the right, read straight off the widgets
    let status = format!(
        "kernel:{} cluster:{} cmd:{}",
        app.kernel.selection(),
        app.cluster.selection(),
        editor.latest_command_line(),
    );

    let status_width = (status.chars().count() as u16).min(area.width);
    let layout =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)]).split(area);

    frame.render_widget(Paragraph::new(Line::from(spans)), layout[0]);
    frame.render_widget(
        Paragraph::new(Line::styled(status, Style::new().fg(TEXT_DIM))),
        layout[1],
    );
}
