//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::tui::theme::*;

fn key_line(keys: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<9}", keys), Style::new().fg(TEXT_WHITE)),
        Span::styled(description, Style::new().fg(TEXT_DIM)),
    ])
}

/// Render the help popup with keyboard shortcuts.
pub fn render_help_popup(frame: &mut Frame, area: Rect) {
    // Calculate centered popup area
    let popup_width = 46u16;
    let popup_height = 20u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![];

    lines.push(Line::from(vec![Span::styled(
        "Keyboard Shortcuts",
        Style::new().fg(TEXT_WHITE).bold(),
    )]));
    lines.push(Line::raw(""));

    lines.push(Line::styled(
        "Toolbar",
        Style::new().fg(LOGO_LIGHT_BLUE).bold(),
    ));
    lines.push(key_line("tab/l/h", "Move focus between widgets"));
    lines.push(key_line("j/k", "Cycle the focused dropdown"));
    lines.push(key_line("enter", "Open dropdown / edit command"));
    lines.push(key_line("i", "Edit the command line"));
    lines.push(Line::raw(""));

    lines.push(Line::styled(
        "Dropdown",
        Style::new().fg(LOGO_LIGHT_BLUE).bold(),
    ));
    lines.push(key_line("j/k", "Navigate entries"));
    lines.push(key_line("enter", "Select entry"));
    lines.push(key_line("esc", "Cancel"));
    lines.push(Line::raw(""));

    lines.push(Line::styled(
        "Command Buffer",
        Style::new().fg(LOGO_LIGHT_BLUE).bold(),
    ));
    lines.push(key_line("ctrl+u/d", "Scroll half page"));
    lines.push(key_line("g/G", "Scroll to top / bottom"));
    lines.push(Line::raw(""));

    lines.push(key_line("q", "Quit"));

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::new().fg(LOGO_MINT).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_MINT))
        .style(Style::new().bg(Color::Black));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
