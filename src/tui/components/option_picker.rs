//! Dropdown popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{App, PickerTarget};
use crate::tui::theme::*;

/// Render the dropdown popup as a centered overlay.
pub fn render_option_picker(frame: &mut Frame, area: Rect, app: &App) {
    let Some(picker) = &app.picker else { return };

    let (title, entries) = match picker.target {
        PickerTarget::Kernel => (" Select Kernel ", app.kernel.display_entries()),
        PickerTarget::Cluster => (" Select Cluster ", app.cluster.state().display_entries()),
    };

    // Calculate centered popup area
    let popup_width = 40u16.min(area.width.saturating_sub(4));
    let popup_height = (entries.len() as u16 + 6).min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![];
    lines.push(Line::raw(""));

    for (i, entry) in entries.iter().enumerate() {
        let is_highlighted = i == picker.highlighted;
        let cursor = if is_highlighted { "> " } else { "  " };

        let label_style = if !entry.enabled {
            Style::new().fg(TEXT_DIM)
        } else if is_highlighted {
            Style::new().fg(TEXT_WHITE).bold()
        } else {
            Style::new().fg(TEXT_WHITE)
        };

        let mut spans = vec![
            Span::styled(
                cursor,
                if is_highlighted {
                    Style::new().fg(LOGO_MINT)
                } else {
                    Style::new().fg(TEXT_DIM)
                },
            ),
            Span::styled(entry.label.to_string(), label_style),
        ];

        // Show the identifier next to the label when they differ
        if entry.enabled && entry.id != entry.label {
            spans.push(Span::styled(
                format!("  ({})", entry.id),
                Style::new().fg(TEXT_DIM),
            ));
        }

        lines.push(Line::from(spans));
    }

    // Pad to fill available space
    while lines.len() < (popup_height.saturating_sub(4)) as usize {
        lines.push(Line::raw(""));
    }

    // Help text at bottom
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("[↑/↓]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" navigate · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" select · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" cancel", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .title(title)
        .title_style(Style::new().fg(LOGO_MINT).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_MINT))
        .style(Style::new().bg(Color::Black));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
