//! Reusable TUI widgets

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

// Color scheme
pub const COLOR_BG: Color = Color::Rgb(12, 10, 16);
pub const COLOR_PANEL: Color = Color::Rgb(12, 10, 16);
pub const COLOR_ACCENT: Color = Color::Rgb(255, 153, 51); // saffron
pub const COLOR_FOCUS: Color = Color::Cyan;
pub const COLOR_MUTED: Color = Color::Rgb(148, 151, 156);

/// Create a themed block with consistent styling
pub fn themed_block(title: impl Into<String>, border_color: Color) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            title.into(),
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_PANEL).fg(Color::White))
}

/// Create a centered rectangle for modal dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(area);
    let vertical_chunk = popup_layout[1];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(vertical_chunk)[1]
}

/// Draw the blocking failure notice over the current view. Any key
/// dismisses it; nothing behind it receives input until then.
pub fn draw_error_modal(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let popup = centered_rect(60, 30, area);
    frame.render_widget(Clear, popup);
    let block = themed_block("Plan could not be generated", Color::Red);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::styled(
            "Press any key to return to the form and try again.",
            Style::default().fg(COLOR_MUTED),
        ),
    ];
    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(COLOR_PANEL).fg(Color::White))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// Draw a status bar with a state line and key help
pub fn draw_status_bar(frame: &mut Frame<'_>, area: Rect, state_line: &str, help_line: &str) {
    let state = Line::from(state_line.to_string());
    let help = Line::styled(help_line.to_string(), Style::default().fg(COLOR_MUTED));

    let paragraph = Paragraph::new(vec![state, help])
        .style(Style::default().bg(COLOR_PANEL).fg(Color::White))
        .block(themed_block("Status", COLOR_MUTED))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Render a horizontal choice row, highlighting the selected entry and
/// marking the focused control.
pub fn choice_row(labels: &[&str], selected: usize, focused: bool) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if i == selected {
            let color = if focused { COLOR_FOCUS } else { COLOR_ACCENT };
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_MUTED)
        };
        let text = if i == selected {
            format!("[{label}]")
        } else {
            format!(" {label} ")
        };
        spans.push(Span::styled(text, style));
    }
    Line::from(spans)
}
