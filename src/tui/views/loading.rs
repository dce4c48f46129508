//! Loading view - spinner shown while the generation call is in flight

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::widgets::{themed_block, COLOR_ACCENT, COLOR_MUTED, COLOR_PANEL};

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Rotating status messages, 1.5s apart.
pub const LOADING_MESSAGES: [&str; 6] = [
    "Consulting the map...",
    "Brewing Chai...",
    "Asking the locals...",
    "Finding the best routes...",
    "Checking hotel availability...",
    "Adding a pinch of spice...",
];

pub fn draw_loading(frame: &mut Frame<'_>, area: Rect, spinner_frame: usize, message: &str) {
    let block = themed_block("Planning your Journey", COLOR_ACCENT);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Min(4),
            Constraint::Percentage(40),
        ])
        .split(inner);

    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::styled(
            format!("{spinner} Planning your Journey"),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(COLOR_MUTED)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(COLOR_PANEL));
    frame.render_widget(paragraph, chunks[1]);
}
