//! Hero view - the landing screen

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::tui::widgets::{themed_block, COLOR_ACCENT, COLOR_MUTED, COLOR_PANEL};

pub fn draw_hero(frame: &mut Frame<'_>, area: Rect) {
    let block = themed_block("Namaste India", COLOR_ACCENT);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Center the copy vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Min(8),
            Constraint::Percentage(30),
        ])
        .split(inner);

    let lines = vec![
        Line::styled(
            "Discover the Soul of India",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("From the snow-capped Himalayas to the tropical backwaters of Kerala."),
        Line::from("Let AI craft your perfect Indian journey tailored to your dreams."),
        Line::from(""),
        Line::styled(
            "Press Enter to start your yatra",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled("q to quit", Style::default().fg(COLOR_MUTED)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(COLOR_PANEL))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, chunks[1]);
}
