//! Form view - the three-step trip preference sub-wizard

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::model::{Budget, Interest, QUICK_PICKS, TRAVELER_GROUPS};
use crate::tui::widgets::{
    choice_row, themed_block, COLOR_ACCENT, COLOR_FOCUS, COLOR_MUTED, COLOR_PANEL,
};
use crate::wizard::{FormState, STEP_COUNT};

/// Which control on the current step has keyboard focus. Steps 2 and 3
/// carry two controls each; step 1 only has the destination input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormFocus {
    #[default]
    Primary,
    Secondary,
}

impl FormFocus {
    pub fn toggle(self) -> Self {
        match self {
            FormFocus::Primary => FormFocus::Secondary,
            FormFocus::Secondary => FormFocus::Primary,
        }
    }
}

pub fn draw_form(frame: &mut Frame<'_>, area: Rect, form: &FormState, focus: FormFocus) {
    let title = format!("Plan your trip · Step {} of {}", form.step, STEP_COUNT);
    let block = themed_block(title, COLOR_ACCENT);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(2), Constraint::Min(6)])
        .split(inner);

    // Progress indicator
    let filled = form.step as usize;
    let progress: String = (1..=STEP_COUNT as usize)
        .map(|i| if i <= filled { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");
    frame.render_widget(
        Paragraph::new(Line::styled(progress, Style::default().fg(COLOR_ACCENT))),
        chunks[0],
    );

    let lines = match form.step {
        1 => step_one_lines(form),
        2 => step_two_lines(form, focus),
        _ => step_three_lines(form, focus),
    };

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(COLOR_PANEL))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, chunks[1]);
}

fn heading(text: &str, subtitle: &str) -> Vec<Line<'static>> {
    vec![
        Line::styled(
            text.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(subtitle.to_string(), Style::default().fg(COLOR_MUTED)),
        Line::from(""),
    ]
}

fn step_one_lines(form: &FormState) -> Vec<Line<'static>> {
    let mut lines = heading("Where to?", "Enter a city, region, or state in India.");

    let destination = if form.request.destination.is_empty() {
        Span::styled(
            "e.g., Jaipur, Goa, Kerala",
            Style::default().fg(COLOR_MUTED),
        )
    } else {
        Span::styled(
            form.request.destination.clone(),
            Style::default().fg(COLOR_FOCUS).add_modifier(Modifier::BOLD),
        )
    };
    lines.push(Line::from(vec![
        Span::raw("Destination: "),
        destination,
        Span::styled("▏", Style::default().fg(COLOR_FOCUS)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("Tab to cycle quick picks: {}", QUICK_PICKS.join(" · ")),
        Style::default().fg(COLOR_MUTED),
    ));
    lines.push(Line::from(""));
    if form.can_advance() {
        lines.push(Line::styled(
            "Enter: next step",
            Style::default().fg(COLOR_ACCENT),
        ));
    } else {
        lines.push(Line::styled(
            "Enter a destination to continue",
            Style::default().fg(COLOR_MUTED),
        ));
    }
    lines
}

fn step_two_lines(form: &FormState, focus: FormFocus) -> Vec<Line<'static>> {
    let mut lines = heading("Trip Details", "How long and who with?");

    lines.push(field_label("Duration (days)", focus == FormFocus::Primary));
    let duration_bar: String = (1..=15)
        .map(|d| if d <= form.request.duration { "▰" } else { "▱" })
        .collect();
    lines.push(Line::from(vec![
        Span::styled(duration_bar, Style::default().fg(COLOR_ACCENT)),
        Span::styled(
            format!("  {} ", form.request.duration),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("(←/→ to adjust)", Style::default().fg(COLOR_MUTED)),
    ]));
    lines.push(Line::from(""));

    lines.push(field_label("Who is traveling?", focus == FormFocus::Secondary));
    let selected = TRAVELER_GROUPS
        .iter()
        .position(|g| *g == form.request.travelers)
        .unwrap_or(0);
    lines.push(choice_row(
        &TRAVELER_GROUPS,
        selected,
        focus == FormFocus::Secondary,
    ));
    lines
}

fn step_three_lines(form: &FormState, focus: FormFocus) -> Vec<Line<'static>> {
    let mut lines = heading("Preferences", "Set your style and budget.");

    lines.push(field_label("Budget Level", focus == FormFocus::Primary));
    let budget_labels: Vec<&str> = Budget::ALL.iter().map(|b| b.display()).collect();
    let selected = Budget::ALL
        .iter()
        .position(|b| *b == form.request.budget)
        .unwrap_or(0);
    lines.push(choice_row(
        &budget_labels,
        selected,
        focus == FormFocus::Primary,
    ));
    lines.push(Line::from(""));

    lines.push(field_label("Primary Vibe", focus == FormFocus::Secondary));
    let interest_labels: Vec<&str> = Interest::ALL.iter().map(|i| i.label()).collect();
    let selected = Interest::ALL
        .iter()
        .position(|i| *i == form.request.interest)
        .unwrap_or(0);
    lines.push(choice_row(
        &interest_labels,
        selected,
        focus == FormFocus::Secondary,
    ));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Enter: Generate Plan",
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
    ));
    lines
}

fn field_label(text: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(COLOR_FOCUS).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_MUTED)
    };
    Line::styled(text.to_string(), style)
}
