//! Result view - the generated day-by-day itinerary

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::model::TripItinerary;
use crate::tui::widgets::{themed_block, COLOR_ACCENT, COLOR_FOCUS, COLOR_MUTED, COLOR_PANEL};
use crate::tui::{ellipsize, wrap_text};

/// Scroll state for the result view.
#[derive(Default)]
pub struct ResultViewState {
    pub scroll: u16,
    /// Upper bound for `scroll`, recomputed on each draw from the
    /// rendered line count and viewport height.
    pub max_scroll: u16,
}

impl ResultViewState {
    pub fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).clamp(0, self.max_scroll as i32);
        self.scroll = next as u16;
    }

    pub fn jump_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.scroll = self.max_scroll;
    }
}

pub fn draw_result(
    frame: &mut Frame<'_>,
    area: Rect,
    itinerary: &TripItinerary,
    state: &mut ResultViewState,
) {
    let title = ellipsize(&itinerary.trip_title, area.width.saturating_sub(4) as usize);
    let block = themed_block(title, COLOR_ACCENT);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Text is pre-wrapped so the line count (and thus the scroll bound)
    // matches what is rendered.
    let lines = itinerary_lines(itinerary, inner.width.max(20) as usize);

    let viewport = inner.height as usize;
    state.max_scroll = lines.len().saturating_sub(viewport) as u16;
    state.scroll = state.scroll.min(state.max_scroll);

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(COLOR_PANEL))
        .scroll((state.scroll, 0));
    frame.render_widget(paragraph, inner);
}

fn itinerary_lines(itinerary: &TripItinerary, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for text in wrap_text(&itinerary.summary, width) {
        lines.push(Line::styled(text, Style::default().fg(COLOR_MUTED)));
    }
    lines.push(Line::from(""));

    // Days render in sequence order; day numbers come from the
    // generator and are shown as-is.
    for day in &itinerary.days {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" Day {} ", day.day_number),
                Style::default()
                    .fg(COLOR_PANEL)
                    .bg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                day.theme.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));

        for activity in &day.activities {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} ", activity.kind.marker()),
                    Style::default().fg(COLOR_FOCUS),
                ),
                Span::styled(
                    format!("{}  ", activity.time),
                    Style::default().fg(COLOR_MUTED),
                ),
                Span::styled(
                    activity.activity_name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", activity.estimated_cost),
                    Style::default().fg(COLOR_MUTED),
                ),
            ]));
            for text in wrap_text(&activity.description, width.saturating_sub(6)) {
                lines.push(Line::from(format!("      {text}")));
            }
            lines.push(Line::styled(
                format!("      ⌖ {}", activity.location),
                Style::default().fg(COLOR_MUTED),
            ));
            lines.push(Line::from(""));
        }
    }

    push_section(&mut lines, "Packing List", &itinerary.packing_list, width);
    push_section(&mut lines, "Cultural Tips", &itinerary.cultural_tips, width);
    push_section(
        &mut lines,
        "Must-Try Food",
        &itinerary.local_food_must_try,
        width,
    );

    lines.push(Line::styled(
        "r: plan another trip · q: quit",
        Style::default().fg(COLOR_ACCENT),
    ));
    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, items: &[String], width: usize) {
    if items.is_empty() {
        return;
    }
    lines.push(Line::styled(
        title.to_string(),
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    ));
    for item in items {
        for (i, text) in wrap_text(item, width.saturating_sub(4)).into_iter().enumerate() {
            let bullet = if i == 0 { "  • " } else { "    " };
            lines.push(Line::from(format!("{bullet}{text}")));
        }
    }
    lines.push(Line::from(""));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Activity, ActivityKind, DayPlan};

    fn sample() -> TripItinerary {
        TripItinerary {
            trip_title: "Goa Unwound".to_string(),
            summary: "Five slow days by the sea".to_string(),
            days: vec![
                DayPlan {
                    day_number: 1,
                    theme: "Arrival".to_string(),
                    activities: vec![Activity {
                        time: "Evening".to_string(),
                        activity_name: "Sunset at Palolem".to_string(),
                        description: "Settle in and watch the boats come home".to_string(),
                        location: "Palolem Beach".to_string(),
                        estimated_cost: "Free".to_string(),
                        kind: ActivityKind::Relaxation,
                    }],
                },
                DayPlan {
                    day_number: 2,
                    theme: "Old Goa".to_string(),
                    activities: vec![],
                },
            ],
            packing_list: vec!["Sunscreen".to_string()],
            cultural_tips: vec!["Cover shoulders in churches".to_string()],
            local_food_must_try: vec!["Fish curry rice".to_string()],
        }
    }

    #[test]
    fn test_days_render_in_sequence() {
        let lines = itinerary_lines(&sample(), 60);
        let text: Vec<String> = lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect();
        let day1 = text.iter().position(|l| l.contains("Day 1")).unwrap();
        let day2 = text.iter().position(|l| l.contains("Day 2")).unwrap();
        assert!(day1 < day2);
        let activity = text
            .iter()
            .position(|l| l.contains("Sunset at Palolem"))
            .unwrap();
        assert!(day1 < activity && activity < day2);
    }

    #[test]
    fn test_sections_present() {
        let lines = itinerary_lines(&sample(), 60);
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("Packing List"));
        assert!(text.contains("Cultural Tips"));
        assert!(text.contains("Must-Try Food"));
        assert!(text.contains("Fish curry rice"));
    }

    #[test]
    fn test_scroll_clamped() {
        let mut state = ResultViewState {
            scroll: 0,
            max_scroll: 5,
        };
        state.scroll_by(100);
        assert_eq!(state.scroll, 5);
        state.scroll_by(-100);
        assert_eq!(state.scroll, 0);
        state.jump_to_bottom();
        assert_eq!(state.scroll, 5);
    }
}
