//! TUI module for yatra
//!
//! Renders the four wizard screens:
//! - Hero: landing panel
//! - Form: the three-step trip preference sub-wizard
//! - Loading: spinner while the itinerary is generated
//! - Result: the day-by-day plan with packing/tips/food sidebars

mod app;
mod views;
mod widgets;

pub use app::{run_tui, TuiConfig};

/// Ellipsize text to fit within max_chars
pub fn ellipsize(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else if max_chars == 0 {
        String::new()
    } else {
        let take = max_chars.saturating_sub(1);
        let mut result = value.chars().take(take).collect::<String>();
        result.push('…');
        result
    }
}

/// Sanitize text by removing newlines for single-line display
pub fn sanitize_text(value: &str) -> String {
    value.replace('\n', " ").replace('\r', " ")
}

/// Simple word-wrap for text
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let clean = sanitize_text(text);

    for paragraph in clean.split('\n') {
        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_line.len() + 1 + word.len() <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(current_line);
                current_line = word.to_string();
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipsize_short_text_unchanged() {
        assert_eq!(ellipsize("Goa", 10), "Goa");
    }

    #[test]
    fn test_ellipsize_truncates_with_marker() {
        assert_eq!(ellipsize("Thiruvananthapuram", 8), "Thiruva…");
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text("a day by the quiet southern beaches", 12);
        assert!(lines.iter().all(|l| l.len() <= 12));
        assert_eq!(lines.join(" "), "a day by the quiet southern beaches");
    }
}
