//! Text renderers for the syllabus dashboard. Every function here is pure:
//! it borrows its input and returns a `String`.

pub mod card;
pub mod dashboard;
pub mod stats;

pub use card::{render_tool_card, render_tools_section, render_week_card};
pub use dashboard::render_dashboard;
pub use stats::{render_stats, CourseStats};

pub const CARD_WIDTH: usize = 76;

pub(crate) fn section_title(icon: &str, title: &str) -> String {
    format!("\n{} {}\n{}\n", icon, title, "═".repeat(title.chars().count() + 3))
}

/// Greedy word wrap on character count.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

pub(crate) fn bar(value: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (value * width / total).min(width)
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("bir iki üç dört beş altı yedi", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.join(" "), "bir iki üç dört beş altı yedi");
    }

    #[test]
    fn test_wrap_keeps_long_word_whole() {
        let lines = wrap("a çokuzunbirkelimeburada b", 5);
        assert_eq!(lines, vec!["a", "çokuzunbirkelimeburada", "b"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(7, 14, 4), "██░░");
        assert_eq!(bar(0, 0, 3), "░░░");
    }
}
