//! Utility functions
//!
//! Helper functions used across the frontend.

/// Format a count with its pluralized noun, e.g. "1 finding", "3 findings"
pub fn format_count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

/// Truncate an excerpt to max_chars, adding "..." if truncated
pub fn truncate_excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0, "finding"), "0 findings");
        assert_eq!(format_count(1, "finding"), "1 finding");
        assert_eq!(format_count(3, "occurrence"), "3 occurrences");
    }

    #[test]
    fn test_truncate_excerpt() {
        assert_eq!(truncate_excerpt("short", 10), "short");
        assert_eq!(truncate_excerpt("exactly10!", 10), "exactly10!");
        assert_eq!(
            truncate_excerpt("this excerpt is far too long", 10),
            "this ex..."
        );
    }
}
