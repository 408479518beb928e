use crate::model::{Direction, DirectionHint};
use regex::Regex;
use std::sync::LazyLock;

static HTML_COMMENTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static HORIZONTAL_RULES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{3,}").unwrap());
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// Strip markdown noise ahead of footnote processing: HTML comments
/// (including multi-line ones), horizontal rules, and runs of blank
/// lines. A footnote-shaped line inside a comment must not reach
/// extraction.
pub fn clean_markdown(text: &str) -> String {
    let cleaned = HTML_COMMENTS.replace_all(text, "");
    let cleaned = HORIZONTAL_RULES.replace_all(&cleaned, "");
    let cleaned = BLANK_LINES.replace_all(&cleaned, "\n\n");
    cleaned.trim().to_string()
}

/// Translate Arabic-Indic digits to their Western equivalents and strip
/// bidirectional control marks.
///
/// Must run before footnote extraction: reference numbers appear in either
/// digit system in extracted text, and invisible marks would break the
/// literal matching used during stripping and reinjection.
pub fn normalize_digits(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\u{0660}'..='\u{0669}' => {
                Some(char::from(b'0' + (c as u32 - 0x0660) as u8))
            }
            // LRM, RLM and the LRE..RLO embedding controls.
            '\u{200E}' | '\u{200F}' | '\u{202A}'..='\u{202E}' => None,
            _ => Some(c),
        })
        .collect()
}

/// True if the text contains any character from the Arabic Unicode block.
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}

/// Resolve the emitted text direction. Explicit hints always win; `Auto`
/// marks content right-to-left when Arabic script is present.
pub fn resolve_direction(hint: DirectionHint, text: &str) -> Direction {
    match hint {
        DirectionHint::Ltr => Direction::Ltr,
        DirectionHint::Rtl => Direction::Rtl,
        DirectionHint::Auto => {
            if contains_arabic(text) {
                Direction::Rtl
            } else {
                Direction::Ltr
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_comments_removed() {
        // Only the comment goes; the surrounding spaces collapse later,
        // during stripping.
        assert_eq!(
            clean_markdown("before <!-- hidden --> after"),
            "before  after"
        );
        assert_eq!(
            clean_markdown("a\n<!--\nspans\nlines\n-->\nb"),
            "a\n\nb"
        );
    }

    #[test]
    fn test_horizontal_rules_removed() {
        assert_eq!(clean_markdown("above\n\n---\n\nbelow"), "above\n\nbelow");
        assert_eq!(clean_markdown("-----"), "");
    }

    #[test]
    fn test_blank_line_runs_normalized() {
        assert_eq!(clean_markdown("a\n\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_arabic_indic_digits_translated() {
        assert_eq!(normalize_digits("(١٢٣)"), "(123)");
        assert_eq!(normalize_digits("٠٩"), "09");
    }

    #[test]
    fn test_western_digits_untouched() {
        assert_eq!(normalize_digits("(42) note"), "(42) note");
    }

    #[test]
    fn test_bidi_marks_stripped() {
        assert_eq!(normalize_digits("a\u{200F}b\u{202B}c\u{200E}"), "abc");
    }

    #[test]
    fn test_contains_arabic() {
        assert!(contains_arabic("نص عربي"));
        assert!(!contains_arabic("plain latin text"));
    }

    #[test]
    fn test_auto_direction_detection() {
        assert_eq!(
            resolve_direction(DirectionHint::Auto, "نص عربي"),
            Direction::Rtl
        );
        assert_eq!(
            resolve_direction(DirectionHint::Auto, "latin"),
            Direction::Ltr
        );
    }

    #[test]
    fn test_explicit_hint_overrides_detection() {
        assert_eq!(
            resolve_direction(DirectionHint::Ltr, "نص عربي"),
            Direction::Ltr
        );
        assert_eq!(resolve_direction(DirectionHint::Rtl, "latin"), Direction::Rtl);
    }
}
