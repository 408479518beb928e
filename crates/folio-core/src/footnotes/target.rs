use crate::model::Direction;

/// A document sink that can turn inline reference markers into native
/// footnotes.
pub trait TargetDocument {
    /// Replace the document body with the cleaned main text.
    fn set_body(&mut self, text: &str, direction: Direction);

    /// Convert the next occurrence of `marker` into a footnote anchor
    /// carrying `body`. Returns false when the marker cannot be located;
    /// the caller skips that footnote.
    fn attach_footnote(&mut self, marker: &str, body: &str) -> bool;
}

/// Markdown target: markers become `[^n]` references and bodies are
/// appended as footnote definitions in insertion order.
#[derive(Debug)]
pub struct MarkdownTarget {
    body: String,
    direction: Direction,
    /// Search resumes here, so identical repeated substrings resolve to
    /// successive occurrences instead of the same one.
    cursor: usize,
    definitions: Vec<(String, String)>,
}

impl Default for MarkdownTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownTarget {
    pub fn new() -> Self {
        MarkdownTarget {
            body: String::new(),
            direction: Direction::Ltr,
            cursor: 0,
            definitions: Vec::new(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn footnote_count(&self) -> usize {
        self.definitions.len()
    }

    /// Render the body followed by the collected footnote definitions.
    pub fn render(&self) -> String {
        let mut out = self.body.trim_end().to_string();
        if !self.definitions.is_empty() {
            out.push_str("\n\n");
            for (number, body) in &self.definitions {
                out.push_str(&format!("[^{number}]: {body}\n"));
            }
        }
        out
    }
}

impl TargetDocument for MarkdownTarget {
    fn set_body(&mut self, text: &str, direction: Direction) {
        self.body = text.to_string();
        self.direction = direction;
        self.cursor = 0;
        self.definitions.clear();
    }

    fn attach_footnote(&mut self, marker: &str, body: &str) -> bool {
        let Some(offset) = self.body[self.cursor..].find(marker) else {
            return false;
        };
        let start = self.cursor + offset;
        let end = start + marker.len();

        let number: String = marker.chars().filter(|c| c.is_ascii_digit()).collect();
        let anchor = format!("[^{number}]");
        self.body.replace_range(start..end, &anchor);
        self.cursor = start + anchor.len();
        self.definitions.push((number, body.to_string()));
        true
    }
}
