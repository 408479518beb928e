pub mod normalize;
pub mod target;

use crate::model::{Direction, DirectionHint};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use target::TargetDocument;

/// Reference number (string of digits) to footnote body text.
pub type FootnoteMap = HashMap<String, String>;

// A footnote line: "(12) body text", anchored at line start. The body must
// start with a non-blank character, so a stripped line that kept only its
// "(12)" prefix no longer matches.
static FOOTNOTE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\((\d+)\)\s*(\S.*)$").unwrap());

// An inline reference marker anywhere in the text: "(12)", "( 12 )".
static INLINE_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\s*(\d+)\s*\)").unwrap());

static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").unwrap());

/// Strategy for removing extracted footnote bodies from the main text.
///
/// Seam for replacing the blunt literal removal with a positional one
/// without touching extraction.
pub trait BodyRemoval {
    fn remove(&self, text: &str, notes: &FootnoteMap) -> String;
}

/// Removes every literal occurrence of each footnote body, wherever it
/// appears. Deliberately blunt: footnote content duplicated elsewhere
/// (e.g. repeated in an appendix) is deleted too, at the cost of
/// over-deleting a sentence that legitimately repeats.
pub struct LiteralBodyRemoval;

impl BodyRemoval for LiteralBodyRemoval {
    fn remove(&self, text: &str, notes: &FootnoteMap) -> String {
        let mut cleaned = text.to_string();
        for body in notes.values() {
            if body.is_empty() {
                continue;
            }
            cleaned = cleaned.replace(body.as_str(), "");
        }
        cleaned
    }
}

/// Reference numbers already attached to the target document, in
/// first-occurrence order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReinsertionRecord {
    inserted: Vec<String>,
}

impl ReinsertionRecord {
    pub fn contains(&self, number: &str) -> bool {
        self.inserted.iter().any(|n| n == number)
    }

    pub fn len(&self) -> usize {
        self.inserted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty()
    }

    /// Inserted numbers in the order they were attached.
    pub fn numbers(&self) -> &[String] {
        &self.inserted
    }

    fn mark(&mut self, number: String) {
        self.inserted.push(number);
    }
}

/// Counts surfaced to callers after a pipeline run. A gap between
/// detected and inserted means some footnotes had no locatable marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootnoteReport {
    pub footnotes_inserted: usize,
    pub footnotes_detected: usize,
    pub direction: Direction,
    pub inserted: ReinsertionRecord,
}

/// Extract numbered footnote lines into a map.
///
/// A later line with the same number replaces the earlier one
/// (last-write-wins). Malformed input never fails; no matches yield an
/// empty map.
pub fn extract(text: &str) -> FootnoteMap {
    let mut notes = FootnoteMap::new();
    for caps in FOOTNOTE_LINE.captures_iter(text) {
        notes.insert(caps[1].to_string(), caps[2].trim().to_string());
    }
    notes
}

/// Remove extracted footnote bodies from the main text and tidy the
/// leftover whitespace, using the default literal-removal strategy.
pub fn strip(text: &str, notes: &FootnoteMap) -> String {
    strip_with(&LiteralBodyRemoval, text, notes)
}

/// `strip` with an explicit removal strategy.
pub fn strip_with(removal: &dyn BodyRemoval, text: &str, notes: &FootnoteMap) -> String {
    let cleaned = removal.remove(text, notes);
    let cleaned = BLANK_RUNS.replace_all(&cleaned, "\n\n");
    let cleaned = SPACE_RUNS.replace_all(&cleaned, " ");
    cleaned.trim().to_string()
}

/// Attach footnotes to the target at each inline marker, in document
/// order.
///
/// Markers with no extracted body, repeated markers, and markers the
/// target cannot locate are skipped; every number is inserted at most
/// once, at its first occurrence.
pub fn reinject(
    cleaned: &str,
    notes: &FootnoteMap,
    target: &mut dyn TargetDocument,
) -> ReinsertionRecord {
    let mut record = ReinsertionRecord::default();

    for caps in INLINE_MARKER.captures_iter(cleaned) {
        let number = &caps[1];
        if record.contains(number) {
            continue;
        }
        let Some(body) = notes.get(number) else {
            continue;
        };
        if target.attach_footnote(&caps[0], body) {
            record.mark(number.to_string());
        }
    }

    record
}

/// Run the full pipeline: markdown cleanup, digit normalization,
/// extraction, stripping, direction resolution, then reinjection into
/// `target`.
pub fn process(
    text: &str,
    hint: DirectionHint,
    target: &mut dyn TargetDocument,
) -> FootnoteReport {
    let cleaned_input = normalize::clean_markdown(text);
    let normalized = normalize::normalize_digits(&cleaned_input);
    let notes = extract(&normalized);
    let cleaned = strip(&normalized, &notes);
    let direction = normalize::resolve_direction(hint, &cleaned);

    target.set_body(&cleaned, direction);
    let inserted = reinject(&cleaned, &notes, target);

    FootnoteReport {
        footnotes_inserted: inserted.len(),
        footnotes_detected: notes.len(),
        direction,
        inserted,
    }
}
