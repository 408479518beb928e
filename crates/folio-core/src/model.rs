use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived category of a document's content composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentClass {
    TextBased,
    ImageBased,
    Mixed,
    Unknown,
}

impl fmt::Display for DocumentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentClass::TextBased => write!(f, "text-based"),
            DocumentClass::ImageBased => write!(f, "image-based"),
            DocumentClass::Mixed => write!(f, "mixed"),
            DocumentClass::Unknown => write!(f, "unknown"),
        }
    }
}

/// Extraction strategy requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Quick text extraction for born-digital documents.
    Fast,
    /// Layout-aware extraction, slower but more faithful.
    Rich,
    /// OCR-backed extraction for scanned or mixed documents.
    Pro,
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionMode::Fast => write!(f, "fast"),
            ExtractionMode::Rich => write!(f, "rich"),
            ExtractionMode::Pro => write!(f, "pro"),
        }
    }
}

impl ExtractionMode {
    pub fn from_str_loose(s: &str) -> Option<ExtractionMode> {
        match s.trim().to_lowercase().as_str() {
            "fast" => Some(ExtractionMode::Fast),
            "rich" => Some(ExtractionMode::Rich),
            "pro" => Some(ExtractionMode::Pro),
            _ => None,
        }
    }
}

/// Resolved text direction of emitted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ltr => write!(f, "ltr"),
            Direction::Rtl => write!(f, "rtl"),
        }
    }
}

/// Caller-supplied direction preference. `Auto` defers to script detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionHint {
    Auto,
    Ltr,
    Rtl,
}

impl DirectionHint {
    pub fn from_str_loose(s: &str) -> Option<DirectionHint> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(DirectionHint::Auto),
            "ltr" => Some(DirectionHint::Ltr),
            "rtl" => Some(DirectionHint::Rtl),
            _ => None,
        }
    }
}
