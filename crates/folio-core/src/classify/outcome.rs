use crate::model::DocumentClass;
use serde::{Deserialize, Serialize};

/// How a single sampled page was categorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageCategory {
    TextLike,
    ImageLike,
    Ambiguous,
}

/// Measurements taken for one sampled page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSample {
    /// Zero-based page index in the document.
    pub index: usize,
    pub page_area: f32,
    /// Summed area of text blocks with non-blank text.
    pub text_area: f32,
    /// Summed area of image blocks.
    pub image_area: f32,
    pub has_embedded_fonts: bool,
    pub category: PageCategory,
}

/// Result of structural classification of a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub document_class: DocumentClass,
    /// Share of sampled pages categorized as text-like.
    pub text_ratio: f32,
    /// Share of sampled pages categorized as image-like.
    pub image_ratio: f32,
    /// Share of sampled pages that matched neither rule.
    pub ambiguous_ratio: f32,
    pub pages_sampled: usize,
    pub total_pages: usize,
    /// Per-page measurements, in page-index order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<PageSample>,
}

impl ClassificationResult {
    /// Degraded result for documents that could not be inspected.
    pub fn unknown() -> Self {
        ClassificationResult {
            document_class: DocumentClass::Unknown,
            text_ratio: 0.0,
            image_ratio: 0.0,
            ambiguous_ratio: 0.0,
            pages_sampled: 0,
            total_pages: 0,
            samples: Vec::new(),
        }
    }
}
