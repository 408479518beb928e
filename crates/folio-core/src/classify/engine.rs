use crate::classify::outcome::{ClassificationResult, PageCategory, PageSample};
use crate::error::FolioError;
use crate::model::DocumentClass;
use crate::source::{BlockKind, DocumentSource};

/// Decision thresholds for structural classification.
///
/// The defaults are tuned production values; documents classified with
/// different settings are not comparable to ones classified with these.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// A page is image-like when image blocks cover more than this share
    /// of the page.
    pub image_coverage_threshold: f32,
    /// A page is text-like when text blocks cover more than this share
    /// and the page embeds fonts.
    pub text_coverage_threshold: f32,
    /// Below this text share, a page without embedded fonts counts as
    /// image-like.
    pub bare_page_text_threshold: f32,
    /// Share of sampled pages required for a text/image majority verdict.
    pub majority_threshold: f32,
    /// Cap on the number of pages sampled per document.
    pub max_sample_pages: usize,
    /// One page is sampled per this many document pages.
    pub pages_per_sample: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            image_coverage_threshold: 0.8,
            text_coverage_threshold: 0.05,
            bare_page_text_threshold: 0.01,
            majority_threshold: 0.6,
            max_sample_pages: 10,
            pages_per_sample: 20,
        }
    }
}

/// Classify a document's content structure from page geometry alone.
///
/// Samples a bounded set of evenly spaced pages, categorizes each by
/// text/image block coverage and embedded-font presence, and derives the
/// document class from the category majority. Never looks at extraction
/// output, so it stays usable for documents where extraction would fail.
pub fn classify(
    source: &dyn DocumentSource,
    config: &ClassifierConfig,
) -> Result<ClassificationResult, FolioError> {
    let total_pages = source.page_count();
    if total_pages == 0 {
        return Err(FolioError::EmptyDocument);
    }

    let sample_size = (total_pages / config.pages_per_sample).clamp(1, config.max_sample_pages);
    let mut samples = Vec::with_capacity(sample_size);

    for i in 0..sample_size {
        let index = i * total_pages / sample_size;
        let page = source.page(index)?;
        let page_area = page.area();

        let mut text_area = 0.0f32;
        let mut image_area = 0.0f32;
        for block in &page.blocks {
            match block.kind {
                BlockKind::Text => {
                    if !block.text.trim().is_empty() {
                        text_area += block.rect.area();
                    }
                }
                BlockKind::Image => image_area += block.rect.area(),
            }
        }

        let text_coverage = coverage(text_area, page_area);
        let image_coverage = coverage(image_area, page_area);
        let category = categorize_page(text_coverage, image_coverage, page.has_embedded_fonts, config);

        samples.push(PageSample {
            index,
            page_area,
            text_area,
            image_area,
            has_embedded_fonts: page.has_embedded_fonts,
            category,
        });
    }

    let count = |cat: PageCategory| samples.iter().filter(|s| s.category == cat).count();
    let text_ratio = count(PageCategory::TextLike) as f32 / sample_size as f32;
    let image_ratio = count(PageCategory::ImageLike) as f32 / sample_size as f32;
    let ambiguous_ratio = count(PageCategory::Ambiguous) as f32 / sample_size as f32;

    let document_class = if image_ratio > config.majority_threshold {
        DocumentClass::ImageBased
    } else if text_ratio > config.majority_threshold {
        DocumentClass::TextBased
    } else {
        DocumentClass::Mixed
    };

    Ok(ClassificationResult {
        document_class,
        text_ratio,
        image_ratio,
        ambiguous_ratio,
        pages_sampled: sample_size,
        total_pages,
        samples,
    })
}

fn coverage(area: f32, page_area: f32) -> f32 {
    if page_area > 0.0 {
        (area / page_area).min(1.0)
    } else {
        0.0
    }
}

/// Per-page rule, first match wins.
fn categorize_page(
    text_coverage: f32,
    image_coverage: f32,
    has_fonts: bool,
    config: &ClassifierConfig,
) -> PageCategory {
    if image_coverage > config.image_coverage_threshold
        || (text_coverage < config.bare_page_text_threshold && !has_fonts)
    {
        PageCategory::ImageLike
    } else if text_coverage > config.text_coverage_threshold && has_fonts {
        PageCategory::TextLike
    } else {
        PageCategory::Ambiguous
    }
}
