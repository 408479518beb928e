pub mod classify;
pub mod error;
pub mod footnotes;
pub mod model;
pub mod policy;
pub mod source;

use serde::{Deserialize, Serialize};

pub use classify::{ClassificationResult, ClassifierConfig};
pub use error::FolioError;
pub use model::{Direction, DirectionHint, DocumentClass, ExtractionMode};
pub use policy::ResolvedMode;
pub use source::DocumentSource;

/// A classification plus the extraction mode cleared to run against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionPlan {
    pub classification: ClassificationResult,
    pub resolved: ResolvedMode,
}

/// Classify a document, degrading open/empty failures to the unknown
/// class instead of propagating them.
pub fn classify_or_unknown(
    source: &dyn DocumentSource,
    config: &ClassifierConfig,
) -> ClassificationResult {
    match classify::classify(source, config) {
        Ok(result) => result,
        Err(_) => ClassificationResult::unknown(),
    }
}

/// Main API entry point: classify a document and resolve the requested
/// extraction mode against it.
///
/// Classification failures are non-fatal (the document is treated as
/// unknown and extraction proceeds at the caller's risk); a fast or rich
/// request against image-based or mixed content is the one hard stop.
pub fn plan_extraction(
    source: &dyn DocumentSource,
    requested: ExtractionMode,
    auto_detect: bool,
    config: &ClassifierConfig,
) -> Result<ExtractionPlan, FolioError> {
    let classification = classify_or_unknown(source, config);
    let resolved = policy::resolve(requested, classification.document_class, auto_detect)?;

    Ok(ExtractionPlan {
        classification,
        resolved,
    })
}
