use crate::error::FolioError;
use crate::model::{DocumentClass, ExtractionMode};
use serde::{Deserialize, Serialize};

/// Outcome of mode resolution: the mode cleared to run, plus an optional
/// advisory note for the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedMode {
    pub mode: ExtractionMode,
    pub requested: ExtractionMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ResolvedMode {
    fn unchanged(mode: ExtractionMode) -> Self {
        ResolvedMode {
            mode,
            requested: mode,
            note: None,
        }
    }
}

/// Decide which extraction mode may run against a classified document.
///
/// Fast and rich modes are rejected outright for image-based and mixed
/// documents; `auto_detect` cannot override that gate. With `auto_detect`
/// enabled, image-based documents are upgraded to pro, and pro requests
/// against text-based documents carry a non-blocking note.
pub fn resolve(
    requested: ExtractionMode,
    class: DocumentClass,
    auto_detect: bool,
) -> Result<ResolvedMode, FolioError> {
    let structural_mismatch = matches!(
        requested,
        ExtractionMode::Fast | ExtractionMode::Rich
    ) && matches!(class, DocumentClass::ImageBased | DocumentClass::Mixed);

    if structural_mismatch {
        return Err(FolioError::ModeRejected {
            class,
            requested,
            recommended: ExtractionMode::Pro,
        });
    }

    if auto_detect {
        if class == DocumentClass::ImageBased && requested != ExtractionMode::Pro {
            return Ok(ResolvedMode {
                mode: ExtractionMode::Pro,
                requested,
                note: Some(format!(
                    "image-based document detected; switching from {requested} to pro for better accuracy"
                )),
            });
        }
        if class == DocumentClass::TextBased && requested == ExtractionMode::Pro {
            return Ok(ResolvedMode {
                mode: ExtractionMode::Pro,
                requested,
                note: Some("text-based document detected; pro mode might be overkill".into()),
            });
        }
    }

    Ok(ResolvedMode::unchanged(requested))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_and_rich_rejected_for_image_and_mixed() {
        // The gate holds regardless of auto_detect.
        for class in [DocumentClass::ImageBased, DocumentClass::Mixed] {
            for requested in [ExtractionMode::Fast, ExtractionMode::Rich] {
                for auto_detect in [false, true] {
                    let result = resolve(requested, class, auto_detect);
                    match result {
                        Err(FolioError::ModeRejected {
                            class: c,
                            requested: r,
                            recommended,
                        }) => {
                            assert_eq!(c, class);
                            assert_eq!(r, requested);
                            assert_eq!(recommended, ExtractionMode::Pro);
                        }
                        other => panic!("expected ModeRejected, got {other:?}"),
                    }
                }
            }
        }
    }

    #[test]
    fn test_pro_always_allowed() {
        for class in [
            DocumentClass::TextBased,
            DocumentClass::ImageBased,
            DocumentClass::Mixed,
            DocumentClass::Unknown,
        ] {
            let resolved = resolve(ExtractionMode::Pro, class, false).unwrap();
            assert_eq!(resolved.mode, ExtractionMode::Pro);
        }
    }

    #[test]
    fn test_requested_mode_kept_without_auto_detect() {
        let resolved = resolve(ExtractionMode::Fast, DocumentClass::TextBased, false).unwrap();
        assert_eq!(resolved.mode, ExtractionMode::Fast);
        assert!(resolved.note.is_none());
    }

    #[test]
    fn test_unknown_class_keeps_requested_mode() {
        let resolved = resolve(ExtractionMode::Rich, DocumentClass::Unknown, true).unwrap();
        assert_eq!(resolved.mode, ExtractionMode::Rich);
        assert!(resolved.note.is_none());
    }

    #[test]
    fn test_pro_on_text_based_notes_overkill() {
        let resolved = resolve(ExtractionMode::Pro, DocumentClass::TextBased, true).unwrap();
        assert_eq!(resolved.mode, ExtractionMode::Pro);
        assert!(resolved.note.unwrap().contains("overkill"));
    }

    #[test]
    fn test_pro_on_text_based_without_auto_detect_has_no_note() {
        let resolved = resolve(ExtractionMode::Pro, DocumentClass::TextBased, false).unwrap();
        assert!(resolved.note.is_none());
    }
}
