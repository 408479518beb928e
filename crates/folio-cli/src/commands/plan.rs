use folio_core::error::FolioError;
use folio_core::model::ExtractionMode;
use folio_core::source::lopdf_source::LopdfSource;
use folio_core::{plan_extraction, ClassifierConfig};
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    mode: &str,
    auto_detect: bool,
    output_format: &str,
) -> Result<(), FolioError> {
    let requested = ExtractionMode::from_str_loose(mode)
        .ok_or_else(|| FolioError::UnknownMode(mode.to_string()))?;

    let source = LopdfSource::open(&input_file)?;
    let plan = plan_extraction(
        &source,
        requested,
        auto_detect,
        &ClassifierConfig::default(),
    )?;

    match output_format {
        "json" => output::json::print(&plan)?,
        _ => output::table::print_plan(&plan),
    }

    Ok(())
}
