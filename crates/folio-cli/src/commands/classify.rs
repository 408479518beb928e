use folio_core::error::FolioError;
use folio_core::source::lopdf_source::LopdfSource;
use folio_core::{classify_or_unknown, ClassifierConfig, DocumentSource};
use std::path::PathBuf;

use crate::output;

pub fn run(input_file: PathBuf, output_format: &str, verbose: bool) -> Result<(), FolioError> {
    let source = LopdfSource::open(&input_file)?;
    let result = classify_or_unknown(&source, &ClassifierConfig::default());

    match output_format {
        "json" => output::json::print(&result)?,
        _ => {
            if verbose {
                println!("Backend:         {}", source.backend_name());
            }
            output::table::print_classification(&result, verbose);
        }
    }

    Ok(())
}
