use folio_core::error::FolioError;
use folio_core::footnotes;
use folio_core::footnotes::target::MarkdownTarget;
use folio_core::model::DirectionHint;
use std::path::PathBuf;

pub fn run(
    input_file: PathBuf,
    direction: &str,
    out: Option<PathBuf>,
) -> Result<(), FolioError> {
    let hint = DirectionHint::from_str_loose(direction)
        .ok_or_else(|| FolioError::UnknownDirection(direction.to_string()))?;

    let text = std::fs::read_to_string(&input_file)?;

    let mut target = MarkdownTarget::new();
    let report = footnotes::process(&text, hint, &mut target);
    let rendered = target.render();

    let summary = format!(
        "Footnotes restored: {} of {} detected (direction: {})",
        report.footnotes_inserted, report.footnotes_detected, report.direction
    );

    match out {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            println!("Wrote {}", path.display());
            println!("{summary}");
        }
        None => {
            // Markdown goes to stdout; keep the summary off it.
            println!("{rendered}");
            eprintln!("{summary}");
        }
    }

    Ok(())
}
