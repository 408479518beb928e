use folio_core::classify::ClassificationResult;
use folio_core::ExtractionPlan;

pub fn print_classification(result: &ClassificationResult, verbose: bool) {
    println!("Document class:  {}", result.document_class);
    println!(
        "Pages sampled:   {} of {}",
        result.pages_sampled, result.total_pages
    );
    println!("Text ratio:      {:.2}", result.text_ratio);
    println!("Image ratio:     {:.2}", result.image_ratio);
    println!("Ambiguous ratio: {:.2}", result.ambiguous_ratio);

    if verbose && !result.samples.is_empty() {
        println!();
        println!("  page   text%   image%   fonts   category");
        for sample in &result.samples {
            let text_pct = if sample.page_area > 0.0 {
                100.0 * sample.text_area / sample.page_area
            } else {
                0.0
            };
            let image_pct = if sample.page_area > 0.0 {
                100.0 * sample.image_area / sample.page_area
            } else {
                0.0
            };
            println!(
                "  {:<6} {:<7.1} {:<8.1} {:<7} {:?}",
                sample.index, text_pct, image_pct, sample.has_embedded_fonts, sample.category
            );
        }
    }
}

pub fn print_plan(plan: &ExtractionPlan) {
    print_classification(&plan.classification, false);
    println!();
    if plan.resolved.mode == plan.resolved.requested {
        println!("Resolved mode:   {}", plan.resolved.mode);
    } else {
        println!(
            "Resolved mode:   {} (requested {})",
            plan.resolved.mode, plan.resolved.requested
        );
    }
    if let Some(note) = &plan.resolved.note {
        println!("Note:            {note}");
    }
}
