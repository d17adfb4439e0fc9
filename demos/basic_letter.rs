//! Basic letter example

use std::path::Path;

use svg_letter::{CsvRecord, LetterData, PaperSize, export};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging with debug level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let letter = LetterData::new()
        .with_top_left("{{company_name}}\n{{address_line_1}}\n{{city}}, {{postcode}}")
        .with_top_right("{{date}}\n{{reference_number}}")
        .with_body(
            "Dear {{recipient_name}},\n\nThank you for your continued business.\n\nBest regards,\nSteve",
        );

    // Render the blank template: unresolved tags stay in the document
    let path = export::save_svg(&letter, PaperSize::A4, &CsvRecord::new(), Path::new("."))?;
    println!("SVG saved as '{}'", path.display());

    // The CSV template holds one header row with the sorted tag names
    let csv_path = export::save_csv_template(&letter, PaperSize::A4, Path::new("."))?;
    println!("CSV template saved as '{}'", csv_path.display());

    Ok(())
}
