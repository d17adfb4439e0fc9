//! Walk the supported paper sizes and show their configuration

use svg_letter::{CsvRecord, LetterData, PaperSize, Section, render_svg};

fn main() {
    tracing_subscriber::fmt().init();

    let letter = LetterData::new()
        .with_top_left("Header text is only rendered on A4")
        .with_top_right("{{date}}")
        .with_body("The same body text wraps differently on every paper size because each format has its own usable width.");

    for size in PaperSize::ALL {
        let dims = size.dimensions();
        let config = size.config();

        println!(
            "{}: {}x{} px ({}x{} mm) - {}",
            dims.label, dims.width, dims.height, dims.width_mm, dims.height_mm, config.description
        );
        for section in Section::ALL {
            if config.is_active(section) {
                println!(
                    "  {:?}: cap {} chars",
                    section,
                    config.max_characters.get(section)
                );
            }
        }

        let document = render_svg(&letter, size, &CsvRecord::new());
        println!("  rendered {} bytes of SVG", document.len());
    }
}
