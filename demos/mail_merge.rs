//! Mail-merge example: render one letter per data record

use svg_letter::{CsvRecord, LetterData, PaperSize, render_svg};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let letter = LetterData::new()
        .with_top_left("Acme Stationery Ltd\n1 Paper Mill Lane")
        .with_top_right("{{date}}")
        .with_body("Dear {{name}},\n\nYour order {{order}} has shipped.\n\nRegards,\nAcme");

    let recipients = [("Ava", "SO-1041"), ("Ben", "SO-1042"), ("Chloe", "SO-1043")];

    for (name, order) in recipients {
        let mut data = CsvRecord::new();
        data.insert("name".to_string(), name.to_string());
        data.insert("order".to_string(), order.to_string());
        data.insert("date".to_string(), "30 August 2026".to_string());

        let document = render_svg(&letter, PaperSize::A4, &data);
        let filename = format!("letter-{}.svg", name.to_lowercase());
        std::fs::write(&filename, document)?;
        println!("wrote '{filename}'");
    }

    Ok(())
}
