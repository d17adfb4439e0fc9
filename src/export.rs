//! SVG and CSV template export
//!
//! The only I/O boundary in the crate. Content generation stays pure;
//! file writes surface failures as [`LetterError::Io`] and cannot corrupt
//! layout state, since the layout core holds none.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LetterError, Result};
use crate::letter::{CsvRecord, LetterData};
use crate::paper::PaperSize;
use crate::{svg, template};
use tracing::{debug, instrument};

/// Canonical filename for an exported SVG document
pub fn svg_filename(paper_size: PaperSize) -> String {
    format!("letter-{}-template.svg", paper_size.key())
}

/// Canonical filename for an exported CSV template
pub fn csv_filename(paper_size: PaperSize) -> String {
    format!("letter-template-{}.csv", paper_size.key())
}

/// Build the CSV template: the sorted distinct tag names as a single
/// header row with a trailing newline, no data rows
///
/// Errors with [`LetterError::NoTemplateTags`] when the active sections
/// contain no tags; export is not offered in that case.
pub fn csv_template(letter: &LetterData, paper_size: PaperSize) -> Result<String> {
    let tags = template::extract_tags(letter, paper_size);
    if tags.is_empty() {
        return Err(LetterError::NoTemplateTags);
    }
    Ok(format!("{}\n", tags.join(",")))
}

/// Write the rendered SVG document under `dir` with the canonical
/// filename and return the full path
#[instrument(skip(letter, data), fields(paper = paper_size.key()))]
pub fn save_svg(
    letter: &LetterData,
    paper_size: PaperSize,
    data: &CsvRecord,
    dir: &Path,
) -> Result<PathBuf> {
    let path = dir.join(svg_filename(paper_size));
    let document = svg::generate_svg(letter, paper_size, data);
    fs::write(&path, document)?;
    debug!(path = %path.display(), "wrote SVG document");
    Ok(path)
}

/// Write the CSV template under `dir` with the canonical filename and
/// return the full path
#[instrument(skip(letter), fields(paper = paper_size.key()))]
pub fn save_csv_template(
    letter: &LetterData,
    paper_size: PaperSize,
    dir: &Path,
) -> Result<PathBuf> {
    let content = csv_template(letter, paper_size)?;
    let path = dir.join(csv_filename(paper_size));
    fs::write(&path, content)?;
    debug!(path = %path.display(), "wrote CSV template");
    Ok(path)
}
