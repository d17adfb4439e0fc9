//! A template-driven letter layout and SVG generation library
//!
//! This library lays out a three-field letter (top-left header, top-right
//! header, body) on a chosen paper format, substitutes `{{key}}` template
//! tags from a flat record, wraps text with a fixed character-width
//! heuristic, and serializes the result as a standalone SVG document.
//! The layout core is purely functional; on-screen previews and exported
//! files consume identical line sequences.

use tracing::{debug, instrument};

pub mod constants;
pub mod error;
pub mod export;
pub mod letter;
pub mod paper;
pub mod svg;
pub mod template;
pub mod text;

pub use error::{LetterError, Result};
pub use letter::{CsvRecord, LetterData};
pub use paper::{PaperDimensions, PaperSize, PaperTypeConfig, Section, SectionCaps};
pub use template::{extract_tags, substitute};
pub use text::{layout_section, max_section_width, wrap_line};

/// Render a letter to an SVG document string
///
/// Convenience entry point over [`svg::generate_svg`]. Deterministic:
/// identical inputs always produce identical documents, so it is safe to
/// call on every keystroke.
#[instrument(skip(letter, data), fields(paper = paper_size.key()))]
pub fn render_svg(letter: &LetterData, paper_size: PaperSize, data: &CsvRecord) -> String {
    debug!("rendering letter to SVG");
    svg::generate_svg(letter, paper_size, data)
}
