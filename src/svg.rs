//! SVG document serialization
//!
//! Pure string builder with no I/O. The exported document and the
//! on-screen preview both consume [`crate::text::layout_section`] output,
//! so the two can never diverge.

use std::fmt::Write;

use crate::constants::*;
use crate::letter::{CsvRecord, LetterData};
use crate::paper::{PaperSize, Section};
use tracing::debug;

/// Escape text for embedding in `<text>` element content
///
/// `&` must be handled before `<` and `>`; the char-by-char pass runs
/// exactly once, so an `&amp;` typed by the user escapes to
/// `&amp;amp;` rather than surviving unescaped.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

/// Serialize a letter to a standalone SVG document
///
/// Emits one `<g>` group per section active for `paper_size`, in config
/// order. Escaping runs after substitution and wrapping, never before.
pub fn generate_svg(letter: &LetterData, paper_size: PaperSize, data: &CsvRecord) -> String {
    let dims = paper_size.dimensions();
    let config = paper_size.config();
    let (width, height) = (dims.width, dims.height);

    debug!(paper = paper_size.key(), "generating SVG document");

    let mut out = String::new();
    let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        out,
        r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">"#
    );
    let _ = writeln!(out, r#"  <rect width="{width}" height="{height}" fill="white"/>"#);

    for &section in config.fields {
        let lines = crate::text::layout_section(letter.section(section), data, section, width);

        let (x, start_y, pitch, anchor_end) = match section {
            Section::TopLeft => (MARGIN_LEFT, HEADER_START_Y, HEADER_LINE_PITCH, false),
            Section::TopRight => (
                width - MARGIN_RIGHT,
                HEADER_START_Y,
                HEADER_LINE_PITCH,
                true,
            ),
            Section::Body => (MARGIN_LEFT, config.body_start_y, BODY_LINE_PITCH, false),
        };

        let _ = writeln!(out, r#"  <g id="{}">"#, section.g_id());
        for (index, line) in lines.iter().enumerate() {
            let y = start_y + index as f32 * pitch;
            let anchor = if anchor_end { r#" text-anchor="end""# } else { "" };
            let _ = writeln!(
                out,
                r#"    <text x="{x}" y="{y}" font-size="{DEFAULT_FONT_SIZE}" font-family="{FONT_FAMILY}" fill="{TEXT_FILL}"{anchor}>{}</text>"#,
                xml_escape(line)
            );
        }
        let _ = writeln!(out, "  </g>");
    }

    out.push_str("</svg>\n");
    out
}
