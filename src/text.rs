//! Text wrapping and per-section layout
//!
//! Width is estimated with a fixed character-width heuristic, not real
//! glyph metrics: `char_width = font_size * CHAR_WIDTH_RATIO`. Counts are
//! characters, never bytes, so multi-byte text wraps without panicking.

use crate::constants::*;
use crate::letter::CsvRecord;
use crate::paper::Section;
use crate::template;
use tracing::trace;

/// Break a single logical line into physical lines that fit `max_width`
///
/// Greedy word wrap: words accumulate joined by single spaces while the
/// result stays within capacity. A word longer than a whole line is
/// hard-split into hyphenated fragments of exactly the line capacity.
/// Degenerate widths floor at one character per line.
pub fn wrap_line(line: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let char_width = font_size * CHAR_WIDTH_RATIO;
    let max_chars = ((max_width / char_width) as usize).max(1);

    if line.chars().count() <= max_chars {
        return vec![line.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in line.split(' ') {
        let word_len = word.chars().count();
        let candidate_len = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if candidate_len <= max_chars {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_len = candidate_len;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if word_len > max_chars {
            // Hyphenated fragments: capacity - 1 characters plus "-".
            // The chunk length floor keeps the loop terminating when
            // capacity is a single character.
            let chunk_len = (max_chars - 1).max(1);
            let mut remaining = word;
            while remaining.chars().count() > max_chars {
                let split_byte = remaining
                    .char_indices()
                    .nth(chunk_len)
                    .map(|(idx, _)| idx)
                    .unwrap_or(remaining.len());
                let (chunk, rest) = remaining.split_at(split_byte);
                lines.push(format!("{chunk}-"));
                remaining = rest;
            }
            current = remaining.to_string();
            current_len = remaining.chars().count();
        } else {
            current = word.to_string();
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    trace!(count = lines.len(), "wrapped line");
    lines
}

/// Lay out a section's raw text into display lines
///
/// Substitutes template tags, splits on newlines, and wraps each
/// non-blank logical line at the section's width budget. A blank logical
/// line yields exactly one empty output line and never reaches the
/// wrapper.
pub fn layout_section(
    text: &str,
    data: &CsvRecord,
    section: Section,
    paper_width: f32,
) -> Vec<String> {
    let replaced = template::substitute(text, data);
    let max_width = max_section_width(section, paper_width);

    let mut wrapped = Vec::new();
    for line in replaced.split('\n') {
        if line.trim().is_empty() {
            wrapped.push(String::new());
        } else {
            wrapped.extend(wrap_line(line, max_width, DEFAULT_FONT_SIZE));
        }
    }

    trace!(?section, lines = wrapped.len(), "laid out section");
    wrapped
}

/// Usable pixel width for a section at a given paper width
///
/// The header sections take half the page so they can sit side by side
/// without overlapping; the body gets the full width minus both margins.
pub fn max_section_width(section: Section, paper_width: f32) -> f32 {
    match section {
        Section::TopLeft => paper_width * 0.5 - MARGIN_LEFT,
        Section::TopRight => paper_width * 0.5 - MARGIN_RIGHT,
        Section::Body => paper_width - MARGIN_LEFT - MARGIN_RIGHT,
    }
}
