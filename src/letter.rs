//! Letter content and editing-surface derivations

use std::collections::HashMap;

use crate::paper::{PaperSize, Section};
use tracing::trace;

/// Mapping from placeholder key to replacement value
///
/// An empty record makes template substitution a no-op.
pub type CsvRecord = HashMap<String, String>;

/// The three editable text fields of a letter
///
/// Owned by the editing session; the layout core never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterData {
    pub top_left: String,
    pub top_right: String,
    pub body: String,
}

impl LetterData {
    /// Create an empty letter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the top-left (header) text
    pub fn with_top_left<S: Into<String>>(mut self, text: S) -> Self {
        self.top_left = text.into();
        self
    }

    /// Set the top-right (date, reference) text
    pub fn with_top_right<S: Into<String>>(mut self, text: S) -> Self {
        self.top_right = text.into();
        self
    }

    /// Set the body text
    pub fn with_body<S: Into<String>>(mut self, text: S) -> Self {
        self.body = text.into();
        self
    }

    /// Raw text of a section
    pub fn section(&self, section: Section) -> &str {
        match section {
            Section::TopLeft => &self.top_left,
            Section::TopRight => &self.top_right,
            Section::Body => &self.body,
        }
    }

    /// Replace a section's text, truncating at the paper size's
    /// character cap
    ///
    /// Caps are enforced here, at input time, never at render time. A cap
    /// of 0 (inactive section) leaves the value untruncated.
    pub fn set_section(&mut self, section: Section, value: impl Into<String>, paper_size: PaperSize) {
        let value: String = value.into();
        let cap = paper_size.config().max_characters.get(section);
        let truncated = if cap > 0 && value.chars().count() > cap {
            trace!(?section, cap, "truncating section text at character cap");
            value.chars().take(cap).collect()
        } else {
            value
        };
        match section {
            Section::TopLeft => self.top_left = truncated,
            Section::TopRight => self.top_right = truncated,
            Section::Body => self.body = truncated,
        }
    }

    /// Current character count of a section
    pub fn character_count(&self, section: Section) -> usize {
        self.section(section).chars().count()
    }

    /// Character cap of a section for a paper size
    pub fn character_limit(&self, section: Section, paper_size: PaperSize) -> usize {
        paper_size.config().max_characters.get(section)
    }

    /// Whether a section is above 80% of its cap
    pub fn is_near_limit(&self, section: Section, paper_size: PaperSize) -> bool {
        let count = self.character_count(section);
        let limit = self.character_limit(section, paper_size);
        count as f32 > limit as f32 * 0.8
    }

    /// Whether a section has reached its cap
    pub fn is_at_limit(&self, section: Section, paper_size: PaperSize) -> bool {
        let count = self.character_count(section);
        let limit = self.character_limit(section, paper_size);
        count >= limit
    }
}
