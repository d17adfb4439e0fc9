//! Template tag substitution and extraction
//!
//! Tags are `{{key}}` tokens. Keys are trimmed of surrounding whitespace
//! before lookup, and matching is case-sensitive.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use crate::letter::{CsvRecord, LetterData};
use crate::paper::PaperSize;

/// The `{{key}}` pattern: shortest run of characters excluding `}`
fn template_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{([^}]+)\}\}").expect("template regex must compile"))
}

/// Replace `{{key}}` tokens with values from `data`
///
/// A token is replaced only when the trimmed key exists in the record
/// with a non-empty value; otherwise it passes through verbatim, as does
/// any unterminated `{{` sequence. Substitution is a single pass:
/// substituted values are never re-expanded.
pub fn substitute(text: &str, data: &CsvRecord) -> String {
    if data.is_empty() {
        return text.to_string();
    }
    template_regex()
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let key = caps[1].trim();
            match data.get(key) {
                Some(value) if !value.is_empty() => value.clone(),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Collect the distinct template tags present in the active sections
///
/// Sections inactive for `paper_size` are skipped even when they contain
/// text. Keys are trimmed and returned lexicographically sorted.
pub fn extract_tags(letter: &LetterData, paper_size: PaperSize) -> Vec<String> {
    let mut tags = BTreeSet::new();

    for &section in paper_size.config().fields {
        let text = letter.section(section);
        for caps in template_regex().captures_iter(text) {
            tags.insert(caps[1].trim().to_string());
        }
    }

    trace!(count = tags.len(), "extracted template tags");
    tags.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paper::Section;

    fn record(pairs: &[(&str, &str)]) -> CsvRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_substitute_hit() {
        let data = record(&[("name", "Sam")]);
        assert_eq!(substitute("Hi {{name}}", &data), "Hi Sam");
    }

    #[test]
    fn test_substitute_miss_preserves_token() {
        let data = CsvRecord::new();
        assert_eq!(substitute("Hi {{x}}", &data), "Hi {{x}}");
    }

    #[test]
    fn test_substitute_no_tokens_unchanged() {
        let data = record(&[("name", "Sam")]);
        assert_eq!(substitute("plain text, no tags", &data), "plain text, no tags");
    }

    #[test]
    fn test_substitute_empty_value_preserves_token() {
        let data = record(&[("name", "")]);
        assert_eq!(substitute("Hi {{name}}", &data), "Hi {{name}}");
    }

    #[test]
    fn test_substitute_trims_key_for_lookup() {
        let data = record(&[("name", "Sam")]);
        assert_eq!(substitute("Hi {{ name }}", &data), "Hi Sam");
    }

    #[test]
    fn test_substitute_unterminated_braces_pass_through() {
        let data = record(&[("name", "Sam")]);
        assert_eq!(substitute("Hi {{name", &data), "Hi {{name");
    }

    #[test]
    fn test_substitute_is_single_pass() {
        // A substituted value containing a token must not be re-expanded
        let data = record(&[("a", "{{b}}"), ("b", "deep")]);
        assert_eq!(substitute("{{a}}", &data), "{{b}}");
    }

    #[test]
    fn test_extract_tags_sorted_and_distinct() {
        let letter = LetterData::new().with_body("{{b}} {{a}} {{a}}");
        let tags = extract_tags(&letter, PaperSize::A5Portrait);
        assert_eq!(tags, vec!["a", "b"]);
    }

    #[test]
    fn test_extract_tags_trims_keys() {
        let letter = LetterData::new().with_body("{{ name }} and {{name}}");
        let tags = extract_tags(&letter, PaperSize::A4);
        assert_eq!(tags, vec!["name"]);
    }

    #[test]
    fn test_extract_tags_skips_inactive_sections() {
        // topLeft is inactive on A5 Portrait; its tags must not leak out
        let mut letter = LetterData::new().with_body("{{name}}");
        letter.set_section(Section::TopLeft, "{{company}}", PaperSize::A5Portrait);

        let tags = extract_tags(&letter, PaperSize::A5Portrait);
        assert_eq!(tags, vec!["name"]);

        // On A4 the same field is active and its tag appears
        let tags = extract_tags(&letter, PaperSize::A4);
        assert_eq!(tags, vec!["company", "name"]);
    }

    #[test]
    fn test_extract_tags_empty_letter() {
        let letter = LetterData::new();
        assert!(extract_tags(&letter, PaperSize::A4).is_empty());
    }
}
