//! Cleanup of text typed into the slide editor.
//!
//! Single-line fields are trimmed and have runs of spaces collapsed,
//! multi-line fields keep their line breaks, and quiz options are entered
//! one per line.

use crate::types::SlideFields;
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Regex to collapse multiple spaces and tabs into one.
static WHITESPACE_COLLAPSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

/// Normalizer for editor form input.
#[derive(Debug, Clone)]
pub struct FieldNormalizer {
    /// Whether to collapse whitespace runs inside single-line fields.
    collapse_whitespace: bool,

    /// Whether to convert text to Unicode normalization form C.
    compose_unicode: bool,
}

impl Default for FieldNormalizer {
    fn default() -> Self {
        Self {
            collapse_whitespace: true,
            compose_unicode: true,
        }
    }
}

impl FieldNormalizer {
    /// Create a normalizer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to collapse whitespace runs in single-line fields.
    pub fn with_collapse_whitespace(mut self, collapse: bool) -> Self {
        self.collapse_whitespace = collapse;
        self
    }

    /// Set whether to apply Unicode NFC composition.
    pub fn with_compose_unicode(mut self, compose: bool) -> Self {
        self.compose_unicode = compose;
        self
    }

    /// Normalize line endings to `\n` and optionally compose Unicode.
    fn prepare(&self, text: &str) -> String {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        if self.compose_unicode {
            text.nfc().collect()
        } else {
            text
        }
    }

    /// Normalize a single-line field such as a title or URL.
    ///
    /// Line breaks become spaces.
    pub fn normalize_line(&self, text: &str) -> String {
        let text = self.prepare(text).replace('\n', " ");
        if self.collapse_whitespace {
            WHITESPACE_COLLAPSE_REGEX
                .replace_all(&text, " ")
                .trim()
                .to_string()
        } else {
            text.trim().to_string()
        }
    }

    /// Normalize a multi-line field such as slide content.
    ///
    /// Trailing whitespace is removed from each line and the whole value is
    /// trimmed. Blank lines in the middle are kept.
    pub fn normalize_block(&self, text: &str) -> String {
        self.prepare(text)
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }

    /// Split quiz options entered one per line, dropping blank lines.
    pub fn options_from_text(&self, text: &str) -> Vec<String> {
        self.prepare(text)
            .lines()
            .map(|line| self.normalize_line(line))
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Normalize every field of an editing form.
    pub fn normalize_fields(&self, fields: &SlideFields) -> SlideFields {
        SlideFields {
            title: self.normalize_line(&fields.title),
            content: self.normalize_block(&fields.content),
            url: self.normalize_line(&fields.url),
            alt: self.normalize_line(&fields.alt),
            question: self.normalize_block(&fields.question),
            options: fields
                .options
                .iter()
                .map(|option| self.normalize_line(option))
                .filter(|option| !option.is_empty())
                .collect(),
        }
    }
}
