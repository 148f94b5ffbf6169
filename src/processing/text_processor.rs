//! Text cleaning and normalization

use regex::Regex;

/// Shared cleaning routine applied to both the resume and the job
/// description before embedding and keyword scanning.
pub struct TextProcessor {
    whitespace_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        let whitespace_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");

        Self { whitespace_regex }
    }

    /// Clean and normalize text: unicode punctuation, case folding and
    /// whitespace collapse. Keyword scanning relies on the output being
    /// fully lowercased.
    pub fn clean(&self, text: &str) -> String {
        let normalized = self.normalize_unicode(text);
        let lowered = normalized.to_lowercase();
        self.whitespace_regex
            .replace_all(&lowered, " ")
            .trim()
            .to_string()
    }

    /// Normalize Unicode punctuation commonly produced by PDF extraction
    fn normalize_unicode(&self, text: &str) -> String {
        text.chars()
            .map(|c| match c {
                '\u{2018}' | '\u{2019}' => '\'', // Smart quotes to regular quotes
                '\u{201C}' | '\u{201D}' => '"',  // Smart double quotes
                '\u{2013}' | '\u{2014}' => '-',  // En dash, em dash to hyphen
                '\u{2026}' => '.',               // Ellipsis to period
                _ => c,
            })
            .collect()
    }
}
