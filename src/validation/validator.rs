// Keyword validator: scans text against the prohibited keyword table.
//
// Scoring is per matched keyword, not per occurrence: a keyword that shows
// up five times in one submission still contributes a single 25-point
// match event. Scores saturate at 100.

use std::sync::Arc;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::keywords::KeywordTable;
use super::traits::ContentScanner;

/// Points added per matched keyword.
pub const RISK_PER_TERM: u32 = 25;
/// Upper bound for `risk_score`.
pub const MAX_RISK_SCORE: u32 = 100;

pub const SAFE_MESSAGE: &str = "Content is safe for all platforms";
pub const VIOLATION_MESSAGE: &str = "Content violates platform policies";

/// Verdict for one submission. Field names are the HTTP wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_safe: bool,
    pub risk_score: u32,
    /// Matched categories, in the order they were first matched.
    pub violations: Vec<String>,
    /// Matched keywords, deduplicated.
    pub flagged_terms: Vec<String>,
    pub message: String,
}

struct CategoryMatcher {
    name: String,
    keywords: Vec<(String, Regex)>,
}

/// Validates content against a shared, immutable keyword table.
///
/// Patterns are compiled once in `new`; `validate` is a pure function of
/// its input and is safe to call concurrently.
pub struct ContentValidator {
    table: Arc<KeywordTable>,
    matchers: Vec<CategoryMatcher>,
}

impl ContentValidator {
    pub fn new(table: Arc<KeywordTable>) -> Result<Self> {
        let mut matchers = Vec::with_capacity(table.len());
        for category in table.categories() {
            let mut keywords = Vec::with_capacity(category.keywords.len());
            for keyword in &category.keywords {
                keywords.push((keyword.clone(), word_matcher(keyword)?));
            }
            matchers.push(CategoryMatcher {
                name: category.name.clone(),
                keywords,
            });
        }
        Ok(Self { table, matchers })
    }

    /// Validator over the built-in production table.
    pub fn builtin() -> Result<Self> {
        Self::new(Arc::new(KeywordTable::builtin()))
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    pub fn validate(&self, content: &str) -> ValidationResult {
        let content = content.to_lowercase();

        let mut violations: Vec<String> = Vec::new();
        let mut flagged_terms: Vec<String> = Vec::new();
        let mut match_events: u32 = 0;

        for category in &self.matchers {
            for (keyword, pattern) in &category.keywords {
                if !pattern.is_match(&content) {
                    continue;
                }
                if !violations.contains(&category.name) {
                    violations.push(category.name.clone());
                }
                // Counted before dedup: the same phrase listed under two
                // categories scores twice but is reported once.
                match_events = match_events.saturating_add(1);
                if !flagged_terms.contains(keyword) {
                    flagged_terms.push(keyword.clone());
                }
            }
        }

        let risk_score = match_events
            .saturating_mul(RISK_PER_TERM)
            .min(MAX_RISK_SCORE);
        let is_safe = violations.is_empty();

        ValidationResult {
            is_safe,
            risk_score,
            violations,
            flagged_terms,
            message: if is_safe {
                SAFE_MESSAGE
            } else {
                VIOLATION_MESSAGE
            }
            .to_string(),
        }
    }
}

impl ContentScanner for ContentValidator {
    fn validate(&self, content: &str) -> ValidationResult {
        ContentValidator::validate(self, content)
    }
}

/// Literal phrase bounded by Unicode word boundaries on both ends, so an
/// accented letter next to the keyword makes it part of a larger word.
fn word_matcher(keyword: &str) -> Result<Regex> {
    let pattern = format!(r"\b{}\b", regex::escape(keyword));
    Regex::new(&pattern).with_context(|| format!("invalid keyword pattern for {keyword:?}"))
}
