//! Scans text against the registry tables

use crate::registry::{PatternRegistry, SENSITIVE_KEYWORDS};
use docsentry_core::PatternCategory;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// What the detector found in one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Detections {
    /// Categories with at least one pattern match, canonical order.
    pub categories: Vec<PatternCategory>,

    /// Trigger keywords present in the text, table order.
    pub keywords: Vec<String>,
}

impl Detections {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.keywords.is_empty()
    }
}

/// Pattern and keyword detector over a shared registry.
pub struct Detector {
    registry: Arc<PatternRegistry>,
}

impl Detector {
    pub fn new(registry: Arc<PatternRegistry>) -> Self {
        Self { registry }
    }

    /// Scan text for sensitive patterns and keywords.
    ///
    /// Each category is reported at most once: the first matching
    /// pattern satisfies the category and its remaining patterns are
    /// skipped. Pure function of the text and the registry; empty or
    /// unmatched text yields empty results.
    pub fn detect(&self, text: &str) -> Detections {
        let mut categories = Vec::new();
        for (category, patterns) in self.registry.categories() {
            if patterns.iter().any(|pattern| pattern.is_match(text)) {
                categories.push(category);
            }
        }

        let mut seen = vec![false; SENSITIVE_KEYWORDS.len()];
        for mat in self
            .registry
            .keyword_automaton()
            .find_overlapping_iter(text)
        {
            seen[mat.pattern().as_usize()] = true;
        }
        let keywords = SENSITIVE_KEYWORDS
            .iter()
            .zip(&seen)
            .filter(|&(_, &found)| found)
            .map(|(keyword, _)| (*keyword).to_string())
            .collect();

        Detections { categories, keywords }
    }
}

#[cfg(test)]
mod tests;
