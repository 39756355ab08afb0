//! DocSentry Sensitive-Content Analysis
//!
//! This crate provides the detection-scoring-redaction engine:
//! - Pattern registry with per-category regex tables, trigger keywords,
//!   and file-extension risk tiers
//! - Detection, risk scoring, masking, and handling recommendations
//! - A second-pass sanitizer for model-generated summaries
//!
//! All operations are pure, synchronous functions over immutable
//! tables; build the registry once at startup and share it across
//! workers.

pub mod analyzer;
pub mod detector;
pub mod recommend;
pub mod redactor;
pub mod registry;
pub mod sanitizer;
pub mod scoring;

pub use analyzer::{fingerprint, Analyzer, AnalyzerConfig, DEFAULT_MAX_INPUT_LEN};
pub use detector::{Detections, Detector};
pub use docsentry_core::{AnalysisResult, Error, FileTypeRisk, PatternCategory, Result, RiskLevel};
pub use redactor::Redactor;
pub use registry::{category_risk, CategoryRisk, PatternRegistry, SENSITIVE_KEYWORDS};
pub use sanitizer::{Sanitizer, SanitizerConfig};
pub use scoring::ScoringPolicy;

/// Truncate to at most `max_len` bytes without splitting a char.
pub(crate) fn truncate_to_char_boundary(text: &str, max_len: usize) -> &str {
    if text.len() <= max_len {
        return text;
    }
    let mut end = max_len;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_char_boundary() {
        assert_eq!(truncate_to_char_boundary("hello", 10), "hello");
        assert_eq!(truncate_to_char_boundary("hello", 3), "hel");
        assert_eq!(truncate_to_char_boundary("", 0), "");

        // 'é' is two bytes; a cap inside it backs up to the boundary.
        let text = "aé";
        assert_eq!(truncate_to_char_boundary(text, 2), "a");
        assert_eq!(truncate_to_char_boundary(text, 3), "aé");
    }
}
