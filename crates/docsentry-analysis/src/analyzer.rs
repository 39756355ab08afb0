//! Analysis pipeline facade
//!
//! Wires detection, scoring, masking, and recommendations into the
//! single `analyze` entry point consumed by the upload gateway and
//! the summarizer.

use crate::detector::{Detections, Detector};
use crate::recommend;
use crate::redactor::Redactor;
use crate::registry::PatternRegistry;
use crate::scoring::ScoringPolicy;
use crate::truncate_to_char_boundary;
use docsentry_core::{AnalysisResult, FileTypeRisk, Result, RiskLevel};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Default input cap: 1 MiB of text.
pub const DEFAULT_MAX_INPUT_LEN: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Maximum input length in bytes. Longer text is truncated at a
    /// char boundary before scanning and the result is flagged, so
    /// adversarial input cannot drive unbounded regex cost.
    pub max_input_len: usize,

    /// Risk scoring weights and thresholds.
    pub scoring: ScoringPolicy,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            scoring: ScoringPolicy::default(),
        }
    }
}

/// Sensitive-content analyzer.
///
/// Holds only immutable compiled tables; a single instance can serve
/// any number of concurrent callers.
pub struct Analyzer {
    config: AnalyzerConfig,
    detector: Detector,
    redactor: Redactor,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        Self::with_registry(Arc::new(PatternRegistry::new()?), config)
    }

    /// Build an analyzer around an already-constructed registry so
    /// several workers can share one set of compiled tables.
    pub fn with_registry(registry: Arc<PatternRegistry>, config: AnalyzerConfig) -> Result<Self> {
        Ok(Self {
            config,
            detector: Detector::new(registry),
            redactor: Redactor::new()?,
        })
    }

    /// Analyze extracted text, using `filename` only to resolve the
    /// file-type risk tier.
    ///
    /// Never errors: if analysis cannot complete for an internal
    /// reason the caller receives the fail-closed result (high risk,
    /// content flagged sensitive) rather than a partial one.
    pub fn analyze(&self, text: &str, filename: Option<&str>) -> AnalysisResult {
        match self.analyze_inner(text, filename) {
            Ok(result) => result,
            Err(e) => {
                error!(error = %e, "content analysis failed, failing closed");
                Self::fail_closed(text)
            }
        }
    }

    fn analyze_inner(&self, text: &str, filename: Option<&str>) -> Result<AnalysisResult> {
        let capped = truncate_to_char_boundary(text, self.config.max_input_len);
        let truncated = capped.len() < text.len();
        if truncated {
            warn!(
                original_len = text.len(),
                capped_len = capped.len(),
                "input exceeds cap, truncating before analysis"
            );
        }

        let file_type_risk = PatternRegistry::risk_for_filename(filename);
        let Detections {
            categories,
            keywords,
        } = self.detector.detect(capped);
        let has_sensitive_content = !categories.is_empty() || !keywords.is_empty();
        let (score, risk_level) = self
            .config
            .scoring
            .score(&categories, &keywords, file_type_risk);
        let recommendations = recommend::recommend(&categories, &keywords, file_type_risk);
        let masked_content = self.redactor.mask(capped);

        debug!(
            categories = categories.len(),
            keywords = keywords.len(),
            score,
            risk = risk_level.as_str(),
            "content analysis complete"
        );

        Ok(AnalysisResult {
            has_sensitive_content,
            detected_categories: categories,
            detected_keywords: keywords,
            risk_level,
            recommendations,
            masked_content,
            file_type_risk,
            truncated,
        })
    }

    /// The most restrictive outcome, returned when analysis itself
    /// fails. The original text is passed through rather than a
    /// partially masked copy; a human reviewer is assumed downstream.
    fn fail_closed(text: &str) -> AnalysisResult {
        AnalysisResult {
            has_sensitive_content: true,
            detected_categories: Vec::new(),
            detected_keywords: Vec::new(),
            risk_level: RiskLevel::High,
            recommendations: vec![recommend::ANALYSIS_FAILED.to_string()],
            masked_content: text.to_string(),
            file_type_risk: FileTypeRisk::Unknown,
            truncated: false,
        }
    }

    /// Convenience projection: content is safe to hand to downstream
    /// processing when its risk level is low or medium.
    pub fn is_safe_to_process(&self, text: &str, filename: Option<&str>) -> bool {
        matches!(
            self.analyze(text, filename).risk_level,
            RiskLevel::Low | RiskLevel::Medium
        )
    }
}

/// Short content identifier for deduplication and logging: the first
/// 16 hex characters of the SHA-256 digest. Not a secrecy mechanism,
/// but collision-resistant enough to treat equal fingerprints as
/// equal content.
pub fn fingerprint(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    hex::encode(&digest[..8])
}

#[cfg(test)]
mod tests;
