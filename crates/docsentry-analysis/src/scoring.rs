//! Risk scoring policy

use crate::registry::{category_risk, CategoryRisk};
use docsentry_core::{FileTypeRisk, PatternCategory, RiskLevel};
use serde::{Deserialize, Serialize};

/// Keywords that carry extra weight when scoring.
const HIGH_RISK_KEYWORDS: &[&str] = &[
    "password",
    "secret",
    "confidential",
    "private",
    "ssn",
    "passport",
];

/// Weights and thresholds for risk scoring.
///
/// The defaults are the policy contract; every constant can be
/// overridden by the caller for tuning without touching the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub high_category_weight: u32,
    pub medium_category_weight: u32,
    pub low_category_weight: u32,
    pub high_keyword_weight: u32,
    pub keyword_weight: u32,
    pub high_file_weight: u32,
    pub medium_file_weight: u32,
    /// Scores at or above this are high risk.
    pub high_threshold: u32,
    /// Scores at or above this (and below `high_threshold`) are medium.
    pub medium_threshold: u32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            high_category_weight: 3,
            medium_category_weight: 2,
            low_category_weight: 1,
            high_keyword_weight: 2,
            keyword_weight: 1,
            high_file_weight: 3,
            medium_file_weight: 1,
            high_threshold: 5,
            medium_threshold: 2,
        }
    }
}

impl ScoringPolicy {
    /// Combine detections and the file tier into a numeric score and
    /// its risk level. Pure function; no detections and an unknown
    /// file type score 0, the "no sensitive content" baseline.
    pub fn score(
        &self,
        categories: &[PatternCategory],
        keywords: &[String],
        file_type_risk: FileTypeRisk,
    ) -> (u32, RiskLevel) {
        let mut score = 0u32;

        for &category in categories {
            score += match category_risk(category) {
                CategoryRisk::High => self.high_category_weight,
                CategoryRisk::Medium => self.medium_category_weight,
                CategoryRisk::Low => self.low_category_weight,
            };
        }

        for keyword in keywords {
            score += if HIGH_RISK_KEYWORDS.contains(&keyword.as_str()) {
                self.high_keyword_weight
            } else {
                self.keyword_weight
            };
        }

        score += match file_type_risk {
            FileTypeRisk::High => self.high_file_weight,
            FileTypeRisk::Medium => self.medium_file_weight,
            FileTypeRisk::Low | FileTypeRisk::Unknown => 0,
        };

        let level = if score >= self.high_threshold {
            RiskLevel::High
        } else if score >= self.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };

        (score, level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_no_detections_scores_zero() {
        let policy = ScoringPolicy::default();
        assert_eq!(
            policy.score(&[], &[], FileTypeRisk::Unknown),
            (0, RiskLevel::Low)
        );
        assert_eq!(
            policy.score(&[], &[], FileTypeRisk::Low),
            (0, RiskLevel::Low)
        );
    }

    #[test]
    fn test_category_weights() {
        let policy = ScoringPolicy::default();

        let (score, level) = policy.score(&[PatternCategory::CreditCard], &[], FileTypeRisk::Unknown);
        assert_eq!((score, level), (3, RiskLevel::Medium));

        let (score, _) = policy.score(&[PatternCategory::Email], &[], FileTypeRisk::Unknown);
        assert_eq!(score, 2);

        let (score, level) =
            policy.score(&[PatternCategory::GovernmentId], &[], FileTypeRisk::Unknown);
        assert_eq!((score, level), (1, RiskLevel::Low));
    }

    #[test]
    fn test_keyword_weights() {
        let policy = ScoringPolicy::default();

        let (score, _) = policy.score(&[], &kw(&["secret"]), FileTypeRisk::Unknown);
        assert_eq!(score, 2);

        let (score, _) = policy.score(&[], &kw(&["financial"]), FileTypeRisk::Unknown);
        assert_eq!(score, 1);
    }

    #[test]
    fn test_file_type_weights() {
        let policy = ScoringPolicy::default();

        let (score, _) = policy.score(&[], &kw(&["salary"]), FileTypeRisk::High);
        assert_eq!(score, 4);

        let (score, _) = policy.score(&[], &kw(&["salary"]), FileTypeRisk::Medium);
        assert_eq!(score, 2);

        let (score, _) = policy.score(&[], &kw(&["salary"]), FileTypeRisk::Low);
        assert_eq!(score, 1);
    }

    #[test]
    fn test_thresholds() {
        let policy = ScoringPolicy::default();

        // password category (2) + password keyword (2) = 4 -> medium
        let (score, level) = policy.score(
            &[PatternCategory::Password],
            &kw(&["password"]),
            FileTypeRisk::Unknown,
        );
        assert_eq!((score, level), (4, RiskLevel::Medium));

        // private key in a .pem file: 3 + 3 = 6 -> high
        let (score, level) =
            policy.score(&[PatternCategory::PrivateKey], &[], FileTypeRisk::High);
        assert_eq!((score, level), (6, RiskLevel::High));
    }

    #[test]
    fn test_adding_high_risk_category_never_lowers_level() {
        let policy = ScoringPolicy::default();
        let base_sets: Vec<Vec<PatternCategory>> = vec![
            vec![],
            vec![PatternCategory::Email],
            vec![PatternCategory::Password, PatternCategory::Phone],
            vec![PatternCategory::GovernmentId],
        ];

        for base in base_sets {
            for file_risk in [
                FileTypeRisk::Unknown,
                FileTypeRisk::Low,
                FileTypeRisk::Medium,
                FileTypeRisk::High,
            ] {
                let (_, before) = policy.score(&base, &[], file_risk);
                let mut extended = base.clone();
                extended.push(PatternCategory::Ssn);
                let (_, after) = policy.score(&extended, &[], file_risk);
                assert!(after >= before);
            }
        }
    }

    #[test]
    fn test_overridable_thresholds() {
        let policy = ScoringPolicy {
            high_threshold: 3,
            ..ScoringPolicy::default()
        };
        let (_, level) = policy.score(&[PatternCategory::CreditCard], &[], FileTypeRisk::Unknown);
        assert_eq!(level, RiskLevel::High);
    }

    #[test]
    fn test_policy_round_trips_through_serde() {
        let policy = ScoringPolicy::default();
        let json = serde_json::to_string(&policy).unwrap();
        let back: ScoringPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, policy);
    }
}
