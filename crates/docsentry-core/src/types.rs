//! Core value types for content analysis

use serde::{Deserialize, Serialize};

/// Kinds of sensitive data the engine can detect.
///
/// The variant order is the canonical order used for all downstream
/// output (detected categories, advisory lines), so results are
/// reproducible regardless of where a match occurs in the text.
/// Adding a category here forces every exhaustive match in the engine
/// to be updated at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    /// Credit card number
    CreditCard,

    /// US Social Security Number
    Ssn,

    /// Passport number
    Passport,

    /// Bank account number
    BankAccount,

    /// Phone number
    Phone,

    /// Email address
    Email,

    /// IP address
    IpAddress,

    /// API key or bearer token assignment
    ApiKey,

    /// Password assignment
    Password,

    /// Private key or certificate material
    PrivateKey,

    /// Government-issued identifier (driver's license, national ID)
    GovernmentId,
}

impl PatternCategory {
    /// All categories in canonical order.
    pub const ALL: [PatternCategory; 11] = [
        PatternCategory::CreditCard,
        PatternCategory::Ssn,
        PatternCategory::Passport,
        PatternCategory::BankAccount,
        PatternCategory::Phone,
        PatternCategory::Email,
        PatternCategory::IpAddress,
        PatternCategory::ApiKey,
        PatternCategory::Password,
        PatternCategory::PrivateKey,
        PatternCategory::GovernmentId,
    ];

    /// Stable wire name, identical to the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternCategory::CreditCard => "credit_card",
            PatternCategory::Ssn => "ssn",
            PatternCategory::Passport => "passport",
            PatternCategory::BankAccount => "bank_account",
            PatternCategory::Phone => "phone",
            PatternCategory::Email => "email",
            PatternCategory::IpAddress => "ip_address",
            PatternCategory::ApiKey => "api_key",
            PatternCategory::Password => "password",
            PatternCategory::PrivateKey => "private_key",
            PatternCategory::GovernmentId => "government_id",
        }
    }
}

/// Overall risk classification for analyzed content.
///
/// Ordered so that `High > Medium > Low`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Risk tier assigned to a file based on its extension alone.
///
/// Unknown extensions and missing filenames map to `Unknown`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum FileTypeRisk {
    #[default]
    Unknown,
    Low,
    Medium,
    High,
}

impl FileTypeRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileTypeRisk::Unknown => "unknown",
            FileTypeRisk::Low => "low",
            FileTypeRisk::Medium => "medium",
            FileTypeRisk::High => "high",
        }
    }
}

/// Result of analyzing one piece of extracted text.
///
/// Produced fresh per call and never mutated afterwards. The field
/// names are a stable wire contract consumed by the upload gateway
/// and the summarizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// True iff any category or keyword was detected.
    pub has_sensitive_content: bool,

    /// Detected categories, canonical order, each at most once.
    pub detected_categories: Vec<PatternCategory>,

    /// Detected trigger keywords, table order, each at most once.
    pub detected_keywords: Vec<String>,

    /// Overall risk classification.
    pub risk_level: RiskLevel,

    /// Ordered handling advisories.
    pub recommendations: Vec<String>,

    /// Copy of the text with sensitive spans replaced by placeholders.
    pub masked_content: String,

    /// Risk tier derived from the filename extension.
    pub file_type_risk: FileTypeRisk,

    /// True when the input exceeded the configured cap and was
    /// truncated before scanning.
    pub truncated: bool,
}
