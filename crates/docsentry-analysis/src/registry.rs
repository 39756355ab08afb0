//! Static pattern, keyword, and file-type tables
//!
//! All tables are fixed configuration compiled once at startup.
//! Detection order follows [`PatternCategory::ALL`] so downstream
//! output is deterministic.

use aho_corasick::AhoCorasick;
use docsentry_core::{Error, FileTypeRisk, PatternCategory, Result};
use regex::{Regex, RegexBuilder};

/// Weight class a category carries during risk scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryRisk {
    High,
    Medium,
    Low,
}

/// Scoring weight class per category.
pub fn category_risk(category: PatternCategory) -> CategoryRisk {
    match category {
        PatternCategory::CreditCard
        | PatternCategory::Ssn
        | PatternCategory::Passport
        | PatternCategory::BankAccount
        | PatternCategory::ApiKey
        | PatternCategory::PrivateKey => CategoryRisk::High,
        PatternCategory::Phone | PatternCategory::Email | PatternCategory::Password => {
            CategoryRisk::Medium
        }
        PatternCategory::IpAddress | PatternCategory::GovernmentId => CategoryRisk::Low,
    }
}

/// Trigger words that indicate sensitive content even without a
/// structural pattern match. Substring containment, case-insensitive.
pub const SENSITIVE_KEYWORDS: &[&str] = &[
    "confidential",
    "secret",
    "private",
    "classified",
    "restricted",
    "personal",
    "sensitive",
    "internal",
    "proprietary",
    "password",
    "login",
    "credential",
    "auth",
    "token",
    "key",
    "ssn",
    "social security",
    "passport",
    "driver license",
    "bank account",
    "credit card",
    "debit card",
    "financial",
    "medical",
    "health",
    "salary",
    "income",
    "tax",
    "legal",
    "attorney",
    "lawyer",
];

/// Extensions that are inherently high risk (key material).
const HIGH_RISK_EXTENSIONS: &[&str] = &["ppk", "pem", "key", "p12", "pfx", "jks", "keystore"];

const MEDIUM_RISK_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "xlsx", "xls"];

const LOW_RISK_EXTENSIONS: &[&str] = &["txt", "md", "html"];

/// Raw pattern table per category. Matching any one pattern satisfies
/// the category; the order within a category is fixed for
/// reproducibility.
fn raw_patterns(category: PatternCategory) -> &'static [&'static str] {
    match category {
        PatternCategory::CreditCard => &[r"\b(?:\d{4}[-\s]?){3}\d{4}\b", r"\b\d{13,19}\b"],
        PatternCategory::Ssn => &[r"\b\d{3}[-\s]?\d{2}[-\s]?\d{4}\b", r"\b\d{9}\b"],
        PatternCategory::Passport => &[
            r"\b[A-Z]{1,2}\d{6,9}\b",
            r"\bpassport\s*#?\s*[A-Z0-9]{6,9}\b",
        ],
        PatternCategory::BankAccount => &[r"\b\d{8,17}\b", r"\baccount\s*#?\s*\d{8,17}\b"],
        PatternCategory::Phone => &[
            r"\b(?:\+?1[-.\s]?)?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})\b",
            r"\b\+?[1-9]\d{6,14}\b",
        ],
        PatternCategory::Email => &[r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b"],
        PatternCategory::IpAddress => &[r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b"],
        PatternCategory::ApiKey => &[
            r#"\bapi[_\s]?key\s*[:=]\s*['"]?([A-Za-z0-9+/]{20,})['"]?"#,
            r#"\btoken\s*[:=]\s*['"]?([A-Za-z0-9+/]{20,})['"]?"#,
        ],
        PatternCategory::Password => &[
            r#"\bpassword\s*[:=]\s*['"]?([^\s'"]+)['"]?"#,
            r#"\bpwd\s*[:=]\s*['"]?([^\s'"]+)['"]?"#,
            r#"\bpass\s*[:=]\s*['"]?([^\s'"]+)['"]?"#,
        ],
        PatternCategory::PrivateKey => &[
            r"-----BEGIN\s+(?:RSA\s+)?PRIVATE\s+KEY-----",
            r"-----BEGIN\s+CERTIFICATE-----",
            r"PuTTY-User-Key-File",
        ],
        PatternCategory::GovernmentId => {
            &[r"\b[A-Z]{2}\d{6}[A-Z]?\b", r"\bdl\s*#?\s*[A-Z0-9]{8,15}\b"]
        }
    }
}

/// Compiled pattern tables shared by the detector.
///
/// Construct once at process start and pass around by `Arc`; the
/// registry is immutable after construction, so concurrent use needs
/// no synchronization.
pub struct PatternRegistry {
    patterns: Vec<(PatternCategory, Vec<Regex>)>,
    keywords: AhoCorasick,
}

impl PatternRegistry {
    pub fn new() -> Result<Self> {
        let mut patterns = Vec::with_capacity(PatternCategory::ALL.len());
        for category in PatternCategory::ALL {
            let compiled = raw_patterns(category)
                .iter()
                .map(|pattern| {
                    RegexBuilder::new(pattern)
                        .case_insensitive(true)
                        .build()
                        .map_err(|e| {
                            Error::Registry(format!(
                                "invalid pattern for category '{}': {}",
                                category.as_str(),
                                e
                            ))
                        })
                })
                .collect::<Result<Vec<_>>>()?;
            patterns.push((category, compiled));
        }

        let keywords = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(SENSITIVE_KEYWORDS)
            .map_err(|e| Error::Registry(format!("invalid keyword table: {e}")))?;

        Ok(Self { patterns, keywords })
    }

    /// All categories in canonical order.
    pub fn all_categories() -> &'static [PatternCategory] {
        &PatternCategory::ALL
    }

    /// Compiled patterns for one category, in table order.
    pub fn patterns_for(&self, category: PatternCategory) -> &[Regex] {
        self.patterns
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, compiled)| compiled.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate categories with their patterns in canonical order.
    pub(crate) fn categories(&self) -> impl Iterator<Item = (PatternCategory, &[Regex])> {
        self.patterns
            .iter()
            .map(|(category, compiled)| (*category, compiled.as_slice()))
    }

    pub(crate) fn keyword_automaton(&self) -> &AhoCorasick {
        &self.keywords
    }

    /// Risk tier for a normalized (lower-case) file extension.
    pub fn risk_tier_for_extension(ext: &str) -> FileTypeRisk {
        let ext = ext.to_ascii_lowercase();
        if HIGH_RISK_EXTENSIONS.contains(&ext.as_str()) {
            FileTypeRisk::High
        } else if MEDIUM_RISK_EXTENSIONS.contains(&ext.as_str()) {
            FileTypeRisk::Medium
        } else if LOW_RISK_EXTENSIONS.contains(&ext.as_str()) {
            FileTypeRisk::Low
        } else {
            FileTypeRisk::Unknown
        }
    }

    /// Risk tier for an optional filename. The extension is the text
    /// after the last `.`; absent filename or no extension is Unknown.
    pub fn risk_for_filename(filename: Option<&str>) -> FileTypeRisk {
        match filename.and_then(|name| name.rsplit_once('.')) {
            Some((_, ext)) => Self::risk_tier_for_extension(ext),
            None => FileTypeRisk::Unknown,
        }
    }
}
