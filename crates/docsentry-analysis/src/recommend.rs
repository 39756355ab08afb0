//! Deterministic handling recommendations

use docsentry_core::{FileTypeRisk, PatternCategory};

/// Single line returned when nothing sensitive was found.
pub const SAFE_TO_PROCESS: &str = "No sensitive content detected - safe to process";

/// Leading line when anything sensitive was found.
pub const SENSITIVE_ALERT: &str = "⚠️ Sensitive content detected";

/// Fail-closed line returned when analysis itself failed.
pub const ANALYSIS_FAILED: &str = "Error in security analysis - treat as sensitive";

const KEY_FILE_ADVISORY: &str = "• Key file detected - store securely and limit access";

/// Always emitted last, in this order, when content is sensitive.
const CLOSING_ADVISORIES: &[&str] = &[
    "• Do not share this content publicly",
    "• Use secure channels for transmission",
    "• Consider data encryption for storage",
];

/// The fixed advisory line for each category.
fn advisory(category: PatternCategory) -> &'static str {
    match category {
        PatternCategory::CreditCard => "• Credit card numbers found - ensure PCI compliance",
        PatternCategory::Ssn => "• Social Security Numbers found - handle with extreme care",
        PatternCategory::Passport => "• Passport numbers found - protect identity information",
        PatternCategory::BankAccount => {
            "• Bank account numbers found - financial data protection required"
        }
        PatternCategory::Phone => "• Phone numbers found - limit exposure of contact details",
        PatternCategory::Email => "• Email addresses found - avoid unnecessary distribution",
        PatternCategory::IpAddress => "• IP addresses found - avoid revealing network details",
        PatternCategory::ApiKey => "• API keys/tokens found - revoke and rotate immediately",
        PatternCategory::Password => "• Passwords found - change passwords immediately",
        PatternCategory::PrivateKey => "• Private keys found - secure key management required",
        PatternCategory::GovernmentId => {
            "• Government ID numbers found - handle identity documents carefully"
        }
    }
}

/// Build the ordered advisory list for a detection set.
///
/// With no detections this is a single "safe to process" line.
/// Otherwise: the alert line, one advisory per detected category in
/// canonical order, a key-file advisory when the extension tier is
/// high, then the fixed closing lines. Pure and total; the ordering
/// is part of the contract.
pub fn recommend(
    categories: &[PatternCategory],
    keywords: &[String],
    file_type_risk: FileTypeRisk,
) -> Vec<String> {
    if categories.is_empty() && keywords.is_empty() {
        return vec![SAFE_TO_PROCESS.to_string()];
    }

    let mut recommendations = vec![SENSITIVE_ALERT.to_string()];

    for category in PatternCategory::ALL {
        if categories.contains(&category) {
            recommendations.push(advisory(category).to_string());
        }
    }

    if file_type_risk == FileTypeRisk::High {
        recommendations.push(KEY_FILE_ADVISORY.to_string());
    }

    recommendations.extend(CLOSING_ADVISORIES.iter().map(|line| (*line).to_string()));

    recommendations
}
