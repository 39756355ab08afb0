//! Masking transform producing a safe-to-display copy of text

use docsentry_core::{Error, Result};
use regex::{Captures, Regex, RegexBuilder};

/// Structural masks: the whole matched span is replaced. Applied in
/// this order, before the key/value masks. The account mask's upper
/// bound of 19 equals the longest bare digit run the card patterns
/// detect, so every detectable run falls under some mask.
const STRUCTURAL_MASKS: &[(&str, &str)] = &[
    (r"\b(?:\d{4}[-\s]?){3}\d{4}\b", "[CREDIT_CARD_MASKED]"),
    (r"\b\d{3}[-\s]?\d{2}[-\s]?\d{4}\b", "[SSN_MASKED]"),
    (r"\b[A-Z]{1,2}\d{6,9}\b", "[PASSPORT_MASKED]"),
    (r"\b\d{8,19}\b", "[ACCOUNT_MASKED]"),
];

/// Key/value masks: the captured key name is kept, only the value is
/// replaced, so `password: hunter2` becomes `password: [PASSWORD_MASKED]`.
const KEYED_MASKS: &[(&str, &str)] = &[
    (
        r#"\b(api[_\s]?key|token)\s*[:=]\s*['"]?([A-Za-z0-9+/]{20,})['"]?"#,
        "[API_KEY_MASKED]",
    ),
    (
        r#"\b(password|pwd|pass)\s*[:=]\s*['"]?([^\s'"]+)['"]?"#,
        "[PASSWORD_MASKED]",
    ),
];

/// Replaces sensitive spans with fixed, non-reversible placeholders.
///
/// The placeholders match none of the mask patterns, so masking is
/// idempotent. Unmatched text passes through unchanged and masking
/// never fails; it is computed for every analysis regardless of the
/// resulting risk level.
pub struct Redactor {
    structural: Vec<(Regex, &'static str)>,
    keyed: Vec<(Regex, &'static str)>,
}

impl Redactor {
    pub fn new() -> Result<Self> {
        let structural = STRUCTURAL_MASKS
            .iter()
            .map(|(pattern, placeholder)| Ok((compile(pattern)?, *placeholder)))
            .collect::<Result<Vec<_>>>()?;

        let keyed = KEYED_MASKS
            .iter()
            .map(|(pattern, placeholder)| Ok((compile(pattern)?, *placeholder)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { structural, keyed })
    }

    /// Produce the masked copy of `text`.
    pub fn mask(&self, text: &str) -> String {
        let mut masked = text.to_string();

        for (pattern, placeholder) in &self.structural {
            if pattern.is_match(&masked) {
                masked = pattern.replace_all(&masked, *placeholder).into_owned();
            }
        }

        for (pattern, placeholder) in &self.keyed {
            if pattern.is_match(&masked) {
                masked = pattern
                    .replace_all(&masked, |caps: &Captures<'_>| {
                        let key = caps.get(1).map_or("", |m| m.as_str());
                        format!("{key}: {placeholder}")
                    })
                    .into_owned();
            }
        }

        masked
    }
}

// All masks compile case-insensitively, matching detection: a span
// the detector reports must not survive masking on case alone.
fn compile(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| Error::Registry(format!("invalid mask pattern: {e}")))
}

#[cfg(test)]
mod tests;
