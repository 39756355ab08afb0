//! Second-pass scrub for model-generated text
//!
//! Defense in depth: even with prompt instructions forbidding it, a
//! summarizer can restate secrets from its input. This pass runs on
//! generated text only and deliberately keeps its own reduced pattern
//! tables rather than reusing the main registry, so the two scrubbing
//! layers fail independently.

use crate::analyzer::DEFAULT_MAX_INPUT_LEN;
use crate::truncate_to_char_boundary;
use docsentry_core::{Error, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Placeholder written over scrubbed spans.
pub const REDACTED: &str = "[REDACTED]";

/// Structural patterns scrubbed wholesale from generated text.
const GENERATED_TEXT_PATTERNS: &[&str] = &[
    r"\b\d{4}[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{4}\b",
    r"\b\d{3}[-\s]?\d{2}[-\s]?\d{4}\b",
    r"\b[A-Z]{2}\d{6}[A-Z]\b",
    r"\b\d{10,}\b",
    r"password\s*[:=]\s*\S+",
    r"api[_\s]?key\s*[:=]\s*\S+",
];

/// Keywords whose `<keyword>[:=]<value>` assignments are rewritten to
/// `<keyword>: [REDACTED]`.
const VALUE_KEYWORDS: &[&str] = &[
    "password", "pwd", "pass", "secret", "key", "token", "auth", "ssn", "social", "account",
    "card", "number", "pin", "code",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizerConfig {
    /// Maximum input length in bytes; longer text is truncated at a
    /// char boundary before scrubbing to bound matching cost.
    pub max_input_len: usize,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

/// Scrubs sensitive fragments from generated summary text.
///
/// Independent of [`crate::Analyzer`]: it holds no state from any
/// prior analysis and can be applied to any text. Sanitization is
/// idempotent and never fails; text without matches is returned
/// unchanged.
pub struct Sanitizer {
    config: SanitizerConfig,
    patterns: Vec<Regex>,
    keyed: Vec<(Regex, String)>,
}

impl Sanitizer {
    pub fn new() -> Result<Self> {
        Self::with_config(SanitizerConfig::default())
    }

    pub fn with_config(config: SanitizerConfig) -> Result<Self> {
        let patterns = GENERATED_TEXT_PATTERNS
            .iter()
            .map(|pattern| compile(pattern))
            .collect::<Result<Vec<_>>>()?;

        let keyed = VALUE_KEYWORDS
            .iter()
            .map(|keyword| {
                let pattern = compile(&format!(r"{keyword}\s*[:=]\s*\S+"))?;
                Ok((pattern, format!("{keyword}: {REDACTED}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            config,
            patterns,
            keyed,
        })
    }

    /// Scrub `text` and return the sanitized copy.
    pub fn sanitize(&self, text: &str) -> String {
        let capped = truncate_to_char_boundary(text, self.config.max_input_len);
        let mut sanitized = capped.to_string();

        for pattern in &self.patterns {
            if pattern.is_match(&sanitized) {
                sanitized = pattern.replace_all(&sanitized, REDACTED).into_owned();
            }
        }

        for (pattern, replacement) in &self.keyed {
            if pattern.is_match(&sanitized) {
                sanitized = pattern
                    .replace_all(&sanitized, replacement.as_str())
                    .into_owned();
            }
        }

        sanitized
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| Error::Registry(format!("invalid sanitizer pattern: {e}")))
}

#[cfg(test)]
mod tests;
