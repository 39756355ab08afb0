//! Tests for the generated-text sanitizer

use super::*;

fn sanitizer() -> Sanitizer {
    Sanitizer::new().unwrap()
}

fn sample_corpus() -> Vec<&'static str> {
    vec![
        "",
        "The document describes quarterly results.",
        "password: hunter2 found in the file",
        "Password=abc",
        "Card 4111 1111 1111 1111",
        "SSN 123-45-6789",
        "The id AB123456C appears twice",
        "account number 12345678901 on record",
        "secret: mellon",
        "account = 424242",
        "api key: abc123",
        "PIN: 1234",
    ]
}

#[test]
fn test_clean_text_unchanged() {
    let text = "The document describes quarterly results.";
    assert_eq!(sanitizer().sanitize(text), text);
    assert_eq!(sanitizer().sanitize(""), "");
}

#[test]
fn test_password_assignment_scrubbed() {
    assert_eq!(
        sanitizer().sanitize("password: hunter2 found in the file"),
        "[REDACTED] found in the file"
    );
    assert_eq!(sanitizer().sanitize("Password=abc"), "[REDACTED]");
}

#[test]
fn test_structural_patterns_scrubbed() {
    let s = sanitizer();
    assert_eq!(s.sanitize("Card 4111 1111 1111 1111"), "Card [REDACTED]");
    assert_eq!(s.sanitize("SSN 123-45-6789"), "SSN [REDACTED]");
    assert_eq!(
        s.sanitize("The id AB123456C appears twice"),
        "The id [REDACTED] appears twice"
    );
    assert_eq!(
        s.sanitize("account number 12345678901 on record"),
        "account number [REDACTED] on record"
    );
    assert_eq!(s.sanitize("api key: abc123"), "[REDACTED]");
}

#[test]
fn test_keyword_value_rewrite() {
    let s = sanitizer();
    assert_eq!(s.sanitize("secret: mellon"), "secret: [REDACTED]");
    // The separator is normalized and the keyword lower-cased.
    assert_eq!(s.sanitize("account = 424242"), "account: [REDACTED]");
    assert_eq!(s.sanitize("PIN: 1234"), "pin: [REDACTED]");
}

#[test]
fn test_sanitize_is_idempotent() {
    let s = sanitizer();
    for text in sample_corpus() {
        let once = s.sanitize(text);
        let twice = s.sanitize(&once);
        assert_eq!(once, twice, "sanitize not idempotent for {text:?}");
    }
}

#[test]
fn test_sanitize_is_deterministic() {
    let s = sanitizer();
    let text = "password: x, card 4111 1111 1111 1111, secret: y";
    assert_eq!(s.sanitize(text), s.sanitize(text));
}

#[test]
fn test_input_cap_truncates_at_char_boundary() {
    let s = Sanitizer::with_config(SanitizerConfig { max_input_len: 5 }).unwrap();
    assert_eq!(s.sanitize("abcdefgh"), "abcde");
}

#[test]
fn test_reduced_set_is_independent_of_main_tables() {
    // The sanitizer does not use the main keyword table: "salary" is a
    // detector trigger word but carries no value, so generated prose
    // mentioning it passes through.
    let text = "The report mentions salary bands in general terms.";
    assert_eq!(sanitizer().sanitize(text), text);
}
