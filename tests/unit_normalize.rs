// Unit tests for text normalization.
//
// Tests the output alphabet, URL stripping and idempotence over a set of
// realistic and adversarial inputs.

use fakejob::normalize::normalize;

const SAMPLES: &[&str] = &[
    "",
    "   ",
    "Marketing Intern",
    "We're Hiring!!! Earn $5,000/week from HOME — no experience needed.",
    "Visit http://bit.ly/3xYz or www.get-rich.example.com/apply NOW",
    "Contact: hr@company.com, +1 (555) 010-9999",
    "Multi\nline\r\ntext\twith\u{00a0}odd   spacing",
    "Ünïcödé ÇHARS and emoji 🚀🚀 everywhere",
    "https://a.b https://c.d",
    "ends with http",
    "wwwdot www.x",
    "Apply: https://jobs.example.com/42\u{00a0}today\u{2003}only",
];

fn only_lower_and_single_spaces(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_lowercase() || c == ' ') && !s.contains("  ")
}

// ============================================================
// Output shape
// ============================================================

#[test]
fn output_alphabet_is_lowercase_letters_and_spaces() {
    for sample in SAMPLES {
        let out = normalize(sample);
        assert!(
            only_lower_and_single_spaces(&out),
            "unexpected characters in {out:?} (from {sample:?})"
        );
    }
}

#[test]
fn output_has_no_edge_whitespace() {
    for sample in SAMPLES {
        let out = normalize(sample);
        assert_eq!(out, out.trim(), "edge whitespace in {out:?}");
    }
}

#[test]
fn output_never_contains_urls() {
    for sample in SAMPLES {
        let out = normalize(sample);
        assert!(!out.contains("example"), "URL host left in {out:?}");
        assert!(!out.contains("bit"), "URL body left in {out:?}");
        assert!(!out.contains("https"), "scheme left in {out:?}");
    }
}

#[test]
fn normalize_is_idempotent() {
    for sample in SAMPLES {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
    }
}

// ============================================================
// Specific behaviors
// ============================================================

#[test]
fn scam_style_posting() {
    assert_eq!(
        normalize("We're Hiring!!! Earn $5,000/week from HOME — no experience needed."),
        "we re hiring earn week from home no experience needed"
    );
}

#[test]
fn url_run_extends_to_next_whitespace() {
    assert_eq!(
        normalize("Visit http://bit.ly/3xYz or www.get-rich.example.com/apply NOW"),
        "visit or now"
    );
}

#[test]
fn url_glued_to_a_word_is_removed_from_the_scheme_on() {
    assert_eq!(normalize("applyhttps://x.io here"), "apply here");
}

#[test]
fn no_break_space_ends_a_url_run() {
    // Text pasted from web pages separates words with U+00A0
    assert_eq!(
        normalize("visit http://x.com\u{00a0}now apply"),
        "visit now apply"
    );
    assert_eq!(
        normalize("Apply: https://jobs.example.com/42\u{00a0}today\u{2003}only"),
        "apply today only"
    );
}

#[test]
fn em_space_ends_a_www_run() {
    assert_eq!(
        normalize("see www.scam.biz\u{2003}wire money"),
        "see wire money"
    );
}

#[test]
fn www_without_dot_is_kept() {
    assert_eq!(normalize("wwwdot www.x"), "wwwdot");
}

#[test]
fn email_and_phone_are_broken_into_words() {
    assert_eq!(
        normalize("Contact: hr@company.com, +1 (555) 010-9999"),
        "contact hr company com"
    );
}
