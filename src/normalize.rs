// Text normalization applied to a posting before classification.
//
// The classifier was trained on text cleaned exactly this way, so the steps
// and their order must not drift: lowercase, drop URLs, replace everything
// that isn't a-z or whitespace with a space, then collapse whitespace.
// Whitespace is Unicode whitespace: a no-break space ends a URL run.

use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"http\S+|www\.\S+").unwrap_or_else(|e| panic!("invalid URL pattern: {e}"))
});

static NON_ALPHA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z\s]").unwrap_or_else(|e| panic!("invalid letter pattern: {e}"))
});

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").unwrap_or_else(|e| panic!("invalid whitespace pattern: {e}"))
});

/// Normalize free text into the form the classifier expects.
///
/// The result contains only lowercase ASCII letters separated by single
/// spaces, with no leading or trailing whitespace. Empty input yields an
/// empty string.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_urls = URL_RE.replace_all(&lowered, "");
    let letters_only = NON_ALPHA_RE.replace_all(&without_urls, " ");
    WHITESPACE_RE
        .replace_all(&letters_only, " ")
        .trim()
        .to_string()
}
