//! Regex-based HTML-to-text reduction.
//!
//! This is not an HTML parser. Email HTML is routinely malformed and the
//! digest only needs readable text, so the reducer trades precision for a
//! guarantee: it always returns a string. Mismatched or unterminated tags may
//! over- or under-strip.

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_STYLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").unwrap()
});

static ANCHOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b[^>]*>(.*?)</a\s*>").unwrap());

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]+>").unwrap());

/// Reduces an HTML fragment to plain text.
///
/// Order matters: script/style elements go first (content and all), anchors
/// are unwrapped to their visible text, every remaining tag becomes a single
/// space, and finally entities are decoded into literal characters.
pub fn html_to_text(html: &str) -> String {
    let stripped = SCRIPT_STYLE_REGEX.replace_all(html, "");
    let unwrapped = ANCHOR_REGEX.replace_all(&stripped, "$1");
    let text = TAG_REGEX.replace_all(&unwrapped, " ");

    html_escape::decode_html_entities(text.as_ref()).into_owned()
}
