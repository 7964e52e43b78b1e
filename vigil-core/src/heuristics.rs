//! Hostname and scheme heuristics
//!
//! Local pattern checks that need no network access:
//! - Unencrypted scheme detection
//! - Suspicious hostname shapes (IP literals, brand bait, shortener names)
//! - Poor-reputation top-level domains

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

// Hostname patterns that commonly show up in phishing and throwaway domains
static IP_HOST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").unwrap());

static HYPHEN_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{3,}").unwrap());

static DIGIT_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{8,}").unwrap());

static BRAND_BAIT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(secure|login|update|verify|confirm).*(bank|paypal|amazon|google|microsoft|apple)")
        .unwrap()
});

static LONG_LOWERCASE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]{25,}").unwrap());

static ALTERNATING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+[a-z]+[0-9]+[a-z]+").unwrap());

static SHORTENER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(bit\.ly|tinyurl|short|redirect)").unwrap());

/// Top-level domains with poor reputation
pub static SUSPICIOUS_TLDS: &[&str] = &[
    ".tk", ".ml", ".ga", ".cf", ".click", ".download", ".bid", ".win",
];

/// True when the URL does not use HTTPS
pub fn is_unencrypted(url: &Url) -> bool {
    url.scheme() != "https"
}

/// True when the hostname matches any suspicious pattern
pub fn is_suspicious_hostname(host: &str) -> bool {
    IP_HOST_REGEX.is_match(host)
        || HYPHEN_RUN_REGEX.is_match(host)
        || DIGIT_RUN_REGEX.is_match(host)
        || BRAND_BAIT_REGEX.is_match(host)
        || LONG_LOWERCASE_REGEX.is_match(host)
        || ALTERNATING_REGEX.is_match(host)
        || SHORTENER_REGEX.is_match(host)
}

/// True when the hostname ends in a poor-reputation TLD
pub fn has_suspicious_tld(host: &str) -> bool {
    let host = host.to_lowercase();
    SUSPICIOUS_TLDS.iter().any(|tld| host.ends_with(tld))
}
