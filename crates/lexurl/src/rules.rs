//! Individual lexical rules. Each rule is total over any `&str` and
//! independent of the others; [`extract_features`](crate::extract_features)
//! is their composition.

use aho_corasick::AhoCorasick;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Keywords commonly found in phishing URLs, matched as lowercase substrings.
pub const SUSPICIOUS_KEYWORDS: [&str; 12] = [
    "login",
    "signin",
    "verify",
    "update",
    "banking",
    "account",
    "secure",
    "ebay",
    "paypal",
    "amazon",
    "microsoft",
    "apple",
];

/// TLDs considered common.
pub const COMMON_TLDS: [&str; 5] = ["com", "org", "net", "edu", "gov"];

/// Shortest run of one character that counts as repeated.
pub const MIN_REPEAT_RUN: usize = 4;

// ASCII word boundaries: a dotted quad glued to a letter or underscore is not an IP.
static IP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}(?-u:\b)").unwrap()
});
static HEX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%[0-9a-fA-F]{2}").unwrap());

static KEYWORDS: LazyLock<AhoCorasick> =
    LazyLock::new(|| AhoCorasick::new(SUSPICIOUS_KEYWORDS).unwrap());

static COMMON_TLD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| COMMON_TLDS.into_iter().collect());

#[inline]
fn count_char(url: &str, needle: char) -> usize {
    url.chars().filter(|&c| c == needle).count()
}

pub fn url_length(url: &str) -> usize {
    url.chars().count()
}

pub fn num_digits(url: &str) -> usize {
    url.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Anything that is not a letter, digit or whitespace, `_` included.
pub fn num_special_chars(url: &str) -> usize {
    url.chars()
        .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
        .count()
}

/// Dots anywhere in the string minus one. Path and query dots count too.
pub fn num_subdomains(url: &str) -> usize {
    count_char(url, '.').saturating_sub(1)
}

pub fn has_ip(url: &str) -> bool {
    IP_RE.is_match(url)
}

/// Substring match, not a scheme check: `example.com/https-info` qualifies.
pub fn has_https(url: &str) -> bool {
    url.to_lowercase().contains("https")
}

pub fn num_params(url: &str) -> usize {
    count_char(url, '?')
}

pub fn num_fragments(url: &str) -> usize {
    count_char(url, '#')
}

pub fn num_slashes(url: &str) -> usize {
    count_char(url, '/')
}

pub fn has_suspicious_words(url: &str) -> bool {
    KEYWORDS.is_match(&url.to_lowercase())
}

/// The text after the last `.`, cut at the first `/`, `?` or `#`.
///
/// Returns `None` when the input contains no dot at all.
pub fn tld_token(url: &str) -> Option<&str> {
    let (_, last) = url.rsplit_once('.')?;
    let end = last.find(['/', '?', '#']).unwrap_or(last.len());
    Some(&last[..end])
}

pub fn tld_length(url: &str) -> usize {
    tld_token(url).map_or(0, |tld| tld.chars().count())
}

pub fn is_common_tld(url: &str) -> bool {
    tld_token(url).is_some_and(|tld| COMMON_TLD_SET.contains(tld.to_lowercase().as_str()))
}

pub fn has_hex(url: &str) -> bool {
    HEX_RE.is_match(url)
}

pub fn repeated_chars(url: &str) -> bool {
    let mut prev: Option<char> = None;
    let mut run = 0usize;

    for c in url.chars() {
        if prev == Some(c) {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run >= MIN_REPEAT_RUN {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_counts_chars_not_bytes() {
        assert_eq!(url_length(""), 0);
        assert_eq!(url_length("abc.com"), 7);
        assert_eq!(url_length("bücher.de"), 9);
    }

    #[test]
    fn test_digits_are_ascii_only() {
        assert_eq!(num_digits("a1b22c333"), 6);
        // Arabic-Indic digits are not 0-9
        assert_eq!(num_digits("\u{0661}\u{0662}"), 0);
    }

    #[test]
    fn test_special_chars() {
        assert_eq!(num_special_chars("https://a.b/c?d=e#f"), 8);
        assert_eq!(num_special_chars("under_score"), 1);
        assert_eq!(num_special_chars("with space\ttab"), 0);
        assert_eq!(num_special_chars("café"), 0);
        assert_eq!(num_special_chars("«quoted»"), 2);
    }

    #[test]
    fn test_subdomain_floor() {
        assert_eq!(num_subdomains(""), 0);
        assert_eq!(num_subdomains("localhost"), 0);
        assert_eq!(num_subdomains("example.com"), 0);
        assert_eq!(num_subdomains("a.b.example.com"), 2);
        // Path dots are counted as well
        assert_eq!(num_subdomains("example.com/index.html"), 1);
    }

    #[test]
    fn test_ip_detection() {
        assert!(has_ip("http://192.168.1.1/admin"));
        assert!(has_ip("999.999.999.999"));
        assert!(has_ip("1.2.3.4.5"));
        assert!(!has_ip("1.2.3"));
        assert!(!has_ip("x1.2.3.4"));
        assert!(!has_ip("1.2.3.4_"));
        assert!(!has_ip("1234.1.1.1"));
    }

    #[test]
    fn test_https_is_substring_match() {
        assert!(has_https("HTTPS://example.com"));
        assert!(has_https("example.com/https-info"));
        assert!(!has_https("http://example.com"));
    }

    #[test]
    fn test_delimiter_counts() {
        let url = "a.com/x/y?q=1?r=2#one#two";
        assert_eq!(num_params(url), 2);
        assert_eq!(num_fragments(url), 2);
        assert_eq!(num_slashes(url), 2);
    }

    #[test]
    fn test_suspicious_words() {
        assert!(has_suspicious_words("paypal-secure-login.example"));
        assert!(has_suspicious_words("WWW.AMAZON.evil"));
        assert!(has_suspicious_words("myaccounts.net"));
        assert!(!has_suspicious_words("rust-lang.org"));
    }

    #[test]
    fn test_tld_token() {
        assert_eq!(tld_token("google.com/search?q=x"), Some("com"));
        assert_eq!(tld_token("a.org?x"), Some("org"));
        assert_eq!(tld_token("a.net#frag"), Some("net"));
        assert_eq!(tld_token("example.com."), Some(""));
        assert_eq!(tld_token("localhost"), None);
        assert_eq!(tld_token(""), None);
        // Last dot wins even inside a path
        assert_eq!(tld_token("site.com/page.html"), Some("html"));
    }

    #[test]
    fn test_tld_length_and_common() {
        assert_eq!(tld_length("example.info"), 4);
        assert!(!is_common_tld("example.info"));
        assert!(is_common_tld("EXAMPLE.COM"));
        assert_eq!(tld_length("localhost/path"), 0);
        assert!(!is_common_tld("localhost"));
    }

    #[test]
    fn test_hex() {
        assert!(has_hex("site.com/%2e%2e/"));
        assert!(has_hex("%Af"));
        assert!(!has_hex("100%"));
        assert!(!has_hex("%2g"));
    }

    #[test]
    fn test_repeated_chars() {
        assert!(repeated_chars("aaaa.com"));
        assert!(repeated_chars("x////y"));
        assert!(repeated_chars("éééé"));
        assert!(!repeated_chars("aaa.com"));
        assert!(!repeated_chars("aaabaaa"));
        assert!(!repeated_chars(""));
    }
}
