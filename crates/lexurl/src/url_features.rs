use crate::rules;
use crate::types::UrlFeatures;

/// Number of fields in a [`UrlFeatures`] record.
pub const FEATURE_COUNT: usize = 14;

/// Field names in record order, matching the serialized keys.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "url_length",
    "num_digits",
    "num_special_chars",
    "num_subdomains",
    "has_ip",
    "has_https",
    "num_params",
    "num_fragments",
    "num_slashes",
    "has_suspicious_words",
    "tld_length",
    "is_common_tld",
    "has_hex",
    "repeated_chars",
];

/// Extract lexical features from a raw URL string.
///
/// The input is scanned as text, never parsed as a URL, so malformed or
/// scheme-less input is fine. Total and deterministic: the same input always
/// yields the same record.
pub fn extract_features(url: &str) -> UrlFeatures {
    let features = UrlFeatures {
        url_length: rules::url_length(url),
        num_digits: rules::num_digits(url),
        num_special_chars: rules::num_special_chars(url),
        num_subdomains: rules::num_subdomains(url),
        has_ip: rules::has_ip(url),
        has_https: rules::has_https(url),
        num_params: rules::num_params(url),
        num_fragments: rules::num_fragments(url),
        num_slashes: rules::num_slashes(url),
        has_suspicious_words: rules::has_suspicious_words(url),
        tld_length: rules::tld_length(url),
        is_common_tld: rules::is_common_tld(url),
        has_hex: rules::has_hex(url),
        repeated_chars: rules::repeated_chars(url),
    };
    tracing::trace!(url_length = features.url_length, "extracted url features");
    features
}

impl UrlFeatures {
    /// Values in [`FEATURE_NAMES`] order as model input, flags as 0.0 / 1.0.
    pub fn to_vector(&self) -> [f64; FEATURE_COUNT] {
        self.to_counts().map(|v| v as f64)
    }

    /// Values in [`FEATURE_NAMES`] order, flags as 0 / 1.
    pub fn to_counts(&self) -> [usize; FEATURE_COUNT] {
        [
            self.url_length,
            self.num_digits,
            self.num_special_chars,
            self.num_subdomains,
            usize::from(self.has_ip),
            usize::from(self.has_https),
            self.num_params,
            self.num_fragments,
            self.num_slashes,
            usize::from(self.has_suspicious_words),
            self.tld_length,
            usize::from(self.is_common_tld),
            usize::from(self.has_hex),
            usize::from(self.repeated_chars),
        ]
    }

    /// `(name, value)` pairs in record order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> {
        FEATURE_NAMES.into_iter().zip(self.to_counts())
    }

    /// Look up a field by its serialized name.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_features(""), UrlFeatures::default());
    }

    #[test]
    fn test_composition_matches_rules() {
        let url = "http://login.secure-bank.example.co.uk/%41/aaaa?x=1#top";
        let f = extract_features(url);
        assert_eq!(f.url_length, url.chars().count());
        assert_eq!(f.num_subdomains, 3);
        assert!(f.has_suspicious_words);
        assert!(!f.has_https);
        assert!(f.has_hex);
        assert!(f.repeated_chars);
        assert_eq!(f.num_params, 1);
        assert_eq!(f.num_fragments, 1);
        assert_eq!(f.tld_length, 2);
        assert!(!f.is_common_tld);
    }

    #[test]
    fn test_vector_order() {
        let f = extract_features("https://1.2.3.4/");
        let v = f.to_vector();
        assert_eq!(v.len(), FEATURE_COUNT);
        assert_eq!(v[0], f.url_length as f64);
        assert_eq!(v[4], 1.0); // has_ip
        assert_eq!(v[5], 1.0); // has_https
        assert_eq!(f.get("num_slashes"), Some(3));
        assert_eq!(f.get("bogus"), None);
    }

    #[test]
    fn test_iter_names() {
        let f = extract_features("example.com");
        let names: Vec<&str> = f.iter().map(|(n, _)| n).collect();
        assert_eq!(names, FEATURE_NAMES);
    }
}
