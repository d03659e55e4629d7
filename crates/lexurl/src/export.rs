use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::types::UrlFeatures;
use crate::url_features::FEATURE_COUNT;

/// Human-readable description of every feature, in record order.
pub const FEATURE_DESCRIPTIONS: [(&str, &str); FEATURE_COUNT] = [
    ("url_length", "Total character length of the URL"),
    ("num_digits", "Count of numeric digits in the URL"),
    ("num_special_chars", "Count of special characters and punctuation"),
    ("num_subdomains", "Number of subdomains (dots minus 1)"),
    ("has_ip", "Whether URL contains an IP address (1=yes, 0=no)"),
    ("has_https", "Whether URL uses HTTPS protocol (1=yes, 0=no)"),
    ("num_params", "Number of query parameters (?)"),
    ("num_fragments", "Number of URL fragments (#)"),
    ("num_slashes", "Total count of forward slashes"),
    (
        "has_suspicious_words",
        "Contains known phishing keywords (1=yes, 0=no)",
    ),
    ("tld_length", "Length of the top-level domain"),
    ("is_common_tld", "Whether TLD is common (.com, .org, etc.)"),
    ("has_hex", "Contains hex encoding (1=yes, 0=no)"),
    (
        "repeated_chars",
        "Has 4+ repeated characters in sequence (1=yes, 0=no)",
    ),
];

/// Description for a feature name, if it is one.
pub fn describe(name: &str) -> Option<&'static str> {
    FEATURE_DESCRIPTIONS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, d)| *d)
}

/// Downloadable snapshot of one extraction.
///
/// Serializes to `{url, timestamp, features, featureDescriptions}` with the
/// timestamp in millisecond RFC 3339 form (`2024-05-01T12:00:00.000Z`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FeatureExport {
    pub url: String,
    #[cfg_attr(feature = "serde", serde(serialize_with = "iso_millis"))]
    pub timestamp: DateTime<Utc>,
    pub features: UrlFeatures,
    #[cfg_attr(feature = "serde", serde(rename = "featureDescriptions"))]
    pub feature_descriptions: FeatureDescriptions,
}

/// Serializes as an object of [`FEATURE_DESCRIPTIONS`] in record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureDescriptions;

#[cfg(feature = "serde")]
impl serde::Serialize for FeatureDescriptions {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (name, description) in FEATURE_DESCRIPTIONS {
            map.serialize_entry(name, description)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
fn iso_millis<S: serde::Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
}

impl FeatureExport {
    pub fn at(url: impl Into<String>, features: UrlFeatures, timestamp: DateTime<Utc>) -> Self {
        Self {
            url: url.into(),
            timestamp,
            features,
            feature_descriptions: FeatureDescriptions,
        }
    }

    /// Like [`FeatureExport::at`] with a Unix timestamp in milliseconds.
    pub fn at_millis(url: impl Into<String>, features: UrlFeatures, millis: i64) -> Result<Self> {
        let timestamp = DateTime::from_timestamp_millis(millis).ok_or(Error::Timestamp(millis))?;
        Ok(Self::at(url, features, timestamp))
    }

    #[cfg(feature = "serde")]
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Snapshot `features` of `url`, stamped with the current time.
pub fn export_features(url: &str, features: &UrlFeatures) -> FeatureExport {
    FeatureExport::at(url, *features, Utc::now())
}
