use std::fmt;

use chrono::{DateTime, Utc};

/// Lexical features of a single URL string.
///
/// Counts are plain `usize`. Flags are `bool` in Rust and serialize as the
/// integers `0` / `1`, which is the shape downstream models were trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UrlFeatures {
    /// Number of characters in the raw input.
    pub url_length: usize,
    /// Number of ASCII digits.
    pub num_digits: usize,
    /// Characters that are neither alphanumeric nor whitespace.
    pub num_special_chars: usize,
    /// Dot count minus one, floored at zero.
    pub num_subdomains: usize,
    /// Dotted-quad pattern present (octets are not range checked).
    #[cfg_attr(feature = "serde", serde(with = "flag"))]
    pub has_ip: bool,
    /// `https` appears anywhere, case-insensitively.
    #[cfg_attr(feature = "serde", serde(with = "flag"))]
    pub has_https: bool,
    /// Number of `?` characters.
    pub num_params: usize,
    /// Number of `#` characters.
    pub num_fragments: usize,
    /// Number of `/` characters.
    pub num_slashes: usize,
    /// Any phishing keyword appears as a substring.
    #[cfg_attr(feature = "serde", serde(with = "flag"))]
    pub has_suspicious_words: bool,
    /// Length of the TLD token, 0 when the input has no dot.
    pub tld_length: usize,
    /// TLD token is one of the common TLDs.
    #[cfg_attr(feature = "serde", serde(with = "flag"))]
    pub is_common_tld: bool,
    /// `%` followed by two hex digits.
    #[cfg_attr(feature = "serde", serde(with = "flag"))]
    pub has_hex: bool,
    /// Some character repeats 4+ times in a row.
    #[cfg_attr(feature = "serde", serde(with = "flag"))]
    pub repeated_chars: bool,
}

#[cfg(feature = "serde")]
mod flag {
    use serde::de::{Error, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(D::Error::invalid_value(
                Unexpected::Unsigned(u64::from(other)),
                &"0 or 1",
            )),
        }
    }
}

/// Heuristic verdict for a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Label {
    Benign,
    Malicious,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Benign => "benign",
            Label::Malicious => "malicious",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much one feature moved the risk score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FeatureContribution {
    /// Display name, e.g. "Has IP".
    pub name: &'static str,
    /// The feature's value (flags as 0/1).
    pub value: usize,
    /// Signed change to the risk score.
    pub contribution: f64,
}

/// Output of a [`Classifier`](crate::scoring::Classifier).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Prediction {
    pub label: Label,
    /// Confidence in `label`, in [0, 1].
    pub confidence: f64,
    /// Clamped risk score in [0, 1].
    pub risk_score: f64,
    /// Up to three features with the largest absolute contribution.
    pub top_features: Vec<FeatureContribution>,
}

/// One analyzed URL as remembered by [`AnalysisHistory`](crate::history::AnalysisHistory).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    /// URL shortened for display.
    pub url: String,
    pub timestamp: DateTime<Utc>,
    pub label: Label,
    pub confidence: f64,
}
