use crate::error::{Error, Result};
use crate::types::{FeatureContribution, Label, Prediction, UrlFeatures};

/// How many contributions a [`Prediction`] reports.
pub const TOP_FEATURES: usize = 3;

/// Turns a feature record into a verdict.
///
/// [`RiskScorer`] is a fixed heuristic. A trained model consuming
/// [`UrlFeatures::to_vector`] goes behind this trait instead.
pub trait Classifier {
    fn classify(&self, features: &UrlFeatures) -> Prediction;
}

/// Thresholds and weights for [`RiskScorer`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct ScorerConfig {
    /// URLs longer than this many characters add `long_url_weight`.
    pub long_url_threshold: usize,
    pub long_url_weight: f64,
    pub ip_weight: f64,
    pub suspicious_words_weight: f64,
    /// More subdomains than this add `subdomain_weight`.
    pub subdomain_threshold: usize,
    pub subdomain_weight: f64,
    /// Subtracted when `https` is present, added otherwise.
    pub https_weight: f64,
    pub repeated_chars_weight: f64,
    pub hex_weight: f64,
    /// More special characters than this add `special_chars_weight`.
    pub special_chars_threshold: usize,
    pub special_chars_weight: f64,
    /// Risk strictly above this is labelled malicious.
    pub malicious_threshold: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            long_url_threshold: 75,
            long_url_weight: 0.3,
            ip_weight: 0.4,
            suspicious_words_weight: 0.5,
            subdomain_threshold: 2,
            subdomain_weight: 0.2,
            https_weight: 0.1,
            repeated_chars_weight: 0.3,
            hex_weight: 0.2,
            special_chars_threshold: 20,
            special_chars_weight: 0.2,
            malicious_threshold: 0.5,
        }
    }
}

impl ScorerConfig {
    /// Parse a (possibly partial) JSON object; missing keys take defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("long_url_weight", self.long_url_weight),
            ("ip_weight", self.ip_weight),
            ("suspicious_words_weight", self.suspicious_words_weight),
            ("subdomain_weight", self.subdomain_weight),
            ("https_weight", self.https_weight),
            ("repeated_chars_weight", self.repeated_chars_weight),
            ("hex_weight", self.hex_weight),
            ("special_chars_weight", self.special_chars_weight),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() {
                return Err(Error::InvalidConfig(format!("{} must be finite", name)));
            }
        }
        if !(0.0..=1.0).contains(&self.malicious_threshold) {
            return Err(Error::InvalidConfig(format!(
                "malicious_threshold must be within [0, 1], got {}",
                self.malicious_threshold
            )));
        }
        Ok(())
    }
}

/// Additive risk heuristic over lexical features.
///
/// Deterministic: no model is involved and no jitter is applied, so the label
/// is a rule-of-thumb rather than a statistical prediction.
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    config: ScorerConfig,
}

impl RiskScorer {
    pub fn new(config: ScorerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Per-feature contributions in display order.
    pub fn contributions(&self, f: &UrlFeatures) -> [FeatureContribution; 8] {
        let c = &self.config;
        let when = |hit: bool, weight: f64| if hit { weight } else { 0.0 };

        [
            contribution(
                "URL Length",
                f.url_length,
                when(f.url_length > c.long_url_threshold, c.long_url_weight),
            ),
            contribution("Has IP", f.has_ip.into(), when(f.has_ip, c.ip_weight)),
            contribution(
                "Suspicious Words",
                f.has_suspicious_words.into(),
                when(f.has_suspicious_words, c.suspicious_words_weight),
            ),
            contribution(
                "Subdomains",
                f.num_subdomains,
                when(f.num_subdomains > c.subdomain_threshold, c.subdomain_weight),
            ),
            contribution(
                "HTTPS",
                f.has_https.into(),
                if f.has_https {
                    -c.https_weight
                } else {
                    c.https_weight
                },
            ),
            contribution(
                "Special Chars",
                f.num_special_chars,
                when(
                    f.num_special_chars > c.special_chars_threshold,
                    c.special_chars_weight,
                ),
            ),
            contribution(
                "Hex Encoding",
                f.has_hex.into(),
                when(f.has_hex, c.hex_weight),
            ),
            contribution(
                "Repeated Chars",
                f.repeated_chars.into(),
                when(f.repeated_chars, c.repeated_chars_weight),
            ),
        ]
    }

    /// Risk in [0, 1].
    pub fn risk_score(&self, features: &UrlFeatures) -> f64 {
        // Summed in a fixed order so results are reproducible to the bit.
        let [length, ip, words, subdomains, https, special, hex, repeated] =
            self.contributions(features).map(|c| c.contribution);
        let raw = length + ip + words + subdomains + https + repeated + hex + special;
        raw.clamp(0.0, 1.0)
    }
}

fn contribution(name: &'static str, value: usize, contribution: f64) -> FeatureContribution {
    FeatureContribution {
        name,
        value,
        contribution,
    }
}

impl Classifier for RiskScorer {
    fn classify(&self, features: &UrlFeatures) -> Prediction {
        let risk_score = self.risk_score(features);
        let (label, confidence) = if risk_score > self.config.malicious_threshold {
            (Label::Malicious, risk_score)
        } else {
            (Label::Benign, 1.0 - risk_score)
        };

        // Stable sort: ties keep display order.
        let mut top_features = self.contributions(features).to_vec();
        top_features.sort_by(|a, b| b.contribution.abs().total_cmp(&a.contribution.abs()));
        top_features.truncate(TOP_FEATURES);

        tracing::debug!(%label, risk_score, "classified url");

        Prediction {
            label,
            confidence,
            risk_score,
            top_features,
        }
    }
}
