//! lexurl — lexical feature extraction for malicious URL detection.
//!
//! Pure Rust library providing:
//! - Feature extraction (14 lexical signals from a raw URL string)
//! - URL normalization (NFKC + hidden character stripping)
//! - Heuristic risk scoring behind a swappable `Classifier` trait
//! - Feature export documents and a bounded analysis history

pub mod error;
pub mod export;
pub mod history;
pub mod normalizer;
pub mod rules;
pub mod scoring;
pub mod types;
pub mod url_features;

// Re-export main types at crate root for convenience
pub use error::{Error, Result};
pub use export::{export_features, FeatureExport, FEATURE_DESCRIPTIONS};
pub use history::AnalysisHistory;
pub use normalizer::{has_obfuscation_chars, normalize_url};
pub use scoring::{Classifier, RiskScorer, ScorerConfig};
pub use types::{FeatureContribution, HistoryEntry, Label, Prediction, UrlFeatures};
pub use url_features::{extract_features, FEATURE_COUNT, FEATURE_NAMES};
