use lexurl::Classifier;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Serialize to plain JS objects; the default serializer emits `Map` for maps.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Whole milliseconds from a JS timestamp, `None` for NaN or infinities.
fn timestamp_millis(timestamp_ms: f64) -> Option<i64> {
    timestamp_ms
        .is_finite()
        .then(|| timestamp_ms.trunc() as i64)
}

/// Extract lexical features from a URL. Returns a JS object with flags as 0/1.
#[wasm_bindgen(js_name = extractFeatures)]
pub fn extract_features(url: &str) -> Result<JsValue, JsError> {
    to_js(&lexurl::extract_features(url))
}

/// Feature values in `FEATURE_NAMES` order, ready for model input.
#[wasm_bindgen(js_name = featureVector)]
pub fn feature_vector(url: &str) -> Vec<f64> {
    lexurl::extract_features(url).to_vector().to_vec()
}

/// Fused URL normalization: strip hidden characters + NFKC + map ideographic full stops.
#[wasm_bindgen(js_name = normalizeUrl)]
pub fn normalize_url(url: &str) -> String {
    lexurl::normalize_url(url)
}

/// Build the export document for a URL. `timestamp_ms` is usually `Date.now()`.
#[wasm_bindgen(js_name = exportFeatures)]
pub fn export_features(url: &str, timestamp_ms: f64) -> Result<JsValue, JsError> {
    let millis = timestamp_millis(timestamp_ms)
        .ok_or_else(|| JsError::new(&format!("Invalid timestamp: {}", timestamp_ms)))?;
    let features = lexurl::extract_features(url);
    let export = lexurl::FeatureExport::at_millis(url, features, millis)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&export)
}

/// Heuristic risk scorer over extracted features.
#[wasm_bindgen]
pub struct RiskScorer {
    inner: lexurl::RiskScorer,
}

#[wasm_bindgen]
impl RiskScorer {
    /// Create a scorer. `config` may be `undefined` or a partial settings object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<RiskScorer, JsError> {
        let config: lexurl::ScorerConfig = if config.is_undefined() || config.is_null() {
            lexurl::ScorerConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsError::new(&format!("Invalid scorer config: {}", e)))?
        };
        let inner = lexurl::RiskScorer::new(config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { inner })
    }

    /// Classify a URL. Returns `{label, confidence, risk_score, top_features}`.
    pub fn classify(&self, url: &str) -> Result<JsValue, JsError> {
        let prediction = self.inner.classify(&lexurl::extract_features(url));
        to_js(&prediction)
    }
}

/// Names of the extracted features in record order.
#[wasm_bindgen(js_name = featureNames)]
pub fn feature_names() -> Vec<String> {
    lexurl::FEATURE_NAMES.iter().map(|n| n.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_matches_names() {
        assert_eq!(feature_vector("example.com").len(), feature_names().len());
    }

    #[test]
    fn test_normalize_passthrough() {
        assert_eq!(normalize_url("pay\u{200b}pal.com"), "paypal.com");
    }

    #[test]
    fn test_timestamp_millis() {
        assert_eq!(timestamp_millis(1_700_000_000_123.9), Some(1_700_000_000_123));
        assert_eq!(timestamp_millis(0.0), Some(0));
        assert_eq!(timestamp_millis(f64::NAN), None);
        assert_eq!(timestamp_millis(f64::INFINITY), None);
        assert_eq!(timestamp_millis(f64::NEG_INFINITY), None);
    }
}
