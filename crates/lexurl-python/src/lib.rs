#![allow(clippy::useless_conversion)] // PyO3 generates conversions via proc macros

use lexurl::{Classifier, UrlFeatures};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

fn features_dict<'py>(py: Python<'py>, features: &UrlFeatures) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    for (name, value) in features.iter() {
        dict.set_item(name, value)?;
    }
    Ok(dict)
}

/// Extract the 14 lexical features of a URL as a dict (flags as 0/1).
#[pyfunction]
fn extract_features<'py>(py: Python<'py>, url: &str) -> PyResult<Bound<'py, PyDict>> {
    features_dict(py, &lexurl::extract_features(url))
}

/// Extract features as a list of floats in `FEATURE_NAMES` order.
#[pyfunction]
fn feature_vector(url: &str) -> Vec<f64> {
    lexurl::extract_features(url).to_vector().to_vec()
}

/// NFKC + strip hidden characters + map ideographic full stops.
#[pyfunction]
fn normalize_url(url: &str) -> String {
    lexurl::normalize_url(url)
}

/// Export document for a URL as a JSON string.
#[pyfunction]
fn export_features(url: &str) -> PyResult<String> {
    let features = lexurl::extract_features(url);
    lexurl::export_features(url, &features)
        .to_json_pretty()
        .map_err(|e| PyValueError::new_err(format!("Failed to serialize export: {}", e)))
}

/// Heuristic risk scorer over extracted features.
#[pyclass]
struct RustRiskScorer {
    inner: lexurl::RiskScorer,
}

#[pymethods]
impl RustRiskScorer {
    /// Create a scorer, optionally overriding settings from a JSON object string.
    #[new]
    #[pyo3(signature = (config_json=None))]
    fn new(config_json: Option<&str>) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => parse_config(json)?,
            None => lexurl::ScorerConfig::default(),
        };
        let inner = lexurl::RiskScorer::new(config)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Classify a URL. Returns a dict with label, confidence, risk_score and top_features.
    fn classify<'py>(&self, py: Python<'py>, url: &str) -> PyResult<Bound<'py, PyDict>> {
        let prediction = self.inner.classify(&lexurl::extract_features(url));
        let dict = PyDict::new_bound(py);
        dict.set_item("label", prediction.label.as_str())?;
        dict.set_item("confidence", prediction.confidence)?;
        dict.set_item("risk_score", prediction.risk_score)?;

        let mut top: Vec<Bound<'py, PyDict>> = Vec::with_capacity(prediction.top_features.len());
        for c in &prediction.top_features {
            let item = PyDict::new_bound(py);
            item.set_item("name", c.name)?;
            item.set_item("value", c.value)?;
            item.set_item("contribution", c.contribution)?;
            top.push(item);
        }
        dict.set_item("top_features", top)?;

        Ok(dict)
    }
}

fn parse_config(json: &str) -> PyResult<lexurl::ScorerConfig> {
    lexurl::ScorerConfig::from_json(json)
        .map_err(|e| PyValueError::new_err(format!("Invalid scorer config: {}", e)))
}

/// Native accelerator module for lexurl.
#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(extract_features, m)?)?;
    m.add_function(wrap_pyfunction!(feature_vector, m)?)?;
    m.add_function(wrap_pyfunction!(normalize_url, m)?)?;
    m.add_function(wrap_pyfunction!(export_features, m)?)?;
    m.add_class::<RustRiskScorer>()?;
    m.add("FEATURE_NAMES", lexurl::FEATURE_NAMES.to_vec())?;
    Ok(())
}
