use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lexurl::ScorerConfig;

/// Load scorer settings from a TOML file. Missing keys keep their defaults.
///
/// ```toml
/// ip_weight = 0.5
/// malicious_threshold = 0.6
/// ```
pub fn load_scorer_config(path: &Path) -> Result<ScorerConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading scorer config {}", path.display()))?;
    let config = parse_scorer_config(&text)
        .with_context(|| format!("parsing scorer config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded scorer config");
    Ok(config)
}

pub fn parse_scorer_config(text: &str) -> Result<ScorerConfig> {
    let config: ScorerConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_config() {
        let config = parse_scorer_config("ip_weight = 0.9\nlong_url_threshold = 100\n").unwrap();
        assert_eq!(config.ip_weight, 0.9);
        assert_eq!(config.long_url_threshold, 100);
        assert_eq!(config.hex_weight, ScorerConfig::default().hex_weight);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_scorer_config("").unwrap(), ScorerConfig::default());
    }

    #[test]
    fn test_rejects_unknown_and_invalid() {
        assert!(parse_scorer_config("ip_wieght = 0.9").is_err());
        assert!(parse_scorer_config("malicious_threshold = 2.0").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "malicious_threshold = 0.7").unwrap();
        let config = load_scorer_config(file.path()).unwrap();
        assert_eq!(config.malicious_threshold, 0.7);
    }

    #[test]
    fn test_missing_file() {
        let err = load_scorer_config(Path::new("/nonexistent/lexurl.toml")).unwrap_err();
        assert!(err.to_string().contains("reading scorer config"));
    }
}
