//! Serialized linear regression model and its metadata.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::AssetError;

/// Prediction used when the model or its inputs are unavailable.
pub const FALLBACK_PREDICTION: f64 = 216.0;

/// A trained linear regression model, stored as a JSON artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| AssetError::io(path, e))?;
        serde_json::from_str(&content).map_err(|e| AssetError::parse(path, e.to_string()))
    }

    /// Dot product of coefficients and features plus the intercept.
    ///
    /// Features beyond the coefficient count are ignored, missing ones
    /// contribute nothing; the model is treated as an opaque predictor.
    pub fn predict(&self, features: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }
}

/// Companion metadata describing the model's expected inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Feature columns in the order the model expects them.
    #[serde(default)]
    pub feature_columns: Vec<String>,
    #[serde(default)]
    pub model_name: Option<String>,
    /// Mean absolute error on the held-out set.
    #[serde(default)]
    pub mae: Option<f64>,
    /// Improvement over the persistence baseline, percent.
    #[serde(default)]
    pub improvement_pct: Option<f64>,
}

impl ModelMetadata {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| AssetError::io(path, e))?;
        serde_json::from_str(&content).map_err(|e| AssetError::parse(path, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_is_affine() {
        let model = LinearModel {
            intercept: 1.5,
            coefficients: vec![2.0, -1.0, 0.5],
        };
        assert_eq!(model.predict(&[1.0, 2.0, 4.0]), 1.5 + 2.0 - 2.0 + 2.0);
    }

    #[test]
    fn test_predict_with_no_features_returns_intercept() {
        let model = LinearModel {
            intercept: 216.0,
            coefficients: vec![],
        };
        assert_eq!(model.predict(&[]), 216.0);
    }

    #[test]
    fn test_predict_ignores_extra_features() {
        let model = LinearModel {
            intercept: 0.0,
            coefficients: vec![1.0],
        };
        assert_eq!(model.predict(&[3.0, 100.0, 200.0]), 3.0);
    }

    #[test]
    fn test_metadata_defaults() {
        let metadata: ModelMetadata = serde_json::from_str("{}").unwrap();
        assert!(metadata.feature_columns.is_empty());
        assert!(metadata.mae.is_none());
    }

    #[test]
    fn test_metadata_parses_summary_stats() {
        let metadata: ModelMetadata = serde_json::from_str(
            r#"{"feature_columns": ["a", "b"], "model_name": "linear_regression",
                "mae": 32.8, "improvement_pct": 20.6}"#,
        )
        .unwrap();
        assert_eq!(metadata.feature_columns.len(), 2);
        assert_eq!(metadata.mae, Some(32.8));
        assert_eq!(metadata.model_name.as_deref(), Some("linear_regression"));
    }
}
