//! Startup-loaded assets: regression model, metadata, historical dataset.
//!
//! All three files are optional. A missing or unreadable file degrades
//! silently to a fallback (constant prediction, empty feature list, empty
//! history) with a warning log; the planner does not depend on any of
//! them. Loading happens once at startup and the result is immutable.

pub mod history;
pub mod model;

use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::AssetSettings;
pub use history::{History, HistoryRow};
pub use model::{LinearModel, ModelMetadata, FALLBACK_PREDICTION};

/// Errors raised while reading asset files.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },
}

impl AssetError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        AssetError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    fn parse(path: &Path, reason: impl Into<String>) -> Self {
        AssetError::Parse {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }
}

/// Immutable bundle of everything loaded at startup.
#[derive(Debug, Clone)]
pub struct Assets {
    pub model: Option<LinearModel>,
    pub metadata: ModelMetadata,
    pub history: History,
}

impl Assets {
    /// Load all assets, degrading per file rather than failing.
    pub fn load(settings: &AssetSettings) -> Self {
        let model = match LinearModel::from_file(&settings.model_path) {
            Ok(model) => {
                info!(path = %settings.model_path.display(), "loaded regression model");
                Some(model)
            }
            Err(e) => {
                warn!("using seasonal fallback prediction: {}", e);
                None
            }
        };

        let metadata = match ModelMetadata::from_file(&settings.metadata_path) {
            Ok(metadata) => {
                info!(
                    features = metadata.feature_columns.len(),
                    "loaded model metadata"
                );
                metadata
            }
            Err(e) => {
                warn!("using default feature set: {}", e);
                ModelMetadata::default()
            }
        };

        let history = match History::from_file(&settings.history_path) {
            Ok(history) => {
                info!(rows = history.rows.len(), "loaded historical dataset");
                history
            }
            Err(e) => {
                warn!("historical dataset unavailable: {}", e);
                History::default()
            }
        };

        Assets {
            model,
            metadata,
            history,
        }
    }

    /// True when the trained model file was found and parsed.
    pub fn primary_model_available(&self) -> bool {
        self.model.is_some()
    }

    /// Next-day AQI prediction from the latest feature row.
    ///
    /// Falls back to [`FALLBACK_PREDICTION`] when the model or the latest
    /// feature row is unavailable. Rounded to one decimal place.
    pub fn next_day_prediction(&self) -> f64 {
        let predicted = match (&self.model, self.history.latest()) {
            (Some(model), Some(latest)) => {
                let features: Vec<f64> = self
                    .metadata
                    .feature_columns
                    .iter()
                    .map(|column| self.history.value(latest, column).unwrap_or(0.0))
                    .collect();
                model.predict(&features)
            }
            _ => FALLBACK_PREDICTION,
        };
        (predicted * 10.0).round() / 10.0
    }
}
