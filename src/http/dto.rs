//! Data Transfer Objects for the HTTP API.
//!
//! Planner requests reuse the domain `DateRequest` directly; service
//! output types that already derive Serialize are re-exported.

use serde::{Deserialize, Serialize};

pub use crate::models::{DatePrediction, DateRequest, EventType, ViewState};
pub use crate::services::forecast::{ForecastCard, ModelSummary, TrendPoint, WeatherSnapshot};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Whether the trained model is serving (vs. the seasonal fallback)
    pub model: String,
    /// Number of rows in the historical dataset
    pub history_rows: usize,
}

/// Ranked planner recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerResponse {
    pub view_state: ViewState,
    /// All dates of the span, best score first
    pub predictions: Vec<DatePrediction>,
    /// The top three picks, for the recommendation cards
    pub top_picks: Vec<DatePrediction>,
    pub total: usize,
}

/// Query parameters for the tips endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TipsQuery {
    #[serde(default)]
    pub event_type: Option<EventType>,
}

/// Planning tips for an event type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipsResponse {
    pub view_state: ViewState,
    /// Absent when the generic tip set is served
    pub event_type: Option<EventType>,
    pub tips: Vec<String>,
}

/// Query parameters for the forecast endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ForecastQuery {
    /// Target date; defaults to tomorrow
    #[serde(default)]
    pub date: Option<chrono::NaiveDate>,
}
