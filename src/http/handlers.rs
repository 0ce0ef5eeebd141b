//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{Duration, Local};

use super::dto::{
    ForecastCard, ForecastQuery, HealthResponse, ModelSummary, PlannerResponse, TipsQuery,
    TipsResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{DateRequest, ViewState};
use crate::services::{export, forecast, planner};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint reporting asset availability.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let model = if state.assets.primary_model_available() {
        "primary".to_string()
    } else {
        "seasonal-fallback".to_string()
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        model,
        history_rows: state.assets.history.rows.len(),
    }))
}

/// GET /v1/forecast
///
/// Next-day forecast card: prediction, category, weather snapshot, trend.
pub async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> HandlerResult<ForecastCard> {
    let target_date = query
        .date
        .unwrap_or_else(|| Local::now().date_naive() + Duration::days(1));

    Ok(Json(forecast::next_day_forecast(&state.assets, target_date)))
}

/// GET /v1/model
///
/// Model configuration status for the dashboard's configuration panel.
pub async fn get_model_status(State(state): State<AppState>) -> HandlerResult<ModelSummary> {
    Ok(Json(forecast::model_summary(&state.assets)))
}

/// POST /v1/planner/recommendations
///
/// Rank the requested date span for the described event.
pub async fn plan_recommendations(
    State(state): State<AppState>,
    Json(request): Json<DateRequest>,
) -> HandlerResult<PlannerResponse> {
    let predictions = planner::rank(&request, &state.config.planner)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let top_picks = predictions.iter().take(3).cloned().collect();
    let total = predictions.len();

    Ok(Json(PlannerResponse {
        view_state: ViewState::Ranked,
        predictions,
        top_picks,
        total,
    }))
}

/// POST /v1/planner/export
///
/// Same ranking as /recommendations, returned as a CSV attachment.
pub async fn export_recommendations(
    State(state): State<AppState>,
    Json(request): Json<DateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let predictions = planner::rank(&request, &state.config.planner)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let csv = export::to_csv(&predictions);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"aqi_event_recommendations.csv\"",
            ),
        ],
        csv,
    ))
}

/// GET /v1/planner/tips
///
/// Planning tips for an event type, shown before an analysis runs.
/// Without an event type the generic tip set is served.
pub async fn get_tips(
    State(_state): State<AppState>,
    Query(query): Query<TipsQuery>,
) -> HandlerResult<TipsResponse> {
    let tips = match query.event_type {
        Some(event_type) => planner::tips(event_type),
        None => planner::general_tips(),
    };

    Ok(Json(TipsResponse {
        view_state: ViewState::Idle,
        event_type: query.event_type,
        tips: tips.iter().map(|t| t.to_string()).collect(),
    }))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("no such endpoint".to_string())
}
