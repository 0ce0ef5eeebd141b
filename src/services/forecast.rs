//! Next-day forecast assembly.
//!
//! Combines the model prediction with a weather snapshot from the latest
//! dataset row and the recent AQI trend, ready for the dashboard's
//! forecast card.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::assets::Assets;
use crate::models::AqiCategory;

/// Days of history shown on the trend chart.
pub const TREND_DAYS: usize = 7;

/// Weather conditions from the latest dataset row. Missing columns read
/// as zero, matching the dashboard's lenient lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_c: f64,
    pub wind_speed_ms: f64,
    pub humidity_pct: f64,
    pub had_rain_yesterday: bool,
}

/// One point of the recent AQI trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub aqi: f64,
}

/// Summary of the serving model, for the configuration panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSummary {
    pub primary_model: bool,
    pub model_name: Option<String>,
    pub feature_count: usize,
    pub mae: Option<f64>,
    pub improvement_pct: Option<f64>,
}

/// Everything the forecast card displays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastCard {
    pub target_date: NaiveDate,
    pub predicted_aqi: f64,
    pub category: AqiCategory,
    pub color: String,
    pub weather: WeatherSnapshot,
    pub trend: Vec<TrendPoint>,
    pub model: ModelSummary,
}

/// Build the forecast card for a target date.
pub fn next_day_forecast(assets: &Assets, target_date: NaiveDate) -> ForecastCard {
    let predicted_aqi = assets.next_day_prediction();
    let category = AqiCategory::from_aqi(predicted_aqi);

    let weather = match assets.history.latest() {
        Some(latest) => WeatherSnapshot {
            temperature_c: assets
                .history
                .value(latest, "temperature_2m_mean")
                .unwrap_or(0.0),
            wind_speed_ms: assets.history.value(latest, "wind_speed").unwrap_or(0.0),
            humidity_pct: assets
                .history
                .value(latest, "humidity_percent")
                .unwrap_or(0.0),
            had_rain_yesterday: assets
                .history
                .value(latest, "had_rain_yesterday")
                .map(|v| v > 0.5)
                .unwrap_or(false),
        },
        None => WeatherSnapshot {
            temperature_c: 0.0,
            wind_speed_ms: 0.0,
            humidity_pct: 0.0,
            had_rain_yesterday: false,
        },
    };

    let trend = assets
        .history
        .trailing("target_aqi", TREND_DAYS)
        .into_iter()
        .map(|(date, aqi)| TrendPoint { date, aqi })
        .collect();

    ForecastCard {
        target_date,
        predicted_aqi,
        category,
        color: category.color().to_string(),
        weather,
        trend,
        model: model_summary(assets),
    }
}

/// Model status for the configuration endpoint.
pub fn model_summary(assets: &Assets) -> ModelSummary {
    ModelSummary {
        primary_model: assets.primary_model_available(),
        model_name: assets.metadata.model_name.clone(),
        feature_count: assets.metadata.feature_columns.len(),
        mae: assets.metadata.mae,
        improvement_pct: assets.metadata.improvement_pct,
    }
}
