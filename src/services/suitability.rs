//! Suitability scoring: AQI estimate to a 0-100 event suitability score.

use crate::models::Confidence;

/// Piecewise-linear base score before contextual penalties.
///
/// Non-increasing in AQI; continuous within each band.
pub fn base_score(aqi: f64) -> f64 {
    if aqi <= 50.0 {
        100.0
    } else if aqi <= 100.0 {
        85.0 + (100.0 - aqi) / 50.0 * 15.0
    } else if aqi <= 200.0 {
        60.0 + (200.0 - aqi) / 100.0 * 25.0
    } else if aqi <= 300.0 {
        30.0 + (300.0 - aqi) / 100.0 * 30.0
    } else if aqi <= 400.0 {
        10.0 + (400.0 - aqi) / 100.0 * 20.0
    } else {
        0.0
    }
}

/// Final suitability score with contextual penalties applied.
///
/// Penalties compose multiplicatively, each only when triggered:
/// sensitive attendees cost x0.6 above AQI 150 (or x0.8 above 100),
/// large events cost a further x0.7 above AQI 150.
pub fn score(aqi: f64, has_sensitive: bool, is_large_event: bool) -> u8 {
    let mut value = base_score(aqi);

    if has_sensitive {
        if aqi > 150.0 {
            value *= 0.6;
        } else if aqi > 100.0 {
            value *= 0.8;
        }
    }

    if is_large_event && aqi > 150.0 {
        value *= 0.7;
    }

    value.round().clamp(0.0, 100.0) as u8
}

/// Confidence label for a suitability score.
pub fn confidence(score: u8) -> Confidence {
    if score >= 80 {
        Confidence::High
    } else if score >= 50 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}
