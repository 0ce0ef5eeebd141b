//! Seasonal AQI estimator.
//!
//! Maps a calendar date to an estimated AQI from a fixed monthly baseline
//! reflecting Delhi's seasonal pollution pattern (winter peaks, monsoon
//! lows), with a weekend adjustment and bounded multiplicative noise.
//! The estimator is independent of the trained regression model.

use chrono::{Datelike, NaiveDate, Weekday};
use rand::Rng;

/// Baseline AQI per calendar month, January first.
pub const MONTHLY_BASELINE: [f64; 12] = [
    280.0, 260.0, 220.0, 180.0, 160.0, 150.0, 140.0, 150.0, 160.0, 180.0, 240.0, 270.0,
];

/// Weekends run worse than weekdays.
pub const WEEKEND_FACTOR: f64 = 1.12;

/// Half-width of the uniform multiplicative noise band.
pub const NOISE_SPAN: f64 = 0.10;

/// Estimates are clamped to this range. The monthly table never produces
/// values that would claim Good air quality; the floor makes that explicit.
pub const AQI_FLOOR: f64 = 100.0;
pub const AQI_CEILING: f64 = 450.0;

/// Baseline AQI for the date's month, before any adjustment.
pub fn monthly_baseline(date: NaiveDate) -> f64 {
    MONTHLY_BASELINE[date.month0() as usize]
}

/// Monthly baseline with the weekend factor applied, before noise.
pub fn adjusted_baseline(date: NaiveDate) -> f64 {
    let base = monthly_baseline(date);
    if is_weekend(date) {
        base * WEEKEND_FACTOR
    } else {
        base
    }
}

/// Estimate the AQI for a date using the supplied random source.
///
/// The result is clamped to [`AQI_FLOOR`, `AQI_CEILING`] and rounded to
/// one decimal place. Total over its input domain; no error conditions.
pub fn estimate_with<R: Rng>(date: NaiveDate, rng: &mut R) -> f64 {
    let base = adjusted_baseline(date);
    let variation: f64 = rng.gen_range(-NOISE_SPAN..=NOISE_SPAN);
    let predicted = base * (1.0 + variation);
    round1(predicted.clamp(AQI_FLOOR, AQI_CEILING))
}

/// Estimate the AQI for a date using the process-global random source.
pub fn estimate(date: NaiveDate) -> f64 {
    estimate_with(date, &mut rand::thread_rng())
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
