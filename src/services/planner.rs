//! Event date ranking.
//!
//! Expands a requested date span, estimates AQI and scores suitability for
//! every date, and orders the results best-first. Also serves the static
//! per-event-type planning tips shown before an analysis runs.

use chrono::{Duration, Local, NaiveDate};
use rand::Rng;
use thiserror::Error;

use crate::config::PlannerSettings;
use crate::models::{DatePrediction, DateRequest, EventType};
use crate::services::{seasonal, suitability};

/// Widest span a single request may expand, one leap year.
pub const MAX_SPAN_DAYS: i64 = 366;

/// Requested span is wider than [`MAX_SPAN_DAYS`].
#[derive(Debug, Error)]
#[error("date span of {days} days exceeds the 366-day limit")]
pub struct SpanTooWide {
    pub days: i64,
}

/// Resolve the requested span against `today`, falling back to the
/// configured days-ahead window (30-60 by default) when the span is
/// absent or inverted.
pub fn resolve_window(
    request: &DateRequest,
    today: NaiveDate,
    settings: &PlannerSettings,
) -> (NaiveDate, NaiveDate) {
    match (request.start, request.end) {
        (Some(start), Some(end)) if start <= end => (start, end),
        _ => (
            today + Duration::days(settings.window_start_days),
            today + Duration::days(settings.window_end_days),
        ),
    }
}

/// All dates of the inclusive span, ascending. Stops at the calendar
/// bound rather than overflowing past `NaiveDate::MAX`.
pub fn expand_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

/// Build the prediction for one date.
pub fn predict_date_with<R: Rng>(
    date: NaiveDate,
    has_sensitive: bool,
    is_large_event: bool,
    rng: &mut R,
) -> DatePrediction {
    let estimated_aqi = seasonal::estimate_with(date, rng);
    let suitability_score = suitability::score(estimated_aqi, has_sensitive, is_large_event);

    DatePrediction {
        date,
        day: date.format("%A").to_string(),
        estimated_aqi,
        category: crate::models::AqiCategory::from_aqi(estimated_aqi),
        suitability_score,
        confidence: suitability::confidence(suitability_score),
    }
}

/// Rank every date of the resolved span, best score first.
///
/// The sort is stable over the date-ascending expansion, so equal scores
/// keep earlier dates first. An empty span yields an empty list.
pub fn rank_with<R: Rng>(
    request: &DateRequest,
    today: NaiveDate,
    settings: &PlannerSettings,
    rng: &mut R,
) -> Vec<DatePrediction> {
    let (start, end) = resolve_window(request, today, settings);
    let has_sensitive = request.has_sensitive_attendees();
    let is_large_event = request.is_large_event();

    let mut predictions: Vec<DatePrediction> = expand_range(start, end)
        .into_iter()
        .map(|date| predict_date_with(date, has_sensitive, is_large_event, rng))
        .collect();

    predictions.sort_by(|a, b| b.suitability_score.cmp(&a.suitability_score));
    predictions
}

/// Rank using the process-global random source and today's local date.
///
/// Rejects spans wider than [`MAX_SPAN_DAYS`] so a single request
/// cannot expand into an unbounded allocation.
pub fn rank(
    request: &DateRequest,
    settings: &PlannerSettings,
) -> Result<Vec<DatePrediction>, SpanTooWide> {
    let today = Local::now().date_naive();
    let (start, end) = resolve_window(request, today, settings);
    let days = (end - start).num_days() + 1;
    if days > MAX_SPAN_DAYS {
        return Err(SpanTooWide { days });
    }
    Ok(rank_with(request, today, settings, &mut rand::thread_rng()))
}

/// Generic planning tips served when no event type is given.
pub fn general_tips() -> &'static [&'static str] {
    &[
        "Check AQI forecast 3 days in advance",
        "Have indoor backup plan",
        "Monitor weather conditions",
    ]
}

/// Planning tips for an event type, shown while no analysis has run.
pub fn tips(event_type: EventType) -> &'static [&'static str] {
    match event_type {
        EventType::OutdoorWedding => &[
            "Schedule ceremony for early morning (6-8 AM)",
            "Have indoor backup venue on standby",
            "Inform guests about air quality conditions",
        ],
        EventType::BirthdayParty => &[
            "For children's parties, prefer indoor venues",
            "Keep celebration duration under 3 hours",
            "Have indoor games as backup activities",
        ],
        EventType::SportsTournament => &[
            "Postpone if AQI exceeds 150",
            "Schedule 15-minute breaks every hour",
            "Ensure adequate medical support on site",
        ],
        EventType::CorporateEvent => &[
            "Check attendee health concerns in advance",
            "Have contingency indoor plan",
            "Inform attendees about air quality",
        ],
        EventType::Festival => &[
            "Mandatory masks if AQI > 100",
            "Create multiple sheltered areas",
            "Limit event duration to 4-6 hours",
        ],
        EventType::ConstructionStart => &[
            "Monitor AQI hourly during work",
            "Provide proper respiratory protection",
            "Schedule heavy work for better AQI periods",
        ],
        EventType::SchoolSportsDay => &[
            "Postpone if AQI > 150 for children's safety",
            "Have indoor alternative activities",
            "Keep events short (max 2-3 hours)",
        ],
        EventType::CommunityGathering => &[
            "Inform elderly attendees about conditions",
            "Have sheltered seating areas",
            "Consider shorter duration",
        ],
        EventType::CharityRun => &[
            "Cancel if AQI > 200",
            "Provide masks for all participants",
            "Have medical team on standby",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_window_passes_valid_span_through() {
        let request = DateRequest {
            start: Some(date(2024, 5, 1)),
            end: Some(date(2024, 5, 10)),
            ..Default::default()
        };
        let (start, end) = resolve_window(&request, date(2024, 4, 1), &PlannerSettings::default());
        assert_eq!(start, date(2024, 5, 1));
        assert_eq!(end, date(2024, 5, 10));
    }

    #[test]
    fn test_resolve_window_falls_back_on_inverted_span() {
        let request = DateRequest {
            start: Some(date(2024, 5, 10)),
            end: Some(date(2024, 5, 1)),
            ..Default::default()
        };
        let today = date(2024, 4, 1);
        let settings = PlannerSettings::default();
        let (start, end) = resolve_window(&request, today, &settings);
        assert_eq!(start, today + Duration::days(settings.window_start_days));
        assert_eq!(end, today + Duration::days(settings.window_end_days));
    }

    #[test]
    fn test_resolve_window_falls_back_on_missing_dates() {
        let request = DateRequest {
            start: Some(date(2024, 5, 10)),
            end: None,
            ..Default::default()
        };
        let today = date(2024, 4, 1);
        let (start, end) = resolve_window(&request, today, &PlannerSettings::default());
        assert_eq!(start, date(2024, 5, 1));
        assert_eq!(end, date(2024, 5, 31));
    }

    #[test]
    fn test_resolve_window_honors_configured_offsets() {
        let settings = PlannerSettings {
            window_start_days: 7,
            window_end_days: 14,
        };
        let today = date(2024, 4, 1);
        let (start, end) = resolve_window(&DateRequest::default(), today, &settings);
        assert_eq!(start, date(2024, 4, 8));
        assert_eq!(end, date(2024, 4, 15));
    }

    #[test]
    fn test_expand_range_inclusive() {
        let dates = expand_range(date(2024, 1, 30), date(2024, 2, 2));
        assert_eq!(
            dates,
            vec![
                date(2024, 1, 30),
                date(2024, 1, 31),
                date(2024, 2, 1),
                date(2024, 2, 2),
            ]
        );
    }

    #[test]
    fn test_expand_range_stops_at_calendar_end() {
        // A span ending on the last representable date must not
        // overflow while advancing past it.
        let dates = expand_range(NaiveDate::MAX, NaiveDate::MAX);
        assert_eq!(dates, vec![NaiveDate::MAX]);
    }

    #[test]
    fn test_rank_handles_last_representable_date() {
        let request = DateRequest {
            start: Some(NaiveDate::MAX),
            end: Some(NaiveDate::MAX),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let ranked = rank_with(&request, date(2024, 1, 1), &PlannerSettings::default(), &mut rng);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].date, NaiveDate::MAX);
    }

    #[test]
    fn test_rank_rejects_oversized_span() {
        let request = DateRequest {
            start: Some(date(2024, 1, 1)),
            end: Some(date(2026, 1, 1)),
            ..Default::default()
        };
        let err = rank(&request, &PlannerSettings::default()).unwrap_err();
        assert!(err.days > MAX_SPAN_DAYS);
    }

    #[test]
    fn test_rank_accepts_year_wide_span() {
        let request = DateRequest {
            start: Some(date(2024, 1, 1)),
            end: Some(date(2024, 12, 31)),
            ..Default::default()
        };
        let ranked = rank(&request, &PlannerSettings::default()).unwrap();
        assert_eq!(ranked.len(), 366);
    }

    #[test]
    fn test_general_tips_nonempty() {
        assert_eq!(general_tips().len(), 3);
    }

    #[test]
    fn test_expand_range_single_date() {
        let dates = expand_range(date(2024, 1, 1), date(2024, 1, 1));
        assert_eq!(dates.len(), 1);
    }

    #[test]
    fn test_rank_sorted_descending_with_date_tiebreak() {
        let request = DateRequest {
            start: Some(date(2024, 1, 1)),
            end: Some(date(2024, 1, 14)),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let ranked = rank_with(&request, date(2023, 12, 1), &PlannerSettings::default(), &mut rng);
        assert_eq!(ranked.len(), 14);

        for pair in ranked.windows(2) {
            assert!(pair[0].suitability_score >= pair[1].suitability_score);
            if pair[0].suitability_score == pair[1].suitability_score {
                assert!(pair[0].date < pair[1].date);
            }
        }
    }

    #[test]
    fn test_rank_january_scenario() {
        // January baseline is 280; every estimate lands in Poor or worse
        // and scores stay in the low band.
        let request = DateRequest {
            start: Some(date(2024, 1, 1)),
            end: Some(date(2024, 1, 3)),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        let ranked = rank_with(&request, date(2023, 12, 1), &PlannerSettings::default(), &mut rng);
        assert_eq!(ranked.len(), 3);

        for prediction in &ranked {
            assert!(prediction.estimated_aqi >= 100.0);
            assert!(prediction.estimated_aqi <= 450.0);
            assert!(matches!(
                prediction.category,
                crate::models::AqiCategory::Poor | crate::models::AqiCategory::VeryPoor
            ));
            assert!(prediction.suitability_score < 50);
            assert_eq!(prediction.confidence, crate::models::Confidence::Low);
        }
    }

    #[test]
    fn test_predict_date_fills_weekday_name() {
        let mut rng = StdRng::seed_from_u64(5);
        let prediction = predict_date_with(date(2024, 1, 1), false, false, &mut rng);
        assert_eq!(prediction.day, "Monday");
    }

    #[test]
    fn test_tips_cover_every_event_type() {
        let event_types = [
            EventType::OutdoorWedding,
            EventType::BirthdayParty,
            EventType::SportsTournament,
            EventType::CorporateEvent,
            EventType::Festival,
            EventType::ConstructionStart,
            EventType::SchoolSportsDay,
            EventType::CommunityGathering,
            EventType::CharityRun,
        ];
        for event_type in event_types {
            assert!(!tips(event_type).is_empty());
        }
    }
}
