//! Event planner domain types: request context and per-date predictions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aqi::{AqiCategory, Confidence};

/// Supported event types. Labels match the frontend selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EventType {
    #[default]
    #[serde(rename = "Outdoor Wedding")]
    OutdoorWedding,
    #[serde(rename = "Birthday Party")]
    BirthdayParty,
    #[serde(rename = "Sports Tournament")]
    SportsTournament,
    #[serde(rename = "Corporate Event")]
    CorporateEvent,
    #[serde(rename = "Festival/Celebration")]
    Festival,
    #[serde(rename = "Construction Start")]
    ConstructionStart,
    #[serde(rename = "School Sports Day")]
    SchoolSportsDay,
    #[serde(rename = "Community Gathering")]
    CommunityGathering,
    #[serde(rename = "Charity Run/Walk")]
    CharityRun,
}

/// Expected attendance bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AttendanceBucket {
    #[serde(rename = "< 50 people")]
    UpTo50,
    #[default]
    #[serde(rename = "50-100 people")]
    From50To100,
    #[serde(rename = "100-250 people")]
    From100To250,
    #[serde(rename = "250-500 people")]
    From250To500,
    #[serde(rename = "500+ people")]
    Over500,
}

/// Attendee considerations offered by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VulnerableGroup {
    Children,
    #[serde(rename = "Elderly attendees")]
    Elderly,
    #[serde(rename = "Respiratory conditions")]
    RespiratoryConditions,
    #[serde(rename = "Pregnant Women")]
    PregnantWomen,
    #[serde(rename = "Cardiac patients")]
    CardiacPatients,
    #[serde(rename = "Professional athletes")]
    ProfessionalAthletes,
    #[serde(rename = "General population")]
    GeneralPopulation,
}

impl VulnerableGroup {
    /// Whether this group triggers the sensitive-attendee scoring penalty.
    /// Professional athletes and the general population do not.
    pub fn is_sensitive(&self) -> bool {
        matches!(
            self,
            VulnerableGroup::Children
                | VulnerableGroup::Elderly
                | VulnerableGroup::RespiratoryConditions
                | VulnerableGroup::PregnantWomen
                | VulnerableGroup::CardiacPatients
        )
    }
}

/// A planner request: an inclusive date span plus event context.
///
/// Either date may be absent or inverted; the planner then falls back to
/// the default 30-60 day ahead window.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DateRequest {
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub event_type: EventType,
    #[serde(default)]
    pub attendance: AttendanceBucket,
    #[serde(default)]
    pub vulnerable_groups: Vec<VulnerableGroup>,
}

impl DateRequest {
    /// A sensitive group is selected and "General population" is not.
    pub fn has_sensitive_attendees(&self) -> bool {
        self.vulnerable_groups.iter().any(|g| g.is_sensitive())
            && !self
                .vulnerable_groups
                .contains(&VulnerableGroup::GeneralPopulation)
    }

    /// Only the top attendance bucket counts as a large event.
    pub fn is_large_event(&self) -> bool {
        self.attendance == AttendanceBucket::Over500
    }
}

/// One ranked entry of the planner output. Derived, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatePrediction {
    pub date: NaiveDate,
    /// Full weekday name, e.g. "Monday".
    pub day: String,
    /// Seasonal AQI estimate, one decimal place, within [100, 450].
    pub estimated_aqi: f64,
    pub category: AqiCategory,
    /// Suitability score in [0, 100].
    pub suitability_score: u8,
    pub confidence: Confidence,
}

/// Explicit UI state carried in planner responses, replacing the ambient
/// session flag the dashboard previously relied on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    /// No analysis requested yet; show planning tips.
    Idle,
    /// Ranked recommendations are present.
    Ranked,
}
