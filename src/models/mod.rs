//! Domain model types shared across services and the HTTP layer.

pub mod aqi;
pub mod event;

pub use aqi::{AqiCategory, Confidence};
pub use event::{
    AttendanceBucket, DatePrediction, DateRequest, EventType, ViewState, VulnerableGroup,
};
