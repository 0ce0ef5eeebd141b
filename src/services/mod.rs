//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP handlers and the domain models. The
//! planner services are pure request-scoped computation; the forecast
//! service reads from the assets loaded at startup.

pub mod export;
pub mod forecast;
pub mod planner;
pub mod seasonal;
pub mod suitability;

pub use export::{parse_csv, to_csv};
pub use forecast::next_day_forecast;
pub use planner::{rank, rank_with};
