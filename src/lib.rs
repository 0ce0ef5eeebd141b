//! # AQI Forecast Backend
//!
//! Rust backend for the Delhi Air Quality dashboard. It serves a next-day
//! AQI forecast from a pre-trained linear regression model and an event
//! planner that ranks candidate dates for outdoor events using a seasonal
//! heuristic. The backend exposes a REST API via Axum for the frontend.
//!
//! ## Features
//!
//! - **Forecast**: next-day AQI prediction from the latest feature row of
//!   the historical dataset, with weather snapshot and recent trend
//! - **Event planner**: seasonal AQI estimation, suitability scoring, and
//!   date ranking over a requested calendar span
//! - **Export**: ranked recommendations as CSV
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: domain types (AQI categories, event context, predictions)
//! - [`assets`]: model artifact, metadata, and historical dataset loading
//! - [`services`]: business logic (estimation, scoring, ranking, export)
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`config`]: TOML/environment configuration

pub mod assets;
pub mod config;
pub mod models;
pub mod services;

pub mod http;
