//! AQI category and confidence scales.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Indian AQI category bands. Upper bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AqiCategory {
    Good,
    Satisfactory,
    Moderate,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
    Severe,
}

impl AqiCategory {
    /// Classify an AQI value. Boundaries are inclusive on the lower
    /// category: 50 is Good, 51 is Satisfactory, 200 is Moderate.
    pub fn from_aqi(aqi: f64) -> Self {
        if aqi <= 50.0 {
            AqiCategory::Good
        } else if aqi <= 100.0 {
            AqiCategory::Satisfactory
        } else if aqi <= 200.0 {
            AqiCategory::Moderate
        } else if aqi <= 300.0 {
            AqiCategory::Poor
        } else if aqi <= 400.0 {
            AqiCategory::VeryPoor
        } else {
            AqiCategory::Severe
        }
    }

    /// Display label, as shown in tables and CSV exports.
    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Satisfactory => "Satisfactory",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::Poor => "Poor",
            AqiCategory::VeryPoor => "Very Poor",
            AqiCategory::Severe => "Severe",
        }
    }

    /// Display color (hex) used by the frontend for cards and badges.
    pub fn color(&self) -> &'static str {
        match self {
            AqiCategory::Good => "#10b981",
            AqiCategory::Satisfactory => "#f59e0b",
            AqiCategory::Moderate => "#ea580c",
            AqiCategory::Poor => "#dc2626",
            AqiCategory::VeryPoor => "#991b1b",
            AqiCategory::Severe => "#7f1d1d",
        }
    }

    /// Outdoor-event advice for this band.
    pub fn advice(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Ideal conditions for any event",
            AqiCategory::Satisfactory => "Generally suitable for most events",
            AqiCategory::Moderate => "Consider indoor alternatives for sensitive groups",
            AqiCategory::Poor => "Not recommended for outdoor events",
            AqiCategory::VeryPoor => "Avoid outdoor events",
            AqiCategory::Severe => "Postpone or move indoors",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AqiCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Good" => Ok(AqiCategory::Good),
            "Satisfactory" => Ok(AqiCategory::Satisfactory),
            "Moderate" => Ok(AqiCategory::Moderate),
            "Poor" => Ok(AqiCategory::Poor),
            "Very Poor" => Ok(AqiCategory::VeryPoor),
            "Severe" => Ok(AqiCategory::Severe),
            other => Err(format!("unknown AQI category: {}", other)),
        }
    }
}

/// Confidence label attached to a suitability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Confidence::Low),
            "Medium" => Ok(Confidence::Medium),
            "High" => Ok(Confidence::High),
            other => Err(format!("unknown confidence label: {}", other)),
        }
    }
}
