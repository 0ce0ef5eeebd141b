//! CSV export of ranked recommendations.
//!
//! The export format is the fixed six-column table the dashboard offers
//! for download. Fields never contain commas, so the writer and parser
//! work on plain comma-separated lines.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::DatePrediction;

/// Header row of the export format.
pub const CSV_HEADER: &str = "Date,Day,AQI,Category,Score,Confidence";

/// Errors raised when re-parsing an exported table.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("missing or invalid header, expected '{CSV_HEADER}'")]
    InvalidHeader,
    #[error("line {line}: expected 6 fields, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: {reason}")]
    InvalidField { line: usize, reason: String },
}

/// Serialize ranked predictions to CSV, header first, preserving order.
pub fn to_csv(predictions: &[DatePrediction]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for p in predictions {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            p.date.format("%Y-%m-%d"),
            p.day,
            p.estimated_aqi,
            p.category.label(),
            p.suitability_score,
            p.confidence.label(),
        ));
    }
    out
}

/// Parse an exported table back into predictions, preserving order.
pub fn parse_csv(text: &str) -> Result<Vec<DatePrediction>, ExportError> {
    let mut lines = text.lines();
    match lines.next() {
        Some(header) if header.trim_end() == CSV_HEADER => {}
        _ => return Err(ExportError::InvalidHeader),
    }

    let mut predictions = Vec::new();
    for (idx, raw) in lines.enumerate() {
        let line = idx + 2;
        if raw.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = raw.split(',').collect();
        if fields.len() != 6 {
            return Err(ExportError::FieldCount {
                line,
                found: fields.len(),
            });
        }

        let date = NaiveDate::parse_from_str(fields[0], "%Y-%m-%d").map_err(|e| {
            ExportError::InvalidField {
                line,
                reason: format!("bad date '{}': {}", fields[0], e),
            }
        })?;
        let estimated_aqi: f64 = fields[2].parse().map_err(|_| ExportError::InvalidField {
            line,
            reason: format!("bad AQI value '{}'", fields[2]),
        })?;
        let category = fields[3].parse().map_err(|reason: String| {
            ExportError::InvalidField { line, reason }
        })?;
        let suitability_score: u8 =
            fields[4].parse().map_err(|_| ExportError::InvalidField {
                line,
                reason: format!("bad score '{}'", fields[4]),
            })?;
        let confidence = fields[5].parse().map_err(|reason: String| {
            ExportError::InvalidField { line, reason }
        })?;

        predictions.push(DatePrediction {
            date,
            day: fields[1].to_string(),
            estimated_aqi,
            category,
            suitability_score,
            confidence,
        });
    }

    Ok(predictions)
}
