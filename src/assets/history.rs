//! Historical feature dataset.
//!
//! A CSV with a leading `date` column and numeric feature columns, ordered
//! oldest to newest. Only the latest row feeds the forecast; the trailing
//! `target_aqi` values feed the trend chart.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use super::AssetError;

/// One dated row of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub date: NaiveDate,
    pub values: Vec<f64>,
}

/// The full dataset: column names (without `date`) plus rows in file order.
#[derive(Debug, Clone, Default)]
pub struct History {
    pub columns: Vec<String>,
    pub rows: Vec<HistoryRow>,
}

impl History {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| AssetError::io(path, e))?;
        Self::parse(&content).map_err(|reason| AssetError::parse(path, reason))
    }

    fn parse(content: &str) -> Result<Self, String> {
        let mut lines = content.lines();
        let header = lines.next().ok_or("empty file")?;
        let mut fields = header.split(',');
        match fields.next() {
            Some("date") => {}
            _ => return Err("first column must be 'date'".to_string()),
        }
        let columns: Vec<String> = fields.map(|s| s.trim().to_string()).collect();

        let mut rows = Vec::new();
        for (idx, raw) in lines.enumerate() {
            if raw.trim().is_empty() {
                continue;
            }
            let mut parts = raw.split(',');
            let date_field = parts.next().unwrap_or_default();
            let date = NaiveDate::parse_from_str(date_field, "%Y-%m-%d")
                .map_err(|e| format!("row {}: bad date '{}': {}", idx + 2, date_field, e))?;

            let values: Vec<f64> = parts
                .map(|v| {
                    let v = v.trim();
                    if v.is_empty() {
                        Ok(0.0)
                    } else {
                        v.parse::<f64>()
                            .map_err(|_| format!("row {}: bad value '{}'", idx + 2, v))
                    }
                })
                .collect::<Result<_, String>>()?;

            if values.len() != columns.len() {
                return Err(format!(
                    "row {}: expected {} values, found {}",
                    idx + 2,
                    columns.len(),
                    values.len()
                ));
            }
            rows.push(HistoryRow { date, values });
        }

        Ok(History { columns, rows })
    }

    /// Most recent row, by file position.
    pub fn latest(&self) -> Option<&HistoryRow> {
        self.rows.last()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// A named value from a row, if the column exists.
    pub fn value(&self, row: &HistoryRow, column: &str) -> Option<f64> {
        self.column_index(column).and_then(|i| row.values.get(i)).copied()
    }

    /// The trailing `n` (date, value) points of a column, oldest first.
    pub fn trailing(&self, column: &str, n: usize) -> Vec<(NaiveDate, f64)> {
        let Some(index) = self.column_index(column) else {
            return Vec::new();
        };
        let skip = self.rows.len().saturating_sub(n);
        self.rows[skip..]
            .iter()
            .filter_map(|row| row.values.get(index).map(|v| (row.date, *v)))
            .collect()
    }
}
