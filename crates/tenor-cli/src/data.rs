//! Historical quote files.
//!
//! A quotes file is a CSV whose first column is `date` (YYYY-MM-DD) and
//! whose other columns are quote labels such as `Libor3M` or `Swap10Y`.
//! Values are rates in percent; an empty cell means no quote that day.

use std::io::Read;
use std::path::Path;

use tenor_core::types::Date;

use crate::error::{CliError, CliResult};

/// Quotes for one observation date.
#[derive(Debug, Clone, Copy)]
pub struct QuoteRow<'a> {
    labels: &'a [String],
    values: &'a [Option<f64>],
}

impl QuoteRow<'_> {
    /// Rate for `label` as a decimal, if quoted.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.labels
            .iter()
            .position(|l| l == label)
            .and_then(|i| self.values[i])
    }
}

/// Quotes by observation date, in file order.
#[derive(Debug, Clone)]
pub struct QuoteTable {
    labels: Vec<String>,
    rows: Vec<(Date, Vec<Option<f64>>)>,
}

impl QuoteTable {
    /// Reads a quotes file.
    pub fn from_path(path: &Path) -> CliResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file).map_err(|err| match err {
            CliError::InvalidQuotes { reason, .. } => CliError::InvalidQuotes {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    /// Reads quotes from any CSV source.
    pub fn from_reader<R: Read>(reader: R) -> CliResult<Self> {
        let invalid = |reason: String| CliError::InvalidQuotes {
            path: "<input>".into(),
            reason,
        };

        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let headers = rdr.headers()?.clone();
        match headers.get(0) {
            Some(first) if first.eq_ignore_ascii_case("date") => {}
            _ => return Err(invalid("first column must be 'date'".to_string())),
        }
        let labels: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let date_field = record.get(0).unwrap_or_default();
            let date: Date = date_field
                .parse()
                .map_err(|_| CliError::InvalidDate(date_field.to_string()))?;
            let values = record
                .iter()
                .skip(1)
                .zip(&labels)
                .map(|(cell, label)| {
                    if cell.is_empty() {
                        return Ok(None);
                    }
                    cell.parse::<f64>()
                        .map(|pct| Some(pct / 100.0))
                        .map_err(|_| invalid(format!("{label} on {date}: '{cell}' is not a number")))
                })
                .collect::<CliResult<Vec<_>>>()?;
            rows.push((date, values));
        }

        if rows.is_empty() {
            return Err(invalid("no observation rows".to_string()));
        }
        Ok(Self { labels, rows })
    }

    /// Observation dates in file order.
    pub fn dates(&self) -> Vec<Date> {
        self.rows.iter().map(|(d, _)| *d).collect()
    }

    /// Last observation date in the file.
    pub fn last_date(&self) -> Option<Date> {
        self.rows.last().map(|(d, _)| *d)
    }

    /// Quotes on `date`.
    pub fn row(&self, date: Date) -> Option<QuoteRow<'_>> {
        self.rows.iter().find(|(d, _)| *d == date).map(|(_, values)| QuoteRow {
            labels: &self.labels,
            values,
        })
    }
}
