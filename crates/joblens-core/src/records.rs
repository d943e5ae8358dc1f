//! Decoding of spreadsheet-shaped input into typed [`Listing`] and [`Skill`]
//! records.
//!
//! A spreadsheet tab arrives as rows of cells where the first row holds the
//! column headers. CSV files have the same shape; JSON input is an array of
//! header → cell objects.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::listings::{Listing, Skill};

/// One spreadsheet row keyed by column header.
pub type Record = HashMap<String, String>;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported input format for {0}: expected .csv or .json")]
    UnsupportedFormat(String),

    #[error("unexpected input shape: {0}")]
    Shape(String),
}

/// Converts header-first rows into records.
///
/// Rows whose cells are all blank are dropped. Short rows are padded with
/// empty strings; cells beyond the header width are ignored.
#[must_use]
pub fn records_from_rows(rows: &[Vec<String>]) -> Vec<Record> {
    let Some((headers, data_rows)) = rows.split_first() else {
        return Vec::new();
    };

    data_rows
        .iter()
        .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
        .map(|row| {
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let cell = row.get(i).cloned().unwrap_or_default();
                    (header.trim().to_string(), cell)
                })
                .collect()
        })
        .collect()
}

fn field(record: &Record, column: &str) -> String {
    record.get(column).cloned().unwrap_or_default()
}

impl Listing {
    /// Builds a listing from a record. Missing columns become empty strings;
    /// unknown columns are ignored.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            title: field(record, "Job Title"),
            company: field(record, "Company"),
            salary: field(record, "Salary"),
            keywords: field(record, "Keywords"),
            location: field(record, "Location"),
            remote_status: field(record, "Remote Status"),
            industry: field(record, "Industry"),
            company_size: field(record, "Company Size"),
            priority: field(record, "Priority"),
            lead_source: field(record, "Lead Source"),
            url: field(record, "URL"),
        }
    }
}

impl Skill {
    /// Builds a skill from a record. Missing columns become empty strings.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: field(record, "Skill"),
            proficiency: field(record, "Proficiency"),
        }
    }
}

/// Load job listings from a `.csv` or `.json` file.
///
/// # Errors
///
/// Returns `InputError` if the file cannot be read, has an unsupported
/// extension, or is not shaped as a table of records.
pub fn load_listings(path: &Path) -> Result<Vec<Listing>, InputError> {
    let records = load_records(path)?;
    Ok(records.iter().map(Listing::from_record).collect())
}

/// Load the user's skill inventory from a `.csv` or `.json` file.
///
/// # Errors
///
/// Returns `InputError` if the file cannot be read, has an unsupported
/// extension, or is not shaped as a table of records.
pub fn load_skills(path: &Path) -> Result<Vec<Skill>, InputError> {
    let records = load_records(path)?;
    Ok(records.iter().map(Skill::from_record).collect())
}

fn load_records(path: &Path) -> Result<Vec<Record>, InputError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    let decode: fn(&str) -> Result<Vec<Record>, InputError> = match extension.as_deref() {
        Some("csv") => records_from_csv,
        Some("json") => records_from_json,
        _ => return Err(InputError::UnsupportedFormat(path.display().to_string())),
    };

    let content = std::fs::read_to_string(path).map_err(|e| InputError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let records = decode(&content)?;

    tracing::debug!(path = %path.display(), records = records.len(), "decoded input records");
    Ok(records)
}

fn records_from_csv(content: &str) -> Result<Vec<Record>, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row?;
        rows.push(row.iter().map(str::to_string).collect::<Vec<_>>());
    }

    Ok(records_from_rows(&rows))
}

fn records_from_json(content: &str) -> Result<Vec<Record>, InputError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let serde_json::Value::Array(items) = value else {
        return Err(InputError::Shape("expected a JSON array of objects".to_string()));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            serde_json::Value::Object(map) => Ok(map
                .into_iter()
                .map(|(column, cell)| (column.trim().to_string(), cell_to_string(cell)))
                .collect()),
            other => Err(InputError::Shape(format!(
                "element {i} is not an object: {other}"
            ))),
        })
        .collect()
}

fn cell_to_string(cell: serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
