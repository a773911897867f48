//! CSV → `NewLead` parsing for `POST /leads/upload`.
//!
//! Recognised columns: `name`, `role`, `company`, `industry`, `location`,
//! `linkedin_bio` (`bio` is accepted as an alias). Header names are matched
//! case-insensitively; unknown columns are ignored. Cells are trimmed and
//! empty cells become `None`.

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::models::lead::NewLead;

#[derive(Debug, Error)]
pub enum CsvImportError {
    #[error("Uploaded file is not valid UTF-8")]
    NotUtf8,

    #[error("CSV is missing the required 'name' column")]
    MissingNameColumn,

    #[error("Row {row} has an empty 'name' value")]
    BlankName { row: usize },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct LeadCsvRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    role: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    company: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    industry: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    location: Option<String>,
    #[serde(default, alias = "bio", deserialize_with = "empty_string_as_none")]
    linkedin_bio: Option<String>,
}

/// Parses an uploaded CSV body into leads, preserving row order.
pub fn parse_leads_csv(body: &[u8]) -> Result<Vec<NewLead>, CsvImportError> {
    let text = std::str::from_utf8(body).map_err(|_| CsvImportError::NotUtf8)?;
    let text = text.trim_start_matches('\u{feff}');

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: csv::StringRecord = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();
    if !headers.iter().any(|h| h == "name") {
        return Err(CsvImportError::MissingNameColumn);
    }
    reader.set_headers(headers);

    let mut leads = Vec::new();
    for (index, record) in reader.deserialize::<LeadCsvRow>().enumerate() {
        let row = record?;
        let name = row
            .name
            .ok_or(CsvImportError::BlankName { row: index + 1 })?;

        leads.push(NewLead {
            name,
            role: row.role,
            company: row.company,
            industry: row.industry,
            location: row.location,
            linkedin_bio: row.linkedin_bio,
        });
    }

    Ok(leads)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}
