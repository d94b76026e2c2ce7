//! CSV loader for income items.
//!
//! ## CSV Format
//!
//! Columns are matched by header name, so their order does not matter.
//! Whitespace around values is ignored.
//!
//! | Column         | Required | Type    | Notes |
//! |----------------|----------|---------|-------|
//! | `category`     | yes      | string  | One of `wages`, `interest`, `dividend` (any case) |
//! | `description`  | no       | string  | Payer or source, informational only |
//! | `amount`       | yes      | decimal | Must not be negative |
//! | `tax_withheld` | no       | decimal | Empty or missing means `0` |
//!
//! ```csv
//! category,description,amount,tax_withheld
//! wages,Kasetsart University,290000,10000
//! interest,Bangkok Bank,12000,
//! dividend,SCC,15000,1500
//! ```

use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::{IncomeError, IncomeLedger};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading income data.
#[derive(Debug, Error)]
pub enum IncomeLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("invalid income on row {row}: {source}")]
    InvalidRecord {
        row: usize,
        #[source]
        source: IncomeError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for IncomeLoaderError {
    fn from(err: csv::Error) -> Self {
        IncomeLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of the income CSV file, before validation.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IncomeRow {
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub amount: Decimal,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub tax_withheld: Option<Decimal>,
}

/// Parses a decimal from the raw cell text rather than a guessed `f64`.
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.trim().parse::<Decimal>().map_err(serde::de::Error::custom)
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for income items stored as CSV.
pub struct IncomeLoader;

impl IncomeLoader {
    /// Parse income rows from a CSV reader, in file order.
    ///
    /// Rows are only checked for shape here; categories and signs are
    /// validated by [`IncomeLoader::load`].
    pub fn parse<R: Read>(reader: R) -> Result<Vec<IncomeRow>, IncomeLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in csv_reader.deserialize() {
            let row: IncomeRow = result?;
            rows.push(row);
        }

        Ok(rows)
    }

    /// Parse and validate income rows into a fresh ledger.
    ///
    /// # Errors
    ///
    /// * [`IncomeLoaderError::CsvParse`] if the CSV is malformed.
    /// * [`IncomeLoaderError::InvalidRecord`] with the 1-based row number
    ///   (header excluded) for an unknown category, a negative value or a
    ///   value above [`tax_core::IncomeRecord::MAX_AMOUNT`].
    pub fn load<R: Read>(reader: R) -> Result<IncomeLedger, IncomeLoaderError> {
        let rows = Self::parse(reader)?;
        let mut ledger = IncomeLedger::new();

        for (idx, row) in rows.into_iter().enumerate() {
            ledger
                .add_income_by_code(
                    &row.category,
                    row.description,
                    row.amount,
                    row.tax_withheld.unwrap_or(Decimal::ZERO),
                )
                .map_err(|source| IncomeLoaderError::InvalidRecord {
                    row: idx + 1,
                    source,
                })?;
        }

        debug!(records = ledger.len(), "loaded income ledger");
        Ok(ledger)
    }

    /// Convenience wrapper: open `path` and delegate to [`IncomeLoader::load`].
    pub fn load_from_path(path: &Path) -> Result<IncomeLedger, IncomeLoaderError> {
        let file = std::fs::File::open(path)?;
        Self::load(file)
    }
}
