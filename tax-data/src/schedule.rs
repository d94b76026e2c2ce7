//! TOML loader for tax schedules.
//!
//! ```toml
//! personal_deduction = 60000
//! interest_exemption = 20000
//! interest_rate = "0.15"
//! dividend_rate = "0.10"
//!
//! [[brackets]]
//! min_income = 0
//! max_income = 150000
//! tax_rate = "0"
//! base_tax = 0
//!
//! [[brackets]]
//! min_income = 150000
//! tax_rate = "0.05"
//! base_tax = 0
//! ```
//!
//! Rates are best written as strings so they are read as exact decimals.
//! The last bracket omits `max_income`.

use std::path::Path;

use tax_core::TaxSchedule;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ScheduleLoaderError {
    #[error("failed to read schedule file: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML, or a schedule that failed validation.
    #[error("invalid schedule: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for ScheduleLoaderError {
    fn from(err: toml::de::Error) -> Self {
        ScheduleLoaderError::Parse(err.to_string())
    }
}

pub struct ScheduleLoader;

impl ScheduleLoader {
    pub fn parse(input: &str) -> Result<TaxSchedule, ScheduleLoaderError> {
        let schedule: TaxSchedule = toml::from_str(input)?;
        debug!(brackets = schedule.brackets().len(), "parsed tax schedule");
        Ok(schedule)
    }

    pub fn load_from_path(path: &Path) -> Result<TaxSchedule, ScheduleLoaderError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const DEFAULT_SCHEDULE: &str = include_str!("../test-data/default_schedule.toml");

    #[test]
    fn parse_default_schedule_file_matches_builtin() {
        let schedule = ScheduleLoader::parse(DEFAULT_SCHEDULE).expect("Failed to parse schedule");

        assert_eq!(schedule, TaxSchedule::default());
    }

    #[test]
    fn parse_reads_integer_and_string_amounts() {
        let toml = r#"
personal_deduction = 30000
interest_exemption = "0"
interest_rate = "0.15"
dividend_rate = "0.10"

[[brackets]]
min_income = 0
tax_rate = "0.20"
base_tax = 0
"#;

        let schedule = ScheduleLoader::parse(toml).expect("Failed to parse schedule");

        assert_eq!(schedule.personal_deduction(), dec!(30000));
        assert_eq!(schedule.brackets()[0].tax_rate, dec!(0.20));
    }

    #[test]
    fn parse_rejects_invalid_schedule() {
        let toml = r#"
personal_deduction = 60000
interest_exemption = 20000
interest_rate = "0.15"
dividend_rate = "0.10"

[[brackets]]
min_income = 0
max_income = 150000
tax_rate = "0"
base_tax = 0
"#;

        let err = ScheduleLoader::parse(toml).expect_err("Should reject bounded top bracket");

        let ScheduleLoaderError::Parse(msg) = err else {
            panic!("Expected Parse error, got: {:?}", err);
        };
        assert!(msg.contains("last bracket"), "unexpected message: {msg}");
    }

    #[test]
    fn parse_rejects_missing_field() {
        let err = ScheduleLoader::parse("personal_deduction = 60000").expect_err("Should fail");

        assert!(matches!(err, ScheduleLoaderError::Parse(_)), "got {err:?}");
    }
}
