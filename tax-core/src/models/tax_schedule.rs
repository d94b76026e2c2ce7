use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::TaxBracket;

/// Errors found while validating a tax schedule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("schedule has no tax brackets")]
    NoBrackets,

    #[error("first bracket must start at 0, starts at {0}")]
    FirstBracketNotAtZero(Decimal),

    #[error("bracket {index} has no upper bound but is not the last bracket")]
    UnboundedBeforeLast { index: usize },

    #[error("last bracket must have no upper bound, found {0}")]
    BoundedTopBracket(Decimal),

    #[error("bracket {index} upper bound {max} is not above its lower bound {min}")]
    EmptyBracket {
        index: usize,
        min: Decimal,
        max: Decimal,
    },

    #[error("bracket {index} starts at {found}, expected {expected} to follow the previous bracket")]
    Gap {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error("bracket {index} base tax is {found}, expected {expected} for a continuous schedule")]
    Discontinuous {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error("{name} must be a rate between 0 and 1, got {value}")]
    InvalidRate { name: String, value: Decimal },

    #[error("{name} must not be negative, got {value}")]
    NegativeAmount { name: String, value: Decimal },
}

/// Unvalidated schedule values, as written in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxScheduleConfig {
    /// Allowance subtracted from income before bracket tax.
    pub personal_deduction: Decimal,

    /// Interest income that is never taxed under the separate computation.
    pub interest_exemption: Decimal,

    /// Flat rate on interest above the exemption.
    pub interest_rate: Decimal,

    /// Flat rate on all dividend income.
    pub dividend_rate: Decimal,

    /// Progressive brackets, ascending by `min_income`.
    pub brackets: Vec<TaxBracket>,
}

/// The constants the tax engine works from.
///
/// A `TaxSchedule` can only be obtained through validation (or
/// [`TaxSchedule::default`]), so its brackets always start at zero, are
/// contiguous and continuous, and end in one open-ended bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaxScheduleConfig", into = "TaxScheduleConfig")]
pub struct TaxSchedule {
    personal_deduction: Decimal,
    interest_exemption: Decimal,
    interest_rate: Decimal,
    dividend_rate: Decimal,
    brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    /// Validates `config` and builds a schedule from it.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScheduleError`] found.
    pub fn new(config: TaxScheduleConfig) -> Result<Self, ScheduleError> {
        validate_amount("personal_deduction", config.personal_deduction)?;
        validate_amount("interest_exemption", config.interest_exemption)?;
        validate_rate("interest_rate", config.interest_rate)?;
        validate_rate("dividend_rate", config.dividend_rate)?;
        validate_brackets(&config.brackets)?;

        Ok(Self {
            personal_deduction: config.personal_deduction,
            interest_exemption: config.interest_exemption,
            interest_rate: config.interest_rate,
            dividend_rate: config.dividend_rate,
            brackets: config.brackets,
        })
    }

    pub fn personal_deduction(&self) -> Decimal {
        self.personal_deduction
    }

    pub fn interest_exemption(&self) -> Decimal {
        self.interest_exemption
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    pub fn dividend_rate(&self) -> Decimal {
        self.dividend_rate
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// The bracket `income` falls in, or `None` for income of zero or less.
    pub fn bracket_for(
        &self,
        income: Decimal,
    ) -> Option<&TaxBracket> {
        self.brackets.iter().find(|b| b.contains(income))
    }
}

impl Default for TaxSchedule {
    /// The statutory schedule: 60,000 personal deduction, 20,000 interest
    /// exemption, 15% on interest, 10% on dividends and eight brackets from
    /// 0% to 35%.
    fn default() -> Self {
        let band = |min: i64, max: Option<i64>, rate_pct: i64, base: i64| TaxBracket {
            min_income: Decimal::from(min),
            max_income: max.map(Decimal::from),
            tax_rate: Decimal::new(rate_pct, 2),
            base_tax: Decimal::from(base),
        };

        Self {
            personal_deduction: Decimal::from(60_000),
            interest_exemption: Decimal::from(20_000),
            interest_rate: Decimal::new(15, 2),
            dividend_rate: Decimal::new(10, 2),
            brackets: vec![
                band(0, Some(150_000), 0, 0),
                band(150_000, Some(300_000), 5, 0),
                band(300_000, Some(500_000), 10, 7_500),
                band(500_000, Some(750_000), 15, 27_500),
                band(750_000, Some(1_000_000), 20, 65_000),
                band(1_000_000, Some(2_000_000), 25, 115_000),
                band(2_000_000, Some(4_000_000), 30, 365_000),
                band(4_000_000, None, 35, 965_000),
            ],
        }
    }
}

impl TryFrom<TaxScheduleConfig> for TaxSchedule {
    type Error = ScheduleError;

    fn try_from(config: TaxScheduleConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

impl From<TaxSchedule> for TaxScheduleConfig {
    fn from(schedule: TaxSchedule) -> Self {
        Self {
            personal_deduction: schedule.personal_deduction,
            interest_exemption: schedule.interest_exemption,
            interest_rate: schedule.interest_rate,
            dividend_rate: schedule.dividend_rate,
            brackets: schedule.brackets,
        }
    }
}

fn validate_amount(
    name: &str,
    value: Decimal,
) -> Result<(), ScheduleError> {
    if value < Decimal::ZERO {
        return Err(ScheduleError::NegativeAmount {
            name: name.to_string(),
            value,
        });
    }
    Ok(())
}

fn validate_rate(
    name: &str,
    value: Decimal,
) -> Result<(), ScheduleError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(ScheduleError::InvalidRate {
            name: name.to_string(),
            value,
        });
    }
    Ok(())
}

fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), ScheduleError> {
    let Some(first) = brackets.first() else {
        return Err(ScheduleError::NoBrackets);
    };
    if !first.min_income.is_zero() {
        return Err(ScheduleError::FirstBracketNotAtZero(first.min_income));
    }

    for (index, bracket) in brackets.iter().enumerate() {
        validate_rate(&format!("bracket {index} tax_rate"), bracket.tax_rate)?;
        validate_amount(&format!("bracket {index} base_tax"), bracket.base_tax)?;

        let Some(next) = brackets.get(index + 1) else {
            // Top bracket
            return match bracket.max_income {
                Some(max) => Err(ScheduleError::BoundedTopBracket(max)),
                None => Ok(()),
            };
        };

        let max = bracket
            .max_income
            .ok_or(ScheduleError::UnboundedBeforeLast { index })?;
        if max <= bracket.min_income {
            return Err(ScheduleError::EmptyBracket {
                index,
                min: bracket.min_income,
                max,
            });
        }
        if next.min_income != max {
            return Err(ScheduleError::Gap {
                index: index + 1,
                expected: max,
                found: next.min_income,
            });
        }
        let expected = bracket.tax_on(max);
        if next.base_tax != expected {
            return Err(ScheduleError::Discontinuous {
                index: index + 1,
                expected,
                found: next.base_tax,
            });
        }
    }

    Ok(())
}
