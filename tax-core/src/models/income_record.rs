use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use super::IncomeCategory;

/// Errors raised when an income item cannot be recorded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IncomeError {
    /// The income amount was below zero.
    #[error("income amount must not be negative, got {0}")]
    NegativeAmount(Decimal),

    /// The tax withheld was below zero.
    #[error("tax withheld must not be negative, got {0}")]
    NegativeTaxWithheld(Decimal),

    /// A value was above [`IncomeRecord::MAX_AMOUNT`].
    #[error("{field} of {value} exceeds the largest accepted amount")]
    AmountTooLarge { field: &'static str, value: Decimal },

    /// The category code is not one of `wages`, `interest` or `dividend`.
    #[error("unsupported income category '{0}'")]
    InvalidCategory(String),
}

/// A single income item together with the tax already withheld on it.
///
/// Records are immutable once built. [`IncomeRecord::new`] is the only way to
/// construct one, so `amount` and `tax_withheld` always lie in
/// `0..=MAX_AMOUNT`. The cap keeps ledger sums and bracket arithmetic far
/// below the range of [`Decimal`] for any realistic number of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncomeRecord {
    category: IncomeCategory,
    description: String,
    amount: Decimal,
    tax_withheld: Decimal,
}

impl IncomeRecord {
    /// Largest accepted `amount` or `tax_withheld`: 10^18.
    pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_808_348_672, 232_830_643, 0, false, 0);

    pub fn new(
        category: IncomeCategory,
        description: impl Into<String>,
        amount: Decimal,
        tax_withheld: Decimal,
    ) -> Result<Self, IncomeError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(IncomeError::NegativeAmount(amount));
        }
        if tax_withheld.is_sign_negative() && !tax_withheld.is_zero() {
            return Err(IncomeError::NegativeTaxWithheld(tax_withheld));
        }
        if amount > Self::MAX_AMOUNT {
            return Err(IncomeError::AmountTooLarge {
                field: "amount",
                value: amount,
            });
        }
        if tax_withheld > Self::MAX_AMOUNT {
            return Err(IncomeError::AmountTooLarge {
                field: "tax withheld",
                value: tax_withheld,
            });
        }

        Ok(Self {
            category,
            description: description.into(),
            amount,
            tax_withheld,
        })
    }

    pub fn category(&self) -> IncomeCategory {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn tax_withheld(&self) -> Decimal {
        self.tax_withheld
    }
}
