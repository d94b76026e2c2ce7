use rust_decimal::Decimal;
use serde::Serialize;
use tracing::trace;

use super::{IncomeCategory, IncomeError, IncomeRecord};

/// Append-only collection of the income items for one tax session.
///
/// All aggregates are plain sums, so the order records were added in never
/// affects a result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IncomeLedger {
    records: Vec<IncomeRecord>,
}

impl IncomeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an already validated record.
    pub fn push(
        &mut self,
        record: IncomeRecord,
    ) {
        trace!(
            category = record.category().as_str(),
            amount = %record.amount(),
            tax_withheld = %record.tax_withheld(),
            "recorded income"
        );
        self.records.push(record);
    }

    /// Validates and appends an income item.
    ///
    /// # Errors
    ///
    /// Returns [`IncomeError::NegativeAmount`] or
    /// [`IncomeError::NegativeTaxWithheld`] when either value is below zero.
    /// The ledger is left unchanged on error.
    pub fn add_income(
        &mut self,
        category: IncomeCategory,
        description: impl Into<String>,
        amount: Decimal,
        tax_withheld: Decimal,
    ) -> Result<(), IncomeError> {
        let record = IncomeRecord::new(category, description, amount, tax_withheld)?;
        self.push(record);
        Ok(())
    }

    /// Like [`IncomeLedger::add_income`], but takes the category as a code
    /// such as `"wages"`.
    ///
    /// # Errors
    ///
    /// Returns [`IncomeError::InvalidCategory`] for an unknown code, in
    /// addition to the errors of [`IncomeLedger::add_income`].
    pub fn add_income_by_code(
        &mut self,
        category: &str,
        description: impl Into<String>,
        amount: Decimal,
        tax_withheld: Decimal,
    ) -> Result<(), IncomeError> {
        let category: IncomeCategory = category.parse()?;
        self.add_income(category, description, amount, tax_withheld)
    }

    pub fn records(&self) -> &[IncomeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total income for one category, zero when nothing matches.
    pub fn sum_by_category(
        &self,
        category: IncomeCategory,
    ) -> Decimal {
        self.records
            .iter()
            .filter(|r| r.category() == category)
            .map(IncomeRecord::amount)
            .sum()
    }

    /// Total tax withheld for one category, zero when nothing matches.
    pub fn sum_withheld_by_category(
        &self,
        category: IncomeCategory,
    ) -> Decimal {
        self.records
            .iter()
            .filter(|r| r.category() == category)
            .map(IncomeRecord::tax_withheld)
            .sum()
    }

    pub fn total_income(&self) -> Decimal {
        self.records.iter().map(IncomeRecord::amount).sum()
    }

    pub fn total_tax_withheld(&self) -> Decimal {
        self.records.iter().map(IncomeRecord::tax_withheld).sum()
    }
}

impl Extend<IncomeRecord> for IncomeLedger {
    fn extend<T: IntoIterator<Item = IncomeRecord>>(
        &mut self,
        iter: T,
    ) {
        for record in iter {
            self.push(record);
        }
    }
}

impl FromIterator<IncomeRecord> for IncomeLedger {
    fn from_iter<T: IntoIterator<Item = IncomeRecord>>(iter: T) -> Self {
        let mut ledger = Self::new();
        ledger.extend(iter);
        ledger
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn sample_ledger() -> IncomeLedger {
        let mut ledger = IncomeLedger::new();
        ledger
            .add_income(IncomeCategory::Wages, "CEO salary", dec!(8000000), dec!(0))
            .unwrap();
        ledger
            .add_income(IncomeCategory::Dividend, "AIS", dec!(4000000), dec!(400000))
            .unwrap();
        ledger
            .add_income(IncomeCategory::Dividend, "Intouch", dec!(4000000), dec!(400000))
            .unwrap();
        ledger
            .add_income(IncomeCategory::Interest, "Bank of Dubai", dec!(2000000), dec!(0))
            .unwrap();
        ledger
    }

    // =========================================================================
    // add_income tests
    // =========================================================================

    #[test]
    fn add_income_appends_in_order() {
        let ledger = sample_ledger();

        let descriptions: Vec<_> = ledger.records().iter().map(|r| r.description()).collect();
        assert_eq!(descriptions, vec!["CEO salary", "AIS", "Intouch", "Bank of Dubai"]);
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn add_income_rejects_negative_amount_and_leaves_ledger_unchanged() {
        let mut ledger = sample_ledger();

        let result = ledger.add_income(IncomeCategory::Wages, "refund", dec!(-100), dec!(0));

        assert_eq!(result, Err(IncomeError::NegativeAmount(dec!(-100))));
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn add_income_by_code_parses_category() {
        let mut ledger = IncomeLedger::new();

        ledger
            .add_income_by_code("interest", "Bangkok Bank", dec!(12000), dec!(0))
            .unwrap();

        assert_eq!(ledger.records()[0].category(), IncomeCategory::Interest);
    }

    #[test]
    fn add_income_by_code_rejects_unknown_category() {
        let mut ledger = IncomeLedger::new();

        let result = ledger.add_income_by_code("other", "lottery", dec!(1000), dec!(0));

        assert_eq!(result, Err(IncomeError::InvalidCategory("other".to_string())));
        assert!(ledger.is_empty());
    }

    // =========================================================================
    // aggregate tests
    // =========================================================================

    #[test]
    fn sum_by_category_accumulates_matching_records() {
        let ledger = sample_ledger();

        assert_eq!(ledger.sum_by_category(IncomeCategory::Wages), dec!(8000000));
        assert_eq!(ledger.sum_by_category(IncomeCategory::Dividend), dec!(8000000));
        assert_eq!(ledger.sum_by_category(IncomeCategory::Interest), dec!(2000000));
    }

    #[test]
    fn sum_withheld_by_category_accumulates_matching_records() {
        let ledger = sample_ledger();

        assert_eq!(ledger.sum_withheld_by_category(IncomeCategory::Wages), dec!(0));
        assert_eq!(ledger.sum_withheld_by_category(IncomeCategory::Dividend), dec!(800000));
    }

    #[test]
    fn sums_are_zero_for_empty_ledger() {
        let ledger = IncomeLedger::new();

        for category in IncomeCategory::ALL {
            assert_eq!(ledger.sum_by_category(category), Decimal::ZERO);
            assert_eq!(ledger.sum_withheld_by_category(category), Decimal::ZERO);
        }
        assert_eq!(ledger.total_income(), Decimal::ZERO);
        assert_eq!(ledger.total_tax_withheld(), Decimal::ZERO);
    }

    #[test]
    fn totals_cover_every_category() {
        let ledger = sample_ledger();

        assert_eq!(ledger.total_income(), dec!(18000000));
        assert_eq!(ledger.total_tax_withheld(), dec!(800000));
    }

    #[test]
    fn sums_do_not_depend_on_insertion_order() {
        let forward = sample_ledger();
        let reversed: IncomeLedger = forward.records().iter().rev().cloned().collect();

        for category in IncomeCategory::ALL {
            assert_eq!(forward.sum_by_category(category), reversed.sum_by_category(category));
            assert_eq!(
                forward.sum_withheld_by_category(category),
                reversed.sum_withheld_by_category(category)
            );
        }
    }
}
