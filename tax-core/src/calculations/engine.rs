//! Income tax engine.
//!
//! The engine assesses a taxpayer's [`IncomeLedger`] against a
//! [`TaxSchedule`] in two ways and charges the lower result:
//!
//! | Computation | Tax |
//! |-------------|-----|
//! | Separate    | bracket tax on wages less the personal deduction, plus a flat rate on interest above the exemption, plus a flat rate on dividends |
//! | Combined    | bracket tax on wages, dividends and (only when above the exemption) interest, less the personal deduction |
//!
//! Withholding is credited against the elected total to give the net amount
//! due. A negative net amount is a refund.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::{TaxEngine, TaxMethod};
//! use tax_core::{IncomeCategory, IncomeLedger, TaxSchedule};
//!
//! let mut ledger = IncomeLedger::new();
//! ledger.add_income(IncomeCategory::Wages, "Kasetsart University", dec!(290000), dec!(10000)).unwrap();
//! ledger.add_income(IncomeCategory::Interest, "Bangkok Bank", dec!(12000), dec!(0)).unwrap();
//! ledger.add_income(IncomeCategory::Dividend, "SCC", dec!(15000), dec!(1500)).unwrap();
//!
//! let schedule = TaxSchedule::default();
//! let engine = TaxEngine::new(&schedule);
//! let assessment = engine.assess(&ledger);
//!
//! assert_eq!(assessment.separate_tax, dec!(5500));
//! assert_eq!(assessment.combined_tax, dec!(4750));
//! assert_eq!(assessment.method, TaxMethod::Combined);
//! assert_eq!(assessment.total_tax, dec!(4750));
//! assert_eq!(assessment.net_due, dec!(-6750));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{max, min};
use crate::{IncomeCategory, IncomeLedger, TaxSchedule};

/// Which of the two computations the taxpayer was assessed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxMethod {
    /// Investment income taxed at its own flat rates.
    Separate,
    /// Investment income folded into ordinary income.
    Combined,
}

impl TaxMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Separate => "separate",
            Self::Combined => "combined",
        }
    }
}

/// Every intermediate value of one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAssessment {
    /// Sum of wages.
    pub ordinary_income: Decimal,
    pub interest_income: Decimal,
    pub dividend_income: Decimal,

    /// Bracket tax on wages after the personal deduction.
    pub ordinary_tax: Decimal,
    pub interest_tax: Decimal,
    pub dividend_tax: Decimal,

    /// `ordinary_tax + interest_tax + dividend_tax`.
    pub separate_tax: Decimal,

    /// Income taxed under the combined computation, before the deduction.
    pub combined_base: Decimal,
    pub combined_tax: Decimal,

    pub method: TaxMethod,

    /// The lower of `separate_tax` and `combined_tax`.
    pub total_tax: Decimal,
    pub total_withheld: Decimal,

    /// `total_tax - total_withheld`. Negative means a refund.
    pub net_due: Decimal,
}

/// Computes tax for income ledgers under one schedule.
///
/// The engine holds no state besides the borrowed schedule; a single engine
/// can assess any number of ledgers, from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct TaxEngine<'a> {
    schedule: &'a TaxSchedule,
}

impl<'a> TaxEngine<'a> {
    pub fn new(schedule: &'a TaxSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &'a TaxSchedule {
        self.schedule
    }

    /// Progressive bracket tax on net taxable income.
    ///
    /// Income of zero or less is taxed at zero.
    pub fn ordinary_bracket_tax(
        &self,
        net_income: Decimal,
    ) -> Decimal {
        // Validated schedules cover every positive income.
        match self.schedule.bracket_for(net_income) {
            Some(bracket) => bracket.tax_on(net_income),
            None => Decimal::ZERO,
        }
    }

    /// Flat tax on interest above the exemption.
    pub fn interest_tax(
        &self,
        interest_income: Decimal,
    ) -> Decimal {
        let taxable = max(interest_income - self.schedule.interest_exemption(), Decimal::ZERO);
        taxable * self.schedule.interest_rate()
    }

    /// Flat tax on all dividend income.
    pub fn dividend_tax(
        &self,
        dividend_income: Decimal,
    ) -> Decimal {
        dividend_income * self.schedule.dividend_rate()
    }

    /// Income subject to bracket tax under the combined computation.
    ///
    /// Dividends are always folded in. Interest is folded in only when it
    /// exceeds the exemption, i.e. when it would otherwise be taxed.
    pub fn combined_base(
        &self,
        ordinary_income: Decimal,
        interest_income: Decimal,
        dividend_income: Decimal,
    ) -> Decimal {
        let mut base = ordinary_income + dividend_income;
        if interest_income > self.schedule.interest_exemption() {
            base += interest_income;
        }
        base
    }

    /// Assesses `ledger` under both computations and elects the lower.
    pub fn assess(
        &self,
        ledger: &IncomeLedger,
    ) -> TaxAssessment {
        let ordinary_income = ledger.sum_by_category(IncomeCategory::Wages);
        let interest_income = ledger.sum_by_category(IncomeCategory::Interest);
        let dividend_income = ledger.sum_by_category(IncomeCategory::Dividend);
        let deduction = self.schedule.personal_deduction();

        let ordinary_tax = self.ordinary_bracket_tax(ordinary_income - deduction);
        let interest_tax = self.interest_tax(interest_income);
        let dividend_tax = self.dividend_tax(dividend_income);
        let separate_tax = ordinary_tax + interest_tax + dividend_tax;

        let combined_base = self.combined_base(ordinary_income, interest_income, dividend_income);
        let combined_tax = self.ordinary_bracket_tax(combined_base - deduction);

        let total_tax = min(separate_tax, combined_tax);
        let method = if combined_tax < separate_tax {
            TaxMethod::Combined
        } else {
            TaxMethod::Separate
        };

        let total_withheld = ledger.total_tax_withheld();
        let net_due = total_tax - total_withheld;

        debug!(
            records = ledger.len(),
            %separate_tax,
            %combined_tax,
            method = method.as_str(),
            %net_due,
            "assessed income tax"
        );

        TaxAssessment {
            ordinary_income,
            interest_income,
            dividend_income,
            ordinary_tax,
            interest_tax,
            dividend_tax,
            separate_tax,
            combined_base,
            combined_tax,
            method,
            total_tax,
            total_withheld,
            net_due,
        }
    }

    /// Total tax liability: the lower of the separate and combined computations.
    pub fn total_tax(
        &self,
        ledger: &IncomeLedger,
    ) -> Decimal {
        self.assess(ledger).total_tax
    }

    /// Total tax less all withholding. Positive is owed, negative is refunded.
    pub fn net_due(
        &self,
        ledger: &IncomeLedger,
    ) -> Decimal {
        self.assess(ledger).net_due
    }
}
