//! Plain-text tax statement.
//!
//! ```text
//! Tax Report for Fatalai Jon
//! ---------------------------------------------------------------------
//! Income Type                              Total Amount Tax Withheld
//! Ordinary Income                            290,000.00    10,000.00
//! Interest Income                             12,000.00         0.00
//! Dividend Income                             15,000.00     1,500.00
//! Total Tax & Total Tax Withheld               4,750.00    11,500.00
//! Amount of Tax overpaid                       6,750.00
//! ```

use std::fmt;

use rust_decimal::Decimal;
use tax_core::calculations::TaxAssessment;
use tax_core::calculations::common::round_half_up;
use tax_core::{IncomeCategory, IncomeLedger, Taxpayer};

const LABEL_WIDTH: usize = 40;
const AMOUNT_WIDTH: usize = 12;
const RULE_WIDTH: usize = 69;

/// Formats an amount with two decimal places and `,` thousands separators.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_data::report::format_amount;
///
/// assert_eq!(format_amount(dec!(2641000)), "2,641,000.00");
/// assert_eq!(format_amount(dec!(-6750.125)), "-6,750.13");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let is_negative = rounded.is_sign_negative() && !rounded.is_zero();
    let formatted = format!("{:.2}", rounded.abs());

    let (integer_part, decimal_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let digits: Vec<char> = integer_part.chars().collect();
    let mut with_separators = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            with_separators.push(',');
        }
        with_separators.push(*c);
    }

    let sign = if is_negative { "-" } else { "" };
    format!("{sign}{with_separators}.{decimal_part}")
}

/// A taxpayer's statement: per-category totals, the assessed tax and the
/// balance owed or overpaid.
#[derive(Debug, Clone, Copy)]
pub struct TaxReport<'a> {
    taxpayer: &'a Taxpayer,
    ledger: &'a IncomeLedger,
    assessment: &'a TaxAssessment,
}

impl<'a> TaxReport<'a> {
    pub fn new(
        taxpayer: &'a Taxpayer,
        ledger: &'a IncomeLedger,
        assessment: &'a TaxAssessment,
    ) -> Self {
        Self {
            taxpayer,
            ledger,
            assessment,
        }
    }

    /// One-line verdict, e.g. `Good news! You get a tax refund of 6,750.00.`
    pub fn summary_line(&self) -> String {
        let net_due = self.assessment.net_due;
        if net_due > Decimal::ZERO {
            format!("You owe {} Baht additional tax. Sorry.", format_amount(net_due))
        } else {
            format!("Good news! You get a tax refund of {}.", format_amount(-net_due))
        }
    }
}

impl fmt::Display for TaxReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Tax Report for {}", self.taxpayer)?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(
            f,
            "{:<LABEL_WIDTH$} {:<AMOUNT_WIDTH$} {:<AMOUNT_WIDTH$}",
            "Income Type", "Total Amount", "Tax Withheld"
        )?;

        for category in IncomeCategory::ALL {
            writeln!(
                f,
                "{:<LABEL_WIDTH$} {:>AMOUNT_WIDTH$} {:>AMOUNT_WIDTH$}",
                format!("{} Income", category.label()),
                format_amount(self.ledger.sum_by_category(category)),
                format_amount(self.ledger.sum_withheld_by_category(category)),
            )?;
        }

        writeln!(
            f,
            "{:<LABEL_WIDTH$} {:>AMOUNT_WIDTH$} {:>AMOUNT_WIDTH$}",
            "Total Tax & Total Tax Withheld",
            format_amount(self.assessment.total_tax),
            format_amount(self.assessment.total_withheld),
        )?;

        let net_due = self.assessment.net_due;
        if net_due >= Decimal::ZERO {
            writeln!(
                f,
                "{:<LABEL_WIDTH$} {:>AMOUNT_WIDTH$}",
                "Amount of Tax owed",
                format_amount(net_due)
            )
        } else {
            writeln!(
                f,
                "{:<LABEL_WIDTH$} {:>AMOUNT_WIDTH$}",
                "Amount of Tax overpaid",
                format_amount(-net_due)
            )
        }
    }
}
