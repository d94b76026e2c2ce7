//! Personal income tax engine.
//!
//! Income items are collected in an [`IncomeLedger`] and assessed by a
//! [`calculations::TaxEngine`] against a [`TaxSchedule`]:
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::TaxEngine;
//! use tax_core::{IncomeCategory, IncomeLedger, TaxSchedule};
//!
//! let mut ledger = IncomeLedger::new();
//! ledger.add_income(IncomeCategory::Wages, "CEO salary", dec!(8000000), dec!(0)).unwrap();
//! ledger.add_income(IncomeCategory::Dividend, "AIS", dec!(4000000), dec!(400000)).unwrap();
//! ledger.add_income(IncomeCategory::Dividend, "Intouch", dec!(4000000), dec!(400000)).unwrap();
//! ledger.add_income(IncomeCategory::Interest, "Bank of Dubai", dec!(2000000), dec!(0)).unwrap();
//!
//! let schedule = TaxSchedule::default();
//! let engine = TaxEngine::new(&schedule);
//!
//! assert_eq!(engine.total_tax(&ledger), dec!(3441000));
//! assert_eq!(engine.net_due(&ledger), dec!(2641000));
//! ```

pub mod calculations;
pub mod models;

pub use models::*;
