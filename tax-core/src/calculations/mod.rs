//! Tax calculations over an income ledger.
//!
//! [`engine`] holds the bracket tax and the separate/combined election;
//! [`common`] holds the decimal helpers it shares with report code.

pub mod common;
pub mod engine;

pub use engine::{TaxAssessment, TaxEngine, TaxMethod};
