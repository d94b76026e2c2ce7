//! Input and output around the tax engine: CSV income files, TOML
//! schedules and the printed tax statement.

pub mod loader;
pub mod report;
pub mod schedule;

pub use loader::{IncomeLoader, IncomeLoaderError, IncomeRow};
pub use report::{TaxReport, format_amount};
pub use schedule::{ScheduleLoader, ScheduleLoaderError};
