mod income_category;
mod income_ledger;
mod income_record;
mod tax_bracket;
mod tax_schedule;
mod taxpayer;

pub use income_category::IncomeCategory;
pub use income_ledger::IncomeLedger;
pub use income_record::{IncomeError, IncomeRecord};
pub use tax_bracket::TaxBracket;
pub use tax_schedule::{ScheduleError, TaxSchedule, TaxScheduleConfig};
pub use taxpayer::Taxpayer;
