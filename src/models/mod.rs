pub mod category;
pub mod constants;
pub mod row;
pub mod run;

pub use category::{Category, ReportedStatus};
pub use row::{Row, Test};
pub use run::{Column, FileOutcome, RunAttributes, RunRecord, SystemInfo};
