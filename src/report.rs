pub mod rows;
pub mod select;
pub mod xlsx;

pub use rows::{ReportRow, COLUMNS};
pub use select::{filter_since, parse_since, sort_newest_first};
pub use xlsx::write_report;
