pub mod csv_export;
pub mod format;
pub mod table;

pub use csv_export::{write_series, write_series_csv};
pub use format::{format_money, format_percent};
pub use table::Report;
