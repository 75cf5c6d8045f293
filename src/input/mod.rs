pub mod parse;
pub mod record;

pub use parse::{parse_number, round_half_up, round_to};
pub use record::InputRecord;
