mod format;
mod time_utils;

pub use format::format_brl;
pub use time_utils::{DateRange, STANDARD_DATE_FORMAT};
