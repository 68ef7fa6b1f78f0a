use chrono::{Duration, Local, NaiveDate};

pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive calendar window sent to every metric endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Window ending today: `to` = today, `from` = today - (n - 1) days.
    pub fn last_n_days(n: u32) -> Self {
        Self::ending(Local::now().date_naive(), n)
    }

    /// Same computation with an explicit end date, for deterministic tests.
    pub fn ending(today: NaiveDate, n: u32) -> Self {
        let span = Duration::days(i64::from(n.max(1)) - 1);
        Self {
            from: today - span,
            to: today,
        }
    }

    pub fn date_from(&self) -> String {
        self.from.format(STANDARD_DATE_FORMAT).to_string()
    }

    pub fn date_to(&self) -> String {
        self.to.format(STANDARD_DATE_FORMAT).to_string()
    }
}
