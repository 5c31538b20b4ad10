use crate::error::{Result, WrangleError};
use crate::utils::{format_iso, last_day_of_month};
use chrono::NaiveDate;

pub const ICELANDIC_MONTHS: [&str; 12] = [
    "Janúar",
    "Febrúar",
    "Mars",
    "Apríl",
    "Maí",
    "Júní",
    "Júlí",
    "Ágúst",
    "September",
    "Október",
    "Nóvember",
    "Desember",
];

/// Ordered month names, index 0 being the first month of the year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTable {
    names: Vec<String>,
}

impl MonthTable {
    pub fn icelandic() -> Self {
        Self {
            names: ICELANDIC_MONTHS.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// 1-based calendar month for an exact (case- and accent-sensitive) name.
    pub fn month_number(&self, name: &str) -> Option<u32> {
        self.names
            .iter()
            .position(|candidate| candidate == name)
            .map(|idx| idx as u32 + 1)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for MonthTable {
    fn default() -> Self {
        Self::icelandic()
    }
}

/// Maps a month name and year to the last calendar day of that month.
#[derive(Debug, Clone, Default)]
pub struct MonthResolver {
    table: MonthTable,
}

impl MonthResolver {
    pub fn new(table: MonthTable) -> Self {
        Self { table }
    }

    pub fn icelandic() -> Self {
        Self::new(MonthTable::icelandic())
    }

    pub fn last_date_of(&self, month_name: &str, year: i32) -> Result<NaiveDate> {
        let month = self
            .table
            .month_number(month_name)
            .ok_or_else(|| WrangleError::UnknownMonth {
                month: month_name.to_string(),
            })?;

        last_day_of_month(year, month)
    }

    /// Same as [`MonthResolver::last_date_of`], formatted `YYYY-MM-DD`.
    pub fn last_date_string(&self, month_name: &str, year: i32) -> Result<String> {
        self.last_date_of(month_name, year).map(format_iso)
    }

    pub fn table(&self) -> &MonthTable {
        &self.table
    }
}
