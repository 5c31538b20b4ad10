use crate::error::{Result, WrangleError};
use chrono::{Days, NaiveDate};

/// Last calendar day of `month` (1-12) in `year`.
///
/// Steps to the first day of the following month and walks back one day,
/// so leap years and 30/31-day months fall out of chrono's calendar.
pub fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.checked_sub_days(Days::new(1)))
        .ok_or_else(|| {
            WrangleError::DateError(format!(
                "No last day for month {} of year {}",
                month, year
            ))
        })
}

/// Zero-padded `YYYY-MM-DD`.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Rounds with `floor(value + 0.5)`.
///
/// Ties go toward positive infinity, so `-0.5` becomes `0` and `-1.5`
/// becomes `-1`. Downstream figures were published with this rule and must
/// not drift.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Parses a wide-table amount cell. Upstream exports carry float noise
/// (e.g. `1234.0000000002`), so any finite float literal is accepted.
pub fn parse_float_cell(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parses a quarterly amount cell. Only whole integers are accepted.
pub fn parse_integer_cell(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
