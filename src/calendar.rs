//! Calendar utilities: resolve "now" in a timezone into a [`ProgressState`].
//!
//! This is the only place that knows about clocks and timezones. The layout
//! engine receives the resulting day numbers as plain input.
//!
//! ```
//! use almanac::calendar;
//! use chrono::{TimeZone, Utc};
//!
//! let tz = calendar::parse_timezone("Asia/Jakarta")?;
//! // 2024-12-31 20:00 UTC is already 2025-01-01 in Jakarta
//! let now = Utc.with_ymd_and_hms(2024, 12, 31, 20, 0, 0).unwrap();
//! let progress = calendar::progress_at(now, tz);
//! assert_eq!((progress.current_day, progress.total_days), (1, 365));
//! # Ok::<(), almanac::error::AlmanacError>(())
//! ```

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::AlmanacError;
use crate::layout::ProgressState;

/// Look up an IANA timezone such as `America/New_York`.
pub fn parse_timezone(name: &str) -> Result<Tz, AlmanacError> {
    name.parse::<Tz>().map_err(|_| {
        AlmanacError::Timezone(format!(
            "Invalid timezone '{}'. Please use IANA timezone format (e.g., America/New_York, Asia/Jakarta).",
            name
        ))
    })
}

pub fn is_leap_year(year: i32) -> bool {
    days_in_year(year) == 366
}

/// Ordinal of December 31st, as chrono's proleptic Gregorian calendar sees it.
pub fn days_in_year(year: i32) -> i64 {
    NaiveDate::from_ymd_opt(year, 12, 31).map_or(365, |d| d.ordinal() as i64)
}

/// Day-of-year progress for a local calendar date.
pub fn progress_on(date: NaiveDate) -> ProgressState {
    ProgressState::new(date.ordinal() as i64, days_in_year(date.year()))
}

/// Day-of-year progress for the instant `now` as seen in `tz`.
pub fn progress_at(now: DateTime<Utc>, tz: Tz) -> ProgressState {
    progress_on(now.with_timezone(&tz).date_naive())
}

/// Summary of the year as seen in one timezone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearInfo {
    /// Local date, `yyyy-MM-dd`
    pub current_date: String,
    pub current_day_of_year: i64,
    pub total_days: i64,
    pub timezone: String,
    /// Two decimals, e.g. `"49.86%"`
    pub progress: String,
}

pub fn year_info(now: DateTime<Utc>, tz: Tz) -> YearInfo {
    let date = now.with_timezone(&tz).date_naive();
    let progress = progress_on(date);
    YearInfo {
        current_date: date.format("%Y-%m-%d").to_string(),
        current_day_of_year: progress.current_day,
        total_days: progress.total_days,
        timezone: tz.name().to_string(),
        progress: format!("{:.2}%", progress.fraction() * 100.0),
    }
}
