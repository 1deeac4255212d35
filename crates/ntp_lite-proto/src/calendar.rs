//! Calendar date/time decomposition of Unix epoch seconds.
//!
//! Uses Howard Hinnant's `civil_from_days` / `days_from_civil` algorithms
//! (<http://howardhinnant.github.io/date_algorithms.html>): O(1), correct for
//! every leap year rule, valid across the proleptic Gregorian calendar. Leap
//! seconds are not represented, matching Unix time.

use core::fmt;

const SECONDS_PER_DAY: u64 = 86_400;

/// Days from 0000-03-01 to 1970-01-01.
const DAYS_TO_UNIX_EPOCH: i64 = 719_468;

/// Calendar fields derived from a Unix timestamp.
///
/// Every field is computed from the timestamp in one pass; nothing is cached.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DateTime {
    /// Full year, e.g. 2023.
    pub year: u32,
    /// Month of the year, 1 to 12.
    pub month: u8,
    /// Day of the month, 1 to 31.
    pub day: u8,
    /// Hour of the day, 0 to 23.
    pub hour: u8,
    /// Minute of the hour, 0 to 59.
    pub minute: u8,
    /// Second of the minute, 0 to 59.
    pub second: u8,
    /// Day of the week, 0 (Sunday) to 6 (Saturday).
    pub weekday: u8,
}

impl DateTime {
    /// Split Unix seconds into calendar fields.
    ///
    /// ```
    /// use ntp_lite_proto::calendar::DateTime;
    ///
    /// let dt = DateTime::from_unix(0);
    /// assert_eq!((dt.year, dt.month, dt.day, dt.weekday), (1970, 1, 1, 4));
    /// ```
    pub fn from_unix(unix_secs: u64) -> Self {
        let days = unix_secs / SECONDS_PER_DAY;
        let secs_today = unix_secs % SECONDS_PER_DAY;

        let (year, month, day) = civil_from_days(days as i64);

        DateTime {
            year: year as u32,
            month,
            day,
            hour: (secs_today / 3600) as u8,
            minute: ((secs_today % 3600) / 60) as u8,
            second: (secs_today % 60) as u8,
            weekday: weekday_from_days(days),
        }
    }

    /// Seconds since the Unix epoch for these calendar fields.
    ///
    /// The `weekday` field is ignored. Dates before 1970 saturate to 0.
    pub fn to_unix(&self) -> u64 {
        let days = days_from_civil(self.year as i64, self.month, self.day);
        if days < 0 {
            return 0;
        }
        days as u64 * SECONDS_PER_DAY
            + self.hour as u64 * 3600
            + self.minute as u64 * 60
            + self.second as u64
    }

    /// Hour on a 12-hour clock, 1 to 12.
    pub fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    /// Whether the time falls at or after noon.
    pub fn is_pm(&self) -> bool {
        self.hour >= 12
    }
}

/// `YYYY-MM-DD HH:MM:SS`.
impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Check if year is a leap year (Gregorian calendar).
///
/// - 2000: leap (divisible by 400)
/// - 1900: not leap (divisible by 100 but not 400)
/// - 2024: leap (divisible by 4, not by 100)
pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// 1970-01-01 was a Thursday (4), with Sunday as 0.
fn weekday_from_days(days_since_epoch: u64) -> u8 {
    ((days_since_epoch + 4) % 7) as u8
}

/// Convert days since Unix epoch to civil date (year, month, day).
fn civil_from_days(days_since_epoch: i64) -> (i64, u8, u8) {
    // Shift the epoch to 0000-03-01 so the leap day lands at the end of the year.
    let z = days_since_epoch + DAYS_TO_UNIX_EPOCH;

    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = (z - era * 146_097) as u64; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11], March = 0
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u8;

    let year = if m <= 2 { y + 1 } else { y };
    (year, m, d)
}

/// Convert civil date (year, month, day) to days since Unix epoch.
fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let m = month as i64;
    let d = day as i64;
    let (y, m) = if m <= 2 { (year - 1, m + 9) } else { (year, m - 3) };

    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // [0, 399]
    let doy = (153 * m + 2) / 5 + d - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]

    era * 146_097 + doe - DAYS_TO_UNIX_EPOCH
}
