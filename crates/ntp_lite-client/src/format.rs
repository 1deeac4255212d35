// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Render a [`DateTime`] through a small `strftime`-like format string.
//!
//! | Code | Output |
//! |------|--------|
//! | `%Y` | year, at least 4 digits |
//! | `%y` | year modulo 100, 2 digits |
//! | `%m` | month, 2 digits |
//! | `%d` | day of month, 2 digits |
//! | `%H` | hour (24-hour), 2 digits |
//! | `%M` | minute, 2 digits |
//! | `%S` | second, 2 digits |
//! | `%a` | abbreviated weekday name |
//! | `%A` | full weekday name |
//! | `%w` | weekday digit, 0 = Sunday |
//! | `%b` | abbreviated month name |
//! | `%B` | full month name |
//! | `%p` | `AM` or `PM` |
//!
//! Any other `%x` pair is copied through unchanged, as is a `%` at the end of
//! the string.

use std::fmt::Write;

use crate::calendar::DateTime;
use crate::locale::DateLanguage;

/// Expand `format` for `dt`, taking names from `lang`.
///
/// ```
/// use ntp_lite::calendar::DateTime;
/// use ntp_lite::format::format_date_time;
/// use ntp_lite::locale::DateLanguage;
///
/// let dt = DateTime::from_unix(1_700_000_000);
/// let s = format_date_time(&dt, DateLanguage::lookup("en"), "%a %d %b %Y %H:%M");
/// assert_eq!(s, "Tue 14 Nov 2023 22:13");
/// ```
pub fn format_date_time(dt: &DateTime, lang: &DateLanguage, format: &str) -> String {
    let mut out = String::with_capacity(format.len() + 16);
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(code) = chars.next() else {
            out.push('%');
            break;
        };
        // Writing into a String is infallible.
        let _ = match code {
            'Y' => write!(out, "{:04}", dt.year),
            'y' => write!(out, "{:02}", dt.year % 100),
            'm' => write!(out, "{:02}", dt.month),
            'd' => write!(out, "{:02}", dt.day),
            'H' => write!(out, "{:02}", dt.hour),
            'M' => write!(out, "{:02}", dt.minute),
            'S' => write!(out, "{:02}", dt.second),
            'w' => write!(out, "{}", dt.weekday),
            'a' => out.write_str(lang.short_weekday(dt.weekday)),
            'A' => out.write_str(lang.long_weekday(dt.weekday)),
            'b' => out.write_str(lang.short_month(dt.month)),
            'B' => out.write_str(lang.long_month(dt.month)),
            'p' => out.write_str(if dt.is_pm() { "PM" } else { "AM" }),
            other => {
                out.push('%');
                out.push(other);
                Ok(())
            }
        };
    }

    out
}

/// `HH:MM:SS`.
pub fn format_time(dt: &DateTime) -> String {
    format!("{:02}:{:02}:{:02}", dt.hour, dt.minute, dt.second)
}
