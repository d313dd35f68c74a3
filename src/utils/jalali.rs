//! Jalali Calendar Display Helpers
//!
//! Converts stored Gregorian timestamps into the Jalali (Persian) calendar
//! for presentation. Display-only: nothing here feeds back into stored data
//! or membership logic.
//!
//! The conversion is the standard 33-year-cycle arithmetic; no crate in the
//! dependency tree covers the Jalali calendar, so it is implemented locally
//! on top of chrono's date types.

use chrono::{DateTime, Datelike, Local, NaiveDateTime, Timelike, Utc, Weekday};

const G_DAYS_IN_MONTH: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const J_DAYS_IN_MONTH: [i32; 12] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// A date in the Jalali calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JalaliDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

fn is_gregorian_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Convert a Gregorian calendar date to its Jalali equivalent
pub fn to_jalali(date: impl Datelike) -> JalaliDate {
    let gy = date.year() - 1600;
    let gm = date.month0() as i32;
    let gd = date.day0() as i32;

    let mut g_day_no = 365 * gy + (gy + 3) / 4 - (gy + 99) / 100 + (gy + 399) / 400;
    for days in G_DAYS_IN_MONTH.iter().take(gm as usize) {
        g_day_no += days;
    }
    if gm > 1 && is_gregorian_leap(date.year()) {
        g_day_no += 1;
    }
    g_day_no += gd;

    let mut j_day_no = g_day_no - 79;
    let j_np = j_day_no / 12053;
    j_day_no %= 12053;

    let mut jy = 979 + 33 * j_np + 4 * (j_day_no / 1461);
    j_day_no %= 1461;

    if j_day_no >= 366 {
        jy += (j_day_no - 1) / 365;
        j_day_no = (j_day_no - 1) % 365;
    }

    let mut jm = 0usize;
    while jm < 11 && j_day_no >= J_DAYS_IN_MONTH[jm] {
        j_day_no -= J_DAYS_IN_MONTH[jm];
        jm += 1;
    }

    JalaliDate {
        year: jy,
        month: jm as u32 + 1,
        day: j_day_no as u32 + 1,
    }
}

/// Render a stored timestamp as a Jalali `YYYY/MM/DD` string
pub fn format_jalali(timestamp: &DateTime<Utc>) -> String {
    let jalali = to_jalali(timestamp.with_timezone(&Local).date_naive());
    format!("{:04}/{:02}/{:02}", jalali.year, jalali.month, jalali.day)
}

/// Persian weekday name, as shown in the dashboard header
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sat => "شنبه",
        Weekday::Sun => "یکشنبه",
        Weekday::Mon => "دوشنبه",
        Weekday::Tue => "سه‌شنبه",
        Weekday::Wed => "چهارشنبه",
        Weekday::Thu => "پنجشنبه",
        Weekday::Fri => "جمعه",
    }
}

/// Format a local wall-clock instant as "weekday - YYYY/MM/DD - HH:MM:SS"
pub fn format_clock(now: &NaiveDateTime) -> String {
    let jalali = to_jalali(now.date());
    format!(
        "{} - {:04}/{:02}/{:02} - {:02}:{:02}:{:02}",
        weekday_name(now.weekday()),
        jalali.year,
        jalali.month,
        jalali.day,
        now.hour(),
        now.minute(),
        now.second()
    )
}

/// The dashboard clock line for the current local time
pub fn clock_line() -> String {
    format_clock(&Local::now().naive_local())
}
