//! Jalali leap years, month lengths, and the table of year starts.
//!
//! The leap rule follows the break-point table in [`JALALI_BREAKS`]: between
//! two break points leap years fall on a 33-year sub-cycle, and the last few
//! years of each segment take the positions of the cycle that follows.

use crate::CalendarError;
use crate::consts::{
    DAYS_PER_COMMON_YEAR, DAYS_PER_LEAP_YEAR, ESFAND, ESFAND_DAYS_LEAP, JALALI_BREAKS,
    JALALI_CYCLE, JALALI_DAYS_IN_MONTH, JALALI_EPOCH, JALALI_LEAP_STRIDE, JALALI_MONTH_NAMES,
    JALALI_TERMINAL_RUN, MAX_JALALI_YEAR, MIN_JALALI_YEAR,
};
use crate::types::{Calendar, Month};

/// One entry per supported year plus an end sentinel
const YEAR_STARTS_LEN: usize = (MAX_JALALI_YEAR - MIN_JALALI_YEAR + 2) as usize;

/// Day number of 1 Farvardin for every supported year, in year order.
/// The final entry is the first day past the supported range.
static YEAR_STARTS: [i32; YEAR_STARTS_LEN] = build_year_starts();

/// Reports whether a Jalali year has 366 days.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the year is not covered by the
/// break-point table (`MIN_JALALI_YEAR..=MAX_JALALI_YEAR`).
pub fn is_jalali_leap_year(year: i32) -> Result<bool, CalendarError> {
    check_year(year)?;
    Ok(is_leap_in_table(year))
}

/// Number of days in a Jalali month.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` for a month outside 1-12 and
/// `CalendarError::OutOfRange` for an unsupported year.
pub fn days_in_month_jalali(year: i32, month: u8) -> Result<u8, CalendarError> {
    let month = Month::new(month)?;
    check_year(year)?;
    Ok(month_length(year, month))
}

/// Persian name of a Jalali month.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` for a month outside 1-12.
pub fn month_name(month: u8) -> Result<&'static str, CalendarError> {
    Month::new(month).map(month_name_of)
}

pub(crate) const fn month_name_of(month: Month) -> &'static str {
    JALALI_MONTH_NAMES[month.get() as usize - 1]
}

pub(crate) fn check_year(year: i32) -> Result<(), CalendarError> {
    if (MIN_JALALI_YEAR..=MAX_JALALI_YEAR).contains(&year) {
        Ok(())
    } else {
        tracing::debug!(year, "jalali year outside break-point table");
        Err(CalendarError::OutOfRange {
            calendar: Calendar::Jalali,
            year,
        })
    }
}

/// Length of a month in a year already known to be supported.
pub(crate) fn month_length(year: i32, month: Month) -> u8 {
    let month = month.get();
    if month == ESFAND && is_leap_in_table(year) {
        ESFAND_DAYS_LEAP
    } else {
        JALALI_DAYS_IN_MONTH[month as usize]
    }
}

/// Day number of 1 Farvardin of a supported year.
pub(crate) fn year_start(year: i32) -> i32 {
    debug_assert!((MIN_JALALI_YEAR..=MAX_JALALI_YEAR).contains(&year));
    YEAR_STARTS[(year - MIN_JALALI_YEAR) as usize]
}

/// Finds the Jalali year whose 365/366-day block holds `number`.
///
/// Returns the year and the day number of its 1 Farvardin, or `None` when the
/// day lies outside the supported range.
pub(crate) fn year_containing(number: i32) -> Option<(i32, i32)> {
    let first = YEAR_STARTS[0];
    let end = YEAR_STARTS[YEAR_STARTS_LEN - 1];
    if number < first || number >= end {
        return None;
    }
    // Number of starts at or before `number`; at least 1 because number >= first
    let index = YEAR_STARTS.partition_point(|&start| start <= number) - 1;
    Some((MIN_JALALI_YEAR + index as i32, YEAR_STARTS[index]))
}

/// Leap test for a year inside the break-point table.
pub(crate) const fn is_leap_in_table(year: i32) -> bool {
    let mut jp = JALALI_BREAKS[0];
    let mut jump = 0;
    let mut i = 1;
    while i < JALALI_BREAKS.len() {
        let jt = JALALI_BREAKS[i];
        jump = jt - jp;
        if year < jt {
            break;
        }
        jp = jt;
        i += 1;
    }

    let mut n = year - jp;
    if jump - n < JALALI_TERMINAL_RUN {
        n = n - jump + (jump + JALALI_LEAP_STRIDE) / JALALI_CYCLE * JALALI_CYCLE;
    }
    ((n + 1).rem_euclid(JALALI_CYCLE) - 1).rem_euclid(JALALI_LEAP_STRIDE) == 0
}

const fn year_length(year: i32) -> i32 {
    if is_leap_in_table(year) {
        DAYS_PER_LEAP_YEAR
    } else {
        DAYS_PER_COMMON_YEAR
    }
}

const fn build_year_starts() -> [i32; YEAR_STARTS_LEN] {
    // Walk back from the epoch (1 Farvardin 1) to the first covered year
    let mut start = JALALI_EPOCH;
    let mut year = 0;
    while year >= MIN_JALALI_YEAR {
        start -= year_length(year);
        year -= 1;
    }

    let mut starts = [0; YEAR_STARTS_LEN];
    let mut i = 0;
    while i < YEAR_STARTS_LEN {
        starts[i] = start;
        if i + 1 < YEAR_STARTS_LEN {
            start += year_length(MIN_JALALI_YEAR + i as i32);
        }
        i += 1;
    }
    starts
}
