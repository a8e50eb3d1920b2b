//! Proleptic Gregorian dates and the absolute day count they share with the
//! Jalali side. Day 1 is 0001-01-01.

use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_BEFORE_MONTH, DAYS_IN_MONTH, DAYS_PER_4_YEARS,
    DAYS_PER_100_YEARS, DAYS_PER_400_YEARS, DAYS_PER_COMMON_YEAR, DAYS_PER_WEEK, FEBRUARY,
    FEBRUARY_DAYS_LEAP, FIRST_MONTH, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_GREGORIAN_YEAR,
    MAX_MONTH, MIN_DAY, MIN_GREGORIAN_YEAR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use crate::types::{Calendar, Day, Month};
use crate::{CalendarError, JalaliDate};
use std::str::FromStr;

/// A date in the proleptic Gregorian calendar.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}-{:02}-{:02}", "month.get()", "day.get()")]
pub struct GregorianDate {
    year:  i32,
    month: Month,
    day:   Day,
}

impl GregorianDate {
    /// Creates a validated Gregorian date.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` for a month outside 1-12,
    /// `CalendarError::OutOfRange` for a year outside
    /// `MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR`, and
    /// `CalendarError::InvalidDay` if the day does not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let month_typed = Month::new(month)?;
        if !(MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR).contains(&year) {
            tracing::debug!(year, "gregorian year outside supported range");
            return Err(CalendarError::OutOfRange {
                calendar: Calendar::Gregorian,
                year,
            });
        }
        let day_typed = Day::within(day, days_in_month_gregorian(year, month))
            .ok_or(CalendarError::InvalidDay { year, month, day })?;

        Ok(Self {
            year,
            month: month_typed,
            day: day_typed,
        })
    }

    /// Returns the year (astronomical numbering, so 1 BCE is year 0)
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Splits into (year, month, day)
    pub const fn to_parts(&self) -> (i32, u8, u8) {
        (self.year, self.month.get(), self.day.get())
    }

    /// Whether this date's year has a February 29th
    pub const fn is_leap_year(&self) -> bool {
        is_gregorian_leap_year(self.year)
    }

    /// Day of the week counted from Sunday (0 = Sunday, 6 = Saturday)
    pub const fn days_from_sunday(&self) -> u8 {
        // Day 1 (0001-01-01) was a Monday, so day 0 falls on a Sunday
        self.day_number().rem_euclid(DAYS_PER_WEEK) as u8
    }

    /// Converts to the Jalali calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the date falls outside the
    /// Jalali years covered by the break-point table.
    pub fn to_jalali(self) -> Result<JalaliDate, CalendarError> {
        crate::to_jalali(self)
    }

    /// Absolute day number, counting 0001-01-01 as day 1
    pub(crate) const fn day_number(&self) -> i32 {
        day_number(self.year, self.month.get(), self.day.get())
    }

    /// Rebuilds a date from an absolute day number.
    ///
    /// Callers pass day numbers from the Jalali range, which lies well inside
    /// `MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR`.
    pub(crate) fn from_day_number(number: i32) -> Self {
        let (year, month, day) = calendar_from_day_number(number);
        debug_assert!((MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR).contains(&year));
        Self {
            year,
            month: Month::clamped(month),
            day: Day::clamped(day),
        }
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }

        // A leading separator is the sign of the year, not a field boundary
        let (negative, unsigned) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = unsigned.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(CalendarError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
            )));
        };

        let magnitude = crate::parse_number::<i32>(year)?;
        let year = if negative { -magnitude } else { magnitude };
        let month = crate::parse_number::<u8>(month)?;
        let day = crate::parse_number::<u8>(day)?;

        Self::new(year, month, day)
    }
}

impl TryFrom<(i32, u8, u8)> for GregorianDate {
    type Error = CalendarError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

pub const fn days_in_month_gregorian(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days from the start of the proleptic calendar through the given date.
const fn day_number(year: i32, month: u8, day: u8) -> i32 {
    let prior = year - 1;
    let mut number = DAYS_PER_COMMON_YEAR * prior
        + prior.div_euclid(LEAP_YEAR_CYCLE)
        - prior.div_euclid(CENTURY_CYCLE)
        + prior.div_euclid(GREGORIAN_CYCLE)
        + DAYS_BEFORE_MONTH[month as usize]
        + day as i32;
    if month > FEBRUARY && is_gregorian_leap_year(year) {
        number += 1;
    }
    number
}

/// Inverse of [`day_number`]: 400/100/4/1-year cycles give the year, then the
/// cumulative month table gives month and day.
const fn calendar_from_day_number(number: i32) -> (i32, u8, u8) {
    let elapsed = number - 1;
    let n400 = elapsed.div_euclid(DAYS_PER_400_YEARS);
    let rem400 = elapsed.rem_euclid(DAYS_PER_400_YEARS);
    let n100 = rem400 / DAYS_PER_100_YEARS;
    let rem100 = rem400 % DAYS_PER_100_YEARS;
    let n4 = rem100 / DAYS_PER_4_YEARS;
    let rem4 = rem100 % DAYS_PER_4_YEARS;
    let n1 = rem4 / DAYS_PER_COMMON_YEAR;

    let mut year = GREGORIAN_CYCLE * n400 + CENTURY_CYCLE * n100 + LEAP_YEAR_CYCLE * n4 + n1;
    // n100 or n1 of 4 only happens on December 31st of a leap year
    if n100 != 4 && n1 != 4 {
        year += 1;
    }

    let mut month = FIRST_MONTH;
    while month < MAX_MONTH && number >= day_number(year, month + 1, MIN_DAY) {
        month += 1;
    }
    let day = number - day_number(year, month, MIN_DAY) + 1;

    (year, month, day as u8)
}
