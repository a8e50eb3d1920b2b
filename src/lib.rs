mod consts;
mod gregorian;
mod jalali;
#[cfg(feature = "chrono")]
mod native;
mod prelude;
mod types;

pub use consts::*;
pub use gregorian::{GregorianDate, days_in_month_gregorian, is_gregorian_leap_year};
pub use jalali::{days_in_month_jalali, is_jalali_leap_year, month_name};
pub use types::{Calendar, Day, Month, Weekday, weekday_name};

use crate::consts::JALALI_DAYS_BEFORE_MONTH;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A date in the Jalali (Persian solar Hijri) calendar.
///
/// Only years covered by the break-point table can be represented, so every
/// value converts to Gregorian without failure. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}/{:02}/{:02}", "month.get()", "day.get()")]
pub struct JalaliDate {
    year:  i32,
    month: Month,
    day:   Day,
}

/// Errors from building, parsing, or converting calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The year lies outside the range supported for its calendar.
    #[error("{calendar} year {year} is outside the supported range")]
    OutOfRange { calendar: Calendar, year: i32 },

    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },

    #[error("Invalid weekday: {0} (must be 0-6)")]
    InvalidWeekday(u8),

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Empty date string")]
    EmptyInput,
}

impl CalendarError {
    /// True for a year outside the supported range
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// True for a month, day, or weekday that does not exist
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidMonth(_) | Self::InvalidDay { .. } | Self::InvalidWeekday(_)
        )
    }
}

/// Converts a Gregorian date to the Jalali calendar.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` (naming the Gregorian year) if the date
/// falls outside the Jalali years covered by the break-point table.
pub fn to_jalali(date: GregorianDate) -> Result<JalaliDate, CalendarError> {
    JalaliDate::from_day_number(date.day_number()).ok_or_else(|| {
        tracing::debug!(%date, "gregorian date outside jalali range");
        CalendarError::OutOfRange {
            calendar: Calendar::Gregorian,
            year: date.year(),
        }
    })
}

/// Converts a Jalali date to the proleptic Gregorian calendar.
pub fn to_gregorian(date: JalaliDate) -> GregorianDate {
    GregorianDate::from_day_number(date.day_number())
}

/// Day of the week as a Saturday-first index (0 = Saturday, 6 = Friday).
pub fn day_of_week(date: JalaliDate) -> u8 {
    Weekday::from_days_from_sunday(to_gregorian(date).days_from_sunday()).index()
}

impl JalaliDate {
    /// Creates a validated Jalali date.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` for a month outside 1-12,
    /// `CalendarError::OutOfRange` for a year outside the break-point table,
    /// and `CalendarError::InvalidDay` if the day does not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let month_typed = Month::new(month)?;
        jalali::check_year(year)?;
        let day_typed = Day::within(day, jalali::month_length(year, month_typed))
            .ok_or(CalendarError::InvalidDay { year, month, day })?;

        Ok(Self {
            year,
            month: month_typed,
            day: day_typed,
        })
    }

    /// Returns the year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1 = Farvardin, 12 = Esfand)
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

    /// Whether this date's year has an Esfand 30th
    pub fn is_leap_year(&self) -> bool {
        jalali::is_leap_in_table(self.year)
    }

    /// Length of this date's month
    pub fn days_in_month(&self) -> u8 {
        jalali::month_length(self.year, self.month)
    }

    /// Day of the year, 1 for 1 Farvardin up to 365 or 366
    pub fn ordinal(&self) -> u16 {
        let before = JALALI_DAYS_BEFORE_MONTH[usize::from(self.month.get())];
        // At most 336 + 31, so the sum always fits
        (before + i32::from(self.day.get())) as u16
    }

    /// Persian name of this date's month
    pub const fn month_name(&self) -> &'static str {
        jalali::month_name_of(self.month)
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_days_from_sunday(self.to_gregorian().days_from_sunday())
    }

    /// The first day of this date's month
    pub fn first_of_month(&self) -> Self {
        Self {
            year:  self.year,
            month: self.month,
            day:   Day::clamped(MIN_DAY),
        }
    }

    /// Moves by a number of days, forward or back.
    ///
    /// Returns `None` if the result would leave the supported year range.
    pub fn checked_add_days(self, days: i32) -> Option<Self> {
        self.day_number()
            .checked_add(days)
            .and_then(Self::from_day_number)
    }

    /// The following day, or `None` on the last supported day
    pub fn next_day(self) -> Option<Self> {
        self.checked_add_days(1)
    }

    pub fn to_gregorian(self) -> GregorianDate {
        to_gregorian(self)
    }

    /// Absolute day number, counting Gregorian 0001-01-01 as day 1
    pub(crate) fn day_number(&self) -> i32 {
        jalali::year_start(self.year) + i32::from(self.ordinal()) - 1
    }

    /// Locates the year block holding `number`, then walks the cumulative
    /// month table to split the remainder into month and day.
    pub(crate) fn from_day_number(number: i32) -> Option<Self> {
        let (year, start) = jalali::year_containing(number)?;
        let elapsed = number - start;

        let mut month = FIRST_MONTH;
        while month < MAX_MONTH && elapsed >= JALALI_DAYS_BEFORE_MONTH[usize::from(month) + 1] {
            month += 1;
        }
        let day = elapsed - JALALI_DAYS_BEFORE_MONTH[usize::from(month)] + 1;

        Some(Self {
            year,
            month: Month::clamped(month),
            day: Day::clamped(day as u8),
        })
    }
}

fn parse_number<T: FromStr>(s: &str) -> Result<T, CalendarError> {
    s.parse::<T>()
        .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
}

impl FromStr for JalaliDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed
            .split(JALALI_DATE_SEPARATOR)
            .map(str::trim)
            .collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(CalendarError::InvalidFormat(format!(
                "Expected YYYY{JALALI_DATE_SEPARATOR}MM{JALALI_DATE_SEPARATOR}DD, got {trimmed}"
            )));
        };

        let year = parse_number::<i32>(year)?;
        let month = parse_number::<u8>(month)?;
        let day = parse_number::<u8>(day)?;

        Self::new(year, month, day)
    }
}

impl TryFrom<(i32, u8, u8)> for JalaliDate {
    type Error = CalendarError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl TryFrom<GregorianDate> for JalaliDate {
    type Error = CalendarError;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        to_jalali(date)
    }
}

impl From<JalaliDate> for GregorianDate {
    fn from(date: JalaliDate) -> Self {
        to_gregorian(date)
    }
}

impl Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
