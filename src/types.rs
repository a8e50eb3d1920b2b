use crate::CalendarError;
use crate::consts::{DAYS_PER_WEEK, MAX_DAY, MAX_MONTH, MIN_DAY, WEEKDAY_NAMES};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// Which calendar a year or date is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Calendar {
    Gregorian,
    Jalali,
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(CalendarError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Wraps a month produced by calendar arithmetic, which is always 1-12
    pub(crate) fn clamped(value: u8) -> Self {
        debug_assert!((1..=MAX_MONTH).contains(&value));
        Self(NonZeroU8::MIN.saturating_add(value.clamp(1, MAX_MONTH) - 1))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value in `MIN_DAY..=MAX_DAY`.
///
/// Whether the day exists in a particular month is checked by the date
/// constructors, which know the calendar and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a day bounded by `month_length`, the number of days in its month.
    pub(crate) fn within(value: u8, month_length: u8) -> Option<Self> {
        NonZeroU8::new(value)
            .filter(|day| day.get() <= month_length)
            .map(Self)
    }

    /// Wraps a day produced by calendar arithmetic, which never exceeds `MAX_DAY`
    pub(crate) fn clamped(value: u8) -> Self {
        debug_assert!((MIN_DAY..=MAX_DAY).contains(&value));
        Self(NonZeroU8::MIN.saturating_add(value.clamp(MIN_DAY, MAX_DAY) - 1))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate against a month here, so only the widest bound applies
        Self::within(value, MAX_DAY).ok_or(CalendarError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the Jalali week. The week starts on Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Looks up a weekday by its Saturday-first index (0 = Saturday, 6 = Friday).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidWeekday` if `index` is greater than 6.
    pub fn from_index(index: u8) -> Result<Self, CalendarError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(CalendarError::InvalidWeekday(index))
    }

    /// Maps a Sunday-first weekday number (0 = Sunday) onto the Jalali week.
    pub(crate) fn from_days_from_sunday(days: u8) -> Self {
        let index = (i32::from(days) + 1).rem_euclid(DAYS_PER_WEEK);
        Self::ALL[index as usize]
    }

    /// Saturday-first index of this weekday
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Persian name of this weekday
    pub const fn persian_name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }

    /// The following day of the week
    pub const fn succ(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}

/// Persian name for a Saturday-first weekday index.
///
/// # Errors
/// Returns `CalendarError::InvalidWeekday` if `index` is greater than 6.
pub fn weekday_name(index: u8) -> Result<&'static str, CalendarError> {
    Weekday::from_index(index).map(Weekday::persian_name)
}
