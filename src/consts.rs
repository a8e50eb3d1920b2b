/// Maximum valid month (December / Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Longest month in either calendar
pub const MAX_DAY: u8 = 31;

/// Month number for January / Farvardin
pub const FIRST_MONTH: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for Esfand, the only Jalali month whose length varies
pub const ESFAND: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in each Jalali month (index 0 is unused)
/// Esfand shows 29 days (common year default)
pub const JALALI_DAYS_IN_MONTH: [u8; 13] = [0, 31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Days in a common Gregorian year before the first of each month
pub(crate) const DAYS_BEFORE_MONTH: [i32; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Days in a Jalali year before the first of each month (same for leap and common years)
pub(crate) const JALALI_DAYS_BEFORE_MONTH: [i32; 13] =
    [0, 0, 31, 62, 93, 124, 155, 186, 216, 246, 276, 306, 336];

/// Jalali years at which the 33-year leap pattern restarts.
///
/// The first entry is the earliest supported year; the last entry is the first
/// year past the supported range.
pub const JALALI_BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Earliest Jalali year covered by [`JALALI_BREAKS`]
pub const MIN_JALALI_YEAR: i32 = JALALI_BREAKS[0];
/// Latest Jalali year covered by [`JALALI_BREAKS`] (inclusive)
pub const MAX_JALALI_YEAR: i32 = JALALI_BREAKS[JALALI_BREAKS.len() - 1] - 1;

/// Bounds on Gregorian years accepted by `GregorianDate` (proleptic, inclusive)
pub const MIN_GREGORIAN_YEAR: i32 = -9999;
pub const MAX_GREGORIAN_YEAR: i32 = 9999;

/// Day number of 1 Farvardin 1 (Gregorian 622-03-22), counting 0001-01-01 as day 1
pub(crate) const JALALI_EPOCH: i32 = 226_896;

/// Jalali leap years repeat on 33-year sub-cycles between break points
pub(crate) const JALALI_CYCLE: i32 = 33;
/// Within a sub-cycle a leap year falls every fourth year
pub(crate) const JALALI_LEAP_STRIDE: i32 = 4;
/// A segment's last five years take their leap positions from the next cycle
pub(crate) const JALALI_TERMINAL_RUN: i32 = 6;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

pub(crate) const DAYS_PER_COMMON_YEAR: i32 = 365;
pub(crate) const DAYS_PER_LEAP_YEAR: i32 = 366;
pub(crate) const DAYS_PER_4_YEARS: i32 = 1_461;
pub(crate) const DAYS_PER_100_YEARS: i32 = 36_524;
pub(crate) const DAYS_PER_400_YEARS: i32 = 146_097;
pub(crate) const DAYS_PER_WEEK: i32 = 7;

/// Jalali month names, Farvardin first
pub const JALALI_MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Persian weekday names, Saturday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنجشنبه",
    "جمعه",
];

/// Gregorian date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Jalali date component separator (`YYYY/MM/DD`)
pub const JALALI_DATE_SEPARATOR: char = '/';
