//! Conversions to and from `chrono` dates.

use crate::{CalendarError, GregorianDate, JalaliDate};
use chrono::{Datelike, Local, NaiveDate};

impl GregorianDate {
    /// The equivalent `chrono` date.
    ///
    /// Returns `None` only if chrono cannot represent the year.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year(), u32::from(self.month()), u32::from(self.day()))
    }
}

impl TryFrom<NaiveDate> for GregorianDate {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        // chrono keeps month in 1..=12 and day in 1..=31
        Self::new(date.year(), date.month() as u8, date.day() as u8)
    }
}

impl TryFrom<NaiveDate> for JalaliDate {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        GregorianDate::try_from(date)?.to_jalali()
    }
}

impl JalaliDate {
    /// Today's date in the local time zone.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the system clock reads a date
    /// outside the supported range.
    pub fn today() -> Result<Self, CalendarError> {
        Self::try_from(Local::now().date_naive())
    }

    /// The equivalent `chrono` date.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        self.to_gregorian().to_naive_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_naive_date() {
        let naive = NaiveDate::from_ymd_opt(2023, 11, 13).unwrap();
        let gregorian = GregorianDate::try_from(naive).unwrap();
        assert_eq!(gregorian.to_parts(), (2023, 11, 13));

        let jalali = JalaliDate::try_from(naive).unwrap();
        assert_eq!(jalali.to_parts(), (1402, 8, 22));
        assert_eq!(jalali.to_naive_date(), Some(naive));
    }

    #[test]
    fn test_naive_date_out_of_range() {
        let naive = NaiveDate::from_ymd_opt(12_000, 1, 1).unwrap();
        assert!(matches!(
            GregorianDate::try_from(naive),
            Err(CalendarError::OutOfRange { year: 12_000, .. })
        ));

        let before_table = NaiveDate::from_ymd_opt(500, 1, 1).unwrap();
        assert!(matches!(
            JalaliDate::try_from(before_table),
            Err(CalendarError::OutOfRange { year: 500, .. })
        ));
    }

    #[test]
    fn test_weekday_agrees_with_chrono() {
        let mut naive = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        for _ in 0..800 {
            let jalali = JalaliDate::try_from(naive).unwrap();
            let from_sunday = naive.weekday().num_days_from_sunday() as u8;
            assert_eq!(
                jalali.to_gregorian().days_from_sunday(),
                from_sunday,
                "{naive}"
            );
            assert_eq!(crate::day_of_week(jalali), (from_sunday + 1) % 7, "{naive}");
            naive = naive.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_today_round_trips() {
        let today = JalaliDate::today().unwrap();
        let naive = Local::now().date_naive();
        // The clock may cross midnight between the two reads
        let gregorian = today.to_gregorian().to_naive_date().unwrap();
        assert!((gregorian - naive).num_days().abs() <= 1);
    }
}
