//! Whole-range properties of the calendar conversion.

use jalali_calendar::{
    GregorianDate, JalaliDate, MAX_JALALI_YEAR, MIN_JALALI_YEAR, day_of_week,
    days_in_month_gregorian, days_in_month_jalali, is_jalali_leap_year, to_gregorian, to_jalali,
};

/// Span of the long Jalali cycle and its target number of leap years
const GRAND_CYCLE_YEARS: i32 = 2820;
const GRAND_CYCLE_LEAP_YEARS: usize = 683;

fn next_gregorian(date: GregorianDate) -> GregorianDate {
    let (year, month, day) = date.to_parts();
    let next = if day < days_in_month_gregorian(year, month) {
        (year, month, day + 1)
    } else if month < 12 {
        (year, month + 1, 1)
    } else {
        (year + 1, 1, 1)
    };
    GregorianDate::try_from(next).unwrap()
}

#[test]
fn round_trip_every_supported_day() {
    let mut jalali = JalaliDate::new(MIN_JALALI_YEAR, 1, 1).unwrap();
    let mut gregorian = to_gregorian(jalali);
    assert_eq!(gregorian.to_parts(), (560, 3, 20));

    let mut days = 1;
    while let Some(next) = jalali.next_day() {
        let next_g = next_gregorian(gregorian);
        assert_eq!(to_gregorian(next), next_g, "after {jalali}");
        assert_eq!(to_jalali(next_g).unwrap(), next, "after {gregorian}");
        assert!(next > jalali);

        jalali = next;
        gregorian = next_g;
        days += 1;
    }

    assert_eq!(jalali.to_parts(), (MAX_JALALI_YEAR, 12, 29));
    assert_eq!(gregorian.to_parts(), (3799, 3, 19));
    assert!(to_jalali(next_gregorian(gregorian)).is_err());
    // 3239 years from 560-03-20 to 3799-03-19
    assert_eq!(days, 1_183_020);
}

#[test]
fn round_trip_every_valid_jalali_triple() {
    for year in 1300..=1500 {
        for month in 1..=12 {
            let length = days_in_month_jalali(year, month).unwrap();
            for day in 1..=length {
                let date = JalaliDate::new(year, month, day).unwrap();
                assert_eq!(to_jalali(to_gregorian(date)).unwrap(), date);
            }
            assert!(JalaliDate::new(year, month, length + 1).is_err());
        }
    }
}

#[test]
fn round_trip_gregorian_multi_century() {
    let mut date = GregorianDate::new(1600, 1, 1).unwrap();
    let end = GregorianDate::new(2400, 12, 31).unwrap();
    while date <= end {
        let jalali = to_jalali(date).unwrap();
        assert_eq!(to_gregorian(jalali), date);
        date = next_gregorian(date);
    }
}

#[test]
fn leap_years_per_grand_cycle() {
    let leaps: Vec<bool> = (MIN_JALALI_YEAR..=MAX_JALALI_YEAR)
        .map(|year| is_jalali_leap_year(year).unwrap())
        .collect();

    let window = GRAND_CYCLE_YEARS as usize;
    for (offset, span) in leaps.windows(window).enumerate() {
        let count = span.iter().filter(|&&leap| leap).count();
        assert!(
            count.abs_diff(GRAND_CYCLE_LEAP_YEARS) <= 1,
            "{count} leap years in the {GRAND_CYCLE_YEARS} years from {}",
            MIN_JALALI_YEAR + offset as i32
        );
    }

    // A window anchored on a break point
    let from_first_break = leaps[..window].iter().filter(|&&leap| leap).count();
    assert_eq!(from_first_break, 684);
}

#[test]
fn days_in_month_bounds() {
    for year in MIN_JALALI_YEAR..=MAX_JALALI_YEAR {
        for month in 1..=12 {
            let length = days_in_month_jalali(year, month).unwrap();
            assert!((1..=31).contains(&length), "{year}/{month}");
        }
        let esfand = days_in_month_jalali(year, 12).unwrap();
        assert!(esfand == 29 || esfand == 30, "{year}");
        assert_eq!(esfand == 30, is_jalali_leap_year(year).unwrap(), "{year}");
    }
}

#[test]
fn day_of_week_cycles() {
    let mut date = JalaliDate::new(1390, 1, 1).unwrap();
    let end = JalaliDate::new(1420, 1, 1).unwrap();
    while date < end {
        let today = day_of_week(date);
        assert!(today < 7);

        let tomorrow = date.next_day().unwrap();
        assert_eq!(day_of_week(tomorrow), (today + 1) % 7, "{date} -> {tomorrow}");
        assert_eq!(date.weekday().succ(), tomorrow.weekday());

        if date.day() + 7 <= date.days_in_month() {
            let week_later = JalaliDate::new(date.year(), date.month(), date.day() + 7).unwrap();
            assert_eq!(day_of_week(week_later), today);
        }

        date = tomorrow;
    }
}

#[test]
fn concrete_scenarios() {
    let today = GregorianDate::new(2023, 11, 13).unwrap();
    let jalali = to_jalali(today).unwrap();
    assert_eq!(jalali.to_parts(), (1402, 8, 22));
    assert_eq!(to_gregorian(JalaliDate::new(1402, 8, 22).unwrap()), today);

    assert!(is_jalali_leap_year(1403).unwrap());
    assert_eq!(days_in_month_jalali(1403, 12).unwrap(), 30);
    assert!(!is_jalali_leap_year(1404).unwrap());
    assert_eq!(days_in_month_jalali(1404, 12).unwrap(), 29);

    // Monday under the Saturday-first numbering
    assert_eq!(day_of_week(jalali), 2);
}

#[test]
fn parse_format_round_trip_for_mock_data() {
    for text in ["1402/08/22", "1402/01/01", "1399/12/30", "1403/12/30"] {
        let date: JalaliDate = text.parse().unwrap();
        assert_eq!(date.to_string(), text);
        let gregorian = date.to_gregorian();
        let reparsed: GregorianDate = gregorian.to_string().parse().unwrap();
        assert_eq!(to_jalali(reparsed).unwrap(), date);
    }
}
