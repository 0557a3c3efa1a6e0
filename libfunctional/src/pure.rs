use chrono::{Datelike, Local, NaiveDate};
use super::error::{Error, Result};

/// Number of days in `month` (1-based) of `year`. Depends on nothing but
/// its arguments.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let invalid = Error::InvalidDate { year: year, month: month };
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(invalid.clone())?;
    // Only looks inside the requested month, never at the one after it.
    (28..32).rev()
        .find(|day| NaiveDate::from_ymd_opt(year, month, *day).is_some())
        .ok_or(invalid)
}

/// Reads the clock, so two calls may disagree.
pub fn current_month() -> (i32, u32) {
    let today = Local::now().date_naive();
    (today.year(), today.month())
}

/// The impure counterpart of `days_in_month`. Returns the year and month
/// it read from the clock along with their length.
pub fn days_this_month() -> Result<(i32, u32, u32)> {
    let (year, month) = current_month();
    debug!("reading days of {}-{:02} from the clock", year, month);
    Ok((year, month, days_in_month(year, month)?))
}

/// Increments hidden state, so identical calls return different values.
#[derive(Debug, Default)]
pub struct Counter {
    count: i64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) -> i64 {
        self.count = self.count + 1;
        self.count
    }
}

pub fn increment(counter: i64) -> i64 {
    counter + 1
}

pub fn double(x: i64) -> i64 {
    x * 2
}

#[test]
fn test_days_in_month() {
    assert_eq!(days_in_month(2016, 3), Ok(31));
    assert_eq!(days_in_month(2016, 4), Ok(30));
    assert_eq!(days_in_month(2016, 2), Ok(29));
    assert_eq!(days_in_month(2015, 2), Ok(28));
    assert_eq!(days_in_month(2016, 12), Ok(31));
}

#[test]
fn test_days_in_month_is_repeatable() {
    assert_eq!(days_in_month(2016, 3), days_in_month(2016, 3));
}

#[test]
fn test_invalid_month() {
    assert_eq!(days_in_month(2016, 13), Err(Error::InvalidDate { year: 2016, month: 13 }));
    assert!(days_in_month(2016, 0).is_err());
}

#[test]
fn test_days_in_last_representable_december() {
    let last_year = NaiveDate::MAX.year();
    assert_eq!(days_in_month(last_year, 12), Ok(31));
    assert_eq!(days_in_month(last_year, 13), Err(Error::InvalidDate { year: last_year, month: 13 }));
}

#[test]
fn test_days_this_month_matches_calendar() {
    let (year, month, days) = days_this_month().unwrap();
    assert!(days >= 28 && days <= 31);
    assert_eq!(Ok(days), days_in_month(year, month));
}

#[test]
fn test_counter_is_impure() {
    let mut counter = Counter::new();
    assert_eq!(counter.increment(), 1);
    assert_eq!(counter.increment(), 2);
}

#[test]
fn test_pure_increment_and_double() {
    assert_eq!(increment(0), 1);
    assert_eq!(increment(0), increment(0));
    assert_eq!(double(10), 20);
}
