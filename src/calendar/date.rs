use super::CalendarError;
use std::fmt;
use std::iter::successors;
use std::str::FromStr;
use time::{
    format_description::BorrowedFormatItem,
    macros::format_description,
    util::is_leap_year,
    Date,
    Month::{self, *},
};

static YMD_FMT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// A local calendar date with no time component.
///
/// Months are addressed by a zero-based index (January is 0, December is 11)
/// at every boundary of this type.  Ordering is chronological.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CalendarDate(Date);

impl CalendarDate {
    /// Construct a date, failing if `month_index` is not in `0..=11`, if
    /// `day` does not exist in that month, or if `year` cannot be
    /// represented.
    pub fn new(year: i32, month_index: u8, day: u8) -> Result<CalendarDate, CalendarError> {
        let month = month_from_index(month_index)?;
        Date::from_calendar_date(year, month, day)
            .map(CalendarDate)
            .map_err(|e| {
                if e.name() == "year" {
                    CalendarError::OutOfTime
                } else {
                    CalendarError::InvalidDay {
                        year,
                        month_index,
                        day,
                    }
                }
            })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> Month {
        self.0.month()
    }

    pub fn month_index(&self) -> u8 {
        index_of_month(self.0.month())
    }

    pub fn day(&self) -> u8 {
        self.0.day()
    }

    /// Day of the week, counting from Sunday = 0 to Saturday = 6
    pub fn weekday_index(&self) -> u8 {
        self.0.weekday().number_days_from_sunday()
    }

    pub fn as_date(&self) -> Date {
        self.0
    }

    pub fn next_day(&self) -> Option<CalendarDate> {
        self.0.next_day().map(CalendarDate)
    }

    pub fn previous_day(&self) -> Option<CalendarDate> {
        self.0.previous_day().map(CalendarDate)
    }

    /// Number of days from `self` to `later`; negative if `later` is earlier
    pub fn days_until(&self, later: CalendarDate) -> i64 {
        (later.0 - self.0).whole_days()
    }
}

impl From<Date> for CalendarDate {
    fn from(date: Date) -> CalendarDate {
        CalendarDate(date)
    }
}

impl From<CalendarDate> for Date {
    fn from(date: CalendarDate) -> Date {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<CalendarDate, CalendarError> {
        Date::parse(s, &YMD_FMT)
            .map(CalendarDate)
            .map_err(|_| CalendarError::Parse {
                input: s.to_owned(),
            })
    }
}

/// Number of days in the given month, with February following the Gregorian
/// leap year rule
pub fn days_in_month(year: i32, month_index: u8) -> Result<u8, CalendarError> {
    month_from_index(month_index).map(|month| month_length(year, month))
}

/// Day of the week (Sunday = 0 … Saturday = 6) of the given date
pub fn weekday_of(year: i32, month_index: u8, day: u8) -> Result<u8, CalendarError> {
    CalendarDate::new(year, month_index, day).map(|d| d.weekday_index())
}

pub(super) fn month_from_index(month_index: u8) -> Result<Month, CalendarError> {
    if month_index < 12 {
        Ok(January.nth_next(month_index))
    } else {
        Err(CalendarError::InvalidMonth(month_index))
    }
}

pub(super) fn index_of_month(month: Month) -> u8 {
    u8::from(month) - 1
}

pub(super) fn month_length(year: i32, month: Month) -> u8 {
    match month {
        February if is_leap_year(year) => 29,
        February => 28,
        April | June | September | November => 30,
        January | March | May | July | August | October | December => 31,
    }
}

pub(super) fn iter_days_after(date: CalendarDate) -> impl Iterator<Item = CalendarDate> {
    successors(Some(date), CalendarDate::next_day).skip(1)
}

pub(super) fn iter_days_before(date: CalendarDate) -> impl Iterator<Item = CalendarDate> {
    successors(Some(date), CalendarDate::previous_day).skip(1)
}
