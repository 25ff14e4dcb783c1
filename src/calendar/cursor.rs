use super::date::{index_of_month, month_from_index};
use super::{CalendarDate, CalendarError};
use std::fmt;
use time::{Date, Month};

/// The month at which a calendar view is positioned.
///
/// A cursor is always normalized, and its year is always one that
/// [`time::Date`] can represent.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MonthCursor {
    year: i32,
    month: Month,
}

impl MonthCursor {
    pub fn new(year: i32, month_index: u8) -> Result<MonthCursor, CalendarError> {
        let month = month_from_index(month_index)?;
        if (Date::MIN.year()..=Date::MAX.year()).contains(&year) {
            Ok(MonthCursor { year, month })
        } else {
            Err(CalendarError::OutOfTime)
        }
    }

    pub fn containing(date: CalendarDate) -> MonthCursor {
        MonthCursor {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn month_index(&self) -> u8 {
        index_of_month(self.month)
    }

    /// The following month, rolling December over into January of the next
    /// year
    pub fn advance(self) -> Result<MonthCursor, CalendarError> {
        match self.month {
            Month::December => MonthCursor::new(self.year + 1, 0),
            m => Ok(MonthCursor {
                year: self.year,
                month: m.next(),
            }),
        }
    }

    /// The preceding month, rolling January back into December of the
    /// previous year
    pub fn retreat(self) -> Result<MonthCursor, CalendarError> {
        match self.month {
            Month::January => MonthCursor::new(self.year - 1, 11),
            m => Ok(MonthCursor {
                year: self.year,
                month: m.previous(),
            }),
        }
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}
