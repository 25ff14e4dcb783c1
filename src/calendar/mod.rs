mod cursor;
mod date;
mod grid;
mod selection;
mod view;
pub use self::cursor::MonthCursor;
pub use self::date::{days_in_month, weekday_of, CalendarDate};
pub use self::grid::{DayCell, MonthGrid, DAYS_IN_WEEK};
pub use self::selection::{on_day_click, DateRange, RangeListener, RangeState};
pub use self::view::{AnnotatedCell, DualMonthView, Pane};
use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CalendarError {
    #[error("month index {0} is outside of 0..=11")]
    InvalidMonth(u8),
    #[error("{year:04}-{month:02} does not have a day {day}", month = .month_index + 1)]
    InvalidDay { year: i32, month_index: u8, day: u8 },
    #[error("a range cannot have an end date without a start date")]
    MissingAnchor,
    #[error("reached the end of time")]
    OutOfTime,
    #[error("invalid date {input:?}: expected YYYY-MM-DD")]
    Parse { input: String },
}
