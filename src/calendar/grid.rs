use super::date::{index_of_month, iter_days_after, iter_days_before, month_length};
use super::{CalendarDate, CalendarError};
use std::iter::successors;
use std::slice::ChunksExact;
use time::Month;

pub const DAYS_IN_WEEK: usize = 7;

/// A single day shown in a [`MonthGrid`]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DayCell {
    pub date: CalendarDate,
    /// `false` for filler days borrowed from the previous or next month
    pub in_focused_month: bool,
}

impl DayCell {
    fn focused(date: CalendarDate) -> DayCell {
        DayCell {
            date,
            in_focused_month: true,
        }
    }

    fn filler(date: CalendarDate) -> DayCell {
        DayCell {
            date,
            in_focused_month: false,
        }
    }
}

/// The days of one month laid out in full Sunday-to-Saturday weeks.
///
/// The cell at index `i` always falls on weekday `i % 7`, so the first day of
/// the month sits at the index equal to its weekday and is preceded by filler
/// from the end of the previous month.  The last week is padded with filler
/// from the start of the next month.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthGrid {
    year: i32,
    month: Month,
    // Invariant: length is a nonzero multiple of DAYS_IN_WEEK
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn generate(year: i32, month_index: u8) -> Result<MonthGrid, CalendarError> {
        let first = CalendarDate::new(year, month_index, 1)?;
        let month = first.month();
        let leading = usize::from(first.weekday_index());
        let length = usize::from(month_length(year, month));
        let total = (leading + length).div_ceil(DAYS_IN_WEEK) * DAYS_IN_WEEK;
        let mut cells = Vec::with_capacity(total);
        cells.extend(iter_days_before(first).take(leading).map(DayCell::filler));
        if cells.len() < leading {
            return Err(CalendarError::OutOfTime);
        }
        cells.reverse();
        cells.extend(
            successors(Some(first), CalendarDate::next_day)
                .take(length)
                .map(DayCell::focused),
        );
        let last = cells.last().map_or(first, |c| c.date);
        cells.extend(
            iter_days_after(last)
                .take(total - leading - length)
                .map(DayCell::filler),
        );
        if cells.len() < total {
            return Err(CalendarError::OutOfTime);
        }
        log::trace!(
            "Generated {} cells for {year:04}-{:02}",
            cells.len(),
            u8::from(month)
        );
        Ok(MonthGrid { year, month, cells })
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

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn weeks(&self) -> ChunksExact<'_, DayCell> {
        self.cells.chunks_exact(DAYS_IN_WEEK)
    }

    pub fn week_count(&self) -> usize {
        self.cells.len() / DAYS_IN_WEEK
    }

    /// Returns the cell in row `week` and column `weekday` (Sunday = 0), if
    /// the grid has one there
    pub fn cell(&self, week: usize, weekday: usize) -> Option<&DayCell> {
        if weekday >= DAYS_IN_WEEK {
            return None;
        }
        week.checked_mul(DAYS_IN_WEEK)
            .and_then(|i| i.checked_add(weekday))
            .and_then(|i| self.cells.get(i))
    }

    pub fn focused_days(&self) -> impl Iterator<Item = &DayCell> + '_ {
        self.cells.iter().filter(|c| c.in_focused_month)
    }
}
