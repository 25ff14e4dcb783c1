use super::{CalendarError, DateRange, DayCell, MonthCursor, MonthGrid, RangeListener};

/// One of the two months in a [`DualMonthView`]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Pane {
    /// The month the cursor points at
    Primary,
    /// The month after that
    Secondary,
}

impl Pane {
    pub const ALL: [Pane; 2] = [Pane::Primary, Pane::Secondary];
}

/// A [`DayCell`] together with its membership in the current selection
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct AnnotatedCell {
    pub cell: DayCell,
    pub in_range: bool,
    pub is_range_start: bool,
    pub is_range_end: bool,
}

impl AnnotatedCell {
    pub fn new(cell: DayCell, range: &DateRange) -> AnnotatedCell {
        AnnotatedCell {
            cell,
            in_range: range.in_range(cell.date),
            is_range_start: range.is_range_start(cell.date),
            is_range_end: range.is_range_end(cell.date),
        }
    }

    /// Whether this cell is either end of the selection
    pub fn is_endpoint(&self) -> bool {
        self.is_range_start || self.is_range_end
    }
}

/// Two consecutive months, side by side, positioned by a single cursor
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DualMonthView {
    cursor: MonthCursor,
    secondary: MonthCursor,
    grids: [MonthGrid; 2],
}

impl DualMonthView {
    pub fn new(cursor: MonthCursor) -> Result<DualMonthView, CalendarError> {
        let secondary = cursor.advance()?;
        let grids = [
            MonthGrid::generate(cursor.year(), cursor.month_index())?,
            MonthGrid::generate(secondary.year(), secondary.month_index())?,
        ];
        Ok(DualMonthView {
            cursor,
            secondary,
            grids,
        })
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn pane_cursor(&self, pane: Pane) -> MonthCursor {
        match pane {
            Pane::Primary => self.cursor,
            Pane::Secondary => self.secondary,
        }
    }

    pub fn grid(&self, pane: Pane) -> &MonthGrid {
        match pane {
            Pane::Primary => &self.grids[0],
            Pane::Secondary => &self.grids[1],
        }
    }

    pub fn annotated(
        &self,
        pane: Pane,
        range: DateRange,
    ) -> impl Iterator<Item = AnnotatedCell> + '_ {
        self.grid(pane)
            .cells()
            .iter()
            .map(move |&cell| AnnotatedCell::new(cell, &range))
    }

    /// Handle a click on the cell at row `week` and column `weekday` of
    /// `pane`.
    ///
    /// If the cell belongs to the focused month of its pane, the click is
    /// applied to `current`, the result is passed to `listener`, and it is
    /// also returned.  Clicks on filler days or outside of the grid do
    /// nothing and return `None`.
    pub fn click<L: RangeListener + ?Sized>(
        &self,
        pane: Pane,
        week: usize,
        weekday: usize,
        current: DateRange,
        listener: &mut L,
    ) -> Option<DateRange> {
        let cell = self
            .grid(pane)
            .cell(week, weekday)
            .filter(|c| c.in_focused_month)?;
        let range = current.click(cell.date);
        listener.range_selected(range);
        Some(range)
    }

    /// The view one month earlier.  The selection is not involved.
    pub fn previous_month(&self) -> Result<DualMonthView, CalendarError> {
        let cursor = self.cursor.retreat()?;
        log::debug!("Navigating back to {cursor}");
        DualMonthView::new(cursor)
    }

    /// The view one month later.  The selection is not involved.
    pub fn next_month(&self) -> Result<DualMonthView, CalendarError> {
        let cursor = self.cursor.advance()?;
        log::debug!("Navigating forward to {cursor}");
        DualMonthView::new(cursor)
    }
}
