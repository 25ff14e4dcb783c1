use super::{CalendarDate, CalendarError};

/// A check-in/check-out selection.
///
/// Either bound may be absent, but an end without a start cannot be
/// constructed, and when both are present `from <= to`.  Ranges are values:
/// every transition returns a new `DateRange` and leaves the old one alone.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct DateRange {
    from: Option<CalendarDate>,
    to: Option<CalendarDate>,
}

/// The three states a [`DateRange`] can be in
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RangeState {
    Empty,
    AnchorOnly(CalendarDate),
    Complete { from: CalendarDate, to: CalendarDate },
}

impl DateRange {
    pub fn empty() -> DateRange {
        DateRange::default()
    }

    pub fn anchored(from: CalendarDate) -> DateRange {
        DateRange {
            from: Some(from),
            to: None,
        }
    }

    /// The range covering both dates, in whichever order they are given
    pub fn between(a: CalendarDate, b: CalendarDate) -> DateRange {
        DateRange {
            from: Some(a.min(b)),
            to: Some(a.max(b)),
        }
    }

    /// Build a range from bounds supplied by a host.  Inverted bounds are
    /// reordered; an end date without a start date is rejected.
    pub fn from_bounds(
        from: Option<CalendarDate>,
        to: Option<CalendarDate>,
    ) -> Result<DateRange, CalendarError> {
        match (from, to) {
            (None, None) => Ok(DateRange::empty()),
            (Some(from), None) => Ok(DateRange::anchored(from)),
            (Some(from), Some(to)) => Ok(DateRange::between(from, to)),
            (None, Some(_)) => Err(CalendarError::MissingAnchor),
        }
    }

    pub fn from(&self) -> Option<CalendarDate> {
        self.from
    }

    pub fn to(&self) -> Option<CalendarDate> {
        self.to
    }

    pub fn state(&self) -> RangeState {
        match (self.from, self.to) {
            (Some(from), Some(to)) => RangeState::Complete { from, to },
            (Some(from), None) => RangeState::AnchorOnly(from),
            (None, _) => RangeState::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none()
    }

    /// Apply a click on `clicked` and return the resulting range.
    ///
    /// With no selection or a completed one, the click starts a new range
    /// anchored at `clicked`.  With only an anchor, the click completes the
    /// range, swapping the bounds if `clicked` precedes the anchor.  Clicking
    /// the anchor itself yields a single-day range.
    pub fn click(self, clicked: CalendarDate) -> DateRange {
        let next = match self.state() {
            RangeState::Empty | RangeState::Complete { .. } => DateRange::anchored(clicked),
            RangeState::AnchorOnly(from) => DateRange::between(from, clicked),
        };
        log::debug!("Range {self} + click on {clicked} -> {next}");
        next
    }

    pub fn is_range_start(&self, date: CalendarDate) -> bool {
        self.from == Some(date)
    }

    pub fn is_range_end(&self, date: CalendarDate) -> bool {
        self.to == Some(date)
    }

    pub fn in_range(&self, date: CalendarDate) -> bool {
        match self.state() {
            RangeState::Empty => false,
            RangeState::AnchorOnly(from) => date == from,
            RangeState::Complete { from, to } => from <= date && date <= to,
        }
    }

    /// Number of nights between check-in and check-out, for a complete range
    pub fn nights(&self) -> Option<i64> {
        match self.state() {
            RangeState::Complete { from, to } => Some(from.days_until(to)),
            _ => None,
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.state() {
            RangeState::Empty => write!(f, "(empty)"),
            RangeState::AnchorOnly(from) => write!(f, "{from}"),
            RangeState::Complete { from, to } => write!(f, "{from} {to}"),
        }
    }
}

/// The reducer behind day clicks; see [`DateRange::click`]
pub fn on_day_click(current: DateRange, clicked: CalendarDate) -> DateRange {
    current.click(clicked)
}

/// Receives each range produced by a day click
pub trait RangeListener {
    fn range_selected(&mut self, range: DateRange);
}

impl<F: FnMut(DateRange)> RangeListener for F {
    fn range_selected(&mut self, range: DateRange) {
        self(range);
    }
}
