use staypick::calendar::{CalendarDate, DateRange, RangeState};

/// Text shown in the booking summary strip for the given selection
pub(crate) fn range_label(range: &DateRange) -> String {
    match range.state() {
        RangeState::Empty => String::from("Select Dates"),
        RangeState::AnchorOnly(from) => format!("{} - ...", long_date(from)),
        RangeState::Complete { from, to } => {
            let nights = from.days_until(to);
            format!(
                "{} - {} ({nights} night{})",
                long_date(from),
                long_date(to),
                if nights == 1 { "" } else { "s" }
            )
        }
    }
}

/// Formats a date as, e.g., "19 March 2025"
pub(crate) fn long_date(date: CalendarDate) -> String {
    format!("{} {} {}", date.day(), date.month(), date.year())
}
