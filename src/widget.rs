use crate::summary::range_label;
use crate::theme::{
    FILLER_STYLE, IN_RANGE_STYLE, NAV_STYLE, RANGE_END_STYLE, SUMMARY_LABEL_STYLE, TITLE_STYLE,
    WEEKDAY_STYLE,
};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use staypick::calendar::{AnnotatedCell, DateRange, DualMonthView, Pane, DAYS_IN_WEEK};

static WEEKDAYS: [&str; DAYS_IN_WEEK] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Number of columns per day of week
const DAY_WIDTH: u16 = 5;

/// Width of one month's grid
const PANE_WIDTH: u16 = DAY_WIDTH * 7;

/// Columns between the two months
const PANE_GUTTER: u16 = 4;

/// Width of the strip on either side holding the previous/next arrows
const NAV_WIDTH: u16 = 3;

const TOTAL_WIDTH: u16 = NAV_WIDTH + PANE_WIDTH + PANE_GUTTER + PANE_WIDTH + NAV_WIDTH;

/// Number of lines taken up by the month title, weekday header, and rule
const HEADER_LINES: u16 = 3;

/// A month never spans more than six weeks
const MAX_WEEKS: u16 = 6;

const SUMMARY_LINE: u16 = HEADER_LINES + MAX_WEEKS + 1;

const TOTAL_HEIGHT: u16 = SUMMARY_LINE + 1;

const PREVIOUS_ARROW: &str = "‹";
const NEXT_ARROW: &str = "›";
const ACS_HLINE: &str = "─";

/// What lies under a given screen position
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Hit {
    Previous,
    Next,
    Day {
        pane: Pane,
        week: usize,
        weekday: usize,
    },
}

/// Placement of the dual-month calendar within an area, shared between
/// drawing and mouse hit-testing
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct CalendarLayout {
    x: u16,
    y: u16,
}

impl CalendarLayout {
    pub(crate) fn new(area: Rect) -> CalendarLayout {
        CalendarLayout {
            x: area.x + area.width.saturating_sub(TOTAL_WIDTH) / 2,
            y: area.y + area.height.saturating_sub(TOTAL_HEIGHT) / 2,
        }
    }

    fn pane_offset(pane: Pane) -> u16 {
        match pane {
            Pane::Primary => NAV_WIDTH,
            Pane::Secondary => NAV_WIDTH + PANE_WIDTH + PANE_GUTTER,
        }
    }

    pub(crate) fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let x = column.checked_sub(self.x)?;
        let y = row.checked_sub(self.y)?;
        if x >= TOTAL_WIDTH || y >= HEADER_LINES + MAX_WEEKS {
            return None;
        }
        if x < NAV_WIDTH {
            return Some(Hit::Previous);
        }
        if x >= TOTAL_WIDTH - NAV_WIDTH {
            return Some(Hit::Next);
        }
        let week = y.checked_sub(HEADER_LINES)?;
        Pane::ALL.into_iter().find_map(|pane| {
            let px = x.checked_sub(Self::pane_offset(pane))?;
            (px < PANE_WIDTH).then_some(Hit::Day {
                pane,
                week: usize::from(week),
                weekday: usize::from(px / DAY_WIDTH),
            })
        })
    }
}

/// Two months side by side with the current selection highlighted, plus the
/// booking summary strip below them
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Calendar<'a> {
    view: &'a DualMonthView,
    range: DateRange,
}

impl<'a> Calendar<'a> {
    pub(crate) fn new(view: &'a DualMonthView, range: DateRange) -> Calendar<'a> {
        Calendar { view, range }
    }
}

impl Widget for Calendar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = CalendarLayout::new(area);
        let mut canvas = BufferCanvas::new(area, layout, buf);
        canvas.mvprint(0, 1, PREVIOUS_ARROW, NAV_STYLE);
        canvas.mvprint(0, TOTAL_WIDTH - 2, NEXT_ARROW, NAV_STYLE);
        for pane in Pane::ALL {
            let left = CalendarLayout::pane_offset(pane);
            canvas.draw_title(left, &self.view.pane_cursor(pane).to_string());
            canvas.draw_header(left);
            for (i, cell) in (0u16..).zip(self.view.annotated(pane, self.range)) {
                canvas.draw_day(left, i, cell);
            }
        }
        canvas.draw_summary(&self.range);
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    layout: CalendarLayout,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, layout: CalendarLayout, buf: &'a mut Buffer) -> Self {
        Self { area, layout, buf }
    }

    fn draw_title(&mut self, left: u16, title: &str) {
        let width = u16::try_from(title.chars().count()).unwrap_or(u16::MAX);
        let offset = PANE_WIDTH.saturating_sub(width) / 2;
        self.mvprint(0, left + offset, title, TITLE_STYLE);
    }

    fn draw_header(&mut self, left: u16) {
        for (i, wd) in (0u16..).zip(WEEKDAYS) {
            self.mvprint(1, left + DAY_WIDTH * i, format!("{wd:^5}"), WEEKDAY_STYLE);
        }
        self.hline(2, left, PANE_WIDTH);
    }

    // `index` is the position of the cell within its month's grid
    fn draw_day(&mut self, left: u16, index: u16, cell: AnnotatedCell) {
        let week = index / 7;
        let weekday = index % 7;
        let style = if cell.is_endpoint() {
            RANGE_END_STYLE
        } else if cell.in_range {
            IN_RANGE_STYLE
        } else if cell.cell.in_focused_month {
            Style::new()
        } else {
            FILLER_STYLE
        };
        self.mvprint(
            HEADER_LINES + week,
            left + DAY_WIDTH * weekday,
            format!("{:^5}", cell.cell.date.day()),
            style,
        );
    }

    fn draw_summary(&mut self, range: &DateRange) {
        let label = "Dates: ";
        self.mvprint(SUMMARY_LINE, NAV_WIDTH, label, SUMMARY_LABEL_STYLE);
        let width = u16::try_from(label.len()).unwrap_or(u16::MAX);
        self.mvprint(
            SUMMARY_LINE,
            NAV_WIDTH + width,
            range_label(range),
            Style::new(),
        );
    }

    // `y` and `x` are relative to the calendar's layout origin
    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Style) {
        let x = self.layout.x + x;
        let y = self.layout.y + y;
        if y < self.area.bottom() && x < self.area.right() {
            let width = usize::from(self.area.right() - x);
            self.buf.set_stringn(x, y, s, width, style);
        }
    }

    fn hline(&mut self, y: u16, x: u16, length: u16) {
        self.mvprint(y, x, ACS_HLINE.repeat(length.into()), WEEKDAY_STYLE);
    }
}
