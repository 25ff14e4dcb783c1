use crate::help::Help;
use crate::theme::BASE_STYLE;
use crate::widget::{Calendar, CalendarLayout, Hit};
use crossterm::event::{
    read, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, buffer::Buffer, layout::Rect, widgets::Widget, Terminal};
use staypick::calendar::{DateRange, DualMonthView};
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    view: DualMonthView,
    // The selection is owned here and only ever replaced by the results of
    // `DualMonthView::click`.
    range: DateRange,
    state: AppState,
    layout: CalendarLayout,
}

impl App {
    pub(crate) fn new(view: DualMonthView, range: DateRange) -> App {
        App {
            view,
            range,
            state: AppState::Calendar,
            layout: CalendarLayout::default(),
        }
    }

    /// Run the event loop until the user quits.  Returns the selection if
    /// the user accepted it.
    pub(crate) fn run<B: Backend>(
        mut self,
        terminal: &mut Terminal<B>,
    ) -> io::Result<Option<DateRange>> {
        while !self.done() {
            self.draw(terminal)?;
            self.handle_input()?;
        }
        Ok((self.state == AppState::Accepted).then_some(self.range))
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if !self.handle_event(read()?) {
            self.beep()?;
        }
        Ok(())
    }

    // Returns `false` if the event was an invalid key or click
    fn handle_event(&mut self, event: Event) -> bool {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match event {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self.handle_click(column, row),
            event => match event.as_key_press_event() {
                Some(KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers,
                    ..
                }) if modifiers == KeyModifiers::CONTROL => {
                    self.state = AppState::Quitting;
                    true
                }
                Some(KeyEvent {
                    code, modifiers, ..
                }) => normal_modifiers.contains(modifiers) && self.handle_key(code),
                // Redraw on resize, and we might as well redraw on other
                // stuff too
                None => true,
            },
        }
    }

    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Calendar => match key {
                KeyCode::Char('<' | 'p') | KeyCode::PageUp => self.previous_month(),
                KeyCode::Char('>' | 'n') | KeyCode::PageDown => self.next_month(),
                KeyCode::Char('c') => {
                    self.range = DateRange::empty();
                    true
                }
                KeyCode::Enter => {
                    if self.range.is_empty() {
                        false
                    } else {
                        self.state = AppState::Accepted;
                        true
                    }
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Accepted | AppState::Quitting => false,
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) -> bool {
        match self.state {
            AppState::Calendar => match self.layout.hit(column, row) {
                Some(Hit::Previous) => self.previous_month(),
                Some(Hit::Next) => self.next_month(),
                Some(Hit::Day {
                    pane,
                    week,
                    weekday,
                }) => self
                    .view
                    .click(pane, week, weekday, self.range, &mut |r: DateRange| self.range = r)
                    .is_some(),
                None => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Accepted | AppState::Quitting => false,
        }
    }

    fn previous_month(&mut self) -> bool {
        match self.view.previous_month() {
            Ok(view) => {
                self.view = view;
                true
            }
            Err(e) => {
                log::warn!("Cannot go back from {}: {e}", self.view.cursor());
                false
            }
        }
    }

    fn next_month(&mut self) -> bool {
        match self.view.next_month() {
            Ok(view) => {
                self.view = view;
                true
            }
            Err(e) => {
                log::warn!("Cannot go forward from {}: {e}", self.view.cursor());
                false
            }
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn done(&self) -> bool {
        matches!(self.state, AppState::Accepted | AppState::Quitting)
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        self.layout = CalendarLayout::new(area);
        Calendar::new(&self.view, self.range).render(area, buf);
        if self.state == AppState::Helping {
            Help.render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Accepted,
    Quitting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{FILLER_STYLE, IN_RANGE_STYLE, RANGE_END_STYLE};
    use crossterm::event::KeyEventKind;
    use staypick::calendar::{CalendarDate, MonthCursor};
    use time::macros::date;

    fn cd(date: time::Date) -> CalendarDate {
        CalendarDate::from(date)
    }

    fn march_2025(range: DateRange) -> App {
        let view = DualMonthView::new(MonthCursor::new(2025, 2).unwrap()).unwrap();
        App::new(view, range)
    }

    fn render(app: &mut App) -> Buffer {
        let area = Rect::new(0, 0, 80, 11);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        buffer
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_render_with_range() {
        let range = DateRange::between(cd(date!(2025 - 03 - 19)), cd(date!(2025 - 03 - 27)));
        let mut app = march_2025(range);
        let buffer = render(&mut app);
        assert_eq!(
            rows(&buffer),
            [
                " ‹             March 2025                             April 2025              › ",
                "    SUN  MON  TUE  WED  THU  FRI  SAT      SUN  MON  TUE  WED  THU  FRI  SAT    ",
                "   ───────────────────────────────────    ───────────────────────────────────   ",
                "    23   24   25   26   27   28    1       30   31    1    2    3    4    5     ",
                "     2    3    4    5    6    7    8        6    7    8    9   10   11   12     ",
                "     9   10   11   12   13   14   15       13   14   15   16   17   18   19     ",
                "    16   17   18   19   20   21   22       20   21   22   23   24   25   26     ",
                "    23   24   25   26   27   28   29       27   28   29   30    1    2    3     ",
                "    30   31    1    2    3    4    5                                            ",
                "                                                                                ",
                "   Dates: 19 March 2025 - 27 March 2025 (8 nights)                              ",
            ]
        );
        // 2025-03-19 and 2025-03-27 are the endpoints
        assert_eq!(buffer[(18, 6)].bg, RANGE_END_STYLE.bg.unwrap());
        assert_eq!(buffer[(23, 7)].bg, RANGE_END_STYLE.bg.unwrap());
        // 2025-03-20 is inside the range
        assert_eq!(buffer[(23, 6)].bg, IN_RANGE_STYLE.bg.unwrap());
        // 2025-03-18 is not
        assert_eq!(buffer[(13, 6)].bg, BASE_STYLE.bg.unwrap());
        // 2025-02-23 is filler
        assert_eq!(buffer[(3, 3)].fg, FILLER_STYLE.fg.unwrap());
        assert_eq!(buffer[(8, 4)].fg, BASE_STYLE.fg.unwrap());
    }

    #[test]
    fn test_click_to_select() {
        let mut app = march_2025(DateRange::empty());
        render(&mut app);
        // 2025-03-27
        assert!(app.handle_event(click(25, 7)));
        assert_eq!(app.range, DateRange::anchored(cd(date!(2025 - 03 - 27))));
        let buffer = render(&mut app);
        assert!(rows(&buffer)[10].starts_with("   Dates: 27 March 2025 - ...  "));
        // 2025-03-19
        assert!(app.handle_event(click(20, 6)));
        assert_eq!(
            app.range,
            DateRange::between(cd(date!(2025 - 03 - 19)), cd(date!(2025 - 03 - 27)))
        );
        // 2025-04-02, in the second month, starts a new range
        assert!(app.handle_event(click(60, 3)));
        assert_eq!(app.range, DateRange::anchored(cd(date!(2025 - 04 - 02))));
    }

    #[test]
    fn test_click_filler_and_blank_space() {
        let range = DateRange::anchored(cd(date!(2025 - 03 - 19)));
        let mut app = march_2025(range);
        render(&mut app);
        // 2025-03-30 as filler in the April grid
        assert!(!app.handle_event(click(45, 3)));
        // Between the months
        assert!(!app.handle_event(click(40, 5)));
        // Summary strip
        assert!(!app.handle_event(click(20, 10)));
        assert_eq!(app.range, range);
    }

    #[test]
    fn test_navigation_keeps_selection() {
        let range = DateRange::anchored(cd(date!(2025 - 03 - 19)));
        let mut app = march_2025(range);
        render(&mut app);
        assert!(app.handle_event(click(78, 0)));
        assert_eq!(app.view.cursor(), MonthCursor::new(2025, 3).unwrap());
        assert!(app.handle_event(key(KeyCode::Char('>'))));
        assert_eq!(app.view.cursor(), MonthCursor::new(2025, 4).unwrap());
        assert!(app.handle_event(key(KeyCode::PageUp)));
        assert!(app.handle_event(click(1, 0)));
        assert_eq!(app.view.cursor(), MonthCursor::new(2025, 2).unwrap());
        assert_eq!(app.range, range);
        let buffer = render(&mut app);
        assert!(rows(&buffer)[0].contains("March 2025"));
    }

    #[test]
    fn test_navigation_across_year() {
        let view = DualMonthView::new(MonthCursor::new(2025, 11).unwrap()).unwrap();
        let mut app = App::new(view, DateRange::empty());
        let buffer = render(&mut app);
        let rows = rows(&buffer);
        assert!(rows[0].contains("December 2025"));
        assert!(rows[0].contains("January 2026"));
        assert!(app.handle_event(key(KeyCode::Char('n'))));
        assert_eq!(app.view.cursor(), MonthCursor::new(2026, 0).unwrap());
    }

    #[test]
    fn test_navigation_at_end_of_time() {
        let view = DualMonthView::new(MonthCursor::new(9999, 9).unwrap()).unwrap();
        let mut app = App::new(view, DateRange::empty());
        assert!(!app.handle_event(key(KeyCode::Char('n'))));
        assert_eq!(app.view.cursor(), MonthCursor::new(9999, 9).unwrap());
    }

    #[test]
    fn test_clear_and_accept() {
        let range = DateRange::between(cd(date!(2025 - 03 - 19)), cd(date!(2025 - 03 - 27)));
        let mut app = march_2025(range);
        assert!(app.handle_event(key(KeyCode::Char('c'))));
        assert!(app.range.is_empty());
        assert!(!app.handle_event(key(KeyCode::Enter)));
        assert!(!app.done());
        render(&mut app);
        assert!(app.handle_event(click(20, 6)));
        assert!(app.handle_event(key(KeyCode::Enter)));
        assert_eq!(app.state, AppState::Accepted);
        assert!(app.done());
    }

    #[test]
    fn test_quit() {
        let mut app = march_2025(DateRange::empty());
        assert!(app.handle_event(key(KeyCode::Esc)));
        assert_eq!(app.state, AppState::Quitting);
        let mut app = march_2025(DateRange::empty());
        assert!(app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        ))));
        assert_eq!(app.state, AppState::Quitting);
    }

    #[test]
    fn test_invalid_key_and_modifiers() {
        let mut app = march_2025(DateRange::empty());
        assert!(!app.handle_event(key(KeyCode::Char('x'))));
        assert!(!app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('n'),
            KeyModifiers::ALT
        ))));
        assert_eq!(app.view.cursor(), MonthCursor::new(2025, 2).unwrap());
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = march_2025(DateRange::empty());
        let release =
            KeyEvent::new_with_kind(KeyCode::Char('n'), KeyModifiers::NONE, KeyEventKind::Release);
        assert!(app.handle_event(Event::Key(release)));
        assert_eq!(app.view.cursor(), MonthCursor::new(2025, 2).unwrap());
    }

    #[test]
    fn test_help() {
        let mut app = march_2025(DateRange::empty());
        assert!(app.handle_event(key(KeyCode::Char('?'))));
        assert_eq!(app.state, AppState::Helping);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        assert!(rows(&buffer).iter().any(|r| r.contains(" Commands ")));
        // Clicking while help is shown only dismisses it
        assert!(app.handle_event(click(20, 6)));
        assert_eq!(app.state, AppState::Calendar);
        assert!(app.range.is_empty());
    }
}
