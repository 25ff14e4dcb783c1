mod app;
mod help;
mod summary;
mod theme;
mod widget;
use crate::app::App;
use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    ExecutableCommand,
};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use staypick::calendar::{CalendarDate, CalendarError, DateRange, DualMonthView, MonthCursor};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        month: Option<MonthCursor>,
        from: Option<CalendarDate>,
        to: Option<CalendarDate>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut month = None;
        let mut from = None;
        let mut to = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('f') | Arg::Long("from") => from = Some(parser.value()?.parse()?),
                Arg::Short('t') | Arg::Long("to") => to = Some(parser.value()?.parse()?),
                Arg::Short('l') | Arg::Long("log-file") => {
                    log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Value(value) if month.is_none() => {
                    month = Some(value.parse_with(parse_month)?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            month,
            from,
            to,
            log_file,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                month,
                from,
                to,
                log_file,
            } => {
                if let Some(path) = log_file {
                    init_logging(&path)?;
                }
                let range = DateRange::from_bounds(from, to).context("invalid --from/--to")?;
                let cursor = match month.or_else(|| range.from().map(MonthCursor::containing)) {
                    Some(c) => c,
                    None => {
                        let today = OffsetDateTime::now_local()
                            .context("failed to determine local date")?
                            .date();
                        MonthCursor::containing(today.into())
                    }
                };
                let view = DualMonthView::new(cursor)
                    .with_context(|| format!("cannot show calendar for {cursor}"))?;
                log::info!("Starting at {cursor} with selection {range}");
                let accepted = with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(view, range)
                        .run(&mut terminal)
                        .context("failed to run calendar")
                })?;
                if let Some(range) = accepted {
                    log::info!("Accepted selection {range}");
                    println!("{range}");
                }
                Ok(())
            }
            Command::Help => {
                println!("Usage: staypick [options] [YYYY-MM]");
                println!();
                println!("Dual-month date-range picker for hotel stays");
                println!();
                println!("Click a day to pick check-in, then another to pick check-out.");
                println!("On ENTER, the selected dates are printed to standard output.");
                println!();
                println!("Options:");
                println!("  -f, --from <YYYY-MM-DD>   Preselect the check-in date");
                println!("  -t, --to <YYYY-MM-DD>     Preselect the check-out date");
                println!("  -l, --log-file <PATH>     Write logs to the given file");
                println!("  -h, --help                Display this help message and exit");
                println!("  -V, --version             Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
enum MonthArgError {
    #[error("invalid month {0:?}: expected YYYY-MM")]
    Format(String),
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

// Months on the command line are one-based, as in dates
fn parse_month(s: &str) -> Result<MonthCursor, MonthArgError> {
    let bad = || MonthArgError::Format(s.to_owned());
    let (year, month) = s.rsplit_once('-').ok_or_else(bad)?;
    let year = year.parse::<i32>().map_err(|_| bad())?;
    let month = month
        .parse::<u8>()
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(bad)?;
    Ok(MonthCursor::new(year, month - 1)?)
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    // Logging to stderr would draw over the calendar, so logs only go to a
    // file, and only when one is requested.
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .write_style(env_logger::WriteStyle::Never)
        .try_init()
        .context("failed to initialize logger")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = io::stdout()
        .execute(EnableMouseCapture)
        .context("failed to enable mouse capture")
        .and_then(|_| func(terminal));
    let disabled = io::stdout().execute(DisableMouseCapture).map(|_| ());
    ratatui::restore();
    let value = r?;
    disabled.context("failed to disable mouse capture")?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn parse(args: &[&str]) -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn test_no_args() {
        assert_eq!(
            parse(&[]).unwrap(),
            Command::Run {
                month: None,
                from: None,
                to: None,
                log_file: None,
            }
        );
    }

    #[test]
    fn test_full_args() {
        assert_eq!(
            parse(&[
                "--from",
                "2025-03-27",
                "-t",
                "2025-03-19",
                "--log-file",
                "staypick.log",
                "2025-03",
            ])
            .unwrap(),
            Command::Run {
                month: Some(MonthCursor::new(2025, 2).unwrap()),
                from: Some(CalendarDate::from(date!(2025 - 03 - 27))),
                to: Some(CalendarDate::from(date!(2025 - 03 - 19))),
                log_file: Some(PathBuf::from("staypick.log")),
            }
        );
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse(&["-h"]).unwrap(), Command::Help);
        assert_eq!(parse(&["2025-03", "--version"]).unwrap(), Command::Version);
    }

    #[test]
    fn test_bad_date() {
        assert!(matches!(
            parse(&["--from", "2025-02-30"]),
            Err(lexopt::Error::ParsingFailed { .. })
        ));
    }

    #[test]
    fn test_extra_positional() {
        assert!(matches!(
            parse(&["2025-03", "2025-04"]),
            Err(lexopt::Error::UnexpectedArgument(_))
        ));
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2025-03"), Ok(MonthCursor::new(2025, 2).unwrap()));
        assert_eq!(parse_month("2025-12"), Ok(MonthCursor::new(2025, 11).unwrap()));
        assert_eq!(parse_month("-0044-03"), Ok(MonthCursor::new(-44, 2).unwrap()));
        assert_eq!(
            parse_month("2025-13"),
            Err(MonthArgError::Format(String::from("2025-13")))
        );
        assert_eq!(
            parse_month("2025-00"),
            Err(MonthArgError::Format(String::from("2025-00")))
        );
        assert_eq!(
            parse_month("March"),
            Err(MonthArgError::Format(String::from("March")))
        );
        assert_eq!(
            parse_month("10000-01"),
            Err(MonthArgError::Calendar(CalendarError::OutOfTime))
        );
    }
}
