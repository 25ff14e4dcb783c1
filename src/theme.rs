use ratatui::style::{Color, Modifier, Style};

const GOLD: Color = Color::Rgb(0xD2, 0xAC, 0x71);

const SAND: Color = Color::Rgb(0xF5, 0xE1, 0xBB);

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.fg(GOLD);

pub(crate) const NAV_STYLE: Style = BASE_STYLE.fg(GOLD).add_modifier(Modifier::BOLD);

pub(crate) const FILLER_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const IN_RANGE_STYLE: Style = Style::new().fg(Color::Black).bg(SAND);

pub(crate) const RANGE_END_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(GOLD)
    .add_modifier(Modifier::BOLD);

pub(crate) const SUMMARY_LABEL_STYLE: Style = BASE_STYLE.fg(GOLD).add_modifier(Modifier::BOLD);
