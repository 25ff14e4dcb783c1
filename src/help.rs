use crate::theme::{BASE_STYLE, NAV_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Margin, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

/// Width of the column listing the keys
const KEY_COLUMN: usize = 16;

static COMMANDS: &[(&str, &str)] = &[
    ("CLICK", "Pick check-in, then check-out"),
    ("‹ / ›", "Previous/next month"),
    ("<, p, PAGE UP", "Previous month"),
    (">, n, PAGE DOWN", "Next month"),
    ("c", "Clear the selected dates"),
    ("ENTER", "Accept the selected dates"),
    ("?", "Show this help"),
    ("q, ESC", "Quit"),
];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help;

impl Help {
    fn text() -> Text<'static> {
        let mut lines = COMMANDS
            .iter()
            .map(|&(keys, what)| {
                Line::from_iter([
                    Span::styled(format!("{keys:KEY_COLUMN$}"), NAV_STYLE),
                    Span::styled(what, BASE_STYLE),
                ])
            })
            .collect::<Vec<_>>();
        lines.push(Line::raw(""));
        lines.push(Line::raw("Press the Any Key to dismiss."));
        Text::from(lines)
    }
}

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Help::text();
        // Text plus border plus one column of padding on each side
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4);
        let [popup] = Layout::horizontal([width.min(area.width)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::vertical([height.min(area.height)])
            .flex(Flex::Center)
            .areas(popup);
        Clear.render(popup, buf);
        let block = Block::bordered()
            .title(" Commands ")
            .title_alignment(Alignment::Center)
            .style(BASE_STYLE);
        let inner = block.inner(popup).inner(Margin::new(1, 0));
        block.render(popup, buf);
        Paragraph::new(text).render(inner, buf);
    }
}
