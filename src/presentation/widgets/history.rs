use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

use crate::domain::{history::History, text::truncate_right};

pub const HISTORY_TITLE: &str = "Calculation History";
pub const HISTORY_EMPTY: &str = "No calculations yet";
pub const HISTORY_CLEAR_LABEL: &str = "Clear";

/// Bordered list of past calculations, newest first
pub struct HistoryWidget<'a> {
    history: &'a History,
    style: Style,
    clear_style: Style,
}

impl<'a> HistoryWidget<'a> {
    pub fn new(history: &'a History) -> Self {
        Self {
            history,
            style: Style::default(),
            clear_style: Style::default().fg(Color::Red),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn clear_style(mut self, style: Style) -> Self {
        self.clear_style = style;
        self
    }

    fn block() -> Block<'static> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .title(format!(" {HISTORY_TITLE} "))
    }

    /// Where the "Clear" button sits for a panel drawn in `area`
    pub fn clear_button_area(area: Rect) -> Rect {
        let inner = Self::block().inner(area);
        let width = (HISTORY_CLEAR_LABEL.len() as u16).min(inner.width);
        Rect {
            x: inner.right().saturating_sub(width),
            y: inner.y,
            width,
            height: inner.height.min(1),
        }
    }
}

impl Widget for HistoryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Self::block();
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        Paragraph::new(HISTORY_CLEAR_LABEL)
            .style(self.clear_style)
            .alignment(Alignment::Right)
            .render(Self::clear_button_area(area), buf);

        let list_area = Rect {
            y: inner.y + 1,
            height: inner.height.saturating_sub(1),
            ..inner
        };

        let width = list_area.width as usize;
        let lines: Vec<Line> = if self.history.is_empty() {
            vec![Line::from(HISTORY_EMPTY).centered()]
        } else {
            self.history
                .iter()
                .map(|entry| Line::from(truncate_right(entry, width)))
                .collect()
        };

        Paragraph::new(lines)
            .style(self.style)
            .render(list_area, buf);
    }
}
