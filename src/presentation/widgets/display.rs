use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{numeral::format_compact, text::truncate_left};

/// Two right-aligned lines: the staged `"<prev> <symbol>"` and the value
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayWidget {
    pending: Option<String>,
    value: String,
    number: Option<f64>,
    value_style: Style,
    pending_style: Style,
}

impl DisplayWidget {
    pub fn new(pending: Option<String>, value: impl Into<String>) -> Self {
        Self {
            pending,
            value: value.into(),
            number: None,
            value_style: Style::default().add_modifier(Modifier::BOLD),
            pending_style: Style::default().fg(Color::DarkGray),
        }
    }

    /// Numeric value shown in exponent form when the text does not fit
    pub fn number(mut self, number: f64) -> Self {
        self.number = Some(number);
        self
    }

    pub fn value_style(mut self, style: Style) -> Self {
        self.value_style = style;
        self
    }

    pub fn pending_style(mut self, style: Style) -> Self {
        self.pending_style = style;
        self
    }
}

impl Widget for DisplayWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().border_type(BorderType::Rounded);
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let pending = self
            .pending
            .map(|p| truncate_left(&p, width))
            .unwrap_or_default();
        let value = if self.value.width() <= width {
            self.value
        } else {
            self.number
                .and_then(|n| format_compact(n, width))
                .unwrap_or_else(|| truncate_left(&self.value, width))
        };
        debug_assert!(value.width() <= width.max(1));

        Paragraph::new(vec![
            Line::styled(pending, self.pending_style),
            Line::styled(value, self.value_style),
        ])
        .alignment(Alignment::Right)
        .render(inner, buf);
    }
}
