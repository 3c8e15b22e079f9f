use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::utils::centered_area;
use crate::domain::{Alert, AlertLevel};

const MAX_POPUP_WIDTH: u16 = 60;
const DISMISS_HINT: &str = "press any key";

pub struct AlertPopup<'a> {
    alert: &'a Alert,
}

impl<'a> AlertPopup<'a> {
    #[must_use]
    pub const fn new(alert: &'a Alert) -> Self {
        Self { alert }
    }

    const fn color(level: AlertLevel) -> Color {
        match level {
            AlertLevel::Info => Color::Cyan,
            AlertLevel::Warn => Color::Yellow,
            AlertLevel::Error => Color::Red,
        }
    }
}

impl Widget for AlertPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.alert.title);
        let message = &self.alert.message;

        let max_width = MAX_POPUP_WIDTH.min(area.width.saturating_sub(2));
        let width = u16::try_from(message.width())
            .unwrap_or(u16::MAX)
            .max(u16::try_from(title.width()).unwrap_or(0))
            .max(u16::try_from(DISMISS_HINT.width()).unwrap_or(0))
            .saturating_add(4)
            .min(max_width);

        let inner_width = width.saturating_sub(2).max(1);
        let content_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
        let lines = content_width.div_ceil(inner_width).max(1);
        let height = lines.saturating_add(4).min(10);

        let popup = centered_area(width, height, area);
        if popup.area() == 0 {
            return;
        }

        let color = Self::color(self.alert.level);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(color));

        let text = vec![
            Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                DISMISS_HINT,
                Style::default().fg(Color::DarkGray),
            )),
        ];

        Clear.render(popup, buf);
        Paragraph::new(text)
            .block(block)
            .centered()
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}
