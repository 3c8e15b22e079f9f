use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::utils::centered_area;
use crate::application::DeleteConfirmation;

/// Modal asking whether a delete should go ahead.
pub struct ConfirmDialog<'a> {
    confirmation: &'a DeleteConfirmation,
}

impl<'a> ConfirmDialog<'a> {
    #[must_use]
    pub const fn new(confirmation: &'a DeleteConfirmation) -> Self {
        Self { confirmation }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let prompt = self.confirmation.prompt();
        let width = u16::try_from(prompt.chars().count())
            .unwrap_or(u16::MAX)
            .max(32)
            .saturating_add(6);
        let popup = centered_area(width, 7, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Red))
            .title(" CONFIRM ");

        let key = Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD);
        let text = vec![
            Line::from(Span::styled(
                prompt,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.confirmation.warning(),
                Style::default().fg(Color::Red),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled(" y ", key),
                Span::raw(" delete   "),
                Span::styled(" n ", key),
                Span::raw(" keep"),
            ]),
        ];

        Clear.render(popup, buf);
        Paragraph::new(text)
            .block(block)
            .centered()
            .render(popup, buf);
    }
}
