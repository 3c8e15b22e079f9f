//! Tail view of the system log.
//!
//! Newest entries sit at the bottom. Long entries wrap at word boundaries
//! and the view stays anchored to the last wrapped row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::narrative_panel::tail_offset;
use crate::application::services::SystemLog;
use crate::domain::{LogEntry, LogSeverity};

#[must_use]
pub const fn severity_color(severity: LogSeverity) -> Color {
    match severity {
        LogSeverity::Info => Color::White,
        LogSeverity::System => Color::Cyan,
        LogSeverity::Success => Color::Green,
        LogSeverity::Warning => Color::Yellow,
        LogSeverity::Error => Color::Red,
    }
}

pub struct LogPanel<'a> {
    log: &'a SystemLog,
    show_timestamps: bool,
}

impl<'a> LogPanel<'a> {
    #[must_use]
    pub const fn new(log: &'a SystemLog) -> Self {
        Self {
            log,
            show_timestamps: true,
        }
    }

    #[must_use]
    pub const fn show_timestamps(mut self, show: bool) -> Self {
        self.show_timestamps = show;
        self
    }

    fn entry_line(&self, entry: &LogEntry) -> Line<'static> {
        let mut spans = Vec::with_capacity(2);

        if self.show_timestamps {
            spans.push(Span::styled(
                format!("[{}] ", entry.time_label()),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let mut style = Style::default().fg(severity_color(entry.severity));
        if entry.severity == LogSeverity::Error {
            style = style.add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(entry.message.clone(), style));

        Line::from(spans)
    }
}

impl Widget for LogPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" SYSTEM LOG ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // each entry takes at least one row, so older ones can never show
        let skip = self.log.len().saturating_sub(usize::from(inner.height));
        let lines: Vec<Line<'static>> = self
            .log
            .entries()
            .skip(skip)
            .map(|entry| self.entry_line(entry))
            .collect();

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        let scroll = tail_offset(&paragraph, inner);

        paragraph.scroll((scroll, 0)).render(inner, buf);
    }
}
