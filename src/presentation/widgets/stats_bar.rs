//! Aggregate stats header.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::application::StatsView;

/// Health band of the success rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLevel {
    Healthy,
    Degraded,
    Failing,
}

impl RateLevel {
    #[must_use]
    pub const fn from_rate(rate: u64) -> Self {
        match rate {
            90.. => Self::Healthy,
            50..=89 => Self::Degraded,
            _ => Self::Failing,
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Healthy => Color::Green,
            Self::Degraded => Color::Yellow,
            Self::Failing => Color::Red,
        }
    }
}

/// One line with the four dashboard numbers.
#[derive(Debug, Clone, Copy)]
pub struct StatsBar {
    stats: StatsView,
}

impl StatsBar {
    #[must_use]
    pub const fn new(stats: StatsView) -> Self {
        Self { stats }
    }

    fn cell(label: &'static str, value: String, value_style: Style) -> [Span<'static>; 3] {
        [
            Span::styled(label, Style::default().fg(Color::DarkGray)),
            Span::styled(value, value_style),
            Span::raw("   "),
        ]
    }
}

impl Widget for &StatsBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let value = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let rate = Style::default()
            .fg(RateLevel::from_rate(self.stats.success_rate).color())
            .add_modifier(Modifier::BOLD);

        let mut spans = Vec::with_capacity(12);
        spans.extend(StatsBar::cell(
            "APPS ",
            self.stats.total_apps.to_string(),
            value,
        ));
        spans.extend(StatsBar::cell(
            "DYNOS ",
            self.stats.total_dynos.to_string(),
            value,
        ));
        spans.extend(StatsBar::cell(
            "REQUESTS ",
            self.stats.total_requests.to_string(),
            value,
        ));
        spans.extend(StatsBar::cell(
            "SUCCESS ",
            format!("{}%", self.stats.success_rate),
            rate,
        ));

        Paragraph::new(Line::from(spans))
            .centered()
            .render(area, buf);
    }
}
