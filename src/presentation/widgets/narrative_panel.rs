//! Narrative panel fed by the typewriter.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::application::services::Typewriter;

const TITLE: &str = " PLATFORM NOTES ";
const CURSOR: &str = "▌";

/// Scroll offset that keeps the last wrapped row of `paragraph` on the
/// bottom row of `area`.
#[must_use]
pub fn tail_offset(paragraph: &Paragraph<'_>, area: Rect) -> u16 {
    let rows = paragraph.line_count(area.width);
    u16::try_from(rows.saturating_sub(usize::from(area.height))).unwrap_or(u16::MAX)
}

pub struct NarrativePanel<'a> {
    typewriter: &'a Typewriter,
}

impl<'a> NarrativePanel<'a> {
    #[must_use]
    pub const fn new(typewriter: &'a Typewriter) -> Self {
        Self { typewriter }
    }
}

impl Widget for NarrativePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let text_style = Style::default().fg(Color::Green);
        let cursor_style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::SLOW_BLINK);

        let lines: Vec<Line<'static>> = self
            .typewriter
            .lines()
            .iter()
            .map(|line| {
                let text = Span::styled(line.visible_text(), text_style);
                if line.is_complete() {
                    Line::from(text)
                } else {
                    Line::from(vec![text, Span::styled(CURSOR, cursor_style)])
                }
            })
            .collect();

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        let scroll = tail_offset(&paragraph, inner);

        paragraph.scroll((scroll, 0)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::PLATFORM_FACTS;
    use std::time::Duration;

    fn rows(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_tail_offset_counts_word_wrapped_rows() {
        let paragraph = Paragraph::new(vec![
            Line::from("aaaa bbbb cccc"),
            Line::from("dd"),
        ])
        .wrap(Wrap { trim: false });

        // "aaaa bbbb " and "cccc" on the first line, then "dd"
        assert_eq!(tail_offset(&paragraph, Rect::new(0, 0, 10, 1)), 2);
        assert_eq!(tail_offset(&paragraph, Rect::new(0, 0, 10, 5)), 0);
    }

    #[test]
    fn test_partial_line_shows_cursor() {
        let mut tw = Typewriter::new(Duration::from_millis(10));
        tw.emit_default("hello");
        tw.tick(Duration::from_millis(20));

        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        NarrativePanel::new(&tw).render(area, &mut buf);

        assert!(rows(&buf)[1].contains("> hel▌"));
    }

    #[test]
    fn test_scrolls_to_latest_line() {
        let mut tw = Typewriter::new(Duration::ZERO);
        for i in 0..6 {
            tw.emit_default(&format!("fact {i}"));
        }

        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        NarrativePanel::new(&tw).render(area, &mut buf);

        let rows = rows(&buf);
        assert!(rows[1].contains("> fact 4"));
        assert!(rows[2].contains("> fact 5"));
    }

    #[test]
    fn test_newest_line_visible_after_long_facts_in_narrow_panel() {
        let mut tw = Typewriter::new(Duration::ZERO);
        for fact in PLATFORM_FACTS {
            tw.emit_default(fact);
        }
        tw.emit_default("LAST-LINE");

        let area = Rect::new(0, 0, 32, 10);
        let mut buf = Buffer::empty(area);
        NarrativePanel::new(&tw).render(area, &mut buf);

        let rows = rows(&buf);
        assert!(rows[8].contains("> LAST-LINE"), "rows: {rows:#?}");
        assert!(rows[7].contains("increases."), "rows: {rows:#?}");
    }
}
