//! Registry list with per-app controls.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::application::{AppView, dto::EMPTY_STATE_TEXT};
use crate::domain::AppStatus;

/// Selection and focus of the app list.
#[derive(Debug, Default)]
pub struct AppListState {
    list_state: ListState,
    focused: bool,
}

impl AppListState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let next = self.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let prev = self.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(prev));
    }

    /// Keeps the selection inside a list of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        match (self.selected(), len) {
            (_, 0) => self.list_state.select(None),
            (None, _) => self.list_state.select(Some(0)),
            (Some(i), len) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }
}

#[must_use]
pub const fn status_color(status: AppStatus) -> Color {
    match status {
        AppStatus::Deploying => Color::Yellow,
        AppStatus::Running => Color::Green,
        AppStatus::Stopped => Color::Red,
    }
}

fn control(label: &'static str, key: &'static str, enabled: bool) -> [Span<'static>; 2] {
    let style = if enabled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };
    [
        Span::styled(format!("[{label} {key}]"), style),
        Span::raw(" "),
    ]
}

fn app_item(app: &AppView) -> ListItem<'static> {
    let header = Line::from(vec![
        Span::styled(
            app.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", app.badge()),
            Style::default()
                .fg(status_color(app.status))
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let counts = Line::from(Span::styled(
        format!("DYNOS: {} • REQUESTS: {}", app.dynos, app.requests),
        Style::default().fg(Color::Gray),
    ));

    let mut controls = Vec::with_capacity(10);
    controls.extend(control("REQUEST", "r", app.request_enabled));
    controls.extend(control("SCALE +", "+", app.scale_up_enabled));
    controls.extend(control("SCALE -", "-", app.scale_down_enabled));
    controls.extend(control("STOP", "s", app.stop_enabled));
    controls.extend(control("DELETE", "d", app.delete_enabled));

    ListItem::new(Text::from(vec![
        header,
        counts,
        Line::from(controls),
        Line::default(),
    ]))
}

pub struct AppList<'a> {
    apps: &'a [AppView],
}

impl<'a> AppList<'a> {
    #[must_use]
    pub const fn new(apps: &'a [AppView]) -> Self {
        Self { apps }
    }
}

impl StatefulWidget for AppList<'_> {
    type State = AppListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border = if state.is_focused() {
            Color::Magenta
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .title(" APPS ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        if self.apps.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                EMPTY_STATE_TEXT,
                Style::default().fg(Color::DarkGray),
            )))
            .centered()
            .block(block)
            .render(area, buf);
            return;
        }

        let items: Vec<ListItem<'static>> = self.apps.iter().map(app_item).collect();
        let highlight = if state.is_focused() {
            Style::default().bg(Color::Rgb(40, 20, 60))
        } else {
            Style::default()
        };

        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("▍");

        StatefulWidget::render(list, area, buf, &mut state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(name: &str, status: AppStatus, dynos: u8) -> AppView {
        AppView {
            name: name.to_string(),
            status,
            dynos,
            requests: 2,
            request_enabled: status == AppStatus::Running,
            scale_up_enabled: dynos < 5,
            scale_down_enabled: dynos > 0,
            stop_enabled: dynos > 0 || status != AppStatus::Stopped,
            delete_enabled: true,
        }
    }

    fn rows(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_selection_moves_within_bounds() {
        let mut state = AppListState::new();
        state.select_next(3);
        assert_eq!(state.selected(), Some(0));
        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected(), Some(2));
        state.select_previous(3);
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_clamp_after_removal() {
        let mut state = AppListState::new();
        for _ in 0..5 {
            state.select_next(5);
        }
        assert_eq!(state.selected(), Some(4));
        state.clamp(2);
        assert_eq!(state.selected(), Some(1));
        state.clamp(0);
        assert_eq!(state.selected(), None);
        state.clamp(3);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_empty_state() {
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        let mut state = AppListState::new();

        AppList::new(&[]).render(area, &mut buf, &mut state);

        assert!(rows(&buf).iter().any(|r| r.contains(EMPTY_STATE_TEXT)));
    }

    #[test]
    fn test_row_contents() {
        let apps = vec![view("shop", AppStatus::Running, 3)];
        let area = Rect::new(0, 0, 80, 8);
        let mut buf = Buffer::empty(area);
        let mut state = AppListState::new();
        state.clamp(apps.len());

        AppList::new(&apps).render(area, &mut buf, &mut state);

        let rows = rows(&buf);
        assert!(rows[1].contains("shop"));
        assert!(rows[1].contains("[RUNNING]"));
        assert!(rows[2].contains("DYNOS: 3 • REQUESTS: 2"));
        assert!(rows[3].contains("[REQUEST r]"));
        assert!(rows[3].contains("[DELETE d]"));
    }

    #[test]
    fn test_disabled_controls_are_dimmed() {
        let apps = vec![view("idle", AppStatus::Stopped, 0)];
        let area = Rect::new(0, 0, 80, 8);
        let mut buf = Buffer::empty(area);
        let mut state = AppListState::new();

        AppList::new(&apps).render(area, &mut buf, &mut state);

        let row = rows(&buf)[3].clone();
        let byte = row.find("[REQUEST").unwrap_or_default();
        let x = u16::try_from(row[..byte].chars().count()).unwrap_or_default();
        assert_eq!(buf[(x, 3)].fg, Color::DarkGray);
    }
}
