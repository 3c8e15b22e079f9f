//! The single simulator screen: stats, deploy input, app list, narrative
//! and system log.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, StatefulWidget, Widget},
};

use crate::application::services::{SystemLog, Typewriter};
use crate::application::{AppView, DashboardView, DeleteConfirmation};
use crate::domain::keybinding::{Action, Keybind};
use crate::presentation::commands::CommandRegistry;
use crate::presentation::ui::confirm_dialog::ConfirmDialog;
use crate::presentation::widgets::{
    AppList, AppListState, FocusContext, FooterBar, LogPanel, NarrativePanel, StatsBar, TextInput,
};

/// What the screen asks the application to do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    Quit,
    NextFact,
    Deploy(String),
    SendRequest(String),
    Scale { name: String, delta: i32 },
    Stop(String),
    RequestDelete(String),
    ConfirmDelete,
    CancelDelete,
    Consumed,
    Ignored,
}

pub struct SimulatorScreenState {
    focus: FocusContext,
    input: TextInput,
    list: AppListState,
    pending_delete: Option<DeleteConfirmation>,
    show_timestamps: bool,
}

impl Default for SimulatorScreenState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SimulatorScreenState {
    #[must_use]
    pub fn new(show_timestamps: bool) -> Self {
        let mut state = Self {
            focus: FocusContext::AppName,
            input: TextInput::new(" NEW APP ").placeholder("app name"),
            list: AppListState::new(),
            pending_delete: None,
            show_timestamps,
        };
        state.set_focus(FocusContext::AppName);
        state
    }

    /// Context used for key lookup; an open confirmation takes precedence.
    #[must_use]
    pub const fn context(&self) -> FocusContext {
        if self.pending_delete.is_some() {
            FocusContext::Confirmation
        } else {
            self.focus
        }
    }

    pub fn set_focus(&mut self, focus: FocusContext) {
        self.focus = focus;
        self.input.set_focused(focus == FocusContext::AppName);
        self.list.set_focused(focus == FocusContext::AppList);
    }

    fn toggle_focus(&mut self) {
        let next = match self.focus {
            FocusContext::AppName => FocusContext::AppList,
            _ => FocusContext::AppName,
        };
        self.set_focus(next);
    }

    #[must_use]
    pub fn input_value(&self) -> &str {
        self.input.value()
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Keeps the list selection valid after the registry changed.
    pub fn sync(&mut self, app_count: usize) {
        self.list.clamp(app_count);
    }

    pub fn set_pending_delete(&mut self, confirmation: DeleteConfirmation) {
        self.pending_delete = Some(confirmation);
    }

    pub fn take_pending_delete(&mut self) -> Option<DeleteConfirmation> {
        self.pending_delete.take()
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        commands: &CommandRegistry,
        apps: &[AppView],
    ) -> ScreenAction {
        let context = self.context();
        let action = commands.find_action(context, key);

        match (context, action) {
            (_, Some(Action::Quit)) => ScreenAction::Quit,
            (FocusContext::Confirmation, Some(Action::Confirm)) => ScreenAction::ConfirmDelete,
            (FocusContext::Confirmation, Some(Action::Cancel)) => ScreenAction::CancelDelete,
            (FocusContext::Confirmation, _) => ScreenAction::Consumed,
            (_, Some(Action::ToggleFocus)) => {
                self.toggle_focus();
                ScreenAction::Consumed
            }
            (_, Some(Action::NextFact)) => ScreenAction::NextFact,
            (FocusContext::AppName, Some(Action::Deploy)) => {
                ScreenAction::Deploy(self.input.value().to_string())
            }
            (FocusContext::AppName, Some(Action::ClearInput)) => {
                self.input.clear();
                ScreenAction::Consumed
            }
            (FocusContext::AppName, _) => {
                if self.input.handle_key(key) {
                    ScreenAction::Consumed
                } else {
                    ScreenAction::Ignored
                }
            }
            (FocusContext::AppList, Some(action)) => self.list_action(action, apps),
            (FocusContext::AppList, None) => ScreenAction::Ignored,
        }
    }

    fn list_action(&mut self, action: Action, apps: &[AppView]) -> ScreenAction {
        match action {
            Action::SelectPrevious => {
                self.list.select_previous(apps.len());
                return ScreenAction::Consumed;
            }
            Action::SelectNext => {
                self.list.select_next(apps.len());
                return ScreenAction::Consumed;
            }
            _ => {}
        }

        let Some(app) = self.list.selected().and_then(|i| apps.get(i)) else {
            return ScreenAction::Ignored;
        };
        let name = app.name.clone();

        match action {
            Action::SendRequest if app.request_enabled => ScreenAction::SendRequest(name),
            Action::ScaleUp if app.scale_up_enabled => ScreenAction::Scale { name, delta: 1 },
            Action::ScaleDown if app.scale_down_enabled => ScreenAction::Scale { name, delta: -1 },
            Action::Stop if app.stop_enabled => ScreenAction::Stop(name),
            Action::Delete if app.delete_enabled => ScreenAction::RequestDelete(name),
            _ => ScreenAction::Ignored,
        }
    }
}

pub struct SimulatorScreen<'a> {
    dashboard: &'a DashboardView,
    typewriter: &'a Typewriter,
    log: &'a SystemLog,
    keybinds: &'a [Keybind],
    right_info: Option<&'a str>,
}

impl<'a> SimulatorScreen<'a> {
    #[must_use]
    pub const fn new(
        dashboard: &'a DashboardView,
        typewriter: &'a Typewriter,
        log: &'a SystemLog,
        keybinds: &'a [Keybind],
    ) -> Self {
        Self {
            dashboard,
            typewriter,
            log,
            keybinds,
            right_info: None,
        }
    }

    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }
}

impl StatefulWidget for SimulatorScreen<'_> {
    type State = SimulatorScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(body);
        let [input_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(left);
        let [narrative_area, log_area] =
            Layout::vertical([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(right);

        let header_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" DYNOSIM ")
            .title_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            );
        let stats_area = header_block.inner(header);
        header_block.render(header, buf);
        (&StatsBar::new(self.dashboard.stats)).render(stats_area, buf);

        (&state.input).render(input_area, buf);
        AppList::new(&self.dashboard.apps).render(list_area, buf, &mut state.list);
        NarrativePanel::new(self.typewriter).render(narrative_area, buf);
        LogPanel::new(self.log)
            .show_timestamps(state.show_timestamps)
            .render(log_area, buf);

        FooterBar::new(self.keybinds)
            .focus_context(state.context())
            .right_info(self.right_info)
            .render(footer, buf);

        if let Some(confirmation) = &state.pending_delete {
            ConfirmDialog::new(confirmation).render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::DeploymentSimulator;
    use crate::application::services::{SeededLatency, render_apps};
    use crate::domain::entities::DeployStage;
    use crate::domain::{AppRecord, Registry};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn apps() -> Vec<AppView> {
        let mut registry = Registry::new();
        let _ = registry.insert("shop");
        let _ = registry.insert("idle");
        let _ = registry.stop("idle");
        render_apps(&registry)
    }

    fn list_state() -> SimulatorScreenState {
        let mut state = SimulatorScreenState::default();
        state.set_focus(FocusContext::AppList);
        state.sync(2);
        state
    }

    fn screen_text(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_typing_then_deploy() {
        let commands = CommandRegistry::new();
        let mut state = SimulatorScreenState::default();

        for c in "shop".chars() {
            assert_eq!(
                state.handle_key(key(KeyCode::Char(c)), &commands, &[]),
                ScreenAction::Consumed
            );
        }
        assert_eq!(
            state.handle_key(key(KeyCode::Enter), &commands, &[]),
            ScreenAction::Deploy("shop".to_string())
        );
        assert_eq!(state.input_value(), "shop");
    }

    #[test]
    fn test_q_is_text_in_input_but_quits_list() {
        let commands = CommandRegistry::new();
        let mut state = SimulatorScreenState::default();

        assert_eq!(
            state.handle_key(key(KeyCode::Char('q')), &commands, &[]),
            ScreenAction::Consumed
        );
        assert_eq!(state.input_value(), "q");

        state.handle_key(key(KeyCode::Tab), &commands, &[]);
        assert_eq!(state.context(), FocusContext::AppList);
        assert_eq!(
            state.handle_key(key(KeyCode::Char('q')), &commands, &[]),
            ScreenAction::Quit
        );
    }

    #[test]
    fn test_controls_respect_enabled_flags() {
        let commands = CommandRegistry::new();
        let apps = apps();
        let mut state = list_state();

        // shop is deploying with one dyno
        assert_eq!(
            state.handle_key(key(KeyCode::Char('r')), &commands, &apps),
            ScreenAction::Ignored
        );
        assert_eq!(
            state.handle_key(key(KeyCode::Char('+')), &commands, &apps),
            ScreenAction::Scale {
                name: "shop".to_string(),
                delta: 1
            }
        );

        // idle is stopped with zero dynos
        state.handle_key(key(KeyCode::Down), &commands, &apps);
        assert_eq!(
            state.handle_key(key(KeyCode::Char('-')), &commands, &apps),
            ScreenAction::Ignored
        );
        assert_eq!(
            state.handle_key(key(KeyCode::Char('s')), &commands, &apps),
            ScreenAction::Ignored
        );
        assert_eq!(
            state.handle_key(key(KeyCode::Char('d')), &commands, &apps),
            ScreenAction::RequestDelete("idle".to_string())
        );
    }

    #[test]
    fn test_confirmation_captures_keys() {
        let commands = CommandRegistry::new();
        let apps = apps();
        let mut state = list_state();

        let mut simulator = DeploymentSimulator::new(Box::new(SeededLatency::from_seed(1)));
        let _ = simulator.deploy("shop");
        if let Some(confirmation) = simulator.request_delete("shop") {
            state.set_pending_delete(confirmation);
        }

        assert_eq!(state.context(), FocusContext::Confirmation);
        assert_eq!(
            state.handle_key(key(KeyCode::Char('r')), &commands, &apps),
            ScreenAction::Consumed
        );
        assert_eq!(
            state.handle_key(key(KeyCode::Char('y')), &commands, &apps),
            ScreenAction::ConfirmDelete
        );
        assert_eq!(
            state.handle_key(key(KeyCode::Esc), &commands, &apps),
            ScreenAction::CancelDelete
        );
        assert_eq!(
            state.take_pending_delete().map(|c| c.name().to_string()),
            Some("shop".to_string())
        );
        assert_eq!(state.context(), FocusContext::AppList);
    }

    #[test]
    fn test_render_empty_dashboard() {
        let simulator = DeploymentSimulator::new(Box::new(SeededLatency::from_seed(1)));
        let dashboard = simulator.dashboard();
        let typewriter = Typewriter::default();
        let commands = CommandRegistry::new();
        let mut state = SimulatorScreenState::default();
        let keybinds = commands.keybinds(state.context());

        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        SimulatorScreen::new(&dashboard, &typewriter, simulator.log(), &keybinds)
            .render(area, &mut buf, &mut state);

        let text = screen_text(&buf);
        assert!(text.contains("DYNOSIM"));
        assert!(text.contains("SUCCESS 100%"));
        assert!(text.contains("NO APPLICATIONS DEPLOYED"));
        assert!(text.contains("SYSTEM LOG"));
        assert!(text.contains(" DEPLOY "));
    }

    #[test]
    fn test_render_shows_release_url_in_log() {
        let mut simulator = DeploymentSimulator::new(Box::new(SeededLatency::from_seed(1)));
        let plan = simulator.deploy("shop");
        assert!(plan.is_ok());
        let deployment_id = simulator
            .registry()
            .get("shop")
            .map(AppRecord::deployment_id);
        if let Some(deployment_id) = deployment_id {
            for stage in DeployStage::ALL {
                simulator.apply_stage("shop", deployment_id, stage);
            }
        }
        let _ = simulator.send_request("missing");

        let dashboard = simulator.dashboard();
        let typewriter = Typewriter::default();
        let mut state = SimulatorScreenState::default();

        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);
        SimulatorScreen::new(&dashboard, &typewriter, simulator.log(), &[])
            .render(area, &mut buf, &mut state);

        let text = screen_text(&buf);
        assert!(text.contains("https://shop.herokuapp.com"), "screen:\n{text}");
        assert!(text.contains("web=1"), "screen:\n{text}");
    }

    #[test]
    fn test_render_confirmation_overlay() {
        let mut simulator = DeploymentSimulator::new(Box::new(SeededLatency::from_seed(1)));
        let _ = simulator.deploy("shop");
        let dashboard = simulator.dashboard();
        let typewriter = Typewriter::default();
        let mut state = list_state();
        if let Some(confirmation) = simulator.request_delete("shop") {
            state.set_pending_delete(confirmation);
        }

        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        SimulatorScreen::new(&dashboard, &typewriter, simulator.log(), &[])
            .render(area, &mut buf, &mut state);

        let text = screen_text(&buf);
        assert!(text.contains("DELETE \"shop\"?"));
        assert!(text.contains("This action cannot be undone!"));
    }
}
