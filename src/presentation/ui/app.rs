//! Main application orchestrator.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval};
use tracing::{debug, info, warn};

use crate::application::DeploymentSimulator;
use crate::application::services::{AlertManager, FactScript, Typewriter};
use crate::domain::entities::ScheduledStage;
use crate::infrastructure::{AppConfig, DeployScheduler};
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::alert_popup::AlertPopup;
use crate::presentation::ui::simulator_screen::{
    ScreenAction, SimulatorScreen, SimulatorScreenState,
};

const ALERT_TITLE: &str = "ALERT";

/// Owns the simulator and every piece of UI state around it.
pub struct App {
    simulator: DeploymentSimulator,
    typewriter: Typewriter,
    facts: FactScript,
    alerts: AlertManager,
    scheduler: DeployScheduler,
    stage_rx: mpsc::UnboundedReceiver<ScheduledStage>,
    commands: CommandRegistry,
    screen: SimulatorScreenState,
    tick_rate: Duration,
    last_frame: Instant,
    footer_info: String,
    exiting: bool,
}

impl App {
    /// Must be called inside a tokio runtime; deploy timers are spawned on it.
    #[must_use]
    pub fn new(simulator: DeploymentSimulator, config: &AppConfig) -> Self {
        let (scheduler, stage_rx) = DeployScheduler::new();

        Self {
            simulator,
            typewriter: Typewriter::new(config.typewriter_speed()),
            facts: FactScript::default(),
            alerts: AlertManager::new(config.ui.alert_duration()),
            scheduler,
            stage_rx,
            commands: CommandRegistry::new(),
            screen: SimulatorScreenState::new(config.ui.show_timestamps),
            tick_rate: config.ui.tick_rate(),
            last_frame: Instant::now(),
            footer_info: format!("{} v{}", crate::NAME, crate::VERSION),
            exiting: false,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!("Simulator started");
        self.run_event_loop(terminal).await?;
        info!(
            apps = self.simulator.registry().len(),
            requests = self.simulator.counters().total(),
            "Application exiting normally"
        );
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(self.tick_rate);
        animation_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(stage) = self.stage_rx.recv() => {
                    self.handle_stage(&stage);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick() => {
                    if self.animate() {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                maybe_event = terminal_event => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(event) == EventResult::Exit {
                                self.exiting = true;
                            }
                            terminal.draw(|frame| self.render(frame))?;
                        }
                        Some(Err(e)) => {
                            warn!(error = %e, "Terminal event error");
                        }
                        None => {
                            debug!("Terminal event stream closed");
                            self.exiting = true;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn needs_animation(&self) -> bool {
        self.typewriter.is_typing() || self.alerts.is_blocking()
    }

    /// Advances animations by the wall time since the previous frame.
    ///
    /// The frame clock restarts even when idle, so time spent waiting is not
    /// replayed once an animation begins.
    fn animate(&mut self) -> bool {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        if !self.needs_animation() {
            return false;
        }
        self.tick(elapsed);
        true
    }

    fn tick(&mut self, elapsed: Duration) {
        self.typewriter.tick(elapsed);
        self.alerts.tick(elapsed);
    }

    fn render(&mut self, frame: &mut Frame) {
        let dashboard = self.simulator.dashboard();
        self.screen.sync(dashboard.apps.len());
        let keybinds = self.commands.keybinds(self.screen.context());

        frame.render_stateful_widget(
            SimulatorScreen::new(
                &dashboard,
                &self.typewriter,
                self.simulator.log(),
                &keybinds,
            )
            .right_info(Some(self.footer_info.as_str())),
            frame.area(),
            &mut self.screen,
        );

        if let Some(alert) = self.alerts.current() {
            frame.render_widget(AlertPopup::new(alert), frame.area());
        }
    }

    fn handle_stage(&mut self, stage: &ScheduledStage) {
        let applied = self
            .simulator
            .apply_stage(&stage.name, stage.deployment_id, stage.stage);
        debug!(app = %stage.name, stage = ?stage.stage, applied, "Deploy stage fired");
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if !EventHandler::is_press(&key) {
            return EventResult::Continue;
        }
        if EventHandler::is_force_quit_event(&key) {
            return EventResult::Exit;
        }
        if self.alerts.is_blocking() {
            self.alerts.dismiss();
            return EventResult::Continue;
        }

        let dashboard = self.simulator.dashboard();
        let action = self
            .screen
            .handle_key(key, &self.commands, &dashboard.apps);

        match action {
            ScreenAction::Quit => return EventResult::Exit,
            ScreenAction::NextFact => {
                if self.facts.is_exhausted() {
                    debug!("Fact script exhausted, emitting filler");
                }
                let fact = self.facts.next_fact();
                self.typewriter.emit_default(fact);
            }
            ScreenAction::Deploy(name) => self.handle_deploy(&name),
            ScreenAction::SendRequest(name) => {
                self.simulator.send_request(&name);
            }
            ScreenAction::Scale { name, delta } => {
                self.simulator.scale(&name, delta);
            }
            ScreenAction::Stop(name) => {
                self.simulator.stop(&name);
            }
            ScreenAction::RequestDelete(name) => {
                if let Some(confirmation) = self.simulator.request_delete(&name) {
                    self.screen.set_pending_delete(confirmation);
                }
            }
            ScreenAction::ConfirmDelete => {
                if let Some(confirmation) = self.screen.take_pending_delete() {
                    let name = confirmation.name().to_string();
                    self.scheduler.cancel(&name);
                    self.simulator.confirm_delete(confirmation);
                }
            }
            ScreenAction::CancelDelete => {
                if let Some(confirmation) = self.screen.take_pending_delete() {
                    debug!(app = %confirmation.name(), "Delete declined");
                }
            }
            ScreenAction::Consumed | ScreenAction::Ignored => {}
        }

        self.screen.sync(self.simulator.registry().len());
        EventResult::Continue
    }

    fn handle_deploy(&mut self, name: &str) {
        match self.simulator.deploy(name) {
            Ok(plan) => {
                self.screen.clear_input();
                self.scheduler.schedule(plan);
            }
            Err(e) => {
                warn!(error = %e, validation = e.is_validation(), "Deploy rejected");
                self.alerts.error(ALERT_TITLE, e.alert_message());
            }
        }
    }
}
