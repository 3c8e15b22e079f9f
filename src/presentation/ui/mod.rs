//! UI screens.

mod alert_popup;
mod app;
mod confirm_dialog;
mod simulator_screen;
mod utils;

pub use alert_popup::AlertPopup;
pub use app::App;
pub use confirm_dialog::ConfirmDialog;
pub use simulator_screen::{ScreenAction, SimulatorScreen, SimulatorScreenState};
