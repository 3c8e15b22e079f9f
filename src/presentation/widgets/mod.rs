mod app_list;
mod footer_bar;
mod input;
mod log_panel;
mod narrative_panel;
mod stats_bar;

pub use app_list::{AppList, AppListState, status_color};
pub use footer_bar::{FocusContext, FooterBar, FooterBarStyle};
pub use input::TextInput;
pub use log_panel::{LogPanel, severity_color};
pub use narrative_panel::{NarrativePanel, tail_offset};
pub use stats_bar::{RateLevel, StatsBar};
