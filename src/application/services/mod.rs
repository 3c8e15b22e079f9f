pub mod alert_manager;
pub mod dashboard_renderer;
pub mod fact_script;
pub mod latency;
pub mod system_log;
pub mod typewriter;

pub use alert_manager::AlertManager;
pub use dashboard_renderer::{aggregate_stats, render_apps, render_dashboard};
pub use fact_script::{FILLER_LINE, FactScript, PLATFORM_FACTS};
pub use latency::SeededLatency;
pub use system_log::{SYSTEM_LOG_CAPACITY, SystemLog};
pub use typewriter::{DEFAULT_TYPEWRITER_SPEED, LINE_PREFIX, Typewriter, TypewriterLine};
