mod latency_port;

pub use latency_port::{LatencyPort, MAX_LATENCY_MS, MIN_LATENCY_MS};
