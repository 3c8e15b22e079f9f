//! Response latency source.

/// Lower bound of a simulated response time, inclusive.
pub const MIN_LATENCY_MS: u32 = 50;
/// Upper bound of a simulated response time, exclusive.
pub const MAX_LATENCY_MS: u32 = 250;

/// Port for drawing simulated response latencies.
#[cfg_attr(test, mockall::automock)]
pub trait LatencyPort: Send {
    /// Returns a latency in `[MIN_LATENCY_MS, MAX_LATENCY_MS)` milliseconds.
    fn sample_ms(&mut self) -> u32;
}
