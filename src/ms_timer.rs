//! Wall-clock milliseconds with wraparound-safe arithmetic.
//!
//! The controller's timebase is a free-running millisecond counter that
//! overflows after ~49.7 days of key-on time. Every window and delay check
//! in the core therefore compares elapsed durations, never absolute
//! timestamps.

/// A monotonic millisecond timestamp, wrapping at `u32::MAX`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Millis(pub u32);

impl Millis {
    pub const fn new(ms: u32) -> Self {
        Millis(ms)
    }

    /// Elapsed milliseconds since `earlier`.
    ///
    /// Correct across a single counter wrap as long as the real elapsed
    /// time is under the counter period.
    pub const fn duration_since(self, earlier: Millis) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }
}
