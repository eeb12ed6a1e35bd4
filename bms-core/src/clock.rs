//! Monotonic clock trait.
//!
//! The evaluation loop measures its window against this trait instead of
//! a hardware timer, so host tests can drive it with a simulated clock
//! and no real delays.

use core::future::Future;

/// Trait for monotonic time and tick pacing.
pub trait MonotonicClock {
    /// Microseconds since an arbitrary epoch. Never goes backwards.
    fn now_us(&mut self) -> u64;

    /// Suspend for at least `us` microseconds.
    fn delay_us(&mut self, us: u64) -> impl Future<Output = ()>;
}
