//! Embassy-backed monotonic clock.

use bms_core::MonotonicClock;
use embassy_time::{Instant, Timer};

/// [`MonotonicClock`] over the embassy time driver.
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    fn now_us(&mut self) -> u64 {
        Instant::now().as_micros()
    }

    async fn delay_us(&mut self, us: u64) {
        Timer::after_micros(us).await;
    }
}
