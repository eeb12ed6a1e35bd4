//! Charge-tier LED indication.
//!
//! Five discrete LEDs show how depleted the pack is: a full pack lights
//! none, and each tier down lights one more, cumulative from the first.
//! Below the lowest tier the fifth LED blinks at the caller's tick rate.
//! All five lit is reserved for the shutdown-imminent pattern.

/// Number of indicator LEDs.
pub const LED_COUNT: usize = 5;

/// Below this state of charge the fifth LED blinks.
pub const BLINK_TIER_PERCENT: f32 = 15.0;

/// Pattern shown while powering down.
pub const SHUTDOWN_PATTERN: [bool; LED_COUNT] = [true; LED_COUNT];

/// Trait for the five discrete LED output lines.
///
/// Writes are assumed to always succeed; GPIO drivers have no error path.
pub trait StatusLeds {
    /// Drive all five outputs. `true` = lit.
    fn set(&mut self, lit: [bool; LED_COUNT]);
}

/// Map a state of charge to the LED pattern for one tick.
///
/// `blink_phase` selects the fifth LED's state in the blinking tier and
/// is ignored everywhere else.
pub fn charge_pattern(soc_percent: f32, blink_phase: bool) -> [bool; LED_COUNT] {
    let lit = if soc_percent >= 95.0 {
        0
    } else if soc_percent >= 75.0 {
        1
    } else if soc_percent >= 55.0 {
        2
    } else if soc_percent >= 35.0 {
        3
    } else {
        4
    };

    let mut pattern = [false; LED_COUNT];
    for led in pattern.iter_mut().take(lit) {
        *led = true;
    }
    if soc_percent < BLINK_TIER_PERCENT {
        pattern[LED_COUNT - 1] = blink_phase;
    }
    pattern
}

/// Drives the LED tier display, holding the one blink bit.
pub struct StatusIndicator<L> {
    leds: L,
    blink_phase: bool,
}

impl<L: StatusLeds> StatusIndicator<L> {
    /// Create an indicator over the LED lines.
    pub fn new(leds: L) -> Self {
        Self {
            leds,
            blink_phase: false,
        }
    }

    /// Refresh the LEDs for the given state of charge.
    ///
    /// Call once per tick; in the blinking tier each call flips the
    /// fifth LED.
    pub fn update(&mut self, soc_percent: f32) {
        if soc_percent < BLINK_TIER_PERCENT {
            self.blink_phase = !self.blink_phase;
        }
        self.leds.set(charge_pattern(soc_percent, self.blink_phase));
    }

    /// Light all five LEDs: power-off is imminent.
    pub fn show_shutdown(&mut self) {
        self.leds.set(SHUTDOWN_PATTERN);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::sync::{Arc, Mutex};
    use std::vec;
    use std::vec::Vec;

    struct RecordingLeds {
        writes: Arc<Mutex<Vec<[bool; LED_COUNT]>>>,
    }

    impl RecordingLeds {
        fn new() -> Self {
            Self {
                writes: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl StatusLeds for RecordingLeds {
        fn set(&mut self, lit: [bool; LED_COUNT]) {
            self.writes.lock().unwrap().push(lit);
        }
    }

    fn lit_count(pattern: [bool; LED_COUNT]) -> usize {
        pattern.iter().filter(|&&l| l).count()
    }

    #[test]
    fn test_full_pack_lights_nothing() {
        for soc in [95.0, 97.5, 100.0] {
            assert_eq!(charge_pattern(soc, false), [false; 5], "soc {soc}");
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(lit_count(charge_pattern(95.0, false)), 0);
        assert_eq!(lit_count(charge_pattern(94.9, false)), 1);
        assert_eq!(lit_count(charge_pattern(75.0, false)), 1);
        assert_eq!(lit_count(charge_pattern(74.9, false)), 2);
        assert_eq!(lit_count(charge_pattern(55.0, false)), 2);
        assert_eq!(lit_count(charge_pattern(54.9, false)), 3);
        assert_eq!(lit_count(charge_pattern(35.0, false)), 3);
        assert_eq!(lit_count(charge_pattern(34.9, false)), 4);
        assert_eq!(lit_count(charge_pattern(15.0, false)), 4);
    }

    #[test]
    fn test_patterns_are_cumulative_from_first() {
        assert_eq!(charge_pattern(80.0, false), [true, false, false, false, false]);
        assert_eq!(charge_pattern(60.0, false), [true, true, false, false, false]);
        assert_eq!(charge_pattern(40.0, false), [true, true, true, false, false]);
        assert_eq!(charge_pattern(20.0, false), [true, true, true, true, false]);
    }

    #[test]
    fn test_blink_tier_follows_phase() {
        assert_eq!(charge_pattern(10.0, false), [true, true, true, true, false]);
        assert_eq!(charge_pattern(10.0, true), [true, true, true, true, true]);
        assert_eq!(charge_pattern(0.0, true), [true, true, true, true, true]);
    }

    #[test]
    fn test_blink_phase_ignored_above_tier() {
        assert_eq!(charge_pattern(20.0, true), charge_pattern(20.0, false));
        assert_eq!(charge_pattern(100.0, true), [false; 5]);
    }

    #[test]
    fn test_indicator_alternates_fifth_led_when_low() {
        let leds = RecordingLeds::new();
        let writes = leds.writes.clone();
        let mut indicator = StatusIndicator::new(leds);

        indicator.update(5.0);
        indicator.update(5.0);
        indicator.update(5.0);
        indicator.update(5.0);

        let writes = writes.lock().unwrap();
        let fifth: Vec<bool> = writes.iter().map(|p| p[4]).collect();
        assert_eq!(fifth, vec![true, false, true, false]);
    }

    #[test]
    fn test_indicator_steady_above_blink_tier() {
        let leds = RecordingLeds::new();
        let writes = leds.writes.clone();
        let mut indicator = StatusIndicator::new(leds);

        indicator.update(50.0);
        indicator.update(50.0);

        let writes = writes.lock().unwrap();
        assert_eq!(writes[0], writes[1]);
        assert_eq!(lit_count(writes[0]), 3);
    }

    #[test]
    fn test_shutdown_pattern_lights_everything() {
        let leds = RecordingLeds::new();
        let writes = leds.writes.clone();
        let mut indicator = StatusIndicator::new(leds);

        indicator.show_shutdown();

        assert_eq!(writes.lock().unwrap().as_slice(), &[[true; 5]]);
    }
}
