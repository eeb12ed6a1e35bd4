//! Button-hold accounting over the evaluation window.
//!
//! Two historical accounting rules exist for "was the button held long
//! enough": a duty-cycle percentage over a fixed window, and an
//! edge-triggered rule where any level change restarts the window and a
//! sustained level at expiry decides. Both live behind [`HoldPolicy`] so
//! the integrator picks one; the controller code path is shared.

/// How button samples are judged at the end of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HoldPolicy {
    /// Fixed window; held for at least `min_held_percent` of the
    /// sampled ticks wins.
    DutyCycle {
        /// Required held-tick percentage, 0 to 100.
        min_held_percent: u8,
    },
    /// Any level transition restarts the window and clears the counts;
    /// the stable level at expiry decides.
    SustainedHold,
}

impl Default for HoldPolicy {
    fn default() -> Self {
        HoldPolicy::DutyCycle {
            min_held_percent: 90,
        }
    }
}

/// Tick accounting for one evaluation window.
///
/// Owned by the controller; fed one button sample per tick via
/// [`record`](HoldWindow::record), then asked for the verdict once
/// [`is_expired`](HoldWindow::is_expired) reports the window over.
#[derive(Debug, Clone, Copy)]
pub struct HoldWindow {
    policy: HoldPolicy,
    window_us: u64,
    started_at_us: u64,
    ticks: u32,
    held_ticks: u32,
    last_level: Option<bool>,
}

impl HoldWindow {
    /// Open a window starting at `now_us`.
    pub fn new(policy: HoldPolicy, window_us: u64, now_us: u64) -> Self {
        Self {
            policy,
            window_us,
            started_at_us: now_us,
            ticks: 0,
            held_ticks: 0,
            last_level: None,
        }
    }

    /// Account one button sample taken at `now_us`.
    ///
    /// Under [`HoldPolicy::SustainedHold`] a level change restarts the
    /// window at `now_us` before the sample is counted.
    pub fn record(&mut self, held: bool, now_us: u64) {
        if self.policy == HoldPolicy::SustainedHold {
            if let Some(last) = self.last_level {
                if last != held {
                    self.started_at_us = now_us;
                    self.ticks = 0;
                    self.held_ticks = 0;
                }
            }
        }

        self.ticks += 1;
        if held {
            self.held_ticks += 1;
        }
        self.last_level = Some(held);
    }

    /// Whether the window has run its duration as of `now_us`.
    pub fn is_expired(&self, now_us: u64) -> bool {
        now_us.saturating_sub(self.started_at_us) >= self.window_us
    }

    /// Samples accounted since the window (last) started.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Held samples accounted since the window (last) started.
    pub fn held_ticks(&self) -> u32 {
        self.held_ticks
    }

    /// The verdict for the window. A window with no samples counts as
    /// not held.
    pub fn sufficiently_held(&self) -> bool {
        match self.policy {
            HoldPolicy::DutyCycle { min_held_percent } => {
                self.ticks != 0
                    && self.held_ticks as u64 * 100 >= self.ticks as u64 * min_held_percent as u64
            }
            HoldPolicy::SustainedHold => self.last_level == Some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duty(min: u8) -> HoldPolicy {
        HoldPolicy::DutyCycle {
            min_held_percent: min,
        }
    }

    fn feed(window: &mut HoldWindow, levels: &[bool], tick_us: u64) {
        for (i, &held) in levels.iter().enumerate() {
            window.record(held, (i as u64 + 1) * tick_us);
        }
    }

    #[test]
    fn test_duty_cycle_at_threshold_passes() {
        let mut w = HoldWindow::new(duty(90), 3_000_000, 0);
        // 27 of 30 ticks held, exactly 90%
        let mut levels = [true; 30];
        levels[0] = false;
        levels[14] = false;
        levels[29] = false;
        feed(&mut w, &levels, 100_000);

        assert_eq!(w.ticks(), 30);
        assert_eq!(w.held_ticks(), 27);
        assert!(w.sufficiently_held());
    }

    #[test]
    fn test_duty_cycle_below_threshold_fails() {
        let mut w = HoldWindow::new(duty(90), 3_000_000, 0);
        // 26 of 30 ticks held
        let mut levels = [true; 30];
        for slot in [0, 7, 14, 29] {
            levels[slot] = false;
        }
        feed(&mut w, &levels, 100_000);

        assert_eq!(w.held_ticks(), 26);
        assert!(!w.sufficiently_held());
    }

    #[test]
    fn test_duty_cycle_full_hold_passes() {
        let mut w = HoldWindow::new(duty(90), 3_000_000, 0);
        feed(&mut w, &[true; 30], 100_000);
        assert!(w.sufficiently_held());
    }

    #[test]
    fn test_duty_cycle_never_held_fails() {
        let mut w = HoldWindow::new(duty(90), 3_000_000, 0);
        feed(&mut w, &[false; 30], 100_000);
        assert!(!w.sufficiently_held());
    }

    #[test]
    fn test_empty_window_is_not_held() {
        let w = HoldWindow::new(duty(90), 3_000_000, 0);
        assert!(!w.sufficiently_held());

        let w = HoldWindow::new(HoldPolicy::SustainedHold, 3_000_000, 0);
        assert!(!w.sufficiently_held());
    }

    #[test]
    fn test_duty_cycle_ignores_edges() {
        let mut w = HoldWindow::new(duty(50), 3_000_000, 0);
        feed(&mut w, &[true, false, true, false, true, false], 100_000);
        // edges do not restart under duty accounting
        assert_eq!(w.ticks(), 6);
        assert_eq!(w.held_ticks(), 3);
        assert!(w.sufficiently_held());
    }

    #[test]
    fn test_expiry_boundary() {
        let w = HoldWindow::new(duty(90), 3_000_000, 0);
        assert!(!w.is_expired(2_999_999));
        assert!(w.is_expired(3_000_000));
        assert!(w.is_expired(3_000_001));
    }

    #[test]
    fn test_expiry_is_robust_to_clock_origin() {
        let w = HoldWindow::new(duty(90), 3_000_000, 5_000_000);
        assert!(!w.is_expired(0));
        assert!(!w.is_expired(7_999_999));
        assert!(w.is_expired(8_000_000));
    }

    #[test]
    fn test_sustained_hold_to_expiry_passes() {
        let mut w = HoldWindow::new(HoldPolicy::SustainedHold, 3_000_000, 0);
        feed(&mut w, &[true; 30], 100_000);
        assert!(w.is_expired(3_000_000));
        assert!(w.sufficiently_held());
    }

    #[test]
    fn test_sustained_release_edge_restarts_window() {
        let mut w = HoldWindow::new(HoldPolicy::SustainedHold, 3_000_000, 0);
        w.record(true, 100_000);
        w.record(true, 200_000);
        // release at 300 ms restarts the window there
        w.record(false, 300_000);

        assert_eq!(w.ticks(), 1);
        assert_eq!(w.held_ticks(), 0);
        assert!(!w.is_expired(3_000_000));
        assert!(w.is_expired(3_300_000));
        assert!(!w.sufficiently_held());
    }

    #[test]
    fn test_sustained_press_edge_restarts_window() {
        let mut w = HoldWindow::new(HoldPolicy::SustainedHold, 3_000_000, 0);
        w.record(false, 100_000);
        w.record(false, 200_000);
        w.record(true, 300_000);
        w.record(true, 400_000);

        assert_eq!(w.ticks(), 2);
        assert_eq!(w.held_ticks(), 2);
        assert!(w.is_expired(3_300_000));
        assert!(w.sufficiently_held());
    }

    #[test]
    fn test_sustained_first_sample_is_not_an_edge() {
        let mut w = HoldWindow::new(HoldPolicy::SustainedHold, 3_000_000, 0);
        w.record(false, 100_000);
        // no restart: the window still began at 0
        assert!(w.is_expired(3_000_000));
    }

    #[test]
    fn test_default_policy_is_ninety_percent_duty() {
        assert_eq!(
            HoldPolicy::default(),
            HoldPolicy::DutyCycle {
                min_held_percent: 90
            }
        );
    }
}
