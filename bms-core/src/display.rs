//! Status display trait for the external text panel.
//!
//! Rendering is a collaborator concern: the core only needs "show these
//! numbers" and "go dark". Implementations swallow their own I/O errors;
//! a broken panel must never stall the power-latch evaluation.

use core::future::Future;

use sbs_proto::TelemetrySample;

/// Trait for the voltage/current/state-of-charge text panel.
pub trait StatusDisplay {
    /// Render the latest sample.
    fn update_status(&mut self, sample: &TelemetrySample) -> impl Future<Output = ()>;

    /// Blank the panel ahead of power-off.
    fn display_off(&mut self) -> impl Future<Output = ()>;
}

/// Null display that discards all updates.
///
/// Use this on boards without a panel fitted.
pub struct NullStatusDisplay;

impl StatusDisplay for NullStatusDisplay {
    async fn update_status(&mut self, _sample: &TelemetrySample) {}

    async fn display_off(&mut self) {}
}
