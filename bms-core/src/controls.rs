//! Button and power-latch traits.

/// Trait for the physical power button.
///
/// The electrical polarity (the line is active-low on the reference
/// board) is the implementation's concern; `is_held` answers in logical
/// terms.
pub trait PowerButton {
    /// Sample the button. `true` while the user is pressing it.
    fn is_held(&mut self) -> bool;
}

/// Trait for the power-latch enable line.
///
/// The latch keeps the board powered after the physical switch is
/// released. There is deliberately no way to re-assert it: once
/// [`release`](PowerLatch::release) runs, only a hardware power cycle
/// brings the system back.
pub trait PowerLatch {
    /// Cut system power. Irreversible.
    fn release(&mut self);
}
