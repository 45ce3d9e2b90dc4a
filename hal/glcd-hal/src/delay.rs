//! Blocking delay abstraction
//!
//! The controller's datasheet mandates settle times after reset, sleep-out
//! and display-on. They are expressed through this trait so the sequencing
//! can be checked without a real clock.

/// Blocking millisecond delay
pub trait DelayMs {
    /// Block the caller for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: DelayMs + ?Sized> DelayMs for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(self, ms)
    }
}
