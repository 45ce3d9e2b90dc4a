//! GPIO pin abstractions
//!
//! The display needs two output lines: chip-select (active low) and
//! command/data select (low = command, high = data).

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip. Writes are assumed infallible, as they are on
/// every memory-mapped GPIO block this driver targets.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

impl<T: OutputPin + ?Sized> OutputPin for &mut T {
    fn set_high(&mut self) {
        T::set_high(self)
    }

    fn set_low(&mut self) {
        T::set_low(self)
    }

    fn is_set_high(&self) -> bool {
        T::is_set_high(self)
    }
}
