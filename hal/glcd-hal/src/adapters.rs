//! Adapters from `embedded-hal` 1.0 peripherals
//!
//! Most chip HALs already implement the `embedded-hal` traits; wrapping their
//! peripherals here lets them drive the display without board-specific code.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin as EhOutputPin;
use embedded_hal::spi::SpiBus as EhSpiBus;

use crate::delay::DelayMs;
use crate::gpio::OutputPin;
use crate::spi::SpiBus;

/// SPI bus adapter
///
/// Wraps an exclusively-owned `embedded_hal::spi::SpiBus`. Chip-select stays
/// with the display driver, so a `SpiDevice` is not accepted.
pub struct EhSpi<B> {
    bus: B,
}

impl<B> EhSpi<B> {
    /// Wrap an `embedded-hal` SPI bus
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Return the wrapped bus
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: EhSpiBus<u8>> SpiBus for EhSpi<B> {
    type Error = B::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.bus.write(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.bus.flush()
    }
}

/// Output pin adapter
///
/// Only infallible pins are accepted, which covers on-chip GPIO on every
/// mainstream HAL. The last written level is cached for `is_set_high`.
pub struct EhPin<P> {
    pin: P,
    high: bool,
}

impl<P: EhOutputPin<Error = Infallible>> EhPin<P> {
    /// Wrap a pin, driving it to `initial_high`
    pub fn new(pin: P, initial_high: bool) -> Self {
        let mut wrapped = Self { pin, high: false };
        wrapped.set_state(initial_high);
        wrapped
    }

    /// Return the wrapped pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: EhOutputPin<Error = Infallible>> OutputPin for EhPin<P> {
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => self.high = true,
            Err(never) => match never {},
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => self.high = false,
            Err(never) => match never {},
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Delay adapter for any `embedded_hal::delay::DelayNs`
pub struct EhDelay<D> {
    delay: D,
}

impl<D: DelayNs> EhDelay<D> {
    /// Wrap a delay provider
    pub fn new(delay: D) -> Self {
        Self { delay }
    }

    /// Return the wrapped delay provider
    pub fn release(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> DelayMs for EhDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePin {
        level: bool,
    }

    impl embedded_hal::digital::ErrorType for FakePin {
        type Error = Infallible;
    }

    impl EhOutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.level = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.level = true;
            Ok(())
        }
    }

    struct FakeBus {
        written: [u8; 8],
        len: usize,
        flushed: bool,
    }

    impl embedded_hal::spi::ErrorType for FakeBus {
        type Error = Infallible;
    }

    impl EhSpiBus<u8> for FakeBus {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Infallible> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Infallible> {
            for &w in words {
                self.written[self.len] = w;
                self.len += 1;
            }
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], write: &[u8]) -> Result<(), Infallible> {
            self.write(write)
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Infallible> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Infallible> {
            self.flushed = true;
            Ok(())
        }
    }

    struct FakeDelay {
        total_ns: u64,
    }

    impl DelayNs for FakeDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    #[test]
    fn test_pin_adapter_tracks_level() {
        let mut pin = EhPin::new(FakePin { level: false }, true);
        assert!(pin.is_set_high());

        pin.set_low();
        assert!(pin.is_set_low());
        assert!(!pin.release().level);
    }

    #[test]
    fn test_spi_adapter_forwards_bytes() {
        let mut spi = EhSpi::new(FakeBus {
            written: [0; 8],
            len: 0,
            flushed: false,
        });
        spi.write(&[0x2C, 0x00]).unwrap();
        spi.write_byte(0xFF).unwrap();
        spi.flush().unwrap();

        let bus = spi.release();
        assert_eq!(&bus.written[..bus.len], &[0x2C, 0x00, 0xFF]);
        assert!(bus.flushed);
    }

    #[test]
    fn test_delay_adapter_converts_ms() {
        let mut delay = EhDelay::new(FakeDelay { total_ns: 0 });
        delay.delay_ms(130);
        assert_eq!(delay.release().total_ns, 130_000_000);
    }
}
