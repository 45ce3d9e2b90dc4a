//! SPI bus abstractions
//!
//! The display controller is driven write-only: the MISO line is not wired
//! on the target board, so the trait only exposes outgoing transfers.

/// Write-only SPI bus master
///
/// Bytes are shifted out in call order. Chip-select is NOT managed here; the
/// driver owns the select line so it can hold it across a batched stream.
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Write data, most significant bit of each byte first
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Write a single byte
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write(&[byte])
    }

    /// Block until every queued byte has left the shift register
    ///
    /// Buses that complete each write synchronously can keep the default.
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<T: SpiBus + ?Sized> SpiBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, data)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        T::write_byte(self, byte)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        T::flush(self)
    }
}

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity
    pub polarity: Polarity,
    /// Clock phase
    pub phase: Phase,
}

impl SpiConfig {
    /// Create a configuration from a frequency and a combined mode
    pub const fn new(frequency: u32, mode: Mode) -> Self {
        let (polarity, phase) = mode.split();
        Self {
            frequency,
            polarity,
            phase,
        }
    }

    /// Combined SPI mode for this polarity/phase pair
    pub const fn mode(&self) -> Mode {
        match (self.polarity, self.phase) {
            (Polarity::IdleLow, Phase::CaptureOnFirstTransition) => Mode::Mode0,
            (Polarity::IdleLow, Phase::CaptureOnSecondTransition) => Mode::Mode1,
            (Polarity::IdleHigh, Phase::CaptureOnFirstTransition) => Mode::Mode2,
            (Polarity::IdleHigh, Phase::CaptureOnSecondTransition) => Mode::Mode3,
        }
    }
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self::new(1_000_000, Mode::Mode0) // 1 MHz
    }
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl Mode {
    const fn split(self) -> (Polarity, Phase) {
        match self {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        mode.split()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        for mode in [Mode::Mode0, Mode::Mode1, Mode::Mode2, Mode::Mode3] {
            assert_eq!(SpiConfig::new(8_000_000, mode).mode(), mode);
        }
    }

    #[test]
    fn test_default_config() {
        let config = SpiConfig::default();
        assert_eq!(config.frequency, 1_000_000);
        assert_eq!(config.polarity, Polarity::IdleLow);
        assert_eq!(config.phase, Phase::CaptureOnFirstTransition);
    }

    #[test]
    fn test_write_byte_default() {
        struct Sink {
            last: Option<u8>,
            calls: usize,
        }

        impl SpiBus for Sink {
            type Error = ();

            fn write(&mut self, data: &[u8]) -> Result<(), ()> {
                self.calls += 1;
                self.last = data.last().copied();
                Ok(())
            }
        }

        let mut sink = Sink {
            last: None,
            calls: 0,
        };
        sink.write_byte(0xA5).unwrap();
        assert_eq!(sink.last, Some(0xA5));
        assert_eq!(sink.calls, 1);
        assert_eq!(sink.flush(), Ok(()));
    }
}
