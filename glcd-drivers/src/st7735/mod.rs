//! ST7735R display controller driver
//!
//! Drives the red-PCB 1.44" GLCD (ST7735R, 128x128 visible) over a
//! write-only 4-wire serial interface.
//!
//! # Wire protocol
//!
//! One byte per bus operation, framed by two lines:
//! - Command/data select: low = opcode, high = parameter or pixel data
//! - Chip-select (active low): asserted for each byte, or once for a whole
//!   pixel stream
//!
//! Nothing is ever read back; the controller gives no acknowledgment.
//!
//! # Session
//!
//! [`St7735`] owns the bus, both control lines, the delay provider and the
//! MADCTL orientation state. Every operation takes `&mut self`, so a session
//! can never interleave two bus sequences. [`St7735::init`] must complete
//! before drawing.

use glcd_core::window::WindowError;
use glcd_core::{DisplayConfig, Instruction, Orientation};
use glcd_hal::spi::{Mode, SpiConfig};
use glcd_hal::{DelayMs, OutputPin, SpiBus};

mod draw;
#[cfg(feature = "graphics")]
mod graphics;
mod init;
mod orientation;
mod transport;

pub use glcd_core::panel::{ADDRESSABLE_HEIGHT, ADDRESSABLE_WIDTH, HEIGHT, WIDTH};
pub use transport::{TransferKind, Transport};

/// Recommended bus setup: mode 0, 15 MHz (datasheet write cycle 66 ns)
pub const SPI_CONFIG: SpiConfig = SpiConfig::new(15_000_000, Mode::Mode0);

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The SPI bus reported a failure
    Transport(E),
    /// Rectangle is inverted or leaves the visible panel
    InvalidWindow(WindowError),
    /// Parameter count does not match the instruction
    ParameterCount {
        /// Instruction that was being sent
        instruction: Instruction,
        /// Number of parameter bytes supplied
        len: usize,
    },
    /// Drawing attempted before the initialisation sequence completed
    NotInitialized,
}

impl<E> From<WindowError> for Error<E> {
    fn from(e: WindowError) -> Self {
        Error::InvalidWindow(e)
    }
}

/// ST7735R display session
pub struct St7735<SPI, CS, DC, D> {
    transport: Transport<SPI, CS, DC>,
    delay: D,
    orientation: Orientation,
    config: DisplayConfig,
    initialized: bool,
}

impl<SPI, CS, DC, D> St7735<SPI, CS, DC, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    D: DelayMs,
{
    /// Create a session
    ///
    /// Chip-select is deasserted and the command/data line set high straight
    /// away; nothing is sent until [`St7735::init`].
    pub fn new(spi: SPI, cs: CS, dc: DC, delay: D, config: DisplayConfig) -> Self {
        Self {
            transport: Transport::new(spi, cs, dc),
            delay,
            orientation: Orientation::new(config.revision),
            config,
            initialized: false,
        }
    }

    /// Session configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// True once [`St7735::init`] has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Tear down the session and return the peripherals
    pub fn release(self) -> (SPI, CS, DC, D) {
        let (spi, cs, dc) = self.transport.release();
        (spi, cs, dc, self.delay)
    }

    fn ensure_initialized(&self) -> Result<(), Error<SPI::Error>> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    /// Send an instruction and its parameters
    fn command(&mut self, instruction: Instruction, params: &[u8]) -> Result<(), Error<SPI::Error>> {
        self.transport.command(instruction, params)
    }
}
