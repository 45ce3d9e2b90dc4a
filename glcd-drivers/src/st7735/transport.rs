//! Command encoder
//!
//! Frames every byte with the command/data and chip-select lines. Single
//! transfers select the controller for exactly one byte; pixel streams hold
//! the selection for the whole run.

use glcd_core::Instruction;
use glcd_hal::{OutputPin, SpiBus};

use super::Error;

/// Pixels buffered per bus write when streaming a solid fill
const STREAM_CHUNK_PIXELS: usize = 32;

/// How the controller should interpret a byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferKind {
    /// Opcode (command/data line low)
    Command,
    /// Parameter or pixel data (command/data line high)
    Data,
}

/// SPI bus plus the two framing lines
pub struct Transport<SPI, CS, DC> {
    spi: SPI,
    cs: CS,
    dc: DC,
}

impl<SPI, CS, DC> Transport<SPI, CS, DC>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
{
    /// Take ownership of the bus and lines, leaving the controller deselected
    pub fn new(spi: SPI, mut cs: CS, mut dc: DC) -> Self {
        cs.set_high();
        dc.set_high();
        Self { spi, cs, dc }
    }

    /// Return the bus and lines
    pub fn release(self) -> (SPI, CS, DC) {
        (self.spi, self.cs, self.dc)
    }

    /// Send one byte in its own chip-select window
    ///
    /// Chip-select is released even if the bus fails.
    pub fn transfer(&mut self, byte: u8, kind: TransferKind) -> Result<(), SPI::Error> {
        self.dc.set_state(kind == TransferKind::Data);
        self.cs.set_low();
        let result = self.spi.write_byte(byte).and_then(|()| self.spi.flush());
        self.cs.set_high();
        result
    }

    /// Send an opcode followed by its parameter bytes
    pub fn command(
        &mut self,
        instruction: Instruction,
        params: &[u8],
    ) -> Result<(), Error<SPI::Error>> {
        if !instruction.accepts(params.len()) {
            return Err(Error::ParameterCount {
                instruction,
                len: params.len(),
            });
        }

        self.transfer(instruction.opcode(), TransferKind::Command)
            .map_err(Error::Transport)?;
        for &param in params {
            self.transfer(param, TransferKind::Data)
                .map_err(Error::Transport)?;
        }
        Ok(())
    }

    /// Stream `count` copies of one pixel under a single selection
    ///
    /// The command/data line is raised once for the whole run. Must follow
    /// a RAM write instruction.
    pub fn stream_pixels(&mut self, pixel: [u8; 3], count: u32) -> Result<(), SPI::Error> {
        self.cs.set_low();
        self.dc.set_high();
        let result = write_repeated(&mut self.spi, pixel, count);
        self.cs.set_high();
        result
    }
}

fn write_repeated<SPI: SpiBus>(spi: &mut SPI, pixel: [u8; 3], count: u32) -> Result<(), SPI::Error> {
    let mut chunk = [0u8; STREAM_CHUNK_PIXELS * 3];
    for slot in chunk.chunks_exact_mut(3) {
        slot.copy_from_slice(&pixel);
    }

    let mut remaining = count as usize;
    while remaining > 0 {
        let pixels = remaining.min(STREAM_CHUNK_PIXELS);
        spi.write(&chunk[..pixels * 3])?;
        remaining -= pixels;
    }
    spi.flush()
}
