//! Window draw engine
//!
//! A rectangle is drawn by programming the controller's address window and
//! then writing one colour triple per covered cell. The controller advances
//! its RAM pointer on its own, so pixel data can stream without further
//! addressing.

use glcd_core::{Color, Instruction, Window};
use glcd_hal::{DelayMs, OutputPin, SpiBus};

use super::{Error, St7735, TransferKind, HEIGHT, WIDTH};

impl<SPI, CS, DC, D> St7735<SPI, CS, DC, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    D: DelayMs,
{
    /// Fill `window` with a solid colour
    ///
    /// The window is checked against the 128x128 visible area, then shifted
    /// for the active origin corner before it is sent. A window whose start
    /// equals its end on both axes paints that one pixel.
    pub fn draw_rectangle(
        &mut self,
        window: Window,
        color: impl Into<Color>,
    ) -> Result<(), Error<SPI::Error>> {
        self.ensure_initialized()?;
        window.check_bounds(WIDTH, HEIGHT)?;
        self.write_window(window, color.into())
    }

    /// Paint one pixel
    ///
    /// Coordinates past the panel edge are clamped to the last row/column.
    pub fn draw_pixel(
        &mut self,
        x: u16,
        y: u16,
        color: impl Into<Color>,
    ) -> Result<(), Error<SPI::Error>> {
        let x = x.min(WIDTH - 1);
        let y = y.min(HEIGHT - 1);
        self.draw_rectangle(Window::point(x, y), color)
    }

    /// Fill the whole visible panel
    pub fn fill_screen(&mut self, color: impl Into<Color>) -> Result<(), Error<SPI::Error>> {
        self.draw_rectangle(Window::full(WIDTH, HEIGHT), color)
    }

    /// Address a window and write its pixels; no validation
    pub(super) fn write_window(
        &mut self,
        window: Window,
        color: Color,
    ) -> Result<(), Error<SPI::Error>> {
        let corrected = self.orientation.correct(window);

        #[cfg(feature = "defmt")]
        defmt::trace!("window {} -> {}", window, corrected);

        self.command(Instruction::RowAddressSet, &corrected.x_address())?;
        self.command(Instruction::ColumnAddressSet, &corrected.y_address())?;
        self.command(Instruction::RamWrite, &[])?;

        let pixel = color.to_wire();

        if corrected.is_point() {
            for byte in pixel {
                self.transport
                    .transfer(byte, TransferKind::Data)
                    .map_err(Error::Transport)?;
            }
            return Ok(());
        }

        let count = corrected.pixel_count();
        if count == 0 {
            return Ok(());
        }
        self.transport
            .stream_pixels(pixel, count)
            .map_err(Error::Transport)
    }
}
