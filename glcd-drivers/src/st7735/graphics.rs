//! `embedded-graphics` integration
//!
//! Draws straight to the controller; there is no frame buffer. Solid fills
//! become one windowed write, everything else goes pixel by pixel.

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{Dimensions, OriginDimensions, Size};
use embedded_graphics_core::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics_core::primitives::Rectangle;
use embedded_graphics_core::Pixel;
use glcd_core::{Color, Window};
use glcd_hal::{DelayMs, OutputPin, SpiBus};

use super::{Error, St7735, HEIGHT, WIDTH};

fn to_color(color: Rgb888) -> Color {
    Color::from_rgb(color.r(), color.g(), color.b())
}

impl<SPI, CS, DC, D> OriginDimensions for St7735<SPI, CS, DC, D> {
    fn size(&self) -> Size {
        Size::new(u32::from(WIDTH), u32::from(HEIGHT))
    }
}

impl<SPI, CS, DC, D> DrawTarget for St7735<SPI, CS, DC, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    D: DelayMs,
{
    type Color = Rgb888;
    type Error = Error<SPI::Error>;

    /// Pixels outside the panel are skipped
    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if !bounds.contains(point) {
                continue;
            }
            self.draw_pixel(point.x as u16, point.y as u16, to_color(color))?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.size.width == 0 || area.size.height == 0 {
            return Ok(());
        }

        // Clipped to the 128x128 panel, so every coordinate fits in u16
        let x = area.top_left.x as u16;
        let y = area.top_left.y as u16;
        let window = Window::new(
            x,
            x + area.size.width as u16,
            y,
            y + area.size.height as u16,
        )?;
        self.draw_rectangle(window, to_color(color))
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(to_color(color))
    }
}
