//! Power-up sequence and mode commands

use glcd_core::{Color, ColorFormat, GammaCurve, Instruction, Window};
use glcd_hal::{DelayMs, OutputPin, SpiBus};

use super::{Error, St7735, HEIGHT, WIDTH};

/// Supply warm-up before the first command
const WARM_UP_MS: u32 = 20;
/// Settle time after SWRESET, SLPIN and SLPOUT
const RESET_SETTLE_MS: u32 = 130;
/// Settle time after DISPON
const DISPLAY_ON_SETTLE_MS: u32 = 10;

/// Frame rate, power and VCOM setup for the red-PCB panel
///
/// Sent in table order straight after sleep-out.
const POWER_UP: [(Instruction, &[u8]); 10] = [
    (Instruction::FrameRateNormal, &[0x00, 0x06, 0x03]),
    (Instruction::FrameRateIdle, &[0x01, 0x2C, 0x2D]),
    (Instruction::FrameRatePartial, &[0x01, 0x2C, 0x2D]),
    // Line inversion in every mode
    (Instruction::InversionControl, &[0x00]),
    // AVDD 5 V, GVDD 4.6 V, auto mode
    (Instruction::PowerControl1, &[0xA2, 0x02, 0x84]),
    (Instruction::PowerControl2, &[0xC5]),
    (Instruction::PowerControl3, &[0x0A, 0x00]),
    (Instruction::PowerControl4, &[0x8A, 0x2A]),
    (Instruction::PowerControl5, &[0x8A, 0x2A]),
    // VCOMH 3.525 V
    (Instruction::VcomControl1, &[0x3C]),
];

impl<SPI, CS, DC, D> St7735<SPI, CS, DC, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    D: DelayMs,
{
    /// Run the power-up sequence
    ///
    /// Resets the controller, programs timing, power, colour format, gamma
    /// and orientation from the session config, clears frame memory to
    /// black and turns the display on. Blocks for roughly 290 ms.
    ///
    /// The session only accepts drawing once this returns `Ok`. A failure
    /// part way through leaves it uninitialised; run `init` again.
    pub fn init(&mut self) -> Result<(), Error<SPI::Error>> {
        self.initialized = false;

        #[cfg(feature = "defmt")]
        defmt::debug!("st7735: init {}", self.config);

        self.delay.delay_ms(WARM_UP_MS);

        self.command(Instruction::SoftwareReset, &[])?;
        self.delay.delay_ms(RESET_SETTLE_MS);

        self.command(Instruction::SleepOut, &[])?;
        self.delay.delay_ms(RESET_SETTLE_MS);

        for (instruction, params) in POWER_UP {
            self.command(instruction, params)?;
        }

        self.command(Instruction::InversionOff, &[])?;
        self.command(Instruction::PixelFormat, &[self.config.color_format.code()])?;
        self.command(Instruction::GammaSet, &[self.config.gamma.code()])?;
        // Idle and partial modes corrupt full-screen writes
        self.command(Instruction::IdleOff, &[])?;
        self.command(Instruction::NormalOn, &[])?;

        self.orientation.set_register(self.config.initial_madctl());
        self.write_madctl()?;

        // Frame memory is undefined after reset
        self.write_window(Window::full(WIDTH, HEIGHT), Color::BLACK)?;

        self.command(Instruction::DisplayOn, &[])?;
        self.delay.delay_ms(DISPLAY_ON_SETTLE_MS);

        self.initialized = true;

        #[cfg(feature = "defmt")]
        defmt::debug!("st7735: ready, origin {}", self.orientation.origin());

        Ok(())
    }

    /// Select the interface colour depth
    ///
    /// Accepts 12, 16 or 18 bits per pixel (or a [`ColorFormat`]); any other
    /// depth selects 18. Before init this only updates the config used by
    /// [`St7735::init`]. Pixel encoding on the wire is unaffected.
    pub fn set_color_format(
        &mut self,
        format: impl Into<ColorFormat>,
    ) -> Result<(), Error<SPI::Error>> {
        let format = format.into();
        self.config.color_format = format;
        if !self.initialized {
            return Ok(());
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("st7735: {=u8} bpp", format.bits_per_pixel());

        self.command(Instruction::PixelFormat, &[format.code()])
    }

    /// Select a predefined gamma curve
    pub fn set_gamma(&mut self, gamma: GammaCurve) -> Result<(), Error<SPI::Error>> {
        self.ensure_initialized()?;
        self.config.gamma = gamma;
        self.command(Instruction::GammaSet, &[gamma.code()])
    }

    /// Software reset
    ///
    /// Registers return to their reset values, so the session must be
    /// initialised again before drawing.
    pub fn software_reset(&mut self) -> Result<(), Error<SPI::Error>> {
        self.ensure_initialized()?;
        self.initialized = false;
        self.command(Instruction::SoftwareReset, &[])?;
        self.delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }

    /// Enter sleep mode
    pub fn sleep_in(&mut self) -> Result<(), Error<SPI::Error>> {
        self.timed_command(Instruction::SleepIn, RESET_SETTLE_MS)
    }

    /// Leave sleep mode
    pub fn sleep_out(&mut self) -> Result<(), Error<SPI::Error>> {
        self.timed_command(Instruction::SleepOut, RESET_SETTLE_MS)
    }

    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), Error<SPI::Error>> {
        self.toggle(inverted, Instruction::InversionOn, Instruction::InversionOff)
    }

    /// Blank or show the panel; frame memory is kept
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Error<SPI::Error>> {
        self.toggle(on, Instruction::DisplayOn, Instruction::DisplayOff)
    }

    /// Idle mode (8 colours)
    pub fn set_idle(&mut self, idle: bool) -> Result<(), Error<SPI::Error>> {
        self.toggle(idle, Instruction::IdleOn, Instruction::IdleOff)
    }

    /// Partial mode; `false` returns to normal mode
    pub fn set_partial(&mut self, partial: bool) -> Result<(), Error<SPI::Error>> {
        self.toggle(partial, Instruction::PartialOn, Instruction::NormalOn)
    }

    pub fn tearing_effect_off(&mut self) -> Result<(), Error<SPI::Error>> {
        self.ensure_initialized()?;
        self.command(Instruction::TearingOff, &[])
    }

    fn timed_command(
        &mut self,
        instruction: Instruction,
        settle_ms: u32,
    ) -> Result<(), Error<SPI::Error>> {
        self.ensure_initialized()?;
        self.command(instruction, &[])?;
        self.delay.delay_ms(settle_ms);
        Ok(())
    }

    fn toggle(
        &mut self,
        on: bool,
        when_on: Instruction,
        when_off: Instruction,
    ) -> Result<(), Error<SPI::Error>> {
        self.ensure_initialized()?;
        self.command(if on { when_on } else { when_off }, &[])
    }
}
