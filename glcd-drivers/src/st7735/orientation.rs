//! Origin corner control
//!
//! Moving the origin rewrites MY/MX/MV in the session's MADCTL copy and
//! pushes the whole register to the controller. Later draws pick up the
//! matching coordinate correction automatically.

use glcd_core::{Instruction, Orientation, Origin};
use glcd_hal::{DelayMs, OutputPin, SpiBus};

use super::{Error, St7735};

impl<SPI, CS, DC, D> St7735<SPI, CS, DC, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    D: DelayMs,
{
    /// Place the logical origin in `origin`'s corner
    ///
    /// Sends exactly one MADCTL instruction with one parameter byte.
    pub fn set_origin(&mut self, origin: Origin) -> Result<(), Error<SPI::Error>> {
        self.ensure_initialized()?;
        let register = self.orientation.set_origin(origin);

        #[cfg(feature = "defmt")]
        defmt::debug!("origin {} (MADCTL {=u8:#04x})", origin, register.to_byte());

        self.command(Instruction::MemoryAccessControl, &[register.to_byte()])
    }

    /// Re-send the held MADCTL value
    pub fn push_orientation(&mut self) -> Result<(), Error<SPI::Error>> {
        self.ensure_initialized()?;
        self.write_madctl()
    }

    /// Orientation state (register and revision)
    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// Corner currently acting as the origin
    pub fn origin(&self) -> Origin {
        self.orientation.origin()
    }

    pub(super) fn write_madctl(&mut self) -> Result<(), Error<SPI::Error>> {
        let byte = self.orientation.register().to_byte();
        self.command(Instruction::MemoryAccessControl, &[byte])
    }
}

#[cfg(test)]
mod tests {
    use glcd_core::{Color, ColorOrder, DisplayConfig, PanelRevision, Window};

    use super::*;
    use crate::mock::{self, Op};

    #[test]
    fn test_set_origin_sends_madctl() {
        let (mut display, log) = mock::initialized(DisplayConfig::default());

        for (origin, byte) in [
            (Origin::TopRight, 0x80),
            (Origin::BottomRight, 0x20),
            (Origin::BottomLeft, 0x40),
            (Origin::TopLeft, 0xE0),
        ] {
            log.clear();
            display.set_origin(origin).unwrap();
            assert_eq!(
                log.ops(),
                vec![Op::Command(Instruction::MemoryAccessControl, vec![byte])]
            );
            assert_eq!(log.selections(), 2);
            assert_eq!(display.origin(), origin);
        }
    }

    #[test]
    fn test_set_origin_keeps_color_order() {
        let (mut display, log) = mock::initialized(DisplayConfig {
            color_order: ColorOrder::Bgr,
            ..DisplayConfig::default()
        });

        display.set_origin(Origin::BottomLeft).unwrap();
        assert_eq!(
            log.ops(),
            vec![Op::Command(Instruction::MemoryAccessControl, vec![0x48])]
        );
        assert!(display.orientation().register().bgr());
    }

    #[test]
    fn test_origin_change_moves_correction() {
        let (mut display, log) = mock::initialized(DisplayConfig::for_revision(
            PanelRevision::V2_1,
        ));

        display.set_origin(Origin::TopRight).unwrap();
        log.clear();
        display.draw_rectangle(Window::point(0, 0), Color::WHITE).unwrap();

        let ops = log.ops();
        assert_eq!(
            ops[0],
            Op::Command(Instruction::RowAddressSet, vec![0, 32, 0, 32])
        );
        assert_eq!(
            ops[1],
            Op::Command(Instruction::ColumnAddressSet, vec![0, 0, 0, 0])
        );
    }

    #[test]
    fn test_push_orientation_resends_register() {
        let (mut display, log) = mock::initialized(DisplayConfig::default());

        display.push_orientation().unwrap();
        assert_eq!(
            log.ops(),
            vec![Op::Command(Instruction::MemoryAccessControl, vec![0xE0])]
        );
    }

    #[test]
    fn test_set_origin_requires_init() {
        let (mut display, _log) = mock::display(DisplayConfig::default());
        assert_eq!(
            display.set_origin(Origin::TopRight),
            Err(Error::NotInitialized)
        );
        // State untouched when refused
        assert_eq!(display.origin(), Origin::BottomRight);
    }
}
