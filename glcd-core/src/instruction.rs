//! ST7735R instruction table
//!
//! Only write instructions are listed; the board does not route the
//! controller's read line. Each instruction carries a datasheet-fixed number
//! of parameter bytes, checked by the driver before anything is sent.

use core::ops::RangeInclusive;

/// Controller instruction (opcode byte)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Instruction {
    /// NOP: empty processor cycle
    Nop = 0x00,
    /// SWRESET: all registers to their default state
    SoftwareReset = 0x01,
    /// SLPIN: enter sleep mode
    SleepIn = 0x10,
    /// SLPOUT: exit sleep mode
    SleepOut = 0x11,
    /// PTLON: partial mode on
    PartialOn = 0x12,
    /// NORON: partial mode off (normal)
    NormalOn = 0x13,
    /// INVOFF: display inversion off
    InversionOff = 0x20,
    /// INVON: display inversion on
    InversionOn = 0x21,
    /// GAMSET: select gamma curve
    GammaSet = 0x26,
    /// DISPOFF: blank the output
    DisplayOff = 0x28,
    /// DISPON: enable output from frame memory
    DisplayOn = 0x29,
    /// CASET: column address window
    ColumnAddressSet = 0x2A,
    /// RASET: row address window
    RowAddressSet = 0x2B,
    /// RAMWR: start writing frame memory; pixel data follows
    RamWrite = 0x2C,
    /// PTLAR: partial area start/end rows
    PartialArea = 0x30,
    /// TEOFF: tearing effect line off
    TearingOff = 0x34,
    /// TEON: tearing effect line on
    TearingOn = 0x35,
    /// MADCTL: memory data access control (mirror/exchange)
    MemoryAccessControl = 0x36,
    /// IDMOFF: idle mode off
    IdleOff = 0x38,
    /// IDMON: idle mode on (8 colours)
    IdleOn = 0x39,
    /// COLMOD: interface pixel format
    PixelFormat = 0x3A,
    /// FRMCTR1: frame rate in normal mode
    FrameRateNormal = 0xB1,
    /// FRMCTR2: frame rate in idle mode
    FrameRateIdle = 0xB2,
    /// FRMCTR3: frame rate in partial mode
    FrameRatePartial = 0xB3,
    /// INVCTR: display inversion control
    InversionControl = 0xB4,
    /// PWCTR1: GVDD / AVDD / GVCL levels
    PowerControl1 = 0xC0,
    /// PWCTR2: VGH / VGL supply levels
    PowerControl2 = 0xC1,
    /// PWCTR3: op-amp current in normal mode
    PowerControl3 = 0xC2,
    /// PWCTR4: op-amp current in idle mode
    PowerControl4 = 0xC3,
    /// PWCTR5: op-amp current in partial mode
    PowerControl5 = 0xC4,
    /// VMCTR1: VCOM voltage
    VcomControl1 = 0xC5,
    /// VMOFCTR: VCOM offset
    VcomOffset = 0xC7,
}

impl Instruction {
    const ALL: [Instruction; 32] = [
        Instruction::Nop,
        Instruction::SoftwareReset,
        Instruction::SleepIn,
        Instruction::SleepOut,
        Instruction::PartialOn,
        Instruction::NormalOn,
        Instruction::InversionOff,
        Instruction::InversionOn,
        Instruction::GammaSet,
        Instruction::DisplayOff,
        Instruction::DisplayOn,
        Instruction::ColumnAddressSet,
        Instruction::RowAddressSet,
        Instruction::RamWrite,
        Instruction::PartialArea,
        Instruction::TearingOff,
        Instruction::TearingOn,
        Instruction::MemoryAccessControl,
        Instruction::IdleOff,
        Instruction::IdleOn,
        Instruction::PixelFormat,
        Instruction::FrameRateNormal,
        Instruction::FrameRateIdle,
        Instruction::FrameRatePartial,
        Instruction::InversionControl,
        Instruction::PowerControl1,
        Instruction::PowerControl2,
        Instruction::PowerControl3,
        Instruction::PowerControl4,
        Instruction::PowerControl5,
        Instruction::VcomControl1,
        Instruction::VcomOffset,
    ];

    /// Opcode byte sent with the command/data line low
    pub const fn opcode(self) -> u8 {
        self as u8
    }

    /// Look up an instruction by opcode
    pub fn from_opcode(opcode: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|i| i.opcode() == opcode)
    }

    /// Number of parameter bytes the controller expects
    ///
    /// `RamWrite` is open-ended: pixel data streams after it for as long as
    /// chip-select stays asserted.
    pub const fn params(self) -> RangeInclusive<usize> {
        match self {
            Instruction::Nop
            | Instruction::SoftwareReset
            | Instruction::SleepIn
            | Instruction::SleepOut
            | Instruction::PartialOn
            | Instruction::NormalOn
            | Instruction::InversionOff
            | Instruction::InversionOn
            | Instruction::DisplayOff
            | Instruction::DisplayOn
            | Instruction::TearingOff
            | Instruction::IdleOff
            | Instruction::IdleOn => 0..=0,
            Instruction::GammaSet
            | Instruction::TearingOn
            | Instruction::MemoryAccessControl
            | Instruction::PixelFormat
            | Instruction::InversionControl
            | Instruction::PowerControl2
            | Instruction::VcomControl1
            | Instruction::VcomOffset => 1..=1,
            Instruction::PowerControl3
            | Instruction::PowerControl4
            | Instruction::PowerControl5 => 2..=2,
            Instruction::FrameRateNormal
            | Instruction::FrameRateIdle
            | Instruction::PowerControl1 => 3..=3,
            // Line-inversion and dot-inversion periods; the second half is optional
            Instruction::FrameRatePartial => 3..=6,
            Instruction::ColumnAddressSet
            | Instruction::RowAddressSet
            | Instruction::PartialArea => 4..=4,
            Instruction::RamWrite => 0..=usize::MAX,
        }
    }

    /// Check a parameter count against the datasheet
    pub fn accepts(self, len: usize) -> bool {
        self.params().contains(&len)
    }
}

impl From<Instruction> for u8 {
    fn from(instruction: Instruction) -> Self {
        instruction.opcode()
    }
}
