//! Interface pixel format and gamma selection

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Colour depth accepted on the interface (COLMOD)
///
/// Pixels are always sent as three bytes; the format only decides how many
/// high bits of each byte the controller keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColorFormat {
    /// 12 bits per pixel, 4 bits per channel
    Bits12,
    /// 16 bits per pixel, 5 bits per channel
    Bits16,
    /// 18 bits per pixel, 6 bits per channel
    #[default]
    Bits18,
}

impl ColorFormat {
    /// Select by bits per pixel; anything but 12 or 16 means 18
    pub const fn from_bits_per_pixel(bits: u8) -> Self {
        match bits {
            12 => ColorFormat::Bits12,
            16 => ColorFormat::Bits16,
            _ => ColorFormat::Bits18,
        }
    }

    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            ColorFormat::Bits12 => 12,
            ColorFormat::Bits16 => 16,
            ColorFormat::Bits18 => 18,
        }
    }

    /// COLMOD parameter byte (IFPF[2:0])
    pub const fn code(self) -> u8 {
        match self {
            ColorFormat::Bits12 => 0b011,
            ColorFormat::Bits16 => 0b101,
            ColorFormat::Bits18 => 0b110,
        }
    }
}

impl From<u8> for ColorFormat {
    fn from(bits: u8) -> Self {
        Self::from_bits_per_pixel(bits)
    }
}

/// Predefined gamma curve (GAMSET)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GammaCurve {
    /// GC0, gamma 2.2
    #[default]
    Curve1,
    /// GC1, gamma 1.8
    Curve2,
    /// GC2, gamma 2.5
    Curve3,
    /// GC3, gamma 1.0
    Curve4,
}

impl GammaCurve {
    /// GAMSET parameter byte (one-hot)
    pub const fn code(self) -> u8 {
        match self {
            GammaCurve::Curve1 => 0x01,
            GammaCurve::Curve2 => 0x02,
            GammaCurve::Curve3 => 0x04,
            GammaCurve::Curve4 => 0x08,
        }
    }
}
