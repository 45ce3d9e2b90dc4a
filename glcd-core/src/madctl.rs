//! MADCTL (memory data access control) register
//!
//! Six flags packed into the single MADCTL parameter byte. Bits 1..0 are
//! unused and always transmitted as zero.
//!
//! ```text
//!  bit:   7    6    5    4    3    2    1  0
//!        MY   MX   MV   ML  RGB   MH    -  -
//! ```
//!
//! MY, MX and MV together decide which physical corner is the logical origin.
//! ML, RGB and MH are fixed for the session when the display is initialised.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MY: u8 = 1 << 7;
const MX: u8 = 1 << 6;
const MV: u8 = 1 << 5;
const ML: u8 = 1 << 4;
const RGB: u8 = 1 << 3;
const MH: u8 = 1 << 2;

const USED_BITS: u8 = MY | MX | MV | ML | RGB | MH;

/// Corner of the panel used as the logical origin
///
/// Corners are named as seen with the board mounted in its carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Origin {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Origin {
    /// Map a raw corner index (0 = top-left, 1 = top-right, 2 = bottom-left,
    /// 3 = bottom-right)
    ///
    /// Unknown indices select `TopLeft`.
    pub const fn from_index(index: u8) -> Self {
        match index {
            1 => Origin::TopRight,
            2 => Origin::BottomLeft,
            3 => Origin::BottomRight,
            _ => Origin::TopLeft,
        }
    }

    /// (MY, MX, MV) pattern that places the origin in this corner
    pub const fn flags(self) -> (bool, bool, bool) {
        match self {
            Origin::TopLeft => (true, true, true),
            Origin::TopRight => (true, false, false),
            Origin::BottomRight => (false, false, true),
            Origin::BottomLeft => (false, true, false),
        }
    }
}

/// Sub-pixel colour order on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorOrder {
    #[default]
    Rgb,
    Bgr,
}

/// MADCTL register value
///
/// The default value is all flags clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Madctl(u8);

impl Madctl {
    /// Session value programmed during initialisation: origin top-left,
    /// top-to-bottom scan, RGB order, left-to-right refresh
    pub const INIT: Madctl = Madctl(MY | MX | MV);

    /// Decode a register byte; unused low bits are dropped
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte & USED_BITS)
    }

    /// Byte sent as the MADCTL parameter
    pub const fn to_byte(self) -> u8 {
        self.0
    }

    /// Row address order (MY)
    pub const fn mirror_y(self) -> bool {
        self.0 & MY != 0
    }

    /// Column address order (MX)
    pub const fn mirror_x(self) -> bool {
        self.0 & MX != 0
    }

    /// Row/column exchange (MV)
    pub const fn exchange(self) -> bool {
        self.0 & MV != 0
    }

    /// Vertical refresh bottom-to-top (ML)
    pub const fn scan_reversed(self) -> bool {
        self.0 & ML != 0
    }

    /// Panel wired BGR instead of RGB
    pub const fn bgr(self) -> bool {
        self.0 & RGB != 0
    }

    /// Horizontal refresh right-to-left (MH)
    pub const fn refresh_reversed(self) -> bool {
        self.0 & MH != 0
    }

    pub const fn with_mirror_y(self, on: bool) -> Self {
        self.with(MY, on)
    }

    pub const fn with_mirror_x(self, on: bool) -> Self {
        self.with(MX, on)
    }

    pub const fn with_exchange(self, on: bool) -> Self {
        self.with(MV, on)
    }

    pub const fn with_scan_reversed(self, on: bool) -> Self {
        self.with(ML, on)
    }

    pub const fn with_bgr(self, on: bool) -> Self {
        self.with(RGB, on)
    }

    pub const fn with_refresh_reversed(self, on: bool) -> Self {
        self.with(MH, on)
    }

    pub const fn with_color_order(self, order: ColorOrder) -> Self {
        self.with_bgr(matches!(order, ColorOrder::Bgr))
    }

    /// Replace MY/MX/MV with the pattern for `origin`, keeping ML/RGB/MH
    pub const fn with_origin(self, origin: Origin) -> Self {
        let (my, mx, mv) = origin.flags();
        self.with_mirror_y(my).with_mirror_x(mx).with_exchange(mv)
    }

    /// Corner currently acting as the origin
    ///
    /// Decided in priority order: MX+MV set means top-left, otherwise MY
    /// means top-right, otherwise MX means bottom-left, else bottom-right.
    /// Register values not produced by [`Madctl::with_origin`] resolve to the
    /// first matching case.
    pub const fn origin(self) -> Origin {
        if self.mirror_x() && self.exchange() {
            Origin::TopLeft
        } else if self.mirror_y() {
            Origin::TopRight
        } else if self.mirror_x() {
            Origin::BottomLeft
        } else {
            Origin::BottomRight
        }
    }

    const fn with(self, bit: u8, on: bool) -> Self {
        if on {
            Self(self.0 | bit)
        } else {
            Self(self.0 & !bit)
        }
    }
}

impl From<u8> for Madctl {
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}

impl From<Madctl> for u8 {
    fn from(madctl: Madctl) -> Self {
        madctl.to_byte()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ORIGINS: [Origin; 4] = [
        Origin::TopLeft,
        Origin::TopRight,
        Origin::BottomLeft,
        Origin::BottomRight,
    ];

    #[test]
    fn test_origin_table() {
        assert_eq!(Madctl::default().with_origin(Origin::TopLeft).to_byte(), 0xE0);
        assert_eq!(Madctl::default().with_origin(Origin::TopRight).to_byte(), 0x80);
        assert_eq!(Madctl::default().with_origin(Origin::BottomRight).to_byte(), 0x20);
        assert_eq!(Madctl::default().with_origin(Origin::BottomLeft).to_byte(), 0x40);
    }

    #[test]
    fn test_unknown_index_defaults_to_top_left() {
        assert_eq!(Origin::from_index(0), Origin::TopLeft);
        assert_eq!(Origin::from_index(3), Origin::BottomRight);
        assert_eq!(Origin::from_index(4), Origin::TopLeft);
        assert_eq!(Origin::from_index(0xFF), Origin::TopLeft);
    }

    #[test]
    fn test_origin_decoding_matches_encoding() {
        for origin in ORIGINS {
            assert_eq!(Madctl::INIT.with_origin(origin).origin(), origin);
        }
    }

    #[test]
    fn test_default_register_is_bottom_right() {
        assert_eq!(Madctl::default().to_byte(), 0);
        assert_eq!(Madctl::default().origin(), Origin::BottomRight);
        assert_eq!(Madctl::INIT.origin(), Origin::TopLeft);
    }

    #[test]
    fn test_named_flags() {
        let reg = Madctl::default()
            .with_scan_reversed(true)
            .with_color_order(ColorOrder::Bgr)
            .with_refresh_reversed(true);
        assert_eq!(reg.to_byte(), 0x1C);
        assert!(reg.scan_reversed() && reg.bgr() && reg.refresh_reversed());
        assert!(!reg.mirror_y() && !reg.mirror_x() && !reg.exchange());
    }

    #[test]
    fn test_from_byte_drops_unused_bits() {
        assert_eq!(Madctl::from_byte(0xFF).to_byte(), 0xFC);
        assert_eq!(u8::from(Madctl::from(0x03)), 0x00);
    }

    proptest! {
        #[test]
        fn prop_origin_leaves_session_flags(byte in any::<u8>(), index in 0u8..4) {
            let before = Madctl::from_byte(byte);
            let after = before.with_origin(Origin::from_index(index));

            prop_assert_eq!(after.scan_reversed(), before.scan_reversed());
            prop_assert_eq!(after.bgr(), before.bgr());
            prop_assert_eq!(after.refresh_reversed(), before.refresh_reversed());
            prop_assert_eq!(
                (after.mirror_y(), after.mirror_x(), after.exchange()),
                Origin::from_index(index).flags()
            );
        }
    }
}
