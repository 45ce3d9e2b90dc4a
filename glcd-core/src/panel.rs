//! Panel geometry and board revisions
//!
//! The controller's frame memory is 128 x 160, but the glass only shows a
//! 128 x 128 slice of it. Where that slice sits depends on the board
//! revision printed on the back of the PCB and on the active origin corner.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::madctl::Origin;

/// Visible width in pixels
pub const WIDTH: u16 = 128;

/// Visible height in pixels
pub const HEIGHT: u16 = 128;

/// Frame memory width addressable in the controller
pub const ADDRESSABLE_WIDTH: u16 = 128;

/// Frame memory height addressable in the controller
pub const ADDRESSABLE_HEIGHT: u16 = 160;

/// Board revision of the display module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PanelRevision {
    /// Revision 1.1: glass offset by a few cells on every side
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "v1.1"))]
    V1_1,
    /// Revision 2.1: glass aligned to one edge, 32 cells from the other
    #[cfg_attr(feature = "serde", serde(rename = "v2.1"))]
    V2_1,
}

impl PanelRevision {
    /// Pixel offset (dx, dy) added to every window for an origin corner
    pub const fn offset(self, origin: Origin) -> (u16, u16) {
        match (self, origin) {
            (PanelRevision::V1_1, Origin::TopLeft) => (2, 3),
            (PanelRevision::V1_1, Origin::TopRight) => (3, 2),
            (PanelRevision::V1_1, Origin::BottomLeft) => (1, 2),
            (PanelRevision::V1_1, Origin::BottomRight) => (2, 1),
            (PanelRevision::V2_1, Origin::TopLeft) => (0, 32),
            (PanelRevision::V2_1, Origin::TopRight) => (32, 0),
            (PanelRevision::V2_1, Origin::BottomLeft | Origin::BottomRight) => (0, 0),
        }
    }
}
