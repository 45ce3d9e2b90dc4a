//! Display session configuration
//!
//! Everything that is fixed for the lifetime of a display session and chosen
//! by the board integrator rather than at runtime. With the `serde` feature
//! the struct can be read from a `[display]` table in a board config file:
//!
//! ```toml
//! [display]
//! revision = "v2.1"
//! color_format = "bits16"
//! color_order = "bgr"
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::format::{ColorFormat, GammaCurve};
use crate::madctl::{ColorOrder, Madctl, Origin};
use crate::panel::PanelRevision;

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Board revision (selects the coordinate offset table)
    pub revision: PanelRevision,
    /// Interface colour depth
    pub color_format: ColorFormat,
    /// Gamma curve
    pub gamma: GammaCurve,
    /// Sub-pixel order of the glass
    pub color_order: ColorOrder,
    /// Origin corner programmed during initialisation
    pub origin: Origin,
}

impl DisplayConfig {
    /// Default configuration for a board revision
    pub const fn for_revision(revision: PanelRevision) -> Self {
        Self {
            revision,
            color_format: ColorFormat::Bits18,
            gamma: GammaCurve::Curve1,
            color_order: ColorOrder::Rgb,
            origin: Origin::TopLeft,
        }
    }

    /// MADCTL value programmed during initialisation
    ///
    /// Scan direction and refresh order stay at their reset values.
    pub const fn initial_madctl(&self) -> Madctl {
        Madctl::INIT
            .with_color_order(self.color_order)
            .with_origin(self.origin)
    }
}
