//! Orientation controller state
//!
//! Owns the MADCTL register value for a display session and applies the
//! board revision's coordinate correction for the active origin corner.
//! Sending the register to the controller is the driver's job.

use crate::madctl::{Madctl, Origin};
use crate::panel::PanelRevision;
use crate::window::Window;

/// Orientation register plus the panel revision it is corrected for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Orientation {
    register: Madctl,
    revision: PanelRevision,
}

impl Orientation {
    /// Fresh state: all MADCTL flags clear
    pub const fn new(revision: PanelRevision) -> Self {
        Self {
            register: Madctl::from_byte(0),
            revision,
        }
    }

    /// Current register value
    pub const fn register(&self) -> Madctl {
        self.register
    }

    /// Replace the whole register
    pub fn set_register(&mut self, register: Madctl) {
        self.register = register;
    }

    pub const fn revision(&self) -> PanelRevision {
        self.revision
    }

    /// Move the origin to `origin`
    ///
    /// Only MY, MX and MV change. Returns the new register value.
    pub fn set_origin(&mut self, origin: Origin) -> Madctl {
        self.register = self.register.with_origin(origin);
        self.register
    }

    /// Corner currently acting as the origin
    pub const fn origin(&self) -> Origin {
        self.register.origin()
    }

    /// Shift a window onto the frame memory cells behind the glass
    pub const fn correct(&self, window: Window) -> Window {
        let (dx, dy) = self.revision.offset(self.register.origin());
        window.translate(dx, dy)
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::new(PanelRevision::default())
    }
}
