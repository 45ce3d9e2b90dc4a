//! Rectangular addressing windows
//!
//! Windows are half-open on both axes: `x_start..x_end` by `y_start..y_end`.
//! A window whose start equals its end on both axes addresses the single
//! cell at the start coordinates.

/// Window construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowError {
    /// Start coordinate is past the end coordinate on some axis
    Inverted,
    /// Window extends past the visible panel
    OutOfBounds,
}

/// Rectangle in device pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    x_start: u16,
    x_end: u16,
    y_start: u16,
    y_end: u16,
}

impl Window {
    /// Create a window, rejecting inverted ranges
    pub const fn new(
        x_start: u16,
        x_end: u16,
        y_start: u16,
        y_end: u16,
    ) -> Result<Self, WindowError> {
        if x_start > x_end || y_start > y_end {
            return Err(WindowError::Inverted);
        }
        Ok(Self {
            x_start,
            x_end,
            y_start,
            y_end,
        })
    }

    /// Single-cell window at (x, y)
    pub const fn point(x: u16, y: u16) -> Self {
        Self {
            x_start: x,
            x_end: x,
            y_start: y,
            y_end: y,
        }
    }

    /// Window covering `width` x `height` from the origin
    pub const fn full(width: u16, height: u16) -> Self {
        Self {
            x_start: 0,
            x_end: width,
            y_start: 0,
            y_end: height,
        }
    }

    pub const fn x_start(&self) -> u16 {
        self.x_start
    }

    pub const fn x_end(&self) -> u16 {
        self.x_end
    }

    pub const fn y_start(&self) -> u16 {
        self.y_start
    }

    pub const fn y_end(&self) -> u16 {
        self.y_end
    }

    /// True when start equals end on both axes
    pub const fn is_point(&self) -> bool {
        self.x_start == self.x_end && self.y_start == self.y_end
    }

    /// Pixels covered by the half-open ranges
    ///
    /// Zero for a point window; callers handle that case separately.
    pub const fn pixel_count(&self) -> u32 {
        (self.x_end - self.x_start) as u32 * (self.y_end - self.y_start) as u32
    }

    /// Check the window against a `width` x `height` panel
    pub const fn check_bounds(&self, width: u16, height: u16) -> Result<(), WindowError> {
        if self.x_start >= width
            || self.y_start >= height
            || self.x_end > width
            || self.y_end > height
        {
            return Err(WindowError::OutOfBounds);
        }
        Ok(())
    }

    /// Shift the whole window by (dx, dy)
    pub const fn translate(self, dx: u16, dy: u16) -> Self {
        Self {
            x_start: self.x_start.saturating_add(dx),
            x_end: self.x_end.saturating_add(dx),
            y_start: self.y_start.saturating_add(dy),
            y_end: self.y_end.saturating_add(dy),
        }
    }

    /// Parameter bytes for the x-axis address instruction
    pub const fn x_address(&self) -> [u8; 4] {
        address_bytes(self.x_start, self.x_end)
    }

    /// Parameter bytes for the y-axis address instruction
    pub const fn y_address(&self) -> [u8; 4] {
        address_bytes(self.y_start, self.y_end)
    }
}

/// Start and inclusive end, each big-endian
///
/// The controller takes inclusive bounds, so the exclusive end is stepped
/// back by one. A degenerate range addresses its start cell only.
const fn address_bytes(start: u16, end: u16) -> [u8; 4] {
    let last = if end > start { end - 1 } else { start };
    let [start_hi, start_lo] = start.to_be_bytes();
    let [last_hi, last_lo] = last.to_be_bytes();
    [start_hi, start_lo, last_hi, last_lo]
}
