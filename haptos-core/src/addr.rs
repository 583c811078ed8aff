//! Protocol identifiers
//!
//! A VP ("variable pointer") is a 16-bit address naming one display-visible
//! variable or control. Screens are 8-bit page numbers on the display.
//! Which addresses and pages exist for a given machine is configuration,
//! not engine logic.

/// Address of one display-protocol variable or control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VpAddr(pub u16);

impl VpAddr {
    /// Sentinel "unused/terminator" address. Never dispatched on.
    pub const TERMINATOR: VpAddr = VpAddr(0);

    /// Create an address from its raw 16-bit value.
    pub const fn new(raw: u16) -> Self {
        VpAddr(raw)
    }

    /// Raw 16-bit value.
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Check for the terminator sentinel.
    pub const fn is_terminator(self) -> bool {
        self.0 == 0
    }
}

/// Identifier of one display page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenId(pub u8);

impl ScreenId {
    /// Create a screen id from its raw page number.
    pub const fn new(raw: u8) -> Self {
        ScreenId(raw)
    }

    /// Raw page number.
    pub const fn raw(self) -> u8 {
        self.0
    }
}
