//! Serial transport trait
//!
//! The transport owns framing, checksums and retries on the wire. Inbound
//! traffic reaches the engine already validated, as `(address, payload)`
//! events; this trait covers only the outbound direction.

use crate::addr::{ScreenId, VpAddr};

/// Errors surfaced by the transport
///
/// Opaque to the engine: a failed send is dropped, never retried. The next
/// refresh tick resends current state anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// The frame could not be handed to the wire
    SendFailed,
}

/// Trait for the outbound link to the display
pub trait Transport {
    /// Push a payload to one VP on the display.
    fn send(&mut self, addr: VpAddr, payload: &[u8]) -> Result<(), TransportError>;

    /// Command the display to switch to a page.
    fn switch_screen(&mut self, screen: ScreenId) -> Result<(), TransportError>;
}
