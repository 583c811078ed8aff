//! Capability traits and value encodings for the Haptos display bridge
//!
//! This crate contains the types shared between the VP dispatch engine and
//! its collaborators:
//!
//! - `VpAddr` / `ScreenId` protocol identifiers
//! - `MachineState` capability trait (motion, temperatures, offsets)
//! - `Transport` trait for the serial link to the display
//! - Big-endian fixed-point and padded-string payload encodings
//!
//! The display speaks an address-based protocol: every visible or touchable
//! UI element is a 16-bit "variable pointer" (VP) and all traffic is small
//! binary payloads keyed by that address. Framing, checksums and retries
//! live behind `Transport`; the motion and temperature kernels live behind
//! `MachineState`. Nothing in this workspace touches hardware directly.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod addr;
pub mod traits;
pub mod value;

pub use addr::{ScreenId, VpAddr};
pub use traits::{Axis, Heater, MachineState, PidValues, Transport, TransportError};
pub use value::{PayloadBuf, MAX_PAYLOAD_SIZE};
