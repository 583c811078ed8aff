//! Capability traits
//!
//! These traits define the seams between the VP engine and the rest of the
//! firmware: the machine-state kernel on one side, the serial transport to
//! the display on the other.

pub mod machine;
pub mod transport;

pub use machine::{Axis, Heater, MachineState, PidValues};
pub use transport::{Transport, TransportError};
