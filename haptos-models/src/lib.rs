//! Per-model configuration for the Haptos display bridge
//!
//! Which VP addresses exist, what screens they belong to and which
//! handlers service them is pure configuration: one module per supported
//! display/machine pairing. The engine consumes these tables after
//! validating them once at startup.
//!
//! Address-space convention shared by the layouts here (T5-style
//! display memory):
//!
//! - `0x0000..0x0FFF` system variables, reserved by the display
//! - `0x1000..0x1FFF` variables that never move between UI versions
//! - `0x2000..0x2FFF` controls (VPs that trigger an action)
//! - `0x3000..0x4FFF` machine telemetry to be displayed
//! - `0x5000..`       display styling, currently unused

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod creality_v4;
